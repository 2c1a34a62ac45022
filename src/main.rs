//! Line-oriented terminal front end.
//!
//! Reads one command per line from stdin and prints results to stdout.
//! Logs go to stderr.

use std::error::Error;
use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use bioclave::application::{
    AddJournalEntryCommand, AppContext, DeleteJournalEntryCommand, ExplainTechniqueCommand,
    ListTechniquesQuery, LookupOutcome, LookupSymptomCommand,
};
use bioclave::config::{AppConfig, RuntimeConfig};
use bioclave::domain::foundation::DomainError;
use bioclave::domain::localization::Locale;
use bioclave::domain::symptom::SymptomData;
use bioclave::domain::technique::TechniqueCategory;

const HELP: &str = "\
Commands:
  search <symptom>          decode a symptom (free tier: 1 search)
  techniques [nlp|symbolic|healing]
                            list self-help techniques
  technique <id>            explain a technique
  journal                   list journal entries
  journal add <text>        write a journal entry
  journal delete <id>       delete a journal entry
  subscribe                 start the premium subscription
  profile                   show profile and plan
  locale [es|en|fr|it|zh]   show or change the language
  logout                    erase all local data
  help                      show this help
  quit                      exit";

const DISCLAIMER: &str = "\
BioClave is a tool for self-exploration and emotional wellness. It does not
replace medical diagnosis or treatment. Always consult a health professional.
Type 'accept' to continue.";

type BoxError = Box<dyn Error + Send + Sync>;

fn init_tracing(runtime: &RuntimeConfig) -> Result<(), BoxError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(runtime.env_filter()?)
        .with_writer(std::io::stderr);

    if runtime.json_logs {
        builder.json().try_init()?;
    } else {
        builder.try_init()?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.runtime)?;

    let ctx = AppContext::from_config(&config).await?;
    let mut disclaimer_pending = ctx.disclaimer_handler().needs_disclaimer().await?;

    if disclaimer_pending {
        println!("{}", DISCLAIMER);
    } else {
        println!("{}", HELP);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if disclaimer_pending {
            if line.eq_ignore_ascii_case("accept") {
                ctx.disclaimer_handler().accept().await?;
                disclaimer_pending = false;
                println!("{}", HELP);
            } else {
                println!("{}", DISCLAIMER);
            }
            continue;
        }

        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let result = match command {
            "quit" | "exit" => break,
            "help" => {
                println!("{}", HELP);
                Ok(())
            }
            "search" => search(&ctx, rest).await,
            "techniques" => list_techniques(&ctx, rest),
            "technique" => explain_technique(&ctx, rest).await,
            "journal" => journal(&ctx, rest).await,
            "subscribe" => subscribe(&ctx).await,
            "profile" => profile(&ctx).await,
            "locale" => locale(&ctx, rest).await,
            "logout" => logout(&ctx, &mut disclaimer_pending).await,
            other => {
                println!("Unknown command '{}'. Type 'help'.", other);
                Ok(())
            }
        };

        if let Err(err) = result {
            println!("Error: {}", err.message);
        }
    }

    Ok(())
}

async fn search(ctx: &AppContext, term: &str) -> Result<(), DomainError> {
    match ctx
        .lookup_symptom_handler()
        .handle(LookupSymptomCommand::new(term))
        .await?
    {
        LookupOutcome::Found(data) => print_symptom(&data),
        LookupOutcome::UpgradeRequired {
            search_count,
            limit,
        } => println!(
            "You have used {} of {} free searches. Type 'subscribe' for unlimited searches.",
            search_count, limit
        ),
    }
    Ok(())
}

fn print_symptom(data: &SymptomData) {
    println!("\n{}\n", data.symptom_title);
    println!("{}\n", data.definition);
    if let Some(info) = data.technical_info.as_ref().filter(|i| !i.is_empty()) {
        for (label, value) in [
            ("Embryonic layer", &info.embryonic_layer),
            ("Conflict type", &info.conflict_type),
            ("Disease phase", &info.disease_phase_behavior),
        ] {
            if let Some(value) = value {
                println!("  {}: {}", label, value);
            }
        }
        println!();
    }
    println!("Biological meaning: {}\n", data.biological_meaning);
    println!("Conflicts:");
    for conflict in &data.conflicts {
        println!("  - {}", conflict);
    }
    println!();
}

fn list_techniques(ctx: &AppContext, filter: &str) -> Result<(), DomainError> {
    let category = match filter.trim() {
        "" => None,
        "nlp" => Some(TechniqueCategory::Nlp),
        "symbolic" => Some(TechniqueCategory::SymbolicActs),
        "healing" => Some(TechniqueCategory::EmotionalHealing),
        other => {
            return Err(DomainError::validation(
                "category",
                format!("Unknown category '{}'", other),
            ))
        }
    };

    for technique in ctx
        .list_techniques_handler()
        .handle(ListTechniquesQuery { category })
    {
        println!("  {:<22} {} ({})", technique.id, technique.name, technique.category);
    }
    Ok(())
}

async fn explain_technique(ctx: &AppContext, id: &str) -> Result<(), DomainError> {
    let explanation = ctx
        .explain_technique_handler()
        .handle(ExplainTechniqueCommand {
            technique_id: id.to_string(),
        })
        .await?;

    println!("\n{}\n\n{}\n", explanation.technique.name, explanation.description);
    Ok(())
}

async fn journal(ctx: &AppContext, args: &str) -> Result<(), DomainError> {
    let (action, rest) = args.split_once(' ').unwrap_or((args, ""));
    match action {
        "" | "list" => {
            let entries = ctx.list_journal_entries_handler().handle().await?;
            if entries.is_empty() {
                println!("Your journal is empty.");
            }
            for entry in entries {
                println!("[{}] {}\n  {}", entry.id, entry.date, entry.content);
            }
        }
        "add" => {
            let entry = ctx
                .add_journal_entry_handler()
                .handle(AddJournalEntryCommand {
                    content: rest.to_string(),
                })
                .await?;
            println!("Saved entry {}", entry.id);
        }
        "delete" => {
            let removed = ctx
                .delete_journal_entry_handler()
                .handle(DeleteJournalEntryCommand {
                    entry_id: rest.trim().to_string(),
                })
                .await?;
            println!("{}", if removed { "Deleted." } else { "No such entry." });
        }
        other => println!("Unknown journal action '{}'. Type 'help'.", other),
    }
    Ok(())
}

async fn subscribe(ctx: &AppContext) -> Result<(), DomainError> {
    println!("Contacting payment provider...");
    let preference = ctx.start_subscription_handler().handle().await?;
    println!(
        "Subscription active (preference {}). Searches are now unlimited.",
        preference.preference_id
    );
    Ok(())
}

async fn profile(ctx: &AppContext) -> Result<(), DomainError> {
    let view = ctx.get_profile_handler().handle().await;
    let locale = ctx.locale_preference_handler().current().await?;

    println!("{} <{}>", view.profile.name, view.profile.email);
    println!("Plan: {}", view.tier.display_name());
    if let Some(remaining) = view.remaining_free_searches {
        println!(
            "Free searches used: {}/{} ({} left)",
            view.search_count, view.free_search_limit, remaining
        );
    }
    println!("Language: {}", locale.native_name());
    Ok(())
}

async fn locale(ctx: &AppContext, code: &str) -> Result<(), DomainError> {
    let handler = ctx.locale_preference_handler();
    if code.trim().is_empty() {
        let current = handler.current().await?;
        println!("{} ({})", current.native_name(), current.code());
        return Ok(());
    }

    let locale: Locale = code.parse()?;
    handler.set(locale).await?;
    println!("Language set to {}.", locale.native_name());
    Ok(())
}

async fn logout(ctx: &AppContext, disclaimer_pending: &mut bool) -> Result<(), DomainError> {
    ctx.session.logout().await?;
    *disclaimer_pending = true;
    println!("All local data erased.");
    println!("{}", DISCLAIMER);
    Ok(())
}
