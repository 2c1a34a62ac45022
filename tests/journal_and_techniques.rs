//! Integration tests for the ungated features: journal, techniques and
//! preferences.

use std::sync::Arc;
use std::time::Duration;

use bioclave::adapters::ai::MockAIProvider;
use bioclave::adapters::payment::SimulatedPaymentProvider;
use bioclave::adapters::storage::InMemoryKeyValueStore;
use bioclave::application::{
    AddJournalEntryCommand, AppContext, DeleteJournalEntryCommand, ExplainTechniqueCommand,
    ListTechniquesQuery,
};
use bioclave::domain::foundation::{ErrorCode, Timestamp};
use bioclave::domain::localization::Locale;
use bioclave::domain::technique::TechniqueCategory;
use bioclave::ports::keys;

async fn context(store: InMemoryKeyValueStore, ai: MockAIProvider) -> AppContext {
    AppContext::new(
        Arc::new(store),
        Arc::new(ai),
        Arc::new(SimulatedPaymentProvider::new(Duration::ZERO)),
    )
    .await
    .unwrap()
}

fn add(content: &str) -> AddJournalEntryCommand {
    AddJournalEntryCommand {
        content: content.to_string(),
    }
}

// =============================================================================
// Journal
// =============================================================================

#[tokio::test]
async fn journal_keeps_newest_first_and_deletes_by_id() {
    let ctx = context(InMemoryKeyValueStore::new(), MockAIProvider::new()).await;
    let handler = ctx.add_journal_entry_handler();

    let base = 1_792_152_000_000;
    for (i, text) in ["one", "two", "three"].into_iter().enumerate() {
        let at = Timestamp::from_unix_millis(base + i as i64 * 1000).unwrap();
        handler.handle_at(add(text), at).await.unwrap();
    }

    let entries = ctx.list_journal_entries_handler().handle().await.unwrap();
    let contents: Vec<_> = entries.iter().map(|e| e.content.as_str()).collect();
    assert_eq!(contents, vec!["three", "two", "one"]);

    let removed = ctx
        .delete_journal_entry_handler()
        .handle(DeleteJournalEntryCommand {
            entry_id: entries[1].id.clone(),
        })
        .await
        .unwrap();
    assert!(removed);

    let entries = ctx.list_journal_entries_handler().handle().await.unwrap();
    let contents: Vec<_> = entries.iter().map(|e| e.content.as_str()).collect();
    assert_eq!(contents, vec!["three", "one"]);
}

#[tokio::test]
async fn journal_dates_follow_locale_at_write_time() {
    let ctx = context(InMemoryKeyValueStore::new(), MockAIProvider::new()).await;
    let at = Timestamp::from_unix_millis(1_792_152_000_000).unwrap();

    let spanish = ctx
        .add_journal_entry_handler()
        .handle_at(add("hola"), at)
        .await
        .unwrap();
    ctx.locale_preference_handler().set(Locale::Zh).await.unwrap();
    let chinese = ctx
        .add_journal_entry_handler()
        .handle_at(add("你好"), at)
        .await
        .unwrap();

    assert!(spanish.date.starts_with("16 de "), "{}", spanish.date);
    assert!(spanish.date.ends_with(" de 2026"), "{}", spanish.date);
    assert_eq!(chinese.date, "2026年10月16日");
}

#[tokio::test]
async fn journal_is_not_gated() {
    let store = InMemoryKeyValueStore::with_entries([(keys::SEARCH_COUNT, "3")]);
    let ctx = context(store, MockAIProvider::new()).await;
    assert!(!ctx.session.is_allowed_to_search().await);

    assert!(ctx.add_journal_entry_handler().handle(add("still works")).await.is_ok());
}

// =============================================================================
// Techniques
// =============================================================================

#[tokio::test]
async fn technique_catalog_and_explanation() {
    let ai = MockAIProvider::new().with_response("Explanation of the anchor.");
    let store = InMemoryKeyValueStore::with_entries([(keys::LOCALE, "en")]);
    let ctx = context(store, ai.clone()).await;

    let nlp = ctx.list_techniques_handler().handle(ListTechniquesQuery {
        category: Some(TechniqueCategory::Nlp),
    });
    assert_eq!(nlp.len(), 4);

    let explanation = ctx
        .explain_technique_handler()
        .handle(ExplainTechniqueCommand {
            technique_id: "anclaje_cinestesico".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(explanation.technique.name, "Anclaje Cinestésico");
    assert_eq!(explanation.description, "Explanation of the anchor.");
    assert!(ai.get_calls()[0].prompt.contains("must be in English."));
    assert_eq!(ctx.session.snapshot().await.search_count, 0);
}

#[tokio::test]
async fn unknown_technique_is_not_found() {
    let ctx = context(InMemoryKeyValueStore::new(), MockAIProvider::new()).await;

    let err = ctx
        .explain_technique_handler()
        .handle(ExplainTechniqueCommand {
            technique_id: "unknown".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::TechniqueNotFound);
}

// =============================================================================
// Preferences
// =============================================================================

#[tokio::test]
async fn disclaimer_shown_once() {
    let ctx = context(InMemoryKeyValueStore::new(), MockAIProvider::new()).await;
    let disclaimer = ctx.disclaimer_handler();

    assert!(disclaimer.needs_disclaimer().await.unwrap());
    disclaimer.accept().await.unwrap();
    assert!(!disclaimer.needs_disclaimer().await.unwrap());
}

#[tokio::test]
async fn profile_reports_plan() {
    let ctx = context(InMemoryKeyValueStore::new(), MockAIProvider::new()).await;

    let view = ctx.get_profile_handler().handle().await;
    assert_eq!(view.profile.email, "alex.rios@email.com");
    assert_eq!(view.search_count, 0);
    assert_eq!(view.free_search_limit, 1);
    assert_eq!(view.remaining_free_searches, Some(1));
    assert!(!view.is_subscribed);
}
