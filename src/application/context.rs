//! AppContext - wires adapters, the session state and the handlers.

use std::sync::Arc;

use crate::adapters::ai::{GeminiConfig, GeminiProvider, MockAIProvider};
use crate::adapters::payment::SimulatedPaymentProvider;
use crate::adapters::storage::FileKeyValueStore;
use crate::application::handlers::{
    AddJournalEntryHandler, DeleteJournalEntryHandler, DisclaimerHandler, ExplainTechniqueHandler,
    GetProfileHandler, ListJournalEntriesHandler, ListTechniquesHandler, LocalePreferenceHandler,
    LookupSymptomHandler, StartSubscriptionHandler,
};
use crate::application::SessionState;
use crate::config::{AiProvider as AiProviderKind, AppConfig};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::symptom::SYMPTOM_TEMPERATURE;
use crate::domain::technique::TECHNIQUE_TEMPERATURE;
use crate::ports::{AIProvider, KeyValueStore, PaymentProvider};

/// Shared application state containing all dependencies.
///
/// Cloning is cheap; every dependency is behind an `Arc`. Handlers are
/// created on demand from the shared state.
#[derive(Clone)]
pub struct AppContext {
    pub store: Arc<dyn KeyValueStore>,
    pub session: Arc<SessionState>,
    pub ai_provider: Arc<dyn AIProvider>,
    pub payment_provider: Arc<dyn PaymentProvider>,
    symptom_temperature: f32,
    technique_temperature: f32,
}

impl AppContext {
    /// Builds the context and loads the session state from `store`.
    pub async fn new(
        store: Arc<dyn KeyValueStore>,
        ai_provider: Arc<dyn AIProvider>,
        payment_provider: Arc<dyn PaymentProvider>,
    ) -> Result<Self, DomainError> {
        let session = Arc::new(SessionState::initialize(store.clone()).await?);

        Ok(Self {
            store,
            session,
            ai_provider,
            payment_provider,
            symptom_temperature: SYMPTOM_TEMPERATURE,
            technique_temperature: TECHNIQUE_TEMPERATURE,
        })
    }

    /// Builds the production context described by `config`.
    pub async fn from_config(config: &AppConfig) -> Result<Self, DomainError> {
        let store: Arc<dyn KeyValueStore> =
            Arc::new(FileKeyValueStore::new(config.storage.file_path()));

        let ai_provider: Arc<dyn AIProvider> = match config.ai.provider {
            AiProviderKind::Mock => Arc::new(MockAIProvider::new()),
            AiProviderKind::Gemini => {
                let api_key = config.ai.gemini_api_key.clone().ok_or_else(|| {
                    DomainError::new(ErrorCode::InternalError, "Gemini API key is not configured")
                })?;
                let gemini = GeminiConfig::new(api_key)
                    .with_model(config.ai.model.clone())
                    .with_base_url(config.ai.base_url.clone())
                    .with_timeout(config.ai.timeout());
                Arc::new(GeminiProvider::new(gemini).map_err(|e| {
                    DomainError::new(ErrorCode::InternalError, e.to_string())
                })?)
            }
        };

        let payment_provider: Arc<dyn PaymentProvider> = Arc::new(SimulatedPaymentProvider::new(
            config.payment.simulated_delay(),
        ));

        let info = ai_provider.provider_info();
        tracing::info!(
            store = %config.storage.file_path().display(),
            ai_provider = %info.name,
            model = %info.model,
            "Application context ready"
        );

        Ok(Self::new(store, ai_provider, payment_provider)
            .await?
            .with_temperatures(config.ai.symptom_temperature, config.ai.technique_temperature))
    }

    pub fn with_temperatures(mut self, symptom: f32, technique: f32) -> Self {
        self.symptom_temperature = symptom;
        self.technique_temperature = technique;
        self
    }

    pub fn lookup_symptom_handler(&self) -> LookupSymptomHandler {
        LookupSymptomHandler::new(
            self.session.clone(),
            self.ai_provider.clone(),
            self.store.clone(),
        )
        .with_temperature(self.symptom_temperature)
    }

    pub fn explain_technique_handler(&self) -> ExplainTechniqueHandler {
        ExplainTechniqueHandler::new(self.ai_provider.clone(), self.store.clone())
            .with_temperature(self.technique_temperature)
    }

    pub fn list_techniques_handler(&self) -> ListTechniquesHandler {
        ListTechniquesHandler::new()
    }

    pub fn add_journal_entry_handler(&self) -> AddJournalEntryHandler {
        AddJournalEntryHandler::new(self.store.clone())
    }

    pub fn delete_journal_entry_handler(&self) -> DeleteJournalEntryHandler {
        DeleteJournalEntryHandler::new(self.store.clone())
    }

    pub fn list_journal_entries_handler(&self) -> ListJournalEntriesHandler {
        ListJournalEntriesHandler::new(self.store.clone())
    }

    pub fn start_subscription_handler(&self) -> StartSubscriptionHandler {
        StartSubscriptionHandler::new(self.session.clone(), self.payment_provider.clone())
    }

    pub fn get_profile_handler(&self) -> GetProfileHandler {
        GetProfileHandler::new(self.session.clone())
    }

    pub fn locale_preference_handler(&self) -> LocalePreferenceHandler {
        LocalePreferenceHandler::new(self.store.clone())
    }

    pub fn disclaimer_handler(&self) -> DisclaimerHandler {
        DisclaimerHandler::new(self.store.clone())
    }
}
