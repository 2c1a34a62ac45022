//! ExplainTechniqueHandler - asks the model to explain a catalog technique.
//!
//! Not gated by the free-search quota.

use std::sync::Arc;

use crate::application::handlers::preferences::current_locale;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::technique::{
    find_technique, technique_prompt, TechniqueExplanation, TECHNIQUE_TEMPERATURE,
};
use crate::ports::{AIProvider, CompletionRequest, KeyValueStore};

pub const EXPLANATION_FAILED_MESSAGE: &str =
    "Could not load the technique explanation. Please try again.";

/// Command to explain one technique.
#[derive(Debug, Clone)]
pub struct ExplainTechniqueCommand {
    pub technique_id: String,
}

/// Handler for technique explanations.
pub struct ExplainTechniqueHandler {
    ai_provider: Arc<dyn AIProvider>,
    store: Arc<dyn KeyValueStore>,
    temperature: f32,
}

impl ExplainTechniqueHandler {
    pub fn new(ai_provider: Arc<dyn AIProvider>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            ai_provider,
            store,
            temperature: TECHNIQUE_TEMPERATURE,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub async fn handle(
        &self,
        cmd: ExplainTechniqueCommand,
    ) -> Result<TechniqueExplanation, DomainError> {
        let technique = find_technique(cmd.technique_id.trim()).ok_or_else(|| {
            DomainError::new(
                ErrorCode::TechniqueNotFound,
                format!("Unknown technique '{}'", cmd.technique_id),
            )
        })?;

        let locale = current_locale(self.store.as_ref()).await?;
        let request = CompletionRequest::new(technique_prompt(technique.name, locale))
            .with_temperature(self.temperature);
        let trace_id = request.trace_id.clone();

        tracing::info!(
            trace_id = %trace_id,
            technique = technique.id,
            locale = %locale.code(),
            "Explaining technique"
        );

        let response = self.ai_provider.complete(request).await.map_err(|e| {
            tracing::error!(trace_id = %trace_id, error = %e, "Technique explanation failed");
            DomainError::new(ErrorCode::AIProviderError, EXPLANATION_FAILED_MESSAGE)
        })?;

        Ok(TechniqueExplanation {
            technique: *technique,
            description: response.content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::application::SessionState;
    use crate::ports::keys;

    fn handler_with(provider: MockAIProvider, store: InMemoryKeyValueStore) -> ExplainTechniqueHandler {
        ExplainTechniqueHandler::new(Arc::new(provider), Arc::new(store))
    }

    fn cmd(id: &str) -> ExplainTechniqueCommand {
        ExplainTechniqueCommand {
            technique_id: id.to_string(),
        }
    }

    #[tokio::test]
    async fn fills_description_from_model() {
        let provider = MockAIProvider::new().with_response("Paso 1...\nPaso 2...");
        let handler = handler_with(provider.clone(), InMemoryKeyValueStore::new());

        let explanation = handler.handle(cmd("psicomagia")).await.unwrap();

        assert_eq!(explanation.technique.id, "psicomagia");
        assert_eq!(explanation.description, "Paso 1...\nPaso 2...");

        let calls = provider.get_calls();
        assert_eq!(calls[0].temperature, Some(TECHNIQUE_TEMPERATURE));
        assert!(!calls[0].response_format.is_json());
        assert!(calls[0].prompt.contains("\"Psicomagia\""));
        assert!(calls[0].prompt.contains("Spanish"));
    }

    #[tokio::test]
    async fn uses_active_locale() {
        let provider = MockAIProvider::new();
        let store = InMemoryKeyValueStore::with_entries([(keys::LOCALE, "fr")]);
        let handler = handler_with(provider.clone(), store);

        handler.handle(cmd("reencuadre")).await.unwrap();

        assert!(provider.get_calls()[0].prompt.contains("French"));
    }

    #[tokio::test]
    async fn unknown_id_is_not_found_and_skips_model() {
        let provider = MockAIProvider::new();
        let handler = handler_with(provider.clone(), InMemoryKeyValueStore::new());

        let err = handler.handle(cmd("tarot")).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::TechniqueNotFound);
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn provider_failure_is_generic() {
        let provider = MockAIProvider::new().with_error(MockError::Timeout { timeout_secs: 30 });
        let handler = handler_with(provider, InMemoryKeyValueStore::new());

        let err = handler.handle(cmd("linea_tiempo")).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::AIProviderError);
        assert_eq!(err.message, EXPLANATION_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn works_when_search_quota_is_exhausted() {
        let store = InMemoryKeyValueStore::with_entries([(keys::SEARCH_COUNT, "5")]);
        let session = SessionState::initialize(Arc::new(store.clone())).await.unwrap();
        assert!(!session.is_allowed_to_search().await);

        let handler = handler_with(MockAIProvider::new(), store);
        assert!(handler.handle(cmd("nino_interno")).await.is_ok());
    }
}
