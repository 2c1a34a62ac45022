//! LookupSymptomHandler - gated symptom decoding.
//!
//! Order of operations: validate the term, check the gate, call the model,
//! parse the answer, and only then count the search. A blocked attempt or a
//! failed call never touches the counter.

use std::sync::Arc;

use crate::application::handlers::preferences::current_locale;
use crate::application::SessionState;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::symptom::{
    symptom_prompt, SymptomData, SYMPTOM_RESPONSE_SCHEMA, SYMPTOM_TEMPERATURE,
};
use crate::ports::{AIProvider, CompletionRequest, KeyValueStore};

/// Message shown for any upstream failure. Causes are logged, not surfaced.
pub const LOOKUP_FAILED_MESSAGE: &str = "Could not retrieve the information. Please try again.";

/// Command to decode a symptom.
#[derive(Debug, Clone)]
pub struct LookupSymptomCommand {
    pub symptom: String,
}

impl LookupSymptomCommand {
    pub fn new(symptom: impl Into<String>) -> Self {
        Self {
            symptom: symptom.into(),
        }
    }
}

/// Result of a lookup attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The model answered and the search was counted.
    Found(SymptomData),
    /// The free quota is used up; nothing was called or counted.
    UpgradeRequired { search_count: u32, limit: u32 },
}

/// Handler for symptom lookups.
pub struct LookupSymptomHandler {
    session: Arc<SessionState>,
    ai_provider: Arc<dyn AIProvider>,
    store: Arc<dyn KeyValueStore>,
    temperature: f32,
}

impl LookupSymptomHandler {
    pub fn new(
        session: Arc<SessionState>,
        ai_provider: Arc<dyn AIProvider>,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            session,
            ai_provider,
            store,
            temperature: SYMPTOM_TEMPERATURE,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub async fn handle(&self, cmd: LookupSymptomCommand) -> Result<LookupOutcome, DomainError> {
        let symptom = cmd.symptom.trim();
        if symptom.is_empty() {
            return Err(ValidationError::empty_field("symptom").into());
        }

        if !self.session.is_allowed_to_search().await {
            let state = self.session.snapshot().await;
            tracing::info!(
                search_count = state.search_count,
                "Search blocked, upgrade required"
            );
            return Ok(LookupOutcome::UpgradeRequired {
                search_count: state.search_count,
                limit: self.session.free_search_limit(),
            });
        }

        let locale = current_locale(self.store.as_ref()).await?;
        let request = CompletionRequest::new(symptom_prompt(symptom, locale))
            .with_temperature(self.temperature)
            .with_json_schema(SYMPTOM_RESPONSE_SCHEMA.clone());
        let trace_id = request.trace_id.clone();

        tracing::info!(trace_id = %trace_id, locale = %locale.code(), "Decoding symptom");

        let response = self.ai_provider.complete(request).await.map_err(|e| {
            tracing::error!(trace_id = %trace_id, error = %e, "Symptom lookup failed");
            lookup_failed()
        })?;

        let data = SymptomData::from_model_json(&response.content).map_err(|e| {
            tracing::error!(trace_id = %trace_id, error = %e, "Symptom answer was not valid JSON");
            lookup_failed()
        })?;

        self.session.increment_search_count().await?;

        Ok(LookupOutcome::Found(data))
    }
}

fn lookup_failed() -> DomainError {
    DomainError::new(ErrorCode::AIProviderError, LOOKUP_FAILED_MESSAGE)
}
