//! SessionStore - Saves and restores questionnaire progress.
//!
//! Two keys are written through the [`KeyValueStore`] port:
//!
//! - [`RESPONSE_KEY`] holds a versioned JSON [`PersistedResponse`]
//! - [`STEP_KEY`] holds the current step marker (e.g. `coaching`)

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::foundation::{SessionId, Timestamp, ValidationError};
use crate::domain::questionnaire::{QuestionnaireResponse, QuestionnaireStep};
use crate::ports::{KeyValueStore, KeyValueStoreError};

/// Key of the serialized answer record.
pub const RESPONSE_KEY: &str = "management_compass.response";

/// Key of the current step marker.
pub const STEP_KEY: &str = "management_compass.current_step";

/// Version of the persisted response layout.
pub const SCHEMA_VERSION: u32 = 1;

/// Errors that can occur while saving or restoring a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] KeyValueStoreError),

    #[error("Failed to serialize response: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize response: {0}")]
    DeserializationFailed(String),

    #[error("Unsupported schema version {found} (expected {expected})")]
    UnsupportedSchemaVersion { found: u32, expected: u32 },

    #[error("Invalid step marker: {0}")]
    InvalidStep(#[from] ValidationError),

    #[error("No saved questionnaire session")]
    NotFound,
}

/// Envelope written under [`RESPONSE_KEY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedResponse {
    pub schema_version: u32,
    pub saved_at: Timestamp,
    pub response: QuestionnaireResponse,
}

impl PersistedResponse {
    pub fn new(response: QuestionnaireResponse) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            saved_at: Timestamp::now(),
            response,
        }
    }
}

/// A restored session: the answers and where the user left off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumedSession {
    pub response: QuestionnaireResponse,
    pub step: QuestionnaireStep,
    pub saved_at: Timestamp,
}

/// Handler for questionnaire session persistence.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Starts a fresh session, replacing any saved one.
    pub async fn start(&self) -> Result<QuestionnaireResponse, SessionStoreError> {
        let response = QuestionnaireResponse::new();
        self.save(&response, QuestionnaireStep::Welcome).await?;
        info!(session_id = %response.session_id, "started questionnaire session");
        Ok(response)
    }

    /// Saves the answers together with the step the user is on.
    pub async fn save(
        &self,
        response: &QuestionnaireResponse,
        step: QuestionnaireStep,
    ) -> Result<(), SessionStoreError> {
        let envelope = PersistedResponse::new(response.clone());
        let json = serde_json::to_string(&envelope)
            .map_err(|e| SessionStoreError::SerializationFailed(e.to_string()))?;

        self.store.set(RESPONSE_KEY, &json).await?;
        self.store.set(STEP_KEY, step.as_str()).await?;

        debug!(session_id = %response.session_id, step = %step, "saved questionnaire progress");
        Ok(())
    }

    /// Marks the response completed and saves it at the completion step.
    pub async fn complete(
        &self,
        response: &mut QuestionnaireResponse,
    ) -> Result<(), SessionStoreError> {
        response.mark_completed(Timestamp::now());
        self.save(response, QuestionnaireStep::Completion).await?;
        info!(session_id = %response.session_id, "completed questionnaire session");
        Ok(())
    }

    /// Restores the saved session, if any.
    ///
    /// A saved response without a step marker resumes at the welcome step.
    pub async fn resume(&self) -> Result<Option<ResumedSession>, SessionStoreError> {
        let Some(envelope) = self.load_envelope().await? else {
            return Ok(None);
        };

        let step = match self.store.get(STEP_KEY).await? {
            Some(marker) => marker.parse::<QuestionnaireStep>()?,
            None => QuestionnaireStep::default(),
        };

        info!(
            session_id = %envelope.response.session_id,
            step = %step,
            "resumed questionnaire session"
        );
        Ok(Some(ResumedSession {
            response: envelope.response,
            step,
            saved_at: envelope.saved_at,
        }))
    }

    /// Loads the saved answers, failing if there are none.
    pub async fn load_response(&self) -> Result<QuestionnaireResponse, SessionStoreError> {
        self.load_envelope()
            .await?
            .map(|envelope| envelope.response)
            .ok_or(SessionStoreError::NotFound)
    }

    /// Forgets the saved session.
    pub async fn reset(&self) -> Result<Option<SessionId>, SessionStoreError> {
        let previous = match self.load_envelope().await {
            Ok(envelope) => envelope.map(|e| e.response.session_id),
            // Unreadable state is exactly what reset is for.
            Err(_) => None,
        };

        self.store.remove(RESPONSE_KEY).await?;
        self.store.remove(STEP_KEY).await?;

        info!(session_id = ?previous, "reset questionnaire session");
        Ok(previous)
    }

    async fn load_envelope(&self) -> Result<Option<PersistedResponse>, SessionStoreError> {
        let Some(json) = self.store.get(RESPONSE_KEY).await? else {
            return Ok(None);
        };

        let envelope: PersistedResponse = serde_json::from_str(&json)
            .map_err(|e| SessionStoreError::DeserializationFailed(e.to_string()))?;

        if envelope.schema_version != SCHEMA_VERSION {
            warn!(
                found = envelope.schema_version,
                expected = SCHEMA_VERSION,
                "refusing saved response with unsupported schema version"
            );
            return Err(SessionStoreError::UnsupportedSchemaVersion {
                found: envelope.schema_version,
                expected: SCHEMA_VERSION,
            });
        }

        Ok(Some(envelope))
    }
}
