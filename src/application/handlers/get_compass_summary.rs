//! GetCompassSummaryHandler - Query handler for the completion summary.

use tracing::info;

use super::session_store::{SessionStore, SessionStoreError};
use crate::domain::analysis::{build_summary, CompassSummary, FlowVariant};

/// Query for the summary of the saved session.
#[derive(Debug, Clone, Default)]
pub struct GetCompassSummaryQuery {
    /// Overrides the configured flow for this query.
    pub flow: Option<FlowVariant>,
}

/// Handler that loads the saved answers and builds the summary.
pub struct GetCompassSummaryHandler {
    sessions: SessionStore,
    default_flow: FlowVariant,
}

impl GetCompassSummaryHandler {
    pub fn new(sessions: SessionStore, default_flow: FlowVariant) -> Self {
        Self {
            sessions,
            default_flow,
        }
    }

    pub async fn handle(
        &self,
        query: GetCompassSummaryQuery,
    ) -> Result<CompassSummary, SessionStoreError> {
        let response = self.sessions.load_response().await?;
        let flow = query.flow.unwrap_or(self.default_flow);

        let summary = build_summary(&response, flow);

        info!(
            session_id = %response.session_id,
            flow = %flow,
            top_module = %summary.top_module,
            "built compass summary"
        );
        Ok(summary)
    }
}
