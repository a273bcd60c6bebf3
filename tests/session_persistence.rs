//! Integration tests for questionnaire session persistence.
//!
//! These tests verify the end-to-end flow:
//! 1. A session is started and answers are saved screen by screen
//! 2. A new process (new store instance) resumes at the saved step
//! 3. The summary handler reads the saved answers
//! 4. Reset forgets everything
//!
//! Uses the file adapter on a temporary directory.

use std::sync::Arc;
use tempfile::TempDir;

use management_compass::adapters::{key_value_store, FileKeyValueStore};
use management_compass::application::{
    GetCompassSummaryHandler, GetCompassSummaryQuery, SessionStore, SessionStoreError,
    RESPONSE_KEY, STEP_KEY,
};
use management_compass::config::{StorageBackend, StorageConfig};
use management_compass::domain::analysis::{FlowVariant, ModuleKey};
use management_compass::domain::foundation::LikertScore;
use management_compass::domain::questionnaire::{
    DysfunctionLayer, ForcedChoiceSelection, LayerAnswer, QuestionnaireStep, TimeInvestment,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn file_sessions(dir: &TempDir) -> SessionStore {
    SessionStore::new(Arc::new(FileKeyValueStore::new(dir.path())))
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn progress_survives_a_restart() {
    let dir = TempDir::new().unwrap();

    let sessions = file_sessions(&dir);
    let mut response = sessions.start().await.unwrap();
    response.card_game.coaching_delegation =
        ForcedChoiceSelection::from_picks("people_grow", "do_alone");
    sessions
        .save(&response, QuestionnaireStep::CardGame)
        .await
        .unwrap();

    response.coaching.identity_score = LikertScore::new(5);
    response.coaching.time_investment = Some(TimeInvestment::LessThan30Minutes);
    sessions
        .save(&response, QuestionnaireStep::Coaching)
        .await
        .unwrap();

    // New store instance over the same directory
    let resumed = file_sessions(&dir).resume().await.unwrap().unwrap();
    assert_eq!(resumed.step, QuestionnaireStep::Coaching);
    assert_eq!(resumed.response, response);
}

#[tokio::test]
async fn both_keys_are_written_as_files() {
    let dir = TempDir::new().unwrap();
    file_sessions(&dir).start().await.unwrap();

    assert!(dir.path().join(format!("{RESPONSE_KEY}.json")).exists());
    let step = std::fs::read_to_string(dir.path().join(format!("{STEP_KEY}.json"))).unwrap();
    assert_eq!(step, "welcome");
}

#[tokio::test]
async fn completed_session_produces_summary() {
    let dir = TempDir::new().unwrap();
    let sessions = file_sessions(&dir);

    let mut response = sessions.start().await.unwrap();
    response.card_game.coaching_delegation =
        ForcedChoiceSelection::from_picks("do_alone", "delegate_close");
    let team = response.team_health_mut();
    team.set_answer(DysfunctionLayer::Trust, Some(LayerAnswer::A));
    team.set_answer(DysfunctionLayer::Conflict, Some(LayerAnswer::B));
    team.gold_action = "Open every meeting with a check-in".to_string();
    response.coaching.one_small_thing = "Ask one more question".to_string();
    sessions.complete(&mut response).await.unwrap();

    let handler = GetCompassSummaryHandler::new(file_sessions(&dir), FlowVariant::CardGame);
    let summary = handler.handle(GetCompassSummaryQuery::default()).await.unwrap();

    let full: Vec<ModuleKey> = summary
        .modules
        .iter()
        .filter(|m| m.depth.is_full())
        .map(|m| m.key)
        .collect();
    assert_eq!(full, vec![ModuleKey::Coaching, ModuleKey::Team]);
    assert_eq!(summary.top_module, "Coaching & Delegation");
    assert_eq!(summary.dominant_dysfunction, Some(DysfunctionLayer::Trust));
    assert!(summary.narrative.contains("Ask one more question"));
    assert!(summary.narrative.contains("Open every meeting with a check-in"));
}

#[tokio::test]
async fn reset_then_summary_reports_missing_session() {
    let dir = TempDir::new().unwrap();
    let sessions = file_sessions(&dir);
    sessions.start().await.unwrap();
    sessions.reset().await.unwrap();

    let handler = GetCompassSummaryHandler::new(sessions, FlowVariant::PriorityRatings);
    let result = handler.handle(GetCompassSummaryQuery::default()).await;
    assert!(matches!(result, Err(SessionStoreError::NotFound)));
}

#[tokio::test]
async fn configured_memory_backend_round_trips() {
    let config = StorageConfig {
        backend: StorageBackend::Memory,
        ..Default::default()
    };
    let store = key_value_store(&config);
    let sessions = SessionStore::new(store.clone());

    let response = sessions.start().await.unwrap();
    assert!(store.contains(RESPONSE_KEY).await.unwrap());

    let loaded = sessions.load_response().await.unwrap();
    assert_eq!(loaded.session_id, response.session_id);
}
