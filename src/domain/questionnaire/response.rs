//! QuestionnaireResponse aggregate: everything one session answered.

use serde::{Deserialize, Serialize};

use super::{
    CardGameData, CoachingData, DecisionsPrice, Engagement, FocusControl, InterfaceJourneyData,
    ModulePriorities, TeamHealthData, TimeEnergy,
};
use crate::domain::foundation::{SessionId, Timestamp};

/// One user session's answers.
///
/// Each screen owns one field and is its only writer. Scoring reads a
/// borrowed snapshot and never keeps it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireResponse {
    pub session_id: SessionId,
    pub started_at: Timestamp,
    #[serde(default)]
    pub completed_at: Option<Timestamp>,

    #[serde(default)]
    pub card_game: CardGameData,
    #[serde(default)]
    pub focus_control: FocusControl,
    #[serde(default)]
    pub time_energy: TimeEnergy,
    #[serde(default)]
    pub decisions_price: DecisionsPrice,
    #[serde(default)]
    pub interface_journey: InterfaceJourneyData,
    #[serde(default)]
    pub coaching: CoachingData,
    /// `None` until the team-health screen records something; some flows
    /// skip that screen entirely.
    #[serde(default)]
    pub team_health: Option<TeamHealthData>,
    #[serde(default)]
    pub engagement: Engagement,
    #[serde(default)]
    pub module_priorities: ModulePriorities,
}

impl QuestionnaireResponse {
    /// Starts a session with every answer at its neutral default.
    pub fn new() -> Self {
        Self::with_session(SessionId::new(), Timestamp::now())
    }

    pub fn with_session(session_id: SessionId, started_at: Timestamp) -> Self {
        Self {
            session_id,
            started_at,
            completed_at: None,
            card_game: CardGameData::default(),
            focus_control: FocusControl::default(),
            time_energy: TimeEnergy::default(),
            decisions_price: DecisionsPrice::default(),
            interface_journey: InterfaceJourneyData::default(),
            coaching: CoachingData::default(),
            team_health: None,
            engagement: Engagement::default(),
            module_priorities: ModulePriorities::default(),
        }
    }

    /// Team health slice for the team-health screen, created on first write.
    pub fn team_health_mut(&mut self) -> &mut TeamHealthData {
        self.team_health.get_or_insert_with(TeamHealthData::default)
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Marks the session complete. The first completion time is kept.
    pub fn mark_completed(&mut self, at: Timestamp) {
        if self.completed_at.is_none() {
            self.completed_at = Some(at);
        }
    }
}

impl Default for QuestionnaireResponse {
    fn default() -> Self {
        Self::new()
    }
}
