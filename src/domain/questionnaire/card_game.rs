//! Card game answers: one forced "most"/"least" choice per topic category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// The five topic categories of the card game, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardCategory {
    FocusPrioritization,
    TimeRoutines,
    CoachingDelegation,
    InfluenceLeadership,
    TeamLearning,
}

impl CardCategory {
    /// All categories in presentation order.
    pub const ALL: [CardCategory; 5] = [
        CardCategory::FocusPrioritization,
        CardCategory::TimeRoutines,
        CardCategory::CoachingDelegation,
        CardCategory::InfluenceLeadership,
        CardCategory::TeamLearning,
    ];

    /// Returns the snake_case identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FocusPrioritization => "focus_prioritization",
            Self::TimeRoutines => "time_routines",
            Self::CoachingDelegation => "coaching_delegation",
            Self::InfluenceLeadership => "influence_leadership",
            Self::TeamLearning => "team_learning",
        }
    }

    /// Returns the display name used on summary screens.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::FocusPrioritization => "Focus & Prioritization",
            Self::TimeRoutines => "Time & Routines",
            Self::CoachingDelegation => "Coaching & Delegation",
            Self::InfluenceLeadership => "Influence & Leadership",
            Self::TeamLearning => "Team & Learning",
        }
    }

    /// Card ids offered in this category, in display order.
    pub fn deck(&self) -> &'static [&'static str] {
        match self {
            Self::FocusPrioritization => &[
                "day_fills_itself",
                "important_slow",
                "holding_a_lot",
                "choose_focus",
                "clear_direction",
            ],
            Self::TimeRoutines => &[
                "no_routine",
                "meetings_unclear",
                "trying_order",
                "routines_help",
                "routines_advance",
            ],
            Self::CoachingDelegation => &[
                "do_alone",
                "delegate_close",
                "selective_release",
                "define_goal",
                "people_grow",
            ],
            Self::InfluenceLeadership => &[
                "need_presence",
                "close_circle",
                "pressure_driven",
                "clear_direction_leadership",
                "things_move",
            ],
            Self::TeamLearning => &[
                "task_driven",
                "problem_talk",
                "inconsistent_dialogue",
                "space_to_talk",
                "team_safe",
            ],
        }
    }

    /// Returns true if the card belongs to this category's deck.
    pub fn contains(&self, card: &CardId) -> bool {
        self.deck().contains(&card.as_str())
    }
}

impl fmt::Display for CardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CardCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ValidationError::unknown_option("card_category", s))
    }
}

/// Display label of every deck card.
const CARD_LABELS: [(&str, &str); 25] = [
    ("day_fills_itself", "My day fills itself"),
    ("important_slow", "I have important things, but they move slowly"),
    ("holding_a_lot", "I'm holding a lot in my head"),
    ("choose_focus", "I choose what to work on"),
    ("clear_direction", "My time serves a clear direction"),
    ("no_routine", "I have no fixed routine"),
    ("meetings_unclear", "There are recurring meetings, not always clear why"),
    ("trying_order", "I try to create order, but it doesn't always hold"),
    ("routines_help", "My routines help me manage"),
    ("routines_advance", "My routines move people and results forward"),
    ("do_alone", "It's easier for me to do it alone"),
    ("delegate_close", "I hand off tasks but stay close"),
    ("selective_release", "Some people I let go, others I don't"),
    ("define_goal", "I set a goal and give freedom of action"),
    ("people_grow", "People grow around me"),
    ("need_presence", "For something to happen, I need to be in the picture"),
    ("close_circle", "I mostly influence my close circle"),
    ("pressure_driven", "I mobilize through tasks and pressure"),
    ("clear_direction_leadership", "People understand where I'm heading"),
    ("things_move", "Things move even when I'm not in the room"),
    ("task_driven", "We progress through tasks"),
    ("problem_talk", "We talk about things only when there's a problem"),
    ("inconsistent_dialogue", "There is dialogue, but not always consistent"),
    ("space_to_talk", "There is room to talk and learn"),
    ("team_safe", "The team feels safe raising things"),
];

/// Identifier of a single card. Any string is accepted; scoring treats
/// ids it does not recognise as neutral.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display label of the card. Ids outside the decks show as themselves.
    pub fn label(&self) -> &str {
        CARD_LABELS
            .iter()
            .find(|(id, _)| *id == self.0)
            .map_or(self.0.as_str(), |(_, label)| *label)
    }

    /// A blank id stands for "no card picked".
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Wire shape of a selection: unanswered slots are empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SelectionRecord {
    #[serde(default)]
    most: String,
    #[serde(default)]
    least: String,
}

/// One "most representative" and one "least representative" card.
///
/// A card can never sit in both slots: assigning it to one slot clears
/// it from the other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SelectionRecord", into = "SelectionRecord")]
pub struct ForcedChoiceSelection {
    most: Option<CardId>,
    least: Option<CardId>,
}

impl ForcedChoiceSelection {
    /// Builds a selection by assigning `most` first and `least` second,
    /// so an identical pair keeps only the `least` pick.
    pub fn from_picks(most: impl Into<CardId>, least: impl Into<CardId>) -> Self {
        let mut selection = Self::default();
        selection.set_most(most);
        selection.set_least(least);
        selection
    }

    pub fn most(&self) -> Option<&CardId> {
        self.most.as_ref()
    }

    pub fn least(&self) -> Option<&CardId> {
        self.least.as_ref()
    }

    /// Puts a card in the "most" slot. A blank id clears the slot.
    pub fn set_most(&mut self, card: impl Into<CardId>) {
        let card = card.into();
        if card.is_blank() {
            self.most = None;
            return;
        }
        if self.least.as_ref() == Some(&card) {
            self.least = None;
        }
        self.most = Some(card);
    }

    /// Puts a card in the "least" slot. A blank id clears the slot.
    pub fn set_least(&mut self, card: impl Into<CardId>) {
        let card = card.into();
        if card.is_blank() {
            self.least = None;
            return;
        }
        if self.most.as_ref() == Some(&card) {
            self.most = None;
        }
        self.least = Some(card);
    }

    pub fn clear_most(&mut self) {
        self.most = None;
    }

    pub fn clear_least(&mut self) {
        self.least = None;
    }

    /// Both slots are filled.
    pub fn is_complete(&self) -> bool {
        self.most.is_some() && self.least.is_some()
    }
}

impl From<SelectionRecord> for ForcedChoiceSelection {
    fn from(record: SelectionRecord) -> Self {
        Self::from_picks(record.most.as_str(), record.least.as_str())
    }
}

impl From<ForcedChoiceSelection> for SelectionRecord {
    fn from(selection: ForcedChoiceSelection) -> Self {
        Self {
            most: selection.most.map(|c| c.0).unwrap_or_default(),
            least: selection.least.map(|c| c.0).unwrap_or_default(),
        }
    }
}

/// Card game answers for all five categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardGameData {
    #[serde(default)]
    pub focus_prioritization: ForcedChoiceSelection,
    #[serde(default)]
    pub time_routines: ForcedChoiceSelection,
    #[serde(default)]
    pub coaching_delegation: ForcedChoiceSelection,
    #[serde(default)]
    pub influence_leadership: ForcedChoiceSelection,
    #[serde(default)]
    pub team_learning: ForcedChoiceSelection,
}

impl CardGameData {
    pub fn selection(&self, category: CardCategory) -> &ForcedChoiceSelection {
        match category {
            CardCategory::FocusPrioritization => &self.focus_prioritization,
            CardCategory::TimeRoutines => &self.time_routines,
            CardCategory::CoachingDelegation => &self.coaching_delegation,
            CardCategory::InfluenceLeadership => &self.influence_leadership,
            CardCategory::TeamLearning => &self.team_learning,
        }
    }

    pub fn selection_mut(&mut self, category: CardCategory) -> &mut ForcedChoiceSelection {
        match category {
            CardCategory::FocusPrioritization => &mut self.focus_prioritization,
            CardCategory::TimeRoutines => &mut self.time_routines,
            CardCategory::CoachingDelegation => &mut self.coaching_delegation,
            CardCategory::InfluenceLeadership => &mut self.influence_leadership,
            CardCategory::TeamLearning => &mut self.team_learning,
        }
    }

    /// Every category has both picks.
    pub fn is_complete(&self) -> bool {
        CardCategory::ALL
            .iter()
            .all(|category| self.selection(*category).is_complete())
    }
}
