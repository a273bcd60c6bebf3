//! Team health answers across the five dysfunction layers.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// The five team-health layers, ordered from the base of the pyramid up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DysfunctionLayer {
    Trust,
    Conflict,
    Commitment,
    Accountability,
    Results,
}

impl DysfunctionLayer {
    /// All layers in evaluation order.
    pub const ALL: [DysfunctionLayer; 5] = [
        DysfunctionLayer::Trust,
        DysfunctionLayer::Conflict,
        DysfunctionLayer::Commitment,
        DysfunctionLayer::Accountability,
        DysfunctionLayer::Results,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trust => "trust",
            Self::Conflict => "conflict",
            Self::Commitment => "commitment",
            Self::Accountability => "accountability",
            Self::Results => "results",
        }
    }

    /// Name of the dysfunction this layer reveals when it fails.
    pub fn dysfunction_name(&self) -> &'static str {
        match self {
            Self::Trust => "Absence of Trust",
            Self::Conflict => "Fear of Conflict",
            Self::Commitment => "Lack of Commitment",
            Self::Accountability => "Avoidance of Accountability",
            Self::Results => "Inattention to Results",
        }
    }
}

impl fmt::Display for DysfunctionLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Behavioral option picked for a layer. `A` is the most severe tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerAnswer {
    A,
    B,
    C,
    D,
    E,
}

impl LayerAnswer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::D => "d",
            Self::E => "e",
        }
    }

    /// Parses an option id. Blank or unknown ids count as unanswered.
    pub fn parse(id: &str) -> Option<Self> {
        match id.trim() {
            "a" => Some(Self::A),
            "b" => Some(Self::B),
            "c" => Some(Self::C),
            "d" => Some(Self::D),
            "e" => Some(Self::E),
            _ => None,
        }
    }
}

/// Wire shape of team health: unanswered layers are empty strings, the
/// same way card selections store an empty slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TeamHealthRecord {
    #[serde(default, deserialize_with = "blank_if_null")]
    trust: String,
    #[serde(default, deserialize_with = "blank_if_null")]
    conflict: String,
    #[serde(default, deserialize_with = "blank_if_null")]
    commitment: String,
    #[serde(default, deserialize_with = "blank_if_null")]
    accountability: String,
    #[serde(default, deserialize_with = "blank_if_null")]
    results: String,
    #[serde(default, deserialize_with = "blank_if_null")]
    gold_action: String,
}

fn blank_if_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Team health answers. Each layer holds at most one option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TeamHealthRecord", into = "TeamHealthRecord")]
pub struct TeamHealthData {
    pub trust: Option<LayerAnswer>,
    pub conflict: Option<LayerAnswer>,
    pub commitment: Option<LayerAnswer>,
    pub accountability: Option<LayerAnswer>,
    pub results: Option<LayerAnswer>,
    /// Free-text "gold question": one action that would move the team.
    pub gold_action: String,
}

impl From<TeamHealthRecord> for TeamHealthData {
    fn from(record: TeamHealthRecord) -> Self {
        Self {
            trust: LayerAnswer::parse(&record.trust),
            conflict: LayerAnswer::parse(&record.conflict),
            commitment: LayerAnswer::parse(&record.commitment),
            accountability: LayerAnswer::parse(&record.accountability),
            results: LayerAnswer::parse(&record.results),
            gold_action: record.gold_action,
        }
    }
}

impl From<TeamHealthData> for TeamHealthRecord {
    fn from(data: TeamHealthData) -> Self {
        let wire = |answer: Option<LayerAnswer>| {
            answer.map(|a| a.as_str().to_string()).unwrap_or_default()
        };
        Self {
            trust: wire(data.trust),
            conflict: wire(data.conflict),
            commitment: wire(data.commitment),
            accountability: wire(data.accountability),
            results: wire(data.results),
            gold_action: data.gold_action,
        }
    }
}

impl TeamHealthData {
    pub fn answer(&self, layer: DysfunctionLayer) -> Option<LayerAnswer> {
        match layer {
            DysfunctionLayer::Trust => self.trust,
            DysfunctionLayer::Conflict => self.conflict,
            DysfunctionLayer::Commitment => self.commitment,
            DysfunctionLayer::Accountability => self.accountability,
            DysfunctionLayer::Results => self.results,
        }
    }

    /// Records (or clears, with `None`) the answer for one layer.
    pub fn set_answer(&mut self, layer: DysfunctionLayer, answer: Option<LayerAnswer>) {
        let slot = match layer {
            DysfunctionLayer::Trust => &mut self.trust,
            DysfunctionLayer::Conflict => &mut self.conflict,
            DysfunctionLayer::Commitment => &mut self.commitment,
            DysfunctionLayer::Accountability => &mut self.accountability,
            DysfunctionLayer::Results => &mut self.results,
        };
        *slot = answer;
    }

    /// Builder-style variant of [`set_answer`](Self::set_answer).
    pub fn with_answer(mut self, layer: DysfunctionLayer, answer: LayerAnswer) -> Self {
        self.set_answer(layer, Some(answer));
        self
    }

    /// Layers and their answers in evaluation order.
    pub fn answers(&self) -> impl Iterator<Item = (DysfunctionLayer, Option<LayerAnswer>)> + '_ {
        DysfunctionLayer::ALL
            .into_iter()
            .map(move |layer| (layer, self.answer(layer)))
    }

    pub fn answered_count(&self) -> usize {
        self.answers().filter(|(_, answer)| answer.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.answered_count() == DysfunctionLayer::ALL.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_answer_replaces_previous_option() {
        let mut data = TeamHealthData::default();
        data.set_answer(DysfunctionLayer::Conflict, Some(LayerAnswer::A));
        data.set_answer(DysfunctionLayer::Conflict, Some(LayerAnswer::D));
        assert_eq!(data.conflict, Some(LayerAnswer::D));

        data.set_answer(DysfunctionLayer::Conflict, None);
        assert_eq!(data.conflict, None);
    }

    #[test]
    fn answers_follow_pyramid_order() {
        let data = TeamHealthData::default()
            .with_answer(DysfunctionLayer::Results, LayerAnswer::E)
            .with_answer(DysfunctionLayer::Trust, LayerAnswer::B);
        let layers: Vec<_> = data.answers().map(|(layer, _)| layer).collect();
        assert_eq!(layers, DysfunctionLayer::ALL.to_vec());
        assert_eq!(data.answered_count(), 2);
        assert!(!data.is_complete());
    }

    #[test]
    fn layer_answer_parse_tolerates_unknown_ids() {
        assert_eq!(LayerAnswer::parse("a"), Some(LayerAnswer::A));
        assert_eq!(LayerAnswer::parse(" e "), Some(LayerAnswer::E));
        assert_eq!(LayerAnswer::parse(""), None);
        assert_eq!(LayerAnswer::parse("z"), None);
    }

    #[test]
    fn team_health_deserializes_with_missing_layers() {
        let data: TeamHealthData =
            serde_json::from_str(r#"{"trust": "a", "gold_action": "weekly retro"}"#).unwrap();
        assert_eq!(data.trust, Some(LayerAnswer::A));
        assert_eq!(data.results, None);
        assert_eq!(data.gold_action, "weekly retro");
    }

    #[test]
    fn unanswered_layers_are_stored_as_empty_strings() {
        let data = TeamHealthData::default().with_answer(DysfunctionLayer::Trust, LayerAnswer::C);
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["trust"], "c");
        assert_eq!(json["conflict"], "");
        assert_eq!(json["results"], "");
    }

    #[test]
    fn blank_null_and_unknown_layers_read_as_unanswered() {
        let data: TeamHealthData = serde_json::from_str(
            r#"{"trust": "", "conflict": null, "commitment": "x", "accountability": "b"}"#,
        )
        .unwrap();
        assert_eq!(data.trust, None);
        assert_eq!(data.conflict, None);
        assert_eq!(data.commitment, None);
        assert_eq!(data.accountability, Some(LayerAnswer::B));
        assert_eq!(data.gold_action, "");
    }
}
