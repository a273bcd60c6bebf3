//! Team-health scoring: detects a dominant dysfunction across the layers.

use crate::domain::questionnaire::{DysfunctionLayer, LayerAnswer, TeamHealthData};

/// Answers that indicate a layer is dysfunctional.
pub const DYSFUNCTION_INDICATORS: [LayerAnswer; 2] = [LayerAnswer::A, LayerAnswer::B];

/// Answer tier reported as the most severe one.
pub const WORST_TIER: LayerAnswer = LayerAnswer::A;

/// Number of dysfunctional layers that make a pattern dominant.
/// Tunable design constant, not derived from data.
pub const DOMINANT_DYSFUNCTION_THRESHOLD: usize = 2;

fn is_dysfunctional(answer: Option<LayerAnswer>) -> bool {
    answer.is_some_and(|answer| DYSFUNCTION_INDICATORS.contains(&answer))
}

/// Layers whose answer is a dysfunction indicator, in pyramid order.
pub fn dysfunctional_layers(team_health: &TeamHealthData) -> Vec<DysfunctionLayer> {
    team_health
        .answers()
        .filter(|(_, answer)| is_dysfunctional(*answer))
        .map(|(layer, _)| layer)
        .collect()
}

pub fn dysfunction_count(team_health: &TeamHealthData) -> usize {
    team_health
        .answers()
        .filter(|(_, answer)| is_dysfunctional(*answer))
        .count()
}

/// True iff at least [`DOMINANT_DYSFUNCTION_THRESHOLD`] layers are dysfunctional.
pub fn has_dominant_dysfunction(team_health: &TeamHealthData) -> bool {
    dysfunction_count(team_health) >= DOMINANT_DYSFUNCTION_THRESHOLD
}

/// First layer, in pyramid order, answered with the worst tier.
///
/// For display only; the dominance decision does not use it.
pub fn first_worst_layer(team_health: &TeamHealthData) -> Option<DysfunctionLayer> {
    team_health
        .answers()
        .find(|(_, answer)| *answer == Some(WORST_TIER))
        .map(|(layer, _)| layer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answered(answers: [Option<LayerAnswer>; 5]) -> TeamHealthData {
        let mut data = TeamHealthData::default();
        for (layer, answer) in DysfunctionLayer::ALL.into_iter().zip(answers) {
            data.set_answer(layer, answer);
        }
        data
    }

    #[test]
    fn no_dysfunction_when_all_unanswered() {
        let data = TeamHealthData::default();
        assert_eq!(dysfunction_count(&data), 0);
        assert!(!has_dominant_dysfunction(&data));
        assert_eq!(first_worst_layer(&data), None);
    }

    #[test]
    fn single_dysfunctional_layer_is_not_dominant() {
        use LayerAnswer::*;
        let data = answered([Some(A), Some(C), Some(D), Some(E), Some(C)]);
        assert_eq!(dysfunction_count(&data), 1);
        assert!(!has_dominant_dysfunction(&data));
    }

    #[test]
    fn two_dysfunctional_layers_are_dominant() {
        use LayerAnswer::*;
        let data = answered([Some(C), Some(B), None, Some(A), Some(E)]);
        assert_eq!(dysfunction_count(&data), 2);
        assert!(has_dominant_dysfunction(&data));
        assert_eq!(
            dysfunctional_layers(&data),
            vec![DysfunctionLayer::Conflict, DysfunctionLayer::Accountability]
        );
    }

    #[test]
    fn first_worst_layer_uses_pyramid_order() {
        use LayerAnswer::*;
        let data = answered([Some(B), Some(C), Some(A), Some(D), Some(A)]);
        assert_eq!(first_worst_layer(&data), Some(DysfunctionLayer::Commitment));
    }

    #[test]
    fn worst_layer_is_independent_of_dominance() {
        use LayerAnswer::*;
        let data = answered([None, None, None, None, Some(A)]);
        assert!(!has_dominant_dysfunction(&data));
        assert_eq!(first_worst_layer(&data), Some(DysfunctionLayer::Results));
    }

    #[test]
    fn dominance_matches_threshold_for_every_combination() {
        use LayerAnswer::*;
        let options = [None, Some(A), Some(B), Some(C), Some(E)];
        for mask in 0..options.len().pow(5) {
            let mut picks = [None; 5];
            let mut rest = mask;
            for pick in picks.iter_mut() {
                *pick = options[rest % options.len()];
                rest /= options.len();
            }
            let data = answered(picks);
            let expected = picks
                .iter()
                .filter(|p| matches!(p, Some(A) | Some(B)))
                .count()
                >= 2;
            assert_eq!(has_dominant_dysfunction(&data), expected, "{picks:?}");
        }
    }
}
