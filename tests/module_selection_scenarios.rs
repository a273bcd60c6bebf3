//! Integration tests for module selection through the public API.
//!
//! Each scenario fills a response the way the screens would and checks
//! the full/light outcome, the result texts and the summary's top module.

use management_compass::domain::analysis::{
    build_summary, calculate_module_selection, get_full_modules, get_light_modules,
    get_module_results, has_dominant_dysfunction, FlowVariant, ModuleDepth, ModuleKey,
    ModuleSelection,
};
use management_compass::domain::questionnaire::{
    CardCategory, CardGameData, DysfunctionLayer, ForcedChoiceSelection, LayerAnswer,
    QuestionnaireResponse, TeamHealthData,
};

fn picks(category: CardCategory, most: &str, least: &str, card_game: &mut CardGameData) {
    *card_game.selection_mut(category) = ForcedChoiceSelection::from_picks(most, least);
}

#[test]
fn coaching_trigger_with_light_influence_and_no_team_data() {
    let mut card_game = CardGameData::default();
    picks(CardCategory::CoachingDelegation, "people_grow", "do_alone", &mut card_game);
    picks(CardCategory::InfluenceLeadership, "need_presence", "things_move", &mut card_game);

    let selection = calculate_module_selection(&card_game, None);

    // One full module already satisfies the bounds, so nothing is promoted.
    assert_eq!(
        selection,
        ModuleSelection {
            coaching: ModuleDepth::Full,
            interfaces: ModuleDepth::Light,
            focus: ModuleDepth::Light,
            team: ModuleDepth::Light,
        }
    );
}

#[test]
fn every_module_triggered_keeps_focus_and_coaching() {
    let mut card_game = CardGameData::default();
    picks(CardCategory::FocusPrioritization, "clear_direction", "holding_a_lot", &mut card_game);
    picks(CardCategory::TimeRoutines, "routines_advance", "no_routine", &mut card_game);
    picks(CardCategory::CoachingDelegation, "people_grow", "delegate_close", &mut card_game);
    picks(CardCategory::InfluenceLeadership, "things_move", "close_circle", &mut card_game);

    let team = TeamHealthData::default()
        .with_answer(DysfunctionLayer::Trust, LayerAnswer::B)
        .with_answer(DysfunctionLayer::Accountability, LayerAnswer::B);
    assert!(has_dominant_dysfunction(&team));

    let full: Vec<ModuleKey> = get_full_modules(&card_game, Some(&team))
        .into_iter()
        .map(|m| m.key)
        .collect();
    let light: Vec<ModuleKey> = get_light_modules(&card_game, Some(&team))
        .into_iter()
        .map(|m| m.key)
        .collect();

    assert_eq!(full, vec![ModuleKey::Coaching, ModuleKey::Focus]);
    assert_eq!(light, vec![ModuleKey::Interfaces, ModuleKey::Team]);
}

#[test]
fn unanswered_card_game_promotes_focus() {
    let results = get_module_results(&CardGameData::default(), None);
    let focus = results.iter().find(|m| m.key == ModuleKey::Focus).unwrap();
    assert_eq!(focus.depth, ModuleDepth::Full);
    assert_eq!(focus.name, "Focus & Prioritization");
    assert_eq!(results.iter().filter(|m| m.depth.is_full()).count(), 1);
}

#[test]
fn unknown_card_ids_resolve_to_light() {
    let mut card_game = CardGameData::default();
    picks(CardCategory::CoachingDelegation, "", "made_up_card", &mut card_game);
    picks(CardCategory::InfluenceLeadership, "", "another_one", &mut card_game);

    let selection = calculate_module_selection(&card_game, None);
    assert_eq!(selection.coaching, ModuleDepth::Light);
    assert_eq!(selection.interfaces, ModuleDepth::Light);
    assert_eq!(selection.full_modules(), vec![ModuleKey::Focus]);
}

#[test]
fn team_only_dysfunction_leads_the_summary() {
    let mut response = QuestionnaireResponse::new();
    response.team_health = Some(
        TeamHealthData::default()
            .with_answer(DysfunctionLayer::Commitment, LayerAnswer::A)
            .with_answer(DysfunctionLayer::Results, LayerAnswer::A),
    );

    let summary = build_summary(&response, FlowVariant::CardGame);
    assert_eq!(summary.top_module, "Team Development");
    assert_eq!(summary.dominant_dysfunction, Some(DysfunctionLayer::Commitment));
}

#[test]
fn selection_is_stable_across_repeated_calls() {
    let mut card_game = CardGameData::default();
    picks(CardCategory::TimeRoutines, "no_routine", "meetings_unclear", &mut card_game);
    let first = get_module_results(&card_game, None);
    let second = get_module_results(&card_game, None);
    assert_eq!(first, second);
}
