use challenge_rated::model::{
    constants::CHALLENGE_RATING_POWER_TABLE,
    decay::DecayTable,
    encounter::{Encounter, EncounterDocument},
    occurrences::{count, count_value},
    power::total_power,
    recalculate_difficulty,
    structures::{encounter_difficulty::EncounterDifficulty, rating::Rating},
    EncounterCalculator, EngineError
};
use rust_decimal::Decimal;
use serde_json::json;
use std::thread;

use crate::common::{init_test_env, parse_ratings};

#[test]
fn test_reference_encounter() {
    init_test_env();

    let result = recalculate_difficulty(
        &parse_ratings(&["5", "3", "2"]),
        &parse_ratings(&["4", "2"]),
        &parse_ratings(&["3", "4"]),
        true
    )
    .unwrap();

    assert!(result.hp_lost > Decimal::ZERO);
    assert!(result.resources_spent > 0);
    assert_eq!(result.encounter_difficulty, EncounterDifficulty::Mild);
}

#[test]
fn test_empty_enemies_always_unknown() {
    init_test_env();

    let parties = [vec![], parse_ratings(&["1"]), parse_ratings(&["20", "20", "20", "20"])];
    let allies = [vec![], parse_ratings(&["1/2", "30"])];

    for party in &parties {
        for ally in &allies {
            for decay in [true, false] {
                let result = recalculate_difficulty(&[], ally, party, decay).unwrap();

                assert_eq!(result.hp_lost, Decimal::ZERO);
                assert_eq!(result.encounter_difficulty, EncounterDifficulty::Unknown);
            }
        }
    }
}

#[test]
fn test_decay_off_never_scales() {
    init_test_env();

    for cr in Rating::challenge_ratings() {
        let result = recalculate_difficulty(&[cr], &[], &parse_ratings(&["1", "1"]), false).unwrap();

        assert_eq!(result.multiplier, Decimal::ONE);
    }
}

#[test]
fn test_decay_on_never_increases_party_power() {
    init_test_env();

    for cr in Rating::challenge_ratings() {
        for level in Rating::levels() {
            let decayed = recalculate_difficulty(&[cr], &[], &[level], true).unwrap();
            let plain = recalculate_difficulty(&[cr], &[], &[level], false).unwrap();

            assert!(decayed.multiplier <= Decimal::ONE);
            assert!(decayed.hp_lost >= plain.hp_lost, "cr {} level {}", cr, level);
        }
    }
}

#[test]
fn test_total_power_from_json_roster() {
    init_test_env();

    let occurrences = count_value(&json!([1, 1, 2])).unwrap();

    assert_eq!(
        total_power(&occurrences, &CHALLENGE_RATING_POWER_TABLE).unwrap(),
        Decimal::from(66)
    );
    assert_eq!(occurrences, count(&parse_ratings(&["2", "1", "1"])));
}

#[test]
fn test_non_sequence_roster() {
    init_test_env();

    let err = count_value(&json!("not-an-array")).unwrap_err();

    assert!(matches!(err, EngineError::InvalidArgument { .. }));
    assert!(err.to_string().contains("string"));
    assert!(err.to_string().contains("not-an-array"));
}

#[test]
fn test_concurrent_calculations_agree() {
    init_test_env();

    let calculator = EncounterCalculator::new().unwrap();
    let input = EncounterDocument::from_json(
        r#"{"enemyChallengeRatings": ["1/2", 8, 8], "allyChallengeRatings": [2], "partyLevels": [5, 6, 5]}"#
    )
    .unwrap()
    .into_encounter()
    .wave_input(&parse_ratings(&["1/2", "8", "8"]));
    let expected = calculator.recalculate_difficulty(&input).unwrap();

    let results = thread::scope(|s| {
        let handles = (0..8)
            .map(|_| s.spawn(|| calculator.recalculate_difficulty(&input).unwrap()))
            .collect::<Vec<_>>();

        handles.into_iter().map(|h| h.join().unwrap()).collect::<Vec<_>>()
    });

    assert!(results.iter().all(|r| *r == expected));
}

#[test]
fn test_multi_wave_encounter() {
    init_test_env();

    let encounter = Encounter {
        party_levels: parse_ratings(&["5", "5", "5", "5"]),
        ally_challenge_ratings: vec![],
        waves: vec![
            parse_ratings(&["1/4", "1/4", "1/4"]),
            parse_ratings(&["2", "2"]),
            parse_ratings(&["8"])
        ],
        account_for_power_decay: true
    };

    let summary = encounter.evaluate(&EncounterCalculator::new().unwrap()).unwrap();
    let total: Decimal = summary.waves.iter().map(|w| w.hp_lost).sum();

    assert_eq!(summary.waves.len(), 3);
    assert_eq!(summary.total_hp_lost, total);
    assert!(summary.waves.iter().all(|w| w.encounter_difficulty == EncounterDifficulty::Mild));
}

#[test]
fn test_custom_decay_table() {
    init_test_env();

    let table = DecayTable::from_json(r#"{"0": {"1": 1}, "5": {"1": 0.25}}"#).unwrap();
    let calculator = EncounterCalculator::with_decay_table(&table);
    let encounter = Encounter {
        party_levels: parse_ratings(&["1"]),
        ally_challenge_ratings: vec![],
        waves: vec![parse_ratings(&["5"]), parse_ratings(&["0"])],
        account_for_power_decay: true
    };

    let summary = encounter.evaluate(&calculator).unwrap();

    assert_eq!(summary.waves[0].multiplier, Decimal::new(25, 2));
    assert_eq!(summary.waves[1].multiplier, Decimal::ONE);
    assert_eq!(summary.waves[0].encounter_difficulty, EncounterDifficulty::Impossible);
}
