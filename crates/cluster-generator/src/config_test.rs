use stellar::{GiantClass, StarCategory};

use crate::config::{IntRange, Preferences, StartingSystem};
use crate::error::GenerationError;

#[test]
fn defaults_validate() {
    let prefs = Preferences::default();
    assert!(prefs.validate().is_ok());
    assert_eq!(prefs.planet_count, IntRange::new(4, 6));
    assert_eq!(prefs.starting_system().unwrap(), StartingSystem::Random);
    assert!(!prefs.rares_disabled());
}

#[test]
fn empty_document_takes_defaults() {
    let prefs = Preferences::from_json("{}").unwrap();
    assert_eq!(prefs, Preferences::default());
}

#[test]
fn reads_camel_case_and_frequency_keys() {
    let json = r#"{
        "chanceMoon": 0,
        "binaryStarChance": 10,
        "planetCount": { "low": 2, "high": 3 },
        "startingSystemType": "RedGiant",
        "freqBH": 0,
        "freqK": 80
    }"#;
    let prefs = Preferences::from_json(json).unwrap();

    assert_eq!(prefs.chance_moon, 0.0);
    assert_eq!(prefs.binary_star_chance, 10.0);
    assert_eq!(prefs.planet_count, IntRange::new(2, 3));
    assert_eq!(prefs.star_frequencies.k, 80.0);
    assert_eq!(prefs.star_frequencies.black_hole, 0.0);
    assert_eq!(
        prefs.starting_system().unwrap(),
        StartingSystem::Category(StarCategory::Giant(GiantClass::Red))
    );
}

#[test]
fn rejects_inverted_range() {
    let json = r#"{ "planetSize": { "low": 300, "high": 200 } }"#;
    let err = Preferences::from_json(json).unwrap_err();
    assert!(matches!(err, GenerationError::InvalidConfiguration(_)));
}

#[test]
fn rejects_out_of_range_percentages() {
    let prefs = Preferences {
        count_bias: 101.0,
        ..Preferences::default()
    };
    assert!(prefs.validate().is_err());

    let prefs = Preferences {
        chance_gas: -1.0,
        ..Preferences::default()
    };
    assert!(prefs.validate().is_err());
}

#[test]
fn rejects_all_zero_frequencies() {
    let prefs = Preferences {
        star_frequencies: stellar::StarFrequencies::none(),
        ..Preferences::default()
    };
    assert!(matches!(
        prefs.validate(),
        Err(GenerationError::InvalidConfiguration(_))
    ));
}

#[test]
fn rejects_unknown_starting_system() {
    let prefs = Preferences {
        starting_system_type: "Quasar".to_string(),
        ..Preferences::default()
    };
    assert!(prefs.validate().is_err());
}

#[test]
fn rejects_bad_star_count_bounds() {
    let prefs = Preferences {
        min_star_count: 100,
        max_star_count: 50,
        ..Preferences::default()
    };
    assert!(prefs.validate().is_err());
}

#[test]
fn rejects_malformed_json() {
    let err = Preferences::from_json("{ not json").unwrap_err();
    assert!(matches!(err, GenerationError::Json(_)));
}

#[test]
fn zero_rare_chance_disables_rares() {
    let prefs = Preferences {
        rare_chance: 0.0,
        ..Preferences::default()
    };
    assert!(prefs.rares_disabled());
}
