//! End-to-end cluster generation tests.
//!
//! These run the whole pipeline from preferences to a finished cluster.

use cluster_generator::{GenerationError, Preferences, generate_cluster};
use planetary::{ThemeCatalog, VeinKind};
use stellar::StarFrequencies;

fn generate(seed: u64, stars: usize, prefs: &Preferences) -> cluster_generator::Cluster {
    let themes = ThemeCatalog::builtin();
    generate_cluster(seed, stars, prefs, &themes).unwrap()
}

#[test]
fn default_cluster_has_a_playable_home() {
    let cluster = generate(42, 16, &Preferences::default());

    assert_eq!(cluster.stars.len(), 16);
    let home_star = cluster.birth_star().unwrap();
    assert!(!home_star.category.is_remnant());

    let home = cluster.birth_body().unwrap();
    assert!(home.habitable);
    assert_eq!(home.radius, 200);
    assert!(home_star.has_gas_giant());
    assert!(
        home_star
            .bodies()
            .filter(|b| b.name != home.name)
            .any(|b| b.has_vein(VeinKind::Titanium))
    );

    println!(
        "{}: home {} around {} ({})",
        cluster.metadata.catalog_name(),
        cluster.birth_planet_name,
        home_star.name,
        home_star.category
    );
}

#[test]
fn same_seed_same_cluster() {
    let prefs = Preferences::default();
    let first = serde_json::to_string(&generate(1234, 24, &prefs)).unwrap();
    let second = serde_json::to_string(&generate(1234, 24, &prefs)).unwrap();
    let other = serde_json::to_string(&generate(1235, 24, &prefs)).unwrap();

    assert_eq!(first, second);
    assert_ne!(first, other);
}

#[test]
fn remnant_only_weights_convert_the_home_star() {
    let prefs = Preferences {
        star_frequencies: StarFrequencies {
            black_hole: 1.0,
            neutron_star: 1.0,
            ..StarFrequencies::none()
        },
        ..Preferences::default()
    };

    for seed in 0..5 {
        let cluster = generate(seed, 16, &prefs);

        assert!(!cluster.stars[0].category.is_remnant());
        assert!(cluster.stars[1..].iter().all(|s| s.category.is_remnant()));
        assert!(cluster.birth_body().unwrap().habitable);
    }
}

#[test]
fn disabled_moons_and_gas_leave_bare_planets() {
    let prefs = Preferences {
        chance_moon: 0.0,
        chance_gas: 0.0,
        ..Preferences::default()
    };
    let cluster = generate(7, 20, &prefs);

    for star in &cluster.stars {
        assert!(star.planets.iter().all(|p| p.moons.is_empty()), "{}", star.name);
    }
    // the home system still gains its guaranteed giant
    assert!(cluster.stars[0].has_gas_giant());
    assert!(cluster.stars[1..].iter().all(|s| !s.has_gas_giant()));
}

#[test]
fn zero_binary_chance_means_single_stars() {
    let prefs = Preferences {
        binary_star_chance: 0.0,
        ..Preferences::default()
    };
    let cluster = generate(9, 32, &prefs);

    assert!(cluster.stars.iter().all(|s| s.companions.is_empty()));
}

#[test]
fn orbits_increase_outward_everywhere() {
    let cluster = generate(99, 48, &Preferences::default());

    for star in &cluster.stars {
        for pair in star.planets.windows(2) {
            assert!(
                pair[1].orbit() > pair[0].orbit(),
                "{}: {} inside {}",
                star.name,
                pair[1].name,
                pair[0].name
            );
        }
        for planet in &star.planets {
            for pair in planet.moons.windows(2) {
                assert!(pair[1].orbit() > pair[0].orbit());
            }
        }
    }
}

#[test]
fn bad_preferences_are_rejected() {
    let themes = ThemeCatalog::builtin();

    let inverted = Preferences::from_json(r#"{ "planetCount": { "low": 5, "high": 2 } }"#);
    assert!(matches!(inverted, Err(GenerationError::InvalidConfiguration(_))));

    let prefs = Preferences {
        star_frequencies: StarFrequencies::none(),
        ..Preferences::default()
    };
    assert!(generate_cluster(1, 16, &prefs, &themes).is_err());
}

#[test]
fn remnant_start_keeps_companions_smaller_than_home() {
    let prefs = Preferences {
        starting_system_type: "BlackHole".to_string(),
        binary_star_chance: 100.0,
        ..Preferences::default()
    };

    for seed in 0..30 {
        let cluster = generate(seed, 16, &prefs);
        let home = &cluster.stars[0];

        assert!(!home.category.is_remnant());
        assert!(!home.companions.is_empty());
        for companion in &home.companions {
            let ratio = companion.properties.radius.to_au() / home.properties.radius.to_au();
            assert!(ratio <= 0.8 + 1e-9, "seed {}: {} ratio {}", seed, companion.category, ratio);
        }
    }
}
