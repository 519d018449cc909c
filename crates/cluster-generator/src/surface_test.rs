use planetary::{Body, ThemeCatalog, ThemeLibrary, VeinKind};
use star_system::Star;
use stellar::{SeededRng, StarCategory};
use units::Time;

use crate::config::Preferences;
use crate::context::GenerationContext;
use crate::error::GenerationError;
use crate::orbits::place_orbits;
use crate::surface::{apply_theme, assign_themes, randomize_rotation, set_rotation_properties};

fn placed_star(seed: u64) -> Star {
    let mut star = Star::new(1, "Test", StarCategory::DEFAULT_HOME);
    let mut giant = Body::gas_giant("Test-Planet", 80);
    giant.moons.push(Body::telluric("Test-Moon", 60));
    star.planets.push(Body::telluric("Test-Planet", 200));
    star.planets.push(Body::telluric("Test-Planet", 250));
    star.planets.push(giant);
    place_orbits(&mut SeededRng::new(seed), &mut star);
    star
}

#[test]
fn every_body_gets_a_theme_matching_its_kind() {
    let prefs = Preferences::default();
    let themes = ThemeCatalog::builtin();
    let mut ctx = GenerationContext::new(42, &prefs, &themes);
    let mut star = placed_star(42);

    assign_themes(&mut ctx, &mut star).unwrap();

    for planet in &star.planets {
        let theme = themes.theme(planet.theme.as_deref().unwrap()).unwrap();
        assert_eq!(theme.is_gas(), planet.is_gas_giant());
        for moon in &planet.moons {
            let theme = themes.theme(moon.theme.as_deref().unwrap()).unwrap();
            assert!(!theme.is_gas());
        }
    }
}

#[test]
fn applied_theme_sets_habitability_and_veins() {
    let prefs = Preferences {
        rare_chance: 100.0,
        ..Preferences::default()
    };
    let themes = ThemeCatalog::builtin();
    let mut ctx = GenerationContext::new(42, &prefs, &themes);
    let mut body = Body::telluric("Home", 200);

    apply_theme(&mut ctx, &mut body, "Mediterranean").unwrap();

    assert!(body.habitable);
    assert_eq!(body.theme.as_deref(), Some("Mediterranean"));
    assert_eq!(
        body.veins.len(),
        themes.theme("Mediterranean").unwrap().veins.len()
    );
}

#[test]
fn rare_veins_dropped_when_disabled() {
    let prefs = Preferences {
        rare_chance: 0.0,
        ..Preferences::default()
    };
    let themes = ThemeCatalog::builtin();
    let mut ctx = GenerationContext::new(42, &prefs, &themes);
    let mut body = Body::telluric("Rock", 200);

    apply_theme(&mut ctx, &mut body, "Barren").unwrap();

    assert!(body.veins.iter().all(|v| !v.is_rare()));
    assert!(!body.has_vein(VeinKind::Titanium));
    assert!(body.has_vein(VeinKind::Iron));
}

#[test]
fn unknown_theme_is_a_configuration_error() {
    let prefs = Preferences::default();
    let themes = ThemeCatalog::builtin();
    let mut ctx = GenerationContext::new(42, &prefs, &themes);
    let mut body = Body::telluric("Rock", 200);

    let err = apply_theme(&mut ctx, &mut body, "Atlantis").unwrap_err();
    assert!(matches!(err, GenerationError::InvalidConfiguration(_)));
}

#[test]
fn rotation_values_in_range() {
    let mut rng = SeededRng::new(42);
    let star = placed_star(1);

    for _ in 0..200 {
        let mut body = star.planets[1].clone();
        randomize_rotation(&mut rng, &mut body);

        assert!((0.0..360.0).contains(&body.rotation_phase));
        assert!((0.0..360.0).contains(&body.orbit_phase));
        assert!((-20.0..20.0).contains(&body.orbit_inclination));
        assert!((0.0..85.0).contains(&body.obliquity));

        let rotation = body.rotation_period.to_seconds();
        let orbital = body.orbital_period.to_seconds();
        let resonant = [orbital, orbital / 2.0, orbital / 4.0].contains(&rotation);
        assert!(resonant || (80.0..3600.0).contains(&rotation));
    }
}

#[test]
fn distant_bodies_are_never_locked() {
    let mut rng = SeededRng::new(42);
    let mut body = Body::telluric("Far", 200);
    body.orbit_radius = Some(30.0);
    body.orbital_period = Time::from_seconds(1_000_000.0);

    for _ in 0..200 {
        randomize_rotation(&mut rng, &mut body);
        assert!(body.rotation_period.to_seconds() < 3600.0);
    }
}

#[test]
fn inner_planet_locked_by_preference() {
    let prefs = Preferences {
        tidal_lock_inner_planets: true,
        ..Preferences::default()
    };
    let themes = ThemeCatalog::builtin();
    let mut ctx = GenerationContext::new(42, &prefs, &themes);
    let mut star = placed_star(42);

    set_rotation_properties(&mut ctx, &mut star);

    assert_eq!(star.planets[0].rotation_period, star.planets[0].orbital_period);
}
