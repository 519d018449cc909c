use approx::assert_relative_eq;
use nalgebra::Vector3;
use planetary::{Body, orbital_period};
use star_system::{CompanionStar, Star};
use stellar::{GiantClass, SeededRng, SpectralClass, StarCategory, StarProperties};

use crate::orbits::place_orbits;

fn star_with_planets(category: StarCategory, planets: usize) -> Star {
    let mut star = Star::new(1, "Test", category);
    for i in 0..planets {
        let mut planet = if i % 3 == 2 {
            Body::gas_giant("Test-Planet", 80)
        } else {
            Body::telluric("Test-Planet", 200)
        };
        if i % 2 == 0 {
            planet.moons.push(Body::telluric("Test-Moon", 50));
            planet.moons.push(Body::telluric("Test-Moon", 60));
        }
        star.planets.push(planet);
    }
    star
}

fn assert_monotonic(star: &Star) {
    let orbits: Vec<f64> = star.planets.iter().map(|p| p.orbit()).collect();
    for pair in orbits.windows(2) {
        assert!(pair[1] > pair[0], "planet orbits not increasing: {:?}", orbits);
    }

    for planet in &star.planets {
        let mut previous = planet.radius_au();
        for moon in &planet.moons {
            assert!(moon.orbit() > previous, "moon orbit inside its predecessor");
            previous = moon.orbit();
        }
    }
}

#[test]
fn orbits_increase_for_every_structure() {
    let categories = [
        StarCategory::MainSequence(SpectralClass::G),
        StarCategory::MainSequence(SpectralClass::O),
        StarCategory::Giant(GiantClass::Red),
        StarCategory::WhiteDwarf,
        StarCategory::BlackHole,
    ];

    for seed in 0..20 {
        for category in categories {
            let mut star = star_with_planets(category, 6);
            let mut rng = SeededRng::new(seed);
            place_orbits(&mut rng, &mut star);
            assert_monotonic(&star);
        }
    }
}

#[test]
fn every_body_is_placed_and_named() {
    let mut star = star_with_planets(StarCategory::DEFAULT_HOME, 3);
    let mut rng = SeededRng::new(42);
    place_orbits(&mut rng, &mut star);

    assert_eq!(star.planets[0].name, "Test - I");
    assert_eq!(star.planets[2].name, "Test - III");
    assert_eq!(star.planets[0].moons[1].name, "Test - I - b");
    assert!(star.bodies().all(|b| b.orbit_radius.is_some()));
}

#[test]
fn moon_gaps_are_bounded() {
    let mut star = star_with_planets(StarCategory::DEFAULT_HOME, 1);
    let mut rng = SeededRng::new(42);
    place_orbits(&mut rng, &mut star);

    let planet = &star.planets[0];
    let first_gap = planet.moons[0].orbit() - planet.radius_au();
    let second_gap = planet.moons[1].orbit() - planet.moons[0].orbit();
    for gap in [first_gap, second_gap] {
        assert!((0.05..0.07).contains(&gap), "gap {}", gap);
    }
}

#[test]
fn periods_follow_orbit_radius() {
    let mut star = star_with_planets(StarCategory::DEFAULT_HOME, 4);
    let mut rng = SeededRng::new(3);
    place_orbits(&mut rng, &mut star);

    for body in star.bodies() {
        assert_relative_eq!(
            body.orbital_period.to_seconds(),
            orbital_period(body.orbit()).to_seconds()
        );
    }
}

#[test]
fn remnant_first_orbit_is_in_known_bands() {
    for seed in 0..30 {
        let mut star = star_with_planets(StarCategory::NeutronStar, 1);
        let mut rng = SeededRng::new(seed);
        place_orbits(&mut rng, &mut star);

        let orbit = star.planets[0].orbit();
        assert!(
            (0.25..0.45).contains(&orbit) || (0.7..0.85).contains(&orbit),
            "orbit {}",
            orbit
        );
    }
}

#[test]
fn binary_floor_pushes_first_planet_out() {
    let mut star = star_with_planets(StarCategory::DEFAULT_HOME, 2);
    let category = StarCategory::MainSequence(SpectralClass::M);
    star.companions.push(CompanionStar {
        name: "Test B".to_string(),
        category,
        properties: StarProperties::for_category(category),
        offset: Vector3::new(1.5, 0.0, 0.0),
        donated_luminosity: 0.0,
        decorative: true,
    });

    let mut rng = SeededRng::new(42);
    place_orbits(&mut rng, &mut star);

    let first = &star.planets[0];
    assert!(first.orbit() >= 3.0 + first.system_radius());
    assert!(star.planets[1].orbit() > first.orbit());
}

#[test]
fn placement_is_deterministic() {
    let mut a = star_with_planets(StarCategory::Giant(GiantClass::Yellow), 5);
    let mut b = a.clone();

    place_orbits(&mut SeededRng::new(11), &mut a);
    place_orbits(&mut SeededRng::new(11), &mut b);
    assert_eq!(a, b);
}
