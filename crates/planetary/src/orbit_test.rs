use approx::assert_relative_eq;
use units::Mass;

use crate::orbit::{GAME_YEAR_SECONDS, orbital_period, orbital_period_from_star_mass};

#[test]
fn circular_period_is_linear_in_radius() {
    let one = orbital_period(1.0).to_seconds();
    let two = orbital_period(2.0).to_seconds();

    assert_relative_eq!(one, GAME_YEAR_SECONDS);
    assert_relative_eq!(two, 2.0 * one);
}

#[test]
fn kepler_matches_circular_at_one_au_one_solar_mass() {
    let sun = Mass::from_solar_masses(1.0);

    assert_relative_eq!(
        orbital_period_from_star_mass(1.0, sun).to_seconds(),
        orbital_period(1.0).to_seconds()
    );
}

#[test]
fn kepler_scaling() {
    let sun = Mass::from_solar_masses(1.0);
    let heavy = Mass::from_solar_masses(4.0);

    // a = 4 AU ⇒ P = 8 years
    assert_relative_eq!(
        orbital_period_from_star_mass(4.0, sun).to_seconds(),
        8.0 * GAME_YEAR_SECONDS
    );
    // 4x mass halves the period
    assert_relative_eq!(
        orbital_period_from_star_mass(1.0, heavy).to_seconds(),
        0.5 * GAME_YEAR_SECONDS
    );
}

#[test]
fn massless_star_falls_back_to_circular() {
    let none = Mass::from_solar_masses(0.0);
    assert_relative_eq!(
        orbital_period_from_star_mass(3.0, none).to_seconds(),
        orbital_period(3.0).to_seconds()
    );
}
