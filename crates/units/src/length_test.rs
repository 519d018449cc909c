use approx::assert_relative_eq;

use crate::length::{AU_TO_GAME_METERS, Length, SOLAR_RADIUS_AU};

#[test]
fn game_meters_round_trip_through_au() {
    let radius = Length::from_game_meters(200.0);
    assert_relative_eq!(radius.to_au(), 200.0 / AU_TO_GAME_METERS);
    assert_relative_eq!(radius.to_game_meters(), 200.0);
}

#[test]
fn solar_radius_is_a_small_fraction_of_an_au() {
    let sun = Length::from_solar_radii(1.0);
    assert_relative_eq!(sun.to_au(), SOLAR_RADIUS_AU);
    assert_relative_eq!(sun.to_solar_radii(), 1.0, epsilon = 1e-12);
}

#[test]
fn arithmetic_keeps_au_base() {
    let a = Length::from_au(1.5);
    let b = Length::from_au(0.5);

    assert_relative_eq!((a + b).to_au(), 2.0);
    assert_relative_eq!((a - b).to_au(), 1.0);
    assert_relative_eq!((a * 2.0).to_au(), 3.0);
    assert_relative_eq!((a / 3.0).to_au(), 0.5);
    assert_relative_eq!(a / b, 3.0);
    assert_eq!(a.max(b), a);
}
