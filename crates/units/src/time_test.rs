use approx::assert_relative_eq;

use crate::time::{SECONDS_PER_YEAR, Time};

#[test]
fn years_convert_to_seconds() {
    assert_relative_eq!(Time::from_years(1.0).to_seconds(), SECONDS_PER_YEAR);
    assert_relative_eq!(Time::from_seconds(SECONDS_PER_YEAR).to_years(), 1.0);
}

#[test]
fn gyr_round_trip() {
    let age = Time::from_gyr(4.6);
    assert_relative_eq!(age.to_gyr(), 4.6, epsilon = 1e-9);
}

#[test]
fn scaling() {
    let period = Time::from_seconds(1200.0);
    assert_relative_eq!((period / 2.0).to_seconds(), 600.0);
    assert_relative_eq!((period * 3.0).to_seconds(), 3600.0);
}
