use approx::assert_relative_eq;

use crate::properties::StarProperties;
use crate::spectral::{GiantClass, SpectralClass, StarCategory};

#[test]
fn sun_like_defaults() {
    let sun = StarProperties::for_category(StarCategory::MainSequence(SpectralClass::G));

    assert_relative_eq!(sun.radius.to_solar_radii(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(sun.mass.to_solar_masses(), 1.0);
    assert_relative_eq!(sun.age.to_gyr(), 4.6, epsilon = 1e-9);
}

#[test]
fn main_sequence_ordering() {
    let luminosities: Vec<f64> = SpectralClass::ALL
        .iter()
        .map(|c| StarProperties::for_category(StarCategory::MainSequence(*c)).luminosity)
        .collect();

    for pair in luminosities.windows(2) {
        assert!(pair[0] > pair[1], "{:?} should be decreasing", luminosities);
    }
}

#[test]
fn giants_outshine_main_sequence() {
    let red_giant = StarProperties::for_category(StarCategory::Giant(GiantClass::Red));
    let o_star = StarProperties::for_category(StarCategory::MainSequence(SpectralClass::O));

    assert!(red_giant.luminosity > o_star.luminosity);
    assert!(red_giant.radius > o_star.radius);
}

#[test]
fn remnants_are_tiny() {
    for category in [
        StarCategory::WhiteDwarf,
        StarCategory::NeutronStar,
        StarCategory::BlackHole,
    ] {
        let props = StarProperties::for_category(category);
        assert!(props.radius.to_solar_radii() < 0.02);
        assert!(props.luminosity < 0.1);
    }
}

#[test]
fn black_hole_is_dark() {
    let props = StarProperties::for_category(StarCategory::BlackHole);
    assert_eq!(props.color.to_hex(), "#000000");
}
