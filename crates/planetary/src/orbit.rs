//! Orbital period formulas
//!
//! The host game moves bodies along circular orbits at a fixed nominal
//! speed, so the default period grows linearly with distance. The Kepler
//! variant is used for bodies added after placement that must respect the
//! host star's mass.

use std::f64::consts::PI;

use units::{Mass, Time};

/// Nominal orbital speed in AU per second
pub const NOMINAL_ORBIT_SPEED: f64 = 0.0005;

/// Period of a 1 AU orbit at nominal speed (one game year)
pub const GAME_YEAR_SECONDS: f64 = 2.0 * PI / NOMINAL_ORBIT_SPEED;

/// Circular orbit period at nominal speed
///
/// # Example
/// ```
/// use planetary::orbit::{orbital_period, GAME_YEAR_SECONDS};
///
/// let year = orbital_period(1.0);
/// assert!((year.to_seconds() - GAME_YEAR_SECONDS).abs() < 1e-9);
/// ```
pub fn orbital_period(orbit_radius_au: f64) -> Time {
    let circumference = 2.0 * PI * orbit_radius_au.max(0.0);
    Time::from_seconds(circumference / NOMINAL_ORBIT_SPEED)
}

/// Kepler's third law in game years: P = sqrt(a³ / M)
pub fn orbital_period_from_star_mass(orbit_radius_au: f64, star_mass: Mass) -> Time {
    let a = orbit_radius_au.max(0.0);
    let m = star_mass.to_solar_masses();
    if m <= 0.0 {
        return orbital_period(a);
    }
    Time::from_seconds(GAME_YEAR_SECONDS * (a.powi(3) / m).sqrt())
}
