use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Game-world meters per astronomical unit.
///
/// Body radii are expressed in game meters (a radius of 200 is a standard
/// rocky world), and one AU spans 40,000 of them.
pub const AU_TO_GAME_METERS: f64 = 40_000.0;

/// Solar radius in AU: 1 R☉ = 0.00465047 AU
pub const SOLAR_RADIUS_AU: f64 = 1.0 / 215.032;
/// AU to solar radii
pub const AU_TO_SOLAR_RADIUS: f64 = 1.0 / SOLAR_RADIUS_AU;

/// A length quantity using f64 precision.
///
/// Astronomical units (AU) are the base unit, which is what orbit placement
/// and climate zones work in.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let orbit = Length::from_au(1.5);
/// let planet_radius = Length::from_game_meters(200.0);
/// let star_radius = Length::from_solar_radii(1.0);
///
/// assert!(planet_radius < star_radius);
/// assert!(star_radius < orbit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: AU

impl Length {
    /// Creates a zero length value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in game meters.
    pub fn from_game_meters(value: f64) -> Self {
        Self(value / AU_TO_GAME_METERS)
    }

    /// Creates a new `Length` from a value in solar radii.
    pub fn from_solar_radii(value: f64) -> Self {
        Self(value * SOLAR_RADIUS_AU)
    }

    /// Returns the length in astronomical units.
    pub fn to_au(&self) -> f64 {
        self.0
    }

    /// Converts the length to game meters.
    pub fn to_game_meters(&self) -> f64 {
        self.0 * AU_TO_GAME_METERS
    }

    /// Converts the length to solar radii.
    pub fn to_solar_radii(&self) -> f64 {
        self.0 * AU_TO_SOLAR_RADIUS
    }

    /// Returns the maximum of two lengths.
    pub fn max(self, other: Self) -> Self {
        if self.0 > other.0 { self } else { other }
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}
