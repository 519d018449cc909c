use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

pub const SECONDS_PER_YEAR: f64 = 31_557_600.0; // 365.25 days per year

/// Billion years in regular years
const GYR_TO_YEARS: f64 = 1_000_000_000.0;

/// A time quantity using f64 precision.
///
/// Stored in seconds: orbital and rotation periods are game-time seconds,
/// and stellar ages convert through years and Gyr.
///
/// # Examples
///
/// ```rust
/// use units::Time;
///
/// let rotation = Time::from_seconds(3600.0);
/// let age = Time::from_gyr(4.6);
///
/// assert_eq!(rotation.to_seconds(), 3600.0);
/// assert!((age.to_gyr() - 4.6).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: seconds

impl Time {
    /// Creates a zero time value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Time` from a value in seconds.
    pub fn from_seconds(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Time` from a value in years.
    pub fn from_years(value: f64) -> Self {
        Self(value * SECONDS_PER_YEAR)
    }

    /// Creates a time from a value in billion years (Gyr)
    pub fn from_gyr(value: f64) -> Self {
        Self::from_years(value * GYR_TO_YEARS)
    }

    /// Returns the time in seconds.
    pub fn to_seconds(&self) -> f64 {
        self.0
    }

    /// Converts the time to years.
    pub fn to_years(&self) -> f64 {
        self.0 / SECONDS_PER_YEAR
    }

    /// Converts the time to billion years.
    pub fn to_gyr(&self) -> f64 {
        self.to_years() / GYR_TO_YEARS
    }
}

impl Mul<f64> for Time {
    type Output = Time;

    fn mul(self, rhs: f64) -> Time {
        Time(self.0 * rhs)
    }
}

impl Div<f64> for Time {
    type Output = Time;

    fn div(self, rhs: f64) -> Time {
        Time(self.0 / rhs)
    }
}
