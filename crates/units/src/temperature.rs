use serde::{Deserialize, Serialize};

/// Effective surface temperature with Kelvin as the base unit.
///
/// # Examples
///
/// ```rust
/// use units::Temperature;
///
/// let sun = Temperature::from_kelvin(5778.0);
/// assert_eq!(sun.to_kelvin(), 5778.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    /// Creates a new `Temperature` from a value in Kelvin.
    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    /// Returns the temperature in Kelvin.
    pub fn to_kelvin(&self) -> f64 {
        self.0
    }
}
