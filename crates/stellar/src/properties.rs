//! Default physical properties for each star category.
//!
//! Values are game-scale defaults rather than fits to observed stars; they
//! keep the relative ordering of real stellar types (O brightest and largest on
//! the main sequence, remnants tiny) so zone and orbit formulas behave sensibly.

use serde::{Deserialize, Serialize};
use units::{Length, Mass, Temperature, Time};

use crate::color::StellarColor;
use crate::spectral::{GiantClass, SpectralClass, StarCategory};

/// Physical scalars of a star
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarProperties {
    pub radius: Length,
    /// Luminosity in solar luminosities (L☉)
    pub luminosity: f64,
    pub mass: Mass,
    pub age: Time,
    pub temperature: Temperature,
    pub color: StellarColor,
}

/// (radius R☉, luminosity L☉, mass M☉, age Gyr, temperature K)
type DefaultRow = (f64, f64, f64, f64, f64);

fn default_row(category: StarCategory) -> DefaultRow {
    match category {
        StarCategory::MainSequence(class) => match class {
            SpectralClass::O => (6.6, 9.5, 25.0, 0.01, 35_000.0),
            SpectralClass::B => (4.0, 3.5, 6.0, 0.1, 20_000.0),
            SpectralClass::A => (1.8, 1.6, 2.0, 0.5, 8_500.0),
            SpectralClass::F => (1.3, 1.2, 1.3, 2.0, 6_500.0),
            SpectralClass::G => (1.0, 1.0, 1.0, 4.6, 5_778.0),
            SpectralClass::K => (0.8, 0.78, 0.7, 6.0, 4_500.0),
            SpectralClass::M => (0.4, 0.43, 0.3, 8.0, 3_200.0),
        },
        StarCategory::Giant(giant) => match giant {
            GiantClass::Red => (30.0, 12.0, 1.2, 9.0, 3_600.0),
            GiantClass::Yellow => (20.0, 18.0, 2.0, 1.5, 5_200.0),
            GiantClass::White => (12.0, 30.0, 4.0, 0.3, 8_000.0),
            GiantClass::Blue => (10.0, 60.0, 12.0, 0.05, 20_000.0),
        },
        StarCategory::WhiteDwarf => (0.013, 0.04, 0.6, 10.0, 15_000.0),
        StarCategory::NeutronStar => (0.000_02, 0.05, 1.4, 1.0, 600_000.0),
        StarCategory::BlackHole => (0.000_04, 0.01, 10.0, 1.0, 0.0),
    }
}

impl StarProperties {
    /// Deterministic defaults for a category
    ///
    /// # Example
    /// ```
    /// use stellar::{StarCategory, StarProperties};
    ///
    /// let sun = StarProperties::for_category(StarCategory::DEFAULT_HOME);
    /// assert_eq!(sun.luminosity, 1.0);
    /// assert_eq!(sun.temperature.to_kelvin(), 5778.0);
    /// ```
    pub fn for_category(category: StarCategory) -> Self {
        let (radius, luminosity, mass, age, temperature) = default_row(category);
        let color = match category {
            StarCategory::BlackHole => StellarColor::new(0, 0, 0),
            _ => StellarColor::from_temperature(temperature),
        };

        Self {
            radius: Length::from_solar_radii(radius),
            luminosity,
            mass: Mass::from_solar_masses(mass),
            age: Time::from_gyr(age),
            temperature: Temperature::from_kelvin(temperature),
            color,
        }
    }
}
