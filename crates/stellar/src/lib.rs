//! Star categories, default stellar properties and the seeded sampling used
//! to populate a cluster.

pub mod color;
pub mod frequency;
pub mod properties;
pub mod sampling;
pub mod spectral;
pub mod zones;

#[cfg(test)]
mod properties_test;
#[cfg(test)]
mod stellar_color_test;

pub use color::StellarColor;
pub use frequency::{FrequencyError, StarFrequencies, StarFrequencyTable};
pub use properties::StarProperties;
pub use sampling::SeededRng;
pub use spectral::{GiantClass, ParseCategoryError, SpectralClass, StarCategory, StructuralCategory};
pub use zones::{HeatZone, SystemZones};
