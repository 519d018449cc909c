//! Stars and their decorative companions

use nalgebra::Vector3;
use planetary::Body;
use serde::{Deserialize, Serialize};
use stellar::{StarCategory, StarProperties, StructuralCategory, SystemZones};

/// A companion orbiting a primary star
///
/// Companions are decorative: their luminosity is folded into the primary
/// and they host no bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanionStar {
    pub name: String,
    pub category: StarCategory,
    pub properties: StarProperties,
    /// Offset from the primary in AU
    pub offset: Vector3<f64>,
    /// Luminosity handed to the primary
    pub donated_luminosity: f64,
    pub decorative: bool,
}

impl CompanionStar {
    /// Distance from the primary in AU
    pub fn separation(&self) -> f64 {
        self.offset.norm()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Star {
    pub id: u32,
    pub name: String,
    pub category: StarCategory,
    pub properties: StarProperties,
    pub position: Vector3<f64>,
    pub companions: Vec<CompanionStar>,
    pub planets: Vec<Body>,
    /// Power level reported to the host
    pub solar_power: f64,
}

impl Star {
    /// A star with the default properties of its category and no bodies
    pub fn new(id: u32, name: impl Into<String>, category: StarCategory) -> Self {
        let properties = StarProperties::for_category(category);
        Self {
            id,
            name: name.into(),
            category,
            properties,
            position: Vector3::zeros(),
            companions: Vec::new(),
            planets: Vec::new(),
            solar_power: properties.luminosity,
        }
    }

    pub fn structural(&self) -> StructuralCategory {
        self.category.structural()
    }

    pub fn luminosity(&self) -> f64 {
        self.properties.luminosity
    }

    pub fn radius_au(&self) -> f64 {
        self.properties.radius.to_au()
    }

    /// Climate zones for the current luminosity and category
    pub fn zones(&self) -> SystemZones {
        SystemZones::new(self.luminosity(), self.category)
    }

    /// Luminosity received from companions so far
    pub fn donated_luminosity(&self) -> f64 {
        self.companions.iter().map(|c| c.donated_luminosity).sum()
    }

    /// Largest companion distance in AU, zero without companions
    pub fn max_companion_separation(&self) -> f64 {
        self.companions
            .iter()
            .map(CompanionStar::separation)
            .fold(0.0, f64::max)
    }

    /// Changes category and resets properties to its defaults, keeping any
    /// luminosity companions have donated
    pub fn reset_category(&mut self, category: StarCategory) {
        self.category = category;
        self.properties = StarProperties::for_category(category);
        self.properties.luminosity += self.donated_luminosity();
    }

    /// Every planet followed by its moons, in placement order
    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.planets.iter().flat_map(|p| p.bodies())
    }

    pub fn body_count(&self) -> usize {
        self.bodies().count()
    }

    pub fn telluric_body_count(&self) -> usize {
        self.bodies().filter(|b| b.is_telluric()).count()
    }

    pub fn has_gas_giant(&self) -> bool {
        self.bodies().any(|b| b.is_gas_giant())
    }
}
