use serde::{Deserialize, Serialize};

use crate::spectral::{StarCategory, StructuralCategory};

/// Flux divisors for the warm, temperate, cold and frozen edges
const EDGE_DIVISORS: [f64; 4] = [2.5, 1.1, 0.53, 0.3];

/// Minimum edge distances (AU) around stellar remnants
const REMNANT_FLOORS: [f64; 4] = [0.15, 0.25, 0.45, 0.7];

/// Climate band of an orbit, hottest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HeatZone {
    Hot,
    Warm,
    Temperate,
    Cold,
    Frozen,
}

/// Orbital distances (AU) at which a system changes climate band
///
/// Derived purely from luminosity and category; recompute it whenever either
/// changes instead of storing it on the star.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemZones {
    pub warm_edge: f64,
    pub temperate_edge: f64,
    pub cold_edge: f64,
    pub frozen_edge: f64,
}

impl SystemZones {
    pub fn new(luminosity: f64, category: StarCategory) -> Self {
        let luminosity = luminosity.max(0.0);
        let structural = category.structural();

        let multiplier = match structural {
            StructuralCategory::Giant => (6.25 - luminosity.powf(0.25)).max(1.0),
            _ => 1.0,
        };

        let edge = |i: usize| {
            let distance = multiplier * (luminosity / EDGE_DIVISORS[i]).sqrt();
            match structural {
                StructuralCategory::Remnant => distance.max(REMNANT_FLOORS[i]),
                _ => distance,
            }
        };

        Self {
            warm_edge: edge(0),
            temperate_edge: edge(1),
            cold_edge: edge(2),
            frozen_edge: edge(3),
        }
    }

    /// Width of the temperate band, used to space planets around giants
    pub fn temperate_span(&self) -> f64 {
        self.cold_edge - self.temperate_edge
    }

    pub fn heat_at(&self, orbit_radius: f64) -> HeatZone {
        if orbit_radius < self.warm_edge {
            HeatZone::Hot
        } else if orbit_radius < self.temperate_edge {
            HeatZone::Warm
        } else if orbit_radius < self.cold_edge {
            HeatZone::Temperate
        } else if orbit_radius < self.frozen_edge {
            HeatZone::Cold
        } else {
            HeatZone::Frozen
        }
    }
}
