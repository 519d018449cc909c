use planetary::Body;
use serde::{Deserialize, Serialize};

use crate::birth::BirthSelection;
use crate::metadata::ClusterMetadata;
use crate::star::Star;

/// Spacing parameters handed to the host's galaxy layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalaxyParams {
    pub min_distance: f64,
    pub min_step_length: f64,
    pub max_step_length: f64,
    pub graph_distance: u32,
    pub graph_max_stars: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub metadata: ClusterMetadata,
    pub galaxy: GalaxyParams,
    /// Home star first
    pub stars: Vec<Star>,
    pub birth: BirthSelection,
    pub birth_planet_name: String,
}

impl Cluster {
    pub fn birth_star(&self) -> Option<&Star> {
        self.stars.get(self.birth.star())
    }

    pub fn birth_body(&self) -> Option<&Body> {
        self.birth.resolve(&self.stars)
    }

    pub fn body_count(&self) -> usize {
        self.stars.iter().map(Star::body_count).sum()
    }
}
