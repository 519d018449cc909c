use planetary::Body;
use serde::{Deserialize, Serialize};

use crate::star::Star;

/// Location of the home body within a cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum BirthSelection {
    Planet {
        star: usize,
        index: usize,
    },
    Moon {
        star: usize,
        planet: usize,
        index: usize,
    },
}

impl BirthSelection {
    pub fn star(&self) -> usize {
        match self {
            BirthSelection::Planet { star, .. } | BirthSelection::Moon { star, .. } => *star,
        }
    }

    /// Index of the planet that is, or hosts, the home body
    pub fn planet(&self) -> usize {
        match self {
            BirthSelection::Planet { index, .. } => *index,
            BirthSelection::Moon { planet, .. } => *planet,
        }
    }

    pub fn is_moon(&self) -> bool {
        matches!(self, BirthSelection::Moon { .. })
    }

    pub fn resolve<'a>(&self, stars: &'a [Star]) -> Option<&'a Body> {
        let star = stars.get(self.star())?;
        let planet = star.planets.get(self.planet())?;
        match self {
            BirthSelection::Planet { .. } => Some(planet),
            BirthSelection::Moon { index, .. } => planet.moons.get(*index),
        }
    }

    pub fn resolve_mut<'a>(&self, stars: &'a mut [Star]) -> Option<&'a mut Body> {
        let star = stars.get_mut(self.star())?;
        let planet = star.planets.get_mut(self.planet())?;
        match self {
            BirthSelection::Planet { .. } => Some(planet),
            BirthSelection::Moon { index, .. } => planet.moons.get_mut(*index),
        }
    }

    /// The planet hosting a home moon
    pub fn host<'a>(&self, stars: &'a [Star]) -> Option<&'a Body> {
        match self {
            BirthSelection::Planet { .. } => None,
            BirthSelection::Moon { star, planet, .. } => stars.get(*star)?.planets.get(*planet),
        }
    }
}
