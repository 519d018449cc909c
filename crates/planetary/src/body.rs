//! Planets and moons
//!
//! A [`Body`] is either a planet owned by a star or a moon owned by a planet.
//! Moons never own moons.

use serde::{Deserialize, Serialize};
use units::{Length, Time};

use crate::veins::{Vein, VeinKind};

/// Sizes are expressed in steps of this many size units
pub const SIZE_STEP: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    Telluric,
    GasGiant,
}

impl BodyKind {
    /// Multiplier between the stored radius and the rendered radius
    pub fn scale(self) -> f64 {
        match self {
            BodyKind::Telluric => 1.0,
            BodyKind::GasGiant => 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    pub name: String,
    /// Radius in size units before scaling
    pub radius: i32,
    pub kind: BodyKind,
    /// Distance from the parent in AU, `None` until placed
    pub orbit_radius: Option<f64>,
    pub orbital_period: Time,
    pub rotation_period: Time,
    /// Degrees
    pub rotation_phase: f64,
    /// Degrees
    pub orbit_inclination: f64,
    /// Degrees
    pub orbit_phase: f64,
    /// Degrees
    pub obliquity: f64,
    /// Orbits clockwise
    pub retrograde: bool,
    pub theme: Option<String>,
    pub habitable: bool,
    pub veins: Vec<Vein>,
    pub moons: Vec<Body>,
}

impl Body {
    pub fn new(name: impl Into<String>, radius: i32, kind: BodyKind) -> Self {
        Self {
            name: name.into(),
            radius,
            kind,
            orbit_radius: None,
            orbital_period: Time::zero(),
            rotation_period: Time::zero(),
            rotation_phase: 0.0,
            orbit_inclination: 0.0,
            orbit_phase: 0.0,
            obliquity: 0.0,
            retrograde: false,
            theme: None,
            habitable: false,
            veins: Vec::new(),
            moons: Vec::new(),
        }
    }

    pub fn telluric(name: impl Into<String>, radius: i32) -> Self {
        Self::new(name, radius, BodyKind::Telluric)
    }

    pub fn gas_giant(name: impl Into<String>, radius: i32) -> Self {
        Self::new(name, radius, BodyKind::GasGiant)
    }

    pub fn is_gas_giant(&self) -> bool {
        self.kind == BodyKind::GasGiant
    }

    pub fn is_telluric(&self) -> bool {
        self.kind == BodyKind::Telluric
    }

    pub fn scale(&self) -> f64 {
        self.kind.scale()
    }

    /// Radius after applying the kind's scale, in size units
    pub fn true_radius(&self) -> f64 {
        self.radius as f64 * self.scale()
    }

    /// Physical radius as a distance
    pub fn radius_length(&self) -> Length {
        Length::from_game_meters(self.true_radius())
    }

    pub fn radius_au(&self) -> f64 {
        self.radius_length().to_au()
    }

    pub fn orbit(&self) -> f64 {
        self.orbit_radius.unwrap_or(0.0)
    }

    /// Extent of the body together with its moons, in AU
    ///
    /// Uses the outermost moon's orbit plus that moon's radius, or the body's
    /// own radius when it has no placed moons.
    pub fn system_radius(&self) -> f64 {
        match self.moons.last() {
            Some(moon) if moon.orbit_radius.is_some() => moon.orbit() + moon.radius_au(),
            _ => self.radius_au(),
        }
    }

    pub fn has_vein(&self, kind: VeinKind) -> bool {
        self.veins.iter().any(|v| v.kind == kind)
    }

    /// Adds a vein unless one of the same kind and tier is already present
    pub fn add_vein(&mut self, vein: Vein) {
        if !self.veins.contains(&vein) {
            self.veins.push(vein);
        }
    }

    pub fn strip_rare_veins(&mut self) {
        self.veins.retain(|v| !v.is_rare());
    }

    /// This body followed by its moons
    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        std::iter::once(self).chain(self.moons.iter())
    }

    pub fn first_telluric_moon(&self) -> Option<usize> {
        self.moons.iter().position(|m| m.is_telluric())
    }
}
