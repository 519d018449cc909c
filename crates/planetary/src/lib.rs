//! Planets, moons and their surfaces
//!
//! This crate holds the body data model shared by the star-system crates,
//! the orbital period formulas and the theme library used to dress bodies.

pub mod body;
pub mod orbit;
pub mod themes;
pub mod veins;

pub use body::{Body, BodyKind, SIZE_STEP};
pub use orbit::{orbital_period, orbital_period_from_star_mass};
pub use themes::{Theme, ThemeCatalog, ThemeError, ThemeKind, ThemeLibrary};
pub use veins::{Vein, VeinKind, VeinTier};

#[cfg(test)]
mod orbit_test;
