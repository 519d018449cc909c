//! Cluster output types
//!
//! This crate defines what a generated cluster looks like: stars with their
//! companions and bodies, the home-body selection and provenance metadata.

pub mod birth;
pub mod cluster;
pub mod metadata;
pub mod star;

pub use birth::BirthSelection;
pub use cluster::{Cluster, GalaxyParams};
pub use metadata::ClusterMetadata;
pub use star::{CompanionStar, Star};

// Re-export body types for convenience
pub use planetary::{Body, BodyKind};

#[cfg(test)]
mod birth_test;
