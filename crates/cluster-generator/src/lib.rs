//! Deterministic star-cluster generation
//!
//! Builds a cluster of stars, companions, planets and moons from a seed and a
//! set of [`Preferences`]. The first star is the curated home system.

pub mod bodies;
pub mod cluster;
pub mod config;
pub mod context;
pub mod error;
pub mod galaxy;
pub mod home;
pub mod multistar;
pub mod naming;
pub mod orbits;
pub mod sampling;
pub mod surface;
pub mod system;

// Re-export main generation functions
pub use cluster::{apply_post_passes, generate_cluster, generate_cluster_default_count};
pub use config::{IntRange, Preferences, StartingSystem};
pub use context::GenerationContext;
pub use error::{GenerationError, GenerationResult};
pub use home::{build_home_system, find_birth};
pub use multistar::maybe_add_companions;
pub use orbits::place_orbits;
pub use sampling::{sample_biased, sample_size};
pub use system::build_system;

// Re-export output types for convenience
pub use star_system::{BirthSelection, Cluster, ClusterMetadata, CompanionStar, GalaxyParams, Star};

#[cfg(test)]
mod config_test;
#[cfg(test)]
mod galaxy_test;
#[cfg(test)]
mod naming_test;
#[cfg(test)]
mod orbits_test;
#[cfg(test)]
mod surface_test;
