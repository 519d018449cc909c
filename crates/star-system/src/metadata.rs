//! Cluster metadata for provenance and identification.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name and version of the generator recorded on every cluster
pub const GENERATOR_NAME: &str = "Vanilla++";
pub const GENERATOR_VERSION: &str = "0.0.8";

/// Metadata about cluster generation and identification
///
/// The UUID is derived from the seed, so the same seed always yields the same
/// identifier and catalog name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterMetadata {
    pub id: Uuid,
    pub seed: u64,
    pub generator: String,
    pub version: String,
    /// Star count passed by the caller, before clamping
    pub requested_star_count: usize,
    /// Star count actually generated
    pub star_count: usize,
}

impl ClusterMetadata {
    /// # Example
    /// ```
    /// use star_system::ClusterMetadata;
    ///
    /// let a = ClusterMetadata::from_seed(42, 10, 16);
    /// let b = ClusterMetadata::from_seed(42, 10, 16);
    /// assert_eq!(a.id, b.id);
    /// assert_eq!(a.catalog_name(), b.catalog_name());
    /// ```
    pub fn from_seed(seed: u64, requested_star_count: usize, star_count: usize) -> Self {
        let name = format!("{}-{}", GENERATOR_NAME, seed);
        Self {
            id: Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()),
            seed,
            generator: GENERATOR_NAME.to_string(),
            version: GENERATOR_VERSION.to_string(),
            requested_star_count,
            star_count,
        }
    }

    /// Short catalog designation from the UUID
    ///
    /// Format: two uppercase letters and four digits, e.g. "KV-4729".
    pub fn catalog_name(&self) -> String {
        let bytes = self.id.as_bytes();
        let prefix1 = (bytes[0] % 26 + b'A') as char;
        let prefix2 = (bytes[1] % 26 + b'A') as char;
        let number = u16::from_le_bytes([bytes[2], bytes[3]]) % 10000;
        format!("{}{}-{:04}", prefix1, prefix2, number)
    }
}
