//! Mineral veins a body can carry

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VeinKind {
    Iron,
    Copper,
    Silicon,
    Titanium,
    Stone,
    Coal,
    Oil,
    FireIce,
    Kimberlite,
    FractalSilicon,
    OrganicCrystal,
    OpticalGrating,
    SpiniformStalagmite,
    UnipolarMagnet,
}

/// Abundance tier; rare veins are subject to the cluster's rare chance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VeinTier {
    Common,
    Rare,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vein {
    pub kind: VeinKind,
    pub tier: VeinTier,
}

impl Vein {
    pub const fn common(kind: VeinKind) -> Self {
        Self {
            kind,
            tier: VeinTier::Common,
        }
    }

    pub const fn rare(kind: VeinKind) -> Self {
        Self {
            kind,
            tier: VeinTier::Rare,
        }
    }

    pub fn is_rare(&self) -> bool {
        self.tier == VeinTier::Rare
    }
}
