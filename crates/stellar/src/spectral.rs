use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main-sequence spectral classes, hottest first
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpectralClass {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

impl SpectralClass {
    /// All classes ordered from hottest to coolest
    pub const ALL: [SpectralClass; 7] = [
        SpectralClass::O,
        SpectralClass::B,
        SpectralClass::A,
        SpectralClass::F,
        SpectralClass::G,
        SpectralClass::K,
        SpectralClass::M,
    ];

    /// This class and every cooler class
    pub fn this_and_cooler(self) -> &'static [SpectralClass] {
        let index = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        &Self::ALL[index..]
    }
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SpectralClass::O => "O",
            SpectralClass::B => "B",
            SpectralClass::A => "A",
            SpectralClass::F => "F",
            SpectralClass::G => "G",
            SpectralClass::K => "K",
            SpectralClass::M => "M",
        };
        write!(f, "{}", str)
    }
}

/// Evolved giant sub-classes, named after their apparent color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GiantClass {
    Red,
    Yellow,
    White,
    Blue,
}

impl GiantClass {
    /// Spectral class a giant of this color is filed under
    pub fn spectral_class(self) -> SpectralClass {
        match self {
            GiantClass::Red => SpectralClass::M,
            GiantClass::Yellow => SpectralClass::G,
            GiantClass::White => SpectralClass::A,
            GiantClass::Blue => SpectralClass::B,
        }
    }
}

/// Coarse structural category used by zone and orbit formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructuralCategory {
    MainSequence,
    Giant,
    Remnant,
}

/// Every kind of star the cluster can contain
///
/// Remnants carry no spectral class; the other variants expose one through
/// [`StarCategory::spectral_class`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StarCategory {
    MainSequence(SpectralClass),
    Giant(GiantClass),
    WhiteDwarf,
    NeutronStar,
    BlackHole,
}

impl StarCategory {
    /// Default home-star category used whenever a viable star is required
    pub const DEFAULT_HOME: StarCategory = StarCategory::MainSequence(SpectralClass::G);

    pub fn structural(&self) -> StructuralCategory {
        match self {
            StarCategory::MainSequence(_) => StructuralCategory::MainSequence,
            StarCategory::Giant(_) => StructuralCategory::Giant,
            StarCategory::WhiteDwarf | StarCategory::NeutronStar | StarCategory::BlackHole => {
                StructuralCategory::Remnant
            }
        }
    }

    pub fn spectral_class(&self) -> Option<SpectralClass> {
        match self {
            StarCategory::MainSequence(class) => Some(*class),
            StarCategory::Giant(giant) => Some(giant.spectral_class()),
            _ => None,
        }
    }

    pub fn is_remnant(&self) -> bool {
        self.structural() == StructuralCategory::Remnant
    }

    pub fn is_giant(&self) -> bool {
        self.structural() == StructuralCategory::Giant
    }
}

impl fmt::Display for StarCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StarCategory::MainSequence(class) => write!(f, "{}", class),
            StarCategory::Giant(GiantClass::Red) => write!(f, "RedGiant"),
            StarCategory::Giant(GiantClass::Yellow) => write!(f, "YellowGiant"),
            StarCategory::Giant(GiantClass::White) => write!(f, "WhiteGiant"),
            StarCategory::Giant(GiantClass::Blue) => write!(f, "BlueGiant"),
            StarCategory::WhiteDwarf => write!(f, "WhiteDwarf"),
            StarCategory::NeutronStar => write!(f, "NeutronStar"),
            StarCategory::BlackHole => write!(f, "BlackHole"),
        }
    }
}

/// Returned when a category name does not match any known star category
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown star category '{0}'")]
pub struct ParseCategoryError(pub String);

impl FromStr for StarCategory {
    type Err = ParseCategoryError;

    /// Parses the names produced by `Display` (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let category = match s.trim().to_ascii_lowercase().as_str() {
            "o" => StarCategory::MainSequence(SpectralClass::O),
            "b" => StarCategory::MainSequence(SpectralClass::B),
            "a" => StarCategory::MainSequence(SpectralClass::A),
            "f" => StarCategory::MainSequence(SpectralClass::F),
            "g" => StarCategory::MainSequence(SpectralClass::G),
            "k" => StarCategory::MainSequence(SpectralClass::K),
            "m" => StarCategory::MainSequence(SpectralClass::M),
            "redgiant" => StarCategory::Giant(GiantClass::Red),
            "yellowgiant" => StarCategory::Giant(GiantClass::Yellow),
            "whitegiant" => StarCategory::Giant(GiantClass::White),
            "bluegiant" => StarCategory::Giant(GiantClass::Blue),
            "whitedwarf" => StarCategory::WhiteDwarf,
            "neutronstar" => StarCategory::NeutronStar,
            "blackhole" => StarCategory::BlackHole,
            _ => return Err(ParseCategoryError(s.to_string())),
        };
        Ok(category)
    }
}
