use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sampling::SeededRng;
use crate::spectral::{GiantClass, SpectralClass, StarCategory};

/// Relative weight of each star category in a cluster
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarFrequencies {
    #[serde(rename = "freqK")]
    pub k: f64,
    #[serde(rename = "freqM")]
    pub m: f64,
    #[serde(rename = "freqG")]
    pub g: f64,
    #[serde(rename = "freqF")]
    pub f: f64,
    #[serde(rename = "freqA")]
    pub a: f64,
    #[serde(rename = "freqB")]
    pub b: f64,
    #[serde(rename = "freqO")]
    pub o: f64,
    #[serde(rename = "freqBH")]
    pub black_hole: f64,
    #[serde(rename = "freqN")]
    pub neutron_star: f64,
    #[serde(rename = "freqW")]
    pub white_dwarf: f64,
    #[serde(rename = "freqRG")]
    pub red_giant: f64,
    #[serde(rename = "freqYG")]
    pub yellow_giant: f64,
    #[serde(rename = "freqWG")]
    pub white_giant: f64,
    #[serde(rename = "freqBG")]
    pub blue_giant: f64,
}

impl Default for StarFrequencies {
    fn default() -> Self {
        Self {
            k: 40.0,
            m: 50.0,
            g: 30.0,
            f: 25.0,
            a: 10.0,
            b: 4.0,
            o: 2.0,
            black_hole: 1.0,
            neutron_star: 1.0,
            white_dwarf: 2.0,
            red_giant: 1.0,
            yellow_giant: 1.0,
            white_giant: 1.0,
            blue_giant: 1.0,
        }
    }
}

impl StarFrequencies {
    /// All weights zero; useful as a base for restricted clusters
    pub fn none() -> Self {
        Self {
            k: 0.0,
            m: 0.0,
            g: 0.0,
            f: 0.0,
            a: 0.0,
            b: 0.0,
            o: 0.0,
            black_hole: 0.0,
            neutron_star: 0.0,
            white_dwarf: 0.0,
            red_giant: 0.0,
            yellow_giant: 0.0,
            white_giant: 0.0,
            blue_giant: 0.0,
        }
    }

    /// Weights paired with their categories in canonical table order
    ///
    /// The order is K, M, G, F, A, B, O, BH, N, W, RG, YG, WG, BG.
    pub fn entries(&self) -> [(StarCategory, f64); 14] {
        [
            (StarCategory::MainSequence(SpectralClass::K), self.k),
            (StarCategory::MainSequence(SpectralClass::M), self.m),
            (StarCategory::MainSequence(SpectralClass::G), self.g),
            (StarCategory::MainSequence(SpectralClass::F), self.f),
            (StarCategory::MainSequence(SpectralClass::A), self.a),
            (StarCategory::MainSequence(SpectralClass::B), self.b),
            (StarCategory::MainSequence(SpectralClass::O), self.o),
            (StarCategory::BlackHole, self.black_hole),
            (StarCategory::NeutronStar, self.neutron_star),
            (StarCategory::WhiteDwarf, self.white_dwarf),
            (StarCategory::Giant(GiantClass::Red), self.red_giant),
            (StarCategory::Giant(GiantClass::Yellow), self.yellow_giant),
            (StarCategory::Giant(GiantClass::White), self.white_giant),
            (StarCategory::Giant(GiantClass::Blue), self.blue_giant),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrequencyError {
    #[error("star frequency for {category} must be finite and non-negative, got {weight}")]
    InvalidWeight { category: StarCategory, weight: f64 },
    #[error("star frequencies sum to zero")]
    ZeroTotal,
}

/// Cumulative probability table used to draw star categories
#[derive(Debug, Clone, PartialEq)]
pub struct StarFrequencyTable {
    cumulative: Vec<(StarCategory, f64)>,
    probabilities: Vec<(StarCategory, f64)>,
}

impl StarFrequencyTable {
    pub fn new(frequencies: &StarFrequencies) -> Result<Self, FrequencyError> {
        let entries = frequencies.entries();

        for (category, weight) in entries {
            if !weight.is_finite() || weight < 0.0 {
                return Err(FrequencyError::InvalidWeight { category, weight });
            }
        }

        let total: f64 = entries.iter().map(|(_, w)| w).sum();
        if total <= 0.0 || !total.is_finite() {
            return Err(FrequencyError::ZeroTotal);
        }

        let probabilities: Vec<(StarCategory, f64)> =
            entries.iter().map(|(c, w)| (*c, w / total)).collect();

        let mut running = 0.0;
        let cumulative = probabilities
            .iter()
            .map(|(c, p)| {
                running += p;
                (*c, running)
            })
            .collect();

        Ok(Self {
            cumulative,
            probabilities,
        })
    }

    /// Normalized probability per category, in canonical order
    pub fn probabilities(&self) -> &[(StarCategory, f64)] {
        &self.probabilities
    }

    pub fn probability_of(&self, category: StarCategory) -> f64 {
        self.probabilities
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, p)| *p)
            .unwrap_or(0.0)
    }

    /// Draws one category using a single uniform sample
    pub fn draw(&self, rng: &mut SeededRng) -> StarCategory {
        self.category_for(rng.next_f64())
    }

    /// Category selected by a uniform value in `[0, 1)`
    ///
    /// Round-off that leaves `u` past the final cumulative entry resolves to
    /// the last category with a nonzero weight.
    pub fn category_for(&self, u: f64) -> StarCategory {
        for (category, cumulative) in &self.cumulative {
            if u < *cumulative {
                return *category;
            }
        }

        self.probabilities
            .iter()
            .rev()
            .find(|(_, p)| *p > 0.0)
            .map(|(c, _)| *c)
            .unwrap_or(StarCategory::DEFAULT_HOME)
    }
}
