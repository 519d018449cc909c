//! Generation preferences
//!
//! Preferences arrive from the host as a flat JSON document with camelCase
//! keys. Every key is optional; missing keys take the defaults below.

use serde::{Deserialize, Serialize};
use stellar::{StarCategory, StarFrequencies, StarFrequencyTable};

use crate::error::{GenerationError, GenerationResult};

/// Inclusive integer range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub low: i32,
    pub high: i32,
}

impl IntRange {
    pub const fn new(low: i32, high: i32) -> Self {
        Self { low, high }
    }
}

/// How the home star's category is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartingSystem {
    /// Drawn from the frequency table like any other star
    Random,
    Category(StarCategory),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    /// Star spacing preset, 1 (dense) to 9 (sparse)
    pub galaxy_density: i32,
    pub default_star_count: usize,
    pub min_star_count: usize,
    pub max_star_count: usize,
    /// Percent chance of a companion star
    pub binary_star_chance: f64,
    /// A star category name or "Random"
    pub starting_system_type: String,
    pub birth_planet_size: i32,
    pub birth_planet_unlock: bool,
    pub birth_planet_si_ti: bool,
    pub no_homeworld_rares: bool,
    pub huge_gas_giants: bool,
    pub more_likely_gas_giant_moons: bool,
    pub moons_are_small: bool,
    pub small_gas_giant_moons: bool,
    pub tidal_lock_inner_planets: bool,
    pub luminosity_boost: bool,
    pub luminosity_exponential_boost: bool,
    pub luminosity_boost_exponent: f64,
    pub realistic_solar_power_levels: bool,
    #[serde(flatten)]
    pub star_frequencies: StarFrequencies,
    pub planet_count: IntRange,
    pub planet_size: IntRange,
    pub count_bias: f64,
    pub size_bias: f64,
    /// Percent chance a new planet is a gas giant
    pub chance_gas: f64,
    /// Percent chance a new body is a moon of the previous planet
    pub chance_moon: f64,
    /// Percent chance each rare vein of a theme is kept
    pub rare_chance: f64,
    pub dream_system: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            galaxy_density: 5,
            default_star_count: 64,
            min_star_count: 16,
            max_star_count: 96,
            binary_star_chance: 25.0,
            starting_system_type: "Random".to_string(),
            birth_planet_size: 200,
            birth_planet_unlock: false,
            birth_planet_si_ti: false,
            no_homeworld_rares: false,
            huge_gas_giants: false,
            more_likely_gas_giant_moons: false,
            moons_are_small: true,
            small_gas_giant_moons: false,
            tidal_lock_inner_planets: false,
            luminosity_boost: false,
            luminosity_exponential_boost: false,
            luminosity_boost_exponent: 1.0,
            realistic_solar_power_levels: false,
            star_frequencies: StarFrequencies::default(),
            planet_count: IntRange::new(4, 6),
            planet_size: IntRange::new(200, 400),
            count_bias: 50.0,
            size_bias: 50.0,
            chance_gas: 20.0,
            chance_moon: 20.0,
            rare_chance: 25.0,
            dream_system: false,
        }
    }
}

impl Preferences {
    /// Parses and validates a preference document
    pub fn from_json(json: &str) -> GenerationResult<Self> {
        let prefs: Preferences = serde_json::from_str(json)?;
        prefs.validate()?;
        Ok(prefs)
    }

    /// Rare veins are globally disabled when their chance is zero
    pub fn rares_disabled(&self) -> bool {
        self.rare_chance <= 0.0
    }

    pub fn starting_system(&self) -> GenerationResult<StartingSystem> {
        if self.starting_system_type.eq_ignore_ascii_case("random") {
            return Ok(StartingSystem::Random);
        }
        Ok(StartingSystem::Category(self.starting_system_type.parse()?))
    }

    /// Checks every preference before any random draw is made
    pub fn validate(&self) -> GenerationResult<()> {
        check_range("planetCount", self.planet_count)?;
        check_range("planetSize", self.planet_size)?;
        if self.planet_count.low < 0 {
            return Err(GenerationError::invalid("planetCount.low must not be negative"));
        }
        if self.planet_size.low < 10 {
            return Err(GenerationError::invalid("planetSize.low must be at least 10"));
        }

        check_percent("countBias", self.count_bias)?;
        check_percent("sizeBias", self.size_bias)?;
        check_percent("chanceGas", self.chance_gas)?;
        check_percent("chanceMoon", self.chance_moon)?;
        check_percent("rareChance", self.rare_chance)?;
        check_percent("binaryStarChance", self.binary_star_chance)?;

        if self.min_star_count == 0 || self.min_star_count > self.max_star_count {
            return Err(GenerationError::invalid(format!(
                "star count bounds {}..{} are invalid",
                self.min_star_count, self.max_star_count
            )));
        }
        if self.birth_planet_size < 10 {
            return Err(GenerationError::invalid("birthPlanetSize must be at least 10"));
        }
        if !self.luminosity_boost_exponent.is_finite() || self.luminosity_boost_exponent <= 0.0 {
            return Err(GenerationError::invalid(
                "luminosityBoostExponent must be a positive number",
            ));
        }

        self.starting_system()?;
        StarFrequencyTable::new(&self.star_frequencies)?;
        Ok(())
    }
}

fn check_range(name: &str, range: IntRange) -> GenerationResult<()> {
    if range.low > range.high {
        return Err(GenerationError::invalid(format!(
            "{} low {} exceeds high {}",
            name, range.low, range.high
        )));
    }
    Ok(())
}

pub(crate) fn check_percent(name: &str, value: f64) -> GenerationResult<()> {
    if !(0.0..=100.0).contains(&value) {
        return Err(GenerationError::invalid(format!(
            "{} must be between 0 and 100, got {}",
            name, value
        )));
    }
    Ok(())
}
