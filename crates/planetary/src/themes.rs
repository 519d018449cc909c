//! Surface themes and the lookup used to assign them
//!
//! A theme bundles a surface look with the veins it carries. The generator only
//! depends on the [`ThemeLibrary`] trait; [`ThemeCatalog::builtin`] provides a
//! small catalog so clusters can be generated without a host-supplied library.

use serde::{Deserialize, Serialize};
use stellar::{HeatZone, SeededRng};
use thiserror::Error;

use crate::veins::{Vein, VeinKind};

/// Which slot a theme is requested for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeKind {
    Planet,
    Gas,
    Moon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub key: String,
    pub kinds: Vec<ThemeKind>,
    pub heats: Vec<HeatZone>,
    pub min_radius: i32,
    pub max_radius: i32,
    pub habitable: bool,
    pub veins: Vec<Vein>,
}

impl Theme {
    pub fn is_gas(&self) -> bool {
        self.kinds.contains(&ThemeKind::Gas)
    }

    pub fn fits_radius(&self, radius: i32) -> bool {
        (self.min_radius..=self.max_radius).contains(&radius)
    }

    pub fn carries(&self, kind: VeinKind) -> bool {
        self.veins.iter().any(|v| v.kind == kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("unknown theme '{0}'")]
    UnknownTheme(String),
    #[error("no theme available for {0:?} bodies")]
    NoCandidates(ThemeKind),
}

/// Lookup of surface themes by slot, climate and size
pub trait ThemeLibrary {
    /// Picks a theme key for a body
    ///
    /// Implementations should prefer themes matching all three criteria and
    /// relax size, then heat, before failing.
    fn query(
        &self,
        rng: &mut SeededRng,
        kind: ThemeKind,
        heat: HeatZone,
        radius: i32,
    ) -> Result<String, ThemeError>;

    fn theme(&self, key: &str) -> Option<&Theme>;

    /// Keys of every theme a home planet may use
    fn habitable_keys(&self) -> Vec<String>;
}

/// In-memory theme library
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeCatalog {
    themes: Vec<Theme>,
}

impl ThemeCatalog {
    pub fn new(themes: Vec<Theme>) -> Self {
        Self { themes }
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    /// Replaces a theme with the same key, or appends it
    pub fn insert(&mut self, theme: Theme) {
        match self.themes.iter_mut().find(|t| t.key == theme.key) {
            Some(existing) => *existing = theme,
            None => self.themes.push(theme),
        }
    }

    pub fn builtin() -> Self {
        use HeatZone::*;
        use ThemeKind::*;
        use VeinKind::*;

        let c = Vein::common;
        let r = Vein::rare;

        let themes = vec![
            theme("Mediterranean", &[Planet, Moon], &[Temperate], 50, 510, true)
                .with_veins(vec![c(Iron), c(Copper), c(Stone), c(Coal), r(OpticalGrating)]),
            theme("OceanicJungle", &[Planet, Moon], &[Warm, Temperate], 50, 510, true)
                .with_veins(vec![c(Iron), c(Copper), c(Stone), c(Coal), c(Oil), r(OrganicCrystal)]),
            theme("OceanWorld", &[Planet, Moon], &[Temperate, Cold], 50, 510, true)
                .with_veins(vec![c(Iron), c(Stone), c(Oil), r(FireIce)]),
            theme("RedStone", &[Planet, Moon], &[Warm, Temperate], 50, 510, true)
                .with_veins(vec![c(Iron), c(Copper), c(Silicon), c(Stone), r(Kimberlite)]),
            theme("Prairie", &[Planet, Moon], &[Temperate], 50, 510, true)
                .with_veins(vec![c(Iron), c(Copper), c(Stone), c(Coal), r(SpiniformStalagmite)]),
            theme("Gobi", &[Planet, Moon], &[Warm, Temperate], 50, 510, false)
                .with_veins(vec![c(Iron), c(Copper), c(Silicon), c(Stone), r(FractalSilicon)]),
            theme("Lava", &[Planet, Moon], &[Hot], 30, 510, false)
                .with_veins(vec![c(Iron), c(Copper), c(Silicon), c(Titanium), c(Stone), r(Kimberlite)]),
            theme("VolcanicAsh", &[Planet, Moon], &[Hot, Warm], 50, 510, false)
                .with_veins(vec![c(Iron), c(Copper), c(Stone), c(Coal), r(OpticalGrating), r(FireIce)]),
            theme("Barren", &[Planet, Moon], &[Hot, Warm, Temperate, Cold, Frozen], 10, 510, false)
                .with_veins(vec![c(Iron), c(Stone), r(Titanium), r(UnipolarMagnet)]),
            theme("IceGelisol", &[Planet, Moon], &[Cold, Frozen], 30, 510, false)
                .with_veins(vec![c(Iron), c(Copper), c(Silicon), c(Stone), r(FireIce), r(FractalSilicon)]),
            theme("AshenGelisol", &[Planet, Moon], &[Cold, Frozen], 30, 510, false)
                .with_veins(vec![c(Iron), c(Titanium), c(Stone), r(Kimberlite), r(UnipolarMagnet)]),
            theme("FrozenTundra", &[Planet, Moon], &[Frozen], 50, 510, false)
                .with_veins(vec![c(Iron), c(Copper), c(Stone), r(SpiniformStalagmite)]),
            theme("GasGiant", &[Gas], &[Hot, Warm, Temperate], 80, 160, false),
            theme("GasGiant2", &[Gas], &[Hot, Warm, Temperate], 80, 160, false),
            theme("IceGiant", &[Gas], &[Cold, Frozen], 80, 160, false),
            theme("IceGiant2", &[Gas], &[Cold, Frozen], 80, 160, false),
        ];

        Self::new(themes)
    }

    fn candidates<'a>(
        &'a self,
        kind: ThemeKind,
        heat: Option<HeatZone>,
        radius: Option<i32>,
    ) -> Vec<&'a Theme> {
        self.themes
            .iter()
            .filter(|t| t.kinds.contains(&kind))
            .filter(|t| heat.is_none_or(|h| t.heats.contains(&h)))
            .filter(|t| radius.is_none_or(|r| t.fits_radius(r)))
            .collect()
    }
}

fn theme(
    key: &str,
    kinds: &[ThemeKind],
    heats: &[HeatZone],
    min_radius: i32,
    max_radius: i32,
    habitable: bool,
) -> Theme {
    Theme {
        key: key.to_string(),
        kinds: kinds.to_vec(),
        heats: heats.to_vec(),
        min_radius,
        max_radius,
        habitable,
        veins: Vec::new(),
    }
}

impl Theme {
    fn with_veins(mut self, veins: Vec<Vein>) -> Self {
        self.veins = veins;
        self
    }
}

impl ThemeLibrary for ThemeCatalog {
    fn query(
        &self,
        rng: &mut SeededRng,
        kind: ThemeKind,
        heat: HeatZone,
        radius: i32,
    ) -> Result<String, ThemeError> {
        let attempts = [
            (Some(heat), Some(radius)),
            (Some(heat), None),
            (None, None),
        ];

        for (heat, radius) in attempts {
            let candidates = self.candidates(kind, heat, radius);
            if let Some(chosen) = rng.item(&candidates) {
                return Ok(chosen.key.clone());
            }
        }

        Err(ThemeError::NoCandidates(kind))
    }

    fn theme(&self, key: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.key == key)
    }

    fn habitable_keys(&self) -> Vec<String> {
        self.themes
            .iter()
            .filter(|t| t.habitable)
            .map(|t| t.key.clone())
            .collect()
    }
}
