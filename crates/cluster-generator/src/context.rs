use planetary::ThemeLibrary;
use stellar::SeededRng;

use crate::config::Preferences;

/// State shared by every pass of one generation run
pub struct GenerationContext<'a> {
    pub rng: SeededRng,
    pub prefs: &'a Preferences,
    pub themes: &'a dyn ThemeLibrary,
}

impl<'a> GenerationContext<'a> {
    pub fn new(seed: u64, prefs: &'a Preferences, themes: &'a dyn ThemeLibrary) -> Self {
        Self {
            rng: SeededRng::new(seed),
            prefs,
            themes,
        }
    }

    /// Draws against a percentage chance
    pub fn chance(&mut self, percent: f64) -> bool {
        self.rng.pick(percent / 100.0)
    }
}
