//! Binary and trinary companions
//!
//! Companions are decorative: each one hands its luminosity to the primary
//! and keeps none for itself. Offsets lie in the XZ plane; the orbit placer
//! keeps planets outside twice the widest separation.

use std::f64::consts::TAU;

use nalgebra::{Rotation3, Vector3};
use star_system::{CompanionStar, Star};
use stellar::{GiantClass, SpectralClass, StarCategory, StarProperties};

use crate::context::GenerationContext;
use crate::naming::companion_name;

/// Multiplier applied to the binary chance for a primary of this category
pub fn companion_chance_factor(category: StarCategory) -> f64 {
    match category {
        StarCategory::MainSequence(SpectralClass::O | SpectralClass::B) => 2.0,
        StarCategory::MainSequence(SpectralClass::A | SpectralClass::F) => 1.5,
        StarCategory::MainSequence(_) => 1.0,
        StarCategory::Giant(_) => 1.5,
        StarCategory::NeutronStar | StarCategory::BlackHole => 0.5,
        StarCategory::WhiteDwarf => 0.0,
    }
}

/// Categories that may accompany a primary, without duplicates
pub fn companion_options(primary: StarCategory) -> Vec<StarCategory> {
    use StarCategory::*;

    let mut options = match primary {
        BlackHole => vec![
            MainSequence(SpectralClass::O),
            MainSequence(SpectralClass::B),
            Giant(GiantClass::Blue),
            NeutronStar,
        ],
        NeutronStar => vec![
            MainSequence(SpectralClass::B),
            MainSequence(SpectralClass::A),
            WhiteDwarf,
            NeutronStar,
        ],
        // never rolled, see companion_chance_factor
        WhiteDwarf => Vec::new(),
        Giant(giant) => vec![
            MainSequence(giant.spectral_class()),
            MainSequence(SpectralClass::K),
            MainSequence(SpectralClass::M),
            WhiteDwarf,
        ],
        MainSequence(class) => class
            .this_and_cooler()
            .iter()
            .map(|c| MainSequence(*c))
            .chain(std::iter::once(WhiteDwarf))
            .collect(),
    };

    let mut seen = Vec::with_capacity(options.len());
    options.retain(|c| {
        if seen.contains(c) {
            false
        } else {
            seen.push(*c);
            true
        }
    });
    options
}

/// Rolls for companions and attaches them to `star`
///
/// Returns `true` when at least one companion was added. Stars that already
/// have companions are left alone.
pub fn maybe_add_companions(ctx: &mut GenerationContext, star: &mut Star, dream_home: bool) -> bool {
    if !star.companions.is_empty() {
        return false;
    }

    let mut chance = ctx.prefs.binary_star_chance / 100.0 * companion_chance_factor(star.category);
    if dream_home {
        chance *= 2.0;
    }
    if !ctx.rng.pick(chance.min(1.0)) {
        return false;
    }

    let options = companion_options(star.category);
    let Some(&first_category) = ctx.rng.item(&options) else {
        return false;
    };

    let mut first = new_companion(star, first_category, 0);
    let separation =
        (star.radius_au() + first.properties.radius.to_au()) * ctx.rng.range_f64(3.0, 5.0)
            + ctx.rng.range_f64(0.1, 0.3);
    first.offset = Vector3::new(separation, 0.0, 0.0);
    donate_luminosity(star, &mut first);
    star.companions.push(first);

    if !first_category.is_remnant() && ctx.rng.pick(0.5) {
        if let Some(&second_category) = ctx.rng.item(&options) {
            let mut second = new_companion(star, second_category, 1);
            let distance = 1.5 * ctx.rng.range_f64(1.2, 1.6) * separation;
            let angle = ctx.rng.range_f64(0.0, TAU);
            let rotation = Rotation3::from_axis_angle(&Vector3::y_axis(), angle);
            second.offset = rotation * Vector3::new(distance, 0.0, 0.0);
            donate_luminosity(star, &mut second);
            star.companions.push(second);
        }
    }

    tracing::debug!(
        "{} ({}) gained {} companion(s)",
        star.name,
        star.category,
        star.companions.len()
    );
    true
}

fn new_companion(primary: &Star, category: StarCategory, index: usize) -> CompanionStar {
    let mut properties = StarProperties::for_category(category);
    if primary.category.is_remnant() {
        // Donors feeding a remnant are swollen
        properties.radius = properties.radius * 1.2;
    } else {
        let cap = primary.properties.radius * 0.8;
        if properties.radius > cap {
            properties.radius = cap;
        }
    }

    CompanionStar {
        name: companion_name(&primary.name, index),
        category,
        properties,
        offset: Vector3::zeros(),
        donated_luminosity: 0.0,
        decorative: true,
    }
}

fn donate_luminosity(primary: &mut Star, companion: &mut CompanionStar) {
    let luminosity = companion.properties.luminosity;
    primary.properties.luminosity += luminosity;
    companion.donated_luminosity = luminosity;
    companion.properties.luminosity = 0.0;
}
