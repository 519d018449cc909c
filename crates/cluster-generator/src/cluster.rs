//! Cluster orchestration

use planetary::ThemeLibrary;
use star_system::{Cluster, ClusterMetadata, Star};
use stellar::{SpectralClass, StarCategory, StarFrequencyTable};

use crate::config::Preferences;
use crate::context::GenerationContext;
use crate::error::{GenerationError, GenerationResult};
use crate::galaxy::params_for_density;
use crate::home::build_home_system;
use crate::multistar::maybe_add_companions;
use crate::naming::star_name;
use crate::system::build_system;

/// Luminosity multipliers for hot stars, chosen so their cube roots are 1.25 and 1.5
const WHITE_STAR_BOOST: f64 = 1.953;
const BLUE_STAR_BOOST: f64 = 3.375;

const BLACK_HOLE_RADIUS_FACTOR: f64 = 0.33;

/// Generate a complete cluster from a seed
///
/// Preferences are validated before any random draw. The star count is
/// clamped to the preferred bounds; the home star is always first.
///
/// # Example
/// ```
/// use cluster_generator::{generate_cluster, Preferences};
/// use planetary::ThemeCatalog;
///
/// let prefs = Preferences::default();
/// let themes = ThemeCatalog::builtin();
/// let cluster = generate_cluster(42, 16, &prefs, &themes).unwrap();
///
/// assert_eq!(cluster.stars.len(), 16);
/// assert!(cluster.birth_body().is_some());
/// ```
pub fn generate_cluster(
    seed: u64,
    star_count: usize,
    prefs: &Preferences,
    themes: &dyn ThemeLibrary,
) -> GenerationResult<Cluster> {
    prefs.validate()?;

    let requested = star_count;
    let star_count = star_count.clamp(prefs.min_star_count, prefs.max_star_count);
    let galaxy = params_for_density(prefs.galaxy_density);
    let frequencies = StarFrequencyTable::new(&prefs.star_frequencies)?;

    tracing::info!("Start cluster generation: seed {} with {} stars", seed, star_count);
    let mut ctx = GenerationContext::new(seed, prefs, themes);

    let (home, birth) = build_home_system(&mut ctx, &frequencies)?;
    let mut stars = Vec::with_capacity(star_count);
    stars.push(home);

    for index in 1..star_count {
        let category = frequencies.draw(&mut ctx.rng);
        let id = ctx.rng.next_id();
        let mut star = Star::new(id, star_name(index), category);

        maybe_add_companions(&mut ctx, &mut star, false);
        build_system(&mut ctx, &mut star)?;
        stars.push(star);
    }

    apply_post_passes(prefs, &mut stars);

    let birth_planet_name = birth
        .resolve(&stars)
        .map(|body| body.name.clone())
        .ok_or_else(|| GenerationError::structural("home selection no longer resolves"))?;

    tracing::info!(
        "End cluster generation: {} stars, {} bodies, home {}",
        stars.len(),
        stars.iter().map(Star::body_count).sum::<usize>(),
        birth_planet_name
    );

    Ok(Cluster {
        metadata: ClusterMetadata::from_seed(seed, requested, star_count),
        galaxy,
        stars,
        birth,
        birth_planet_name,
    })
}

/// Generate a cluster with the preferred default star count
pub fn generate_cluster_default_count(
    seed: u64,
    prefs: &Preferences,
    themes: &dyn ThemeLibrary,
) -> GenerationResult<Cluster> {
    generate_cluster(seed, prefs.default_star_count, prefs, themes)
}

/// Cluster-wide luminosity, power level and radius adjustments
pub fn apply_post_passes(prefs: &Preferences, stars: &mut [Star]) {
    for star in stars.iter_mut() {
        if prefs.luminosity_boost {
            star.properties.luminosity *= luminosity_boost(star.category);
        }

        let luminosity = star.properties.luminosity;
        if prefs.luminosity_exponential_boost && luminosity > 1.0 {
            star.properties.luminosity = luminosity.powf(prefs.luminosity_boost_exponent);
        }

        star.solar_power = if prefs.realistic_solar_power_levels {
            star.properties.luminosity
        } else {
            star.properties.luminosity.cbrt()
        };

        if star.category == StarCategory::BlackHole {
            star.properties.radius = star.properties.radius * BLACK_HOLE_RADIUS_FACTOR;
        }
    }
}

fn luminosity_boost(category: StarCategory) -> f64 {
    match category.spectral_class() {
        Some(SpectralClass::F | SpectralClass::A) => WHITE_STAR_BOOST,
        Some(SpectralClass::B | SpectralClass::O) => BLUE_STAR_BOOST,
        _ => 1.0,
    }
}
