//! Home system construction
//!
//! The home star is built first and then curated so that the player always
//! starts next to a habitable body, a gas giant and a titanium source.

pub mod birth;
pub mod curator;
pub mod dream;

use star_system::{BirthSelection, Star};
use stellar::{StarCategory, StarFrequencyTable};

use crate::config::StartingSystem;
use crate::context::GenerationContext;
use crate::error::GenerationResult;
use crate::multistar::maybe_add_companions;
use crate::naming::star_name;
use crate::system::build_system;

pub use birth::find_birth;

/// Category of the home star before curation
pub fn home_category(
    ctx: &mut GenerationContext,
    frequencies: &StarFrequencyTable,
) -> GenerationResult<StarCategory> {
    if ctx.prefs.dream_system {
        return Ok(StarCategory::DEFAULT_HOME);
    }
    Ok(match ctx.prefs.starting_system()? {
        StartingSystem::Random => frequencies.draw(&mut ctx.rng),
        StartingSystem::Category(category) => category,
    })
}

/// Builds and curates the home star
///
/// The returned selection always resolves against a slice holding only the
/// returned star.
pub fn build_home_system(
    ctx: &mut GenerationContext,
    frequencies: &StarFrequencyTable,
) -> GenerationResult<(Star, BirthSelection)> {
    let category = home_category(ctx, frequencies)?;
    let id = ctx.rng.next_id();
    let mut star = Star::new(id, star_name(0), category);
    // companions are drawn for the corrected primary
    curator::ensure_viable_star(&mut star);

    let dream = ctx.prefs.dream_system;
    maybe_add_companions(ctx, &mut star, dream);
    if dream {
        dream::build_dream_system(ctx, &mut star)?;
    } else {
        build_system(ctx, &mut star)?;
    }

    let birth = find_birth(ctx, std::slice::from_mut(&mut star))?;
    curate(ctx, &mut star, &birth)?;

    tracing::info!(
        "Home star {} ({}) with {} bodies",
        star.name,
        star.category,
        star.body_count()
    );
    Ok((star, birth))
}

/// Applies every home fixup in order
pub fn curate(
    ctx: &mut GenerationContext,
    star: &mut Star,
    birth: &BirthSelection,
) -> GenerationResult<()> {
    curator::lock_home_theme(ctx, star, birth)?;
    let resized = curator::resize_home_body(ctx, star, birth)?;
    curator::adjust_home_resources(ctx, star, birth)?;

    if resized {
        curator::replace_orbits(ctx, star);
    }

    curator::ensure_gas_giant(ctx, star)?;
    curator::ensure_critical_mineral(ctx, star, birth)
}
