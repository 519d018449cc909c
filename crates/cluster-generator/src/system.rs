//! Procedural planetary system for a single star

use star_system::Star;

use crate::bodies::{create_body, pick_gas_giant};
use crate::context::GenerationContext;
use crate::error::GenerationResult;
use crate::orbits::place_orbits;
use crate::sampling::sample_biased;
use crate::surface::{assign_themes, set_rotation_properties};

/// Populates a star with planets and moons, then places and dresses them
///
/// Any existing bodies are discarded.
pub fn build_system(ctx: &mut GenerationContext, star: &mut Star) -> GenerationResult<()> {
    populate_bodies(ctx, star)?;
    place_orbits(&mut ctx.rng, star);
    assign_themes(ctx, star)?;
    set_rotation_properties(ctx, star);

    tracing::debug!(
        "Built {} with {} planets and {} bodies",
        star.name,
        star.planets.len(),
        star.body_count()
    );
    Ok(())
}

/// Creates the unplaced bodies of a system
pub fn populate_bodies(ctx: &mut GenerationContext, star: &mut Star) -> GenerationResult<()> {
    star.planets.clear();

    let range = ctx.prefs.planet_count;
    let mut body_count = sample_biased(&mut ctx.rng, range.low, range.high, ctx.prefs.count_bias)?;
    if body_count < 1 {
        tracing::debug!("{} drew no bodies, forcing one planet", star.name);
        body_count = 1;
    }

    let moon_chance = ctx.prefs.chance_moon / 100.0;
    let gas_giant_moons = ctx.prefs.more_likely_gas_giant_moons;

    let gas = pick_gas_giant(ctx);
    let first = create_body(ctx, &star.name, None, gas)?;
    star.planets.push(first);
    let mut previous = 0;

    for _ in 1..body_count {
        let host = &star.planets[previous];
        let mut chance = moon_chance;
        if host.is_gas_giant() && gas_giant_moons && host.moons.is_empty() {
            chance = if chance < 0.5 { 0.8 } else { 1.0 };
        }

        if ctx.rng.pick(chance) {
            let moon = create_body(ctx, &star.name, Some(&star.planets[previous]), false)?;
            star.planets[previous].moons.push(moon);
        } else {
            let gas = pick_gas_giant(ctx);
            let planet = create_body(ctx, &star.name, None, gas)?;
            star.planets.push(planet);
            previous += 1;
        }
    }

    ensure_telluric_body(ctx, star)
}

/// Attaches a rocky moon to the first gas giant when a system has no
/// telluric body at all
fn ensure_telluric_body(ctx: &mut GenerationContext, star: &mut Star) -> GenerationResult<()> {
    if star.telluric_body_count() > 0 {
        return Ok(());
    }
    let Some(index) = star.planets.iter().position(|p| p.is_gas_giant()) else {
        return Ok(());
    };

    let moon = create_body(ctx, &star.name, Some(&star.planets[index]), false)?;
    star.planets[index].moons.push(moon);
    tracing::debug!("{} had only gas giants, added a telluric moon", star.name);
    Ok(())
}
