//! Creation of unplaced planets and moons

use planetary::{Body, BodyKind, SIZE_STEP};

use crate::context::GenerationContext;
use crate::error::GenerationResult;
use crate::sampling::sample_size;

/// Smallest radius any generated body may have
pub const MIN_BODY_RADIUS: i32 = 10;

/// Stored radius of an ordinary gas giant
pub const GAS_GIANT_RADIUS: i32 = 80;
const HUGE_GAS_GIANT_MAX_RADIUS: i32 = 160;

pub fn planet_size(ctx: &mut GenerationContext) -> GenerationResult<i32> {
    sample_size(&mut ctx.rng, ctx.prefs.planet_size, ctx.prefs.size_bias)
}

/// Moon radius for a host planet
///
/// A moon never outgrows its host, and shrinks further when small moons are
/// preferred.
pub fn moon_size(ctx: &mut GenerationContext, host: &Body) -> GenerationResult<i32> {
    let mut size = planet_size(ctx)?;
    let true_host_radius = host.true_radius() as i32;
    if size > true_host_radius {
        size = true_host_radius - 2 * SIZE_STEP;
    }

    let prefs = ctx.prefs;
    if prefs.moons_are_small && (host.is_telluric() || prefs.small_gas_giant_moons) {
        size = size / 2 / SIZE_STEP * SIZE_STEP;
    }

    Ok(size.max(MIN_BODY_RADIUS))
}

pub fn gas_giant_radius(ctx: &mut GenerationContext) -> i32 {
    if ctx.prefs.huge_gas_giants {
        let steps = (HUGE_GAS_GIANT_MAX_RADIUS - GAS_GIANT_RADIUS) / SIZE_STEP;
        GAS_GIANT_RADIUS + ctx.rng.range_i32(0, steps + 1) * SIZE_STEP
    } else {
        GAS_GIANT_RADIUS
    }
}

pub fn pick_gas_giant(ctx: &mut GenerationContext) -> bool {
    let chance = ctx.prefs.chance_gas;
    ctx.chance(chance)
}

/// Creates an unplaced body
///
/// A `host` makes the body a moon of that planet. Orbit, theme and rotation
/// are filled in by later passes.
pub fn create_body(
    ctx: &mut GenerationContext,
    star_name: &str,
    host: Option<&Body>,
    gas_giant: bool,
) -> GenerationResult<Body> {
    let mut radius = match host {
        Some(host) => moon_size(ctx, host)?,
        None => planet_size(ctx)?,
    };
    let kind = if gas_giant {
        radius = gas_giant_radius(ctx);
        BodyKind::GasGiant
    } else {
        BodyKind::Telluric
    };

    let name = match host {
        Some(_) => format!("{}-Moon", star_name),
        None => format!("{}-Planet", star_name),
    };
    Ok(Body::new(name, radius, kind))
}
