//! Fixups that make the home system playable
//!
//! The star fixup runs before companions and bodies exist. The rest run
//! once, in order, after the home body has been chosen; each may change
//! bodies the earlier passes produced.

use planetary::{Body, BodyKind, Vein, VeinKind, orbital_period, orbital_period_from_star_mass};
use star_system::{BirthSelection, Star};
use stellar::StarCategory;
use units::Time;

use crate::bodies::{GAS_GIANT_RADIUS, planet_size};
use crate::context::GenerationContext;
use crate::error::{GenerationError, GenerationResult};
use crate::naming::planet_name;
use crate::orbits::place_orbits;
use crate::surface::{apply_theme, lock_inner_planet};

pub const DEFAULT_HOME_THEME: &str = "Mediterranean";
pub const GAS_GIANT_GUARANTEE_THEME: &str = "IceGiant";
pub const MINERAL_GUARANTEE_THEME: &str = "AshenGelisol";

/// Marker vein the home system must offer outside the home body
pub const CRITICAL_MINERAL: VeinKind = VeinKind::Titanium;

fn home_body<'a>(star: &'a mut Star, birth: &BirthSelection) -> GenerationResult<&'a mut Body> {
    let planet = star
        .planets
        .get_mut(birth.planet())
        .ok_or_else(|| GenerationError::structural("home planet index is out of range"))?;
    match birth {
        BirthSelection::Planet { .. } => Ok(planet),
        BirthSelection::Moon { index, .. } => planet
            .moons
            .get_mut(*index)
            .ok_or_else(|| GenerationError::structural("home moon index is out of range")),
    }
}

/// Forces the default theme unless the home theme is unlocked
pub fn lock_home_theme(
    ctx: &mut GenerationContext,
    star: &mut Star,
    birth: &BirthSelection,
) -> GenerationResult<()> {
    if ctx.prefs.birth_planet_unlock {
        return Ok(());
    }
    let body = home_body(star, birth)?;
    if body.theme.as_deref() != Some(DEFAULT_HOME_THEME) {
        apply_theme(ctx, body, DEFAULT_HOME_THEME)?;
    }
    Ok(())
}

/// Resizes the home body to the preferred size
///
/// A home moon that would outgrow its host grows the host too. Returns
/// `true` when any radius changed.
pub fn resize_home_body(
    ctx: &GenerationContext,
    star: &mut Star,
    birth: &BirthSelection,
) -> GenerationResult<bool> {
    let size = ctx.prefs.birth_planet_size;
    let body = home_body(star, birth)?;
    if body.radius == size && body.is_telluric() {
        return Ok(false);
    }

    tracing::debug!("Forcing home body {} to size {}", body.name, size);
    body.radius = size;
    body.kind = BodyKind::Telluric;

    if birth.is_moon() {
        let host = &mut star.planets[birth.planet()];
        if host.true_radius() <= size as f64 {
            host.radius = if host.is_gas_giant() {
                (size as f64 / host.scale()) as i32 + 10
            } else {
                size + 50
            };
        }
    }
    Ok(true)
}

/// Strips rare veins and adds the silicon/titanium guarantee as preferred
pub fn adjust_home_resources(
    ctx: &GenerationContext,
    star: &mut Star,
    birth: &BirthSelection,
) -> GenerationResult<()> {
    let prefs = ctx.prefs;
    let body = home_body(star, birth)?;

    if prefs.no_homeworld_rares {
        body.strip_rare_veins();
    }
    if prefs.birth_planet_si_ti && !prefs.rares_disabled() {
        body.add_vein(Vein::common(VeinKind::Silicon));
        body.add_vein(Vein::common(VeinKind::Titanium));
    }
    Ok(())
}

/// Turns a remnant home star into a default main-sequence star
///
/// Must run before companions are drawn so they follow the viable primary's
/// tables. Any luminosity already donated is kept. Returns `true` when the
/// star changed.
pub fn ensure_viable_star(star: &mut Star) -> bool {
    if !star.category.is_remnant() {
        return false;
    }
    tracing::info!(
        "Home star {} is a {}, converting to {}",
        star.name,
        star.category,
        StarCategory::DEFAULT_HOME
    );
    star.reset_category(StarCategory::DEFAULT_HOME);
    true
}

/// Re-places every orbit after the star or a body size changed
pub fn replace_orbits(ctx: &mut GenerationContext, star: &mut Star) {
    place_orbits(&mut ctx.rng, star);
    lock_inner_planet(ctx, star);
}

/// Orbit just outside the current outermost planet
fn next_outer_orbit(ctx: &mut GenerationContext, star: &Star) -> f64 {
    let span = star.zones().temperate_span();
    let (last_orbit, last_system) = star
        .planets
        .last()
        .map(|p| (p.orbit(), p.system_radius()))
        .unwrap_or((0.0, 0.0));
    last_orbit + (last_system + 0.4).max(span.min(ctx.rng.range_f64(0.65, 0.95)))
}

/// Appends an ice giant when the home system has no gas giant
pub fn ensure_gas_giant(ctx: &mut GenerationContext, star: &mut Star) -> GenerationResult<()> {
    if star.has_gas_giant() {
        return Ok(());
    }

    let orbit = next_outer_orbit(ctx, star);
    let mut giant = Body::gas_giant(planet_name(&star.name, star.planets.len()), GAS_GIANT_RADIUS);
    giant.orbit_radius = Some(orbit);
    giant.orbital_period = orbital_period(orbit);
    giant.orbit_inclination = ctx.rng.range_f64(-20.0, 20.0);
    giant.orbit_phase = ctx.rng.range_f64(0.0, 359.0);
    giant.rotation_period = Time::from_seconds(180.0);
    apply_theme(ctx, &mut giant, GAS_GIANT_GUARANTEE_THEME)?;

    tracing::info!("Home system lacked a gas giant, added {}", giant.name);
    star.planets.push(giant);
    Ok(())
}

/// Planet index and optional moon index of the home body
fn home_position(birth: &BirthSelection) -> (usize, Option<usize>) {
    match birth {
        BirthSelection::Planet { index, .. } => (*index, None),
        BirthSelection::Moon { planet, index, .. } => (*planet, Some(*index)),
    }
}

/// Position of every telluric body other than the home body
fn other_telluric_bodies(star: &Star, birth: &BirthSelection) -> Vec<(usize, Option<usize>)> {
    let home = home_position(birth);

    let mut positions = Vec::new();
    for (planet_index, planet) in star.planets.iter().enumerate() {
        if planet.is_telluric() {
            positions.push((planet_index, None));
        }
        for (moon_index, moon) in planet.moons.iter().enumerate() {
            if moon.is_telluric() {
                positions.push((planet_index, Some(moon_index)));
            }
        }
    }
    positions.retain(|p| *p != home);
    positions
}

/// Whether any body besides the home body carries the critical mineral
pub fn has_critical_mineral(star: &Star, birth: &BirthSelection) -> bool {
    let home = home_position(birth);
    star.planets.iter().enumerate().any(|(planet_index, planet)| {
        (home != (planet_index, None) && planet.has_vein(CRITICAL_MINERAL))
            || planet.moons.iter().enumerate().any(|(moon_index, moon)| {
                home != (planet_index, Some(moon_index)) && moon.has_vein(CRITICAL_MINERAL)
            })
    })
}

/// Makes sure a body other than home offers titanium
///
/// Small systems get a dedicated body appended; otherwise a random rocky
/// body is rethemed. Skipped when rare veins are disabled.
pub fn ensure_critical_mineral(
    ctx: &mut GenerationContext,
    star: &mut Star,
    birth: &BirthSelection,
) -> GenerationResult<()> {
    if ctx.prefs.rares_disabled() || has_critical_mineral(star, birth) {
        return Ok(());
    }

    let candidates = other_telluric_bodies(star, birth);
    if star.telluric_body_count() >= 2 {
        if let Some(&(planet_index, moon_index)) = ctx.rng.item(&candidates) {
            let planet = &mut star.planets[planet_index];
            let body = match moon_index {
                Some(m) => &mut planet.moons[m],
                None => planet,
            };
            tracing::info!("Retheming {} to carry {:?}", body.name, CRITICAL_MINERAL);
            return apply_theme(ctx, body, MINERAL_GUARANTEE_THEME);
        }
    }

    let orbit = next_outer_orbit(ctx, star);
    let radius = planet_size(ctx)?;
    let mut body = Body::telluric(planet_name(&star.name, star.planets.len()), radius);
    body.orbit_radius = Some(orbit);
    body.orbital_period = orbital_period_from_star_mass(orbit, star.properties.mass);
    body.rotation_period = Time::from_seconds(360.0);
    apply_theme(ctx, &mut body, MINERAL_GUARANTEE_THEME)?;

    tracing::info!("Added {} to carry {:?}", body.name, CRITICAL_MINERAL);
    star.planets.push(body);
    Ok(())
}
