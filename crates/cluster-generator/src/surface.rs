//! Surface pass: themes, veins and rotation

use planetary::{Body, ThemeKind};
use star_system::Star;
use stellar::SeededRng;
use units::Time;

use crate::context::GenerationContext;
use crate::error::{GenerationError, GenerationResult};

/// Queries a theme for every planet and moon from its climate band
///
/// Moons share the heat of the planet they orbit.
pub fn assign_themes(ctx: &mut GenerationContext, star: &mut Star) -> GenerationResult<()> {
    let themes = ctx.themes;
    let zones = star.zones();

    for planet in star.planets.iter_mut() {
        let heat = zones.heat_at(planet.orbit());
        let kind = if planet.is_gas_giant() {
            ThemeKind::Gas
        } else {
            ThemeKind::Planet
        };
        let key = themes.query(&mut ctx.rng, kind, heat, planet.radius)?;
        apply_theme(ctx, planet, &key)?;

        for moon in planet.moons.iter_mut() {
            let key = themes.query(&mut ctx.rng, ThemeKind::Moon, heat, moon.radius)?;
            apply_theme(ctx, moon, &key)?;
        }
    }
    Ok(())
}

/// Sets a body's theme and derives its veins
///
/// Each rare vein of the theme survives with the rare chance.
pub fn apply_theme(ctx: &mut GenerationContext, body: &mut Body, key: &str) -> GenerationResult<()> {
    let themes = ctx.themes;
    let theme = themes
        .theme(key)
        .ok_or_else(|| GenerationError::invalid(format!("unknown theme '{}'", key)))?;

    let rare_chance = ctx.prefs.rare_chance;
    let mut veins = Vec::with_capacity(theme.veins.len());
    for vein in &theme.veins {
        if !vein.is_rare() || ctx.rng.pick(rare_chance / 100.0) {
            veins.push(*vein);
        }
    }

    body.theme = Some(theme.key.clone());
    body.habitable = theme.habitable;
    body.veins = veins;
    Ok(())
}

/// Randomizes spin and orientation of every body, planets before their moons
pub fn set_rotation_properties(ctx: &mut GenerationContext, star: &mut Star) {
    for planet in star.planets.iter_mut() {
        randomize_rotation(&mut ctx.rng, planet);
        for moon in planet.moons.iter_mut() {
            randomize_rotation(&mut ctx.rng, moon);
        }
    }
    lock_inner_planet(ctx, star);
}

/// Tidally locks the innermost planet when preferred
pub fn lock_inner_planet(ctx: &GenerationContext, star: &mut Star) {
    if !ctx.prefs.tidal_lock_inner_planets {
        return;
    }
    if let Some(inner) = star.planets.first_mut() {
        inner.rotation_period = inner.orbital_period;
    }
}

pub fn randomize_rotation(rng: &mut SeededRng, body: &mut Body) {
    body.rotation_phase = rng.range_i32(0, 360) as f64;
    body.orbit_inclination = rng.range_f64(-20.0, 20.0);
    body.orbit_phase = rng.range_i32(0, 360) as f64;
    body.obliquity = rng.next_f64() * 20.0;
    body.rotation_period = Time::from_seconds(rng.range_i32(80, 3600) as f64);
    body.retrograde = rng.next_f64() < 0.02;

    let orbit = body.orbit();
    if orbit < 1.0 && rng.next_f64() < 0.5 {
        body.rotation_period = body.orbital_period;
    } else if orbit < 1.5 && rng.next_f64() < 0.2 {
        body.rotation_period = body.orbital_period / 2.0;
    } else if orbit < 2.0 && rng.next_f64() < 0.1 {
        body.rotation_period = body.orbital_period / 4.0;
    }

    if rng.next_f64() < 0.05 {
        body.obliquity = rng.range_f64(20.0, 85.0);
    }
}
