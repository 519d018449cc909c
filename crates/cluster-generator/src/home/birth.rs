//! Locating (or creating) the home body

use star_system::{BirthSelection, Star};

use crate::bodies::create_body;
use crate::context::GenerationContext;
use crate::error::{GenerationError, GenerationResult};
use crate::orbits::place_orbits;
use crate::surface::{apply_theme, randomize_rotation};

/// First habitable body in planet then moon order
pub fn first_habitable(stars: &[Star]) -> Option<BirthSelection> {
    for (star_index, star) in stars.iter().enumerate() {
        for (planet_index, planet) in star.planets.iter().enumerate() {
            if planet.habitable {
                return Some(BirthSelection::Planet {
                    star: star_index,
                    index: planet_index,
                });
            }
            if let Some(moon_index) = planet.moons.iter().position(|m| m.habitable) {
                return Some(BirthSelection::Moon {
                    star: star_index,
                    planet: planet_index,
                    index: moon_index,
                });
            }
        }
    }
    None
}

/// Picks the home body, converting one when nothing is habitable
///
/// The conversion targets the middle planet of the first star. A gas giant
/// hands the role to its first telluric moon, which is created if missing.
pub fn find_birth(ctx: &mut GenerationContext, stars: &mut [Star]) -> GenerationResult<BirthSelection> {
    if stars.is_empty() {
        return Err(GenerationError::structural(
            "cannot pick a home body in a cluster without stars",
        ));
    }

    if let Some(selection) = first_habitable(stars) {
        tracing::debug!("Selected existing habitable body as home");
        return Ok(selection);
    }

    let keys = ctx.themes.habitable_keys();
    let Some(theme) = ctx.rng.item(&keys).cloned() else {
        return Err(GenerationError::invalid("theme library has no habitable themes"));
    };

    let star = &mut stars[0];
    if star.planets.is_empty() {
        return Err(GenerationError::structural(format!(
            "{} has no planets to convert",
            star.name
        )));
    }

    let planet_index = (star.planets.len() - 1) / 2;
    tracing::info!(
        "No habitable body found, converting {} to {}",
        star.planets[planet_index].name,
        theme
    );

    if star.planets[planet_index].is_telluric() {
        apply_theme(ctx, &mut star.planets[planet_index], &theme)?;
        return Ok(BirthSelection::Planet {
            star: 0,
            index: planet_index,
        });
    }

    let moon_index = match star.planets[planet_index].first_telluric_moon() {
        Some(index) => index,
        None => attach_moon(ctx, star, planet_index)?,
    };
    apply_theme(ctx, &mut star.planets[planet_index].moons[moon_index], &theme)?;

    Ok(BirthSelection::Moon {
        star: 0,
        planet: planet_index,
        index: moon_index,
    })
}

fn attach_moon(ctx: &mut GenerationContext, star: &mut Star, planet_index: usize) -> GenerationResult<usize> {
    let moon = create_body(ctx, &star.name, Some(&star.planets[planet_index]), false)?;
    star.planets[planet_index].moons.push(moon);
    place_orbits(&mut ctx.rng, star);

    let planet = &mut star.planets[planet_index];
    let index = planet.moons.len() - 1;
    randomize_rotation(&mut ctx.rng, &mut planet.moons[index]);
    Ok(index)
}
