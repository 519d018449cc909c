//! Hand-authored home system layouts

use star_system::Star;

use crate::bodies::create_body;
use crate::context::GenerationContext;
use crate::error::GenerationResult;
use crate::orbits::place_orbits;
use crate::surface::{apply_theme, set_rotation_properties};

/// One planet of a dream layout, innermost first
struct DreamPlanet {
    theme: &'static str,
    gas_giant: bool,
    moon: Option<&'static str>,
}

const fn rocky(theme: &'static str, moon: Option<&'static str>) -> DreamPlanet {
    DreamPlanet {
        theme,
        gas_giant: false,
        moon,
    }
}

const fn giant(theme: &'static str, moon: &'static str) -> DreamPlanet {
    DreamPlanet {
        theme,
        gas_giant: true,
        moon: Some(moon),
    }
}

/// Hot inner worlds and a dry neighbour
static DRY_LAYOUT: [DreamPlanet; 5] = [
    rocky("Lava", None),
    rocky("VolcanicAsh", None),
    rocky("Mediterranean", Some("Barren")),
    rocky("Gobi", None),
    giant("GasGiant", "IceGelisol"),
];

/// Ocean neighbour and a cold outer system
static WET_LAYOUT: [DreamPlanet; 5] = [
    rocky("Lava", None),
    rocky("Mediterranean", None),
    rocky("OceanWorld", None),
    rocky("IceGelisol", None),
    giant("IceGiant", "Barren"),
];

/// Replaces the star's bodies with one of the dream layouts
///
/// Orbits come from the regular placer; themes are fixed by the layout.
pub fn build_dream_system(ctx: &mut GenerationContext, star: &mut Star) -> GenerationResult<()> {
    let (label, layout) = if ctx.rng.pick(0.5) {
        ("dry", &DRY_LAYOUT)
    } else {
        ("wet", &WET_LAYOUT)
    };

    star.planets.clear();
    for entry in layout {
        let mut planet = create_body(ctx, &star.name, None, entry.gas_giant)?;
        if entry.moon.is_some() {
            let moon = create_body(ctx, &star.name, Some(&planet), false)?;
            planet.moons.push(moon);
        }
        star.planets.push(planet);
    }

    place_orbits(&mut ctx.rng, star);

    for (planet, entry) in star.planets.iter_mut().zip(layout) {
        apply_theme(ctx, planet, entry.theme)?;
        if let (Some(moon_theme), Some(moon)) = (entry.moon, planet.moons.first_mut()) {
            apply_theme(ctx, moon, moon_theme)?;
        }
    }

    set_rotation_properties(ctx, star);
    tracing::info!("Built {} dream home system for {}", label, star.name);
    Ok(())
}
