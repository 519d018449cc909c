//! Orbit placement
//!
//! Planets are placed outward in index order; each orbit builds on the
//! previous one so radii strictly increase. Moons are placed around their
//! planet before the planet itself so its system radius is known.

use planetary::{Body, orbital_period};
use star_system::Star;
use stellar::{SeededRng, StructuralCategory, SystemZones};

use crate::naming::{moon_name, planet_name};

/// Clearance kept between neighbouring planetary systems (AU)
const SYSTEM_CLEARANCE: f64 = 0.25;
const REMNANT_SYSTEM_CLEARANCE: f64 = 0.2;

/// Gap between consecutive moon orbits (AU)
pub fn moon_gap(rng: &mut SeededRng) -> f64 {
    0.05 + rng.range_f64(0.0, 0.02)
}

/// Names every body and assigns orbit radii and periods
pub fn place_orbits(rng: &mut SeededRng, star: &mut Star) {
    let zones = star.zones();
    let inner_is_close = rng.pick(0.5);
    let star_radius = star.radius_au();
    let structural = star.structural();
    let binary_floor = if star.companions.is_empty() {
        None
    } else {
        Some(2.0 * star.max_companion_separation())
    };

    for index in 0..star.planets.len() {
        let previous = index
            .checked_sub(1)
            .map(|i| (star.planets[i].orbit(), star.planets[i].system_radius()));

        let planet = &mut star.planets[index];
        planet.name = planet_name(&star.name, index);
        place_moons(rng, &star.name, index, planet);

        let system_radius = planet.system_radius();
        let slot = Slot {
            index,
            inner_is_close,
            system_radius,
            previous,
        };
        let mut orbit = match structural {
            StructuralCategory::MainSequence => main_sequence_orbit(rng, &zones, star_radius, &slot),
            StructuralCategory::Giant => giant_orbit(rng, &zones, star_radius, &slot),
            StructuralCategory::Remnant => remnant_orbit(rng, &slot),
        };

        if index == 0 {
            if let Some(floor) = binary_floor {
                orbit = orbit.max(floor + system_radius);
            }
        }

        planet.orbit_radius = Some(orbit);
        planet.orbital_period = orbital_period(orbit);
    }
}

fn place_moons(rng: &mut SeededRng, star_name: &str, planet_index: usize, planet: &mut Body) {
    let mut orbit = planet.radius_au();
    for (moon_index, moon) in planet.moons.iter_mut().enumerate() {
        orbit += moon_gap(rng);
        moon.name = moon_name(star_name, planet_index, moon_index);
        moon.orbit_radius = Some(orbit);
        moon.orbital_period = orbital_period(orbit);
    }
}

struct Slot {
    index: usize,
    inner_is_close: bool,
    system_radius: f64,
    /// Orbit and system radius of the previous planet
    previous: Option<(f64, f64)>,
}

impl Slot {
    /// Previous orbit plus the larger of the minimum spacing and `gap`
    fn after_previous(&self, clearance: f64, gap: f64) -> f64 {
        let (prev_orbit, prev_system) = self.previous.unwrap_or((0.0, 0.0));
        prev_orbit + (self.system_radius + prev_system + clearance).max(gap)
    }
}

fn main_sequence_orbit(
    rng: &mut SeededRng,
    zones: &SystemZones,
    star_radius: f64,
    slot: &Slot,
) -> f64 {
    let warm = zones.warm_edge;
    let temperate = zones.temperate_edge;

    match (slot.index, slot.inner_is_close) {
        (0, true) => (2.0 * star_radius).max(rng.range_f64(warm * 0.5, warm)) + slot.system_radius,
        (0, false) => {
            (3.0 * star_radius).max(rng.range_f64(0.7, 0.9) * temperate) + slot.system_radius
        }
        (1, true) => slot.after_previous(SYSTEM_CLEARANCE, rng.range_f64(0.5, 0.75) * temperate),
        _ => slot.after_previous(SYSTEM_CLEARANCE, rng.range_f64(0.3, 0.5) * temperate),
    }
}

fn giant_orbit(rng: &mut SeededRng, zones: &SystemZones, star_radius: f64, slot: &Slot) -> f64 {
    let warm = zones.warm_edge;
    let span = zones.temperate_span();

    match (slot.index, slot.inner_is_close) {
        (0, true) => {
            (1.25 * star_radius).max(rng.range_f64(warm * 0.5, warm)) + slot.system_radius
        }
        (0, false) => {
            (3.0 * star_radius).max(rng.range_f64(0.7, 0.85) * span + 0.25 * star_radius)
                + slot.system_radius
        }
        (1, true) => slot.after_previous(SYSTEM_CLEARANCE, rng.range_f64(0.75, 0.9) * span),
        _ => slot.after_previous(SYSTEM_CLEARANCE, rng.range_f64(0.15, 0.35) * span),
    }
}

fn remnant_orbit(rng: &mut SeededRng, slot: &Slot) -> f64 {
    match (slot.index, slot.inner_is_close) {
        (0, true) => rng.range_f64(0.25, 0.45),
        (0, false) => rng.range_f64(0.7, 0.85),
        _ => slot.after_previous(REMNANT_SYSTEM_CLEARANCE, rng.range_f64(0.35, 0.5)),
    }
}
