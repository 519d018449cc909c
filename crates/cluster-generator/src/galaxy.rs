//! Galaxy layout spacing derived from the density preference

use star_system::GalaxyParams;

const GRAPH_DISTANCE: u32 = 32;
const GRAPH_MAX_STARS: u32 = 512;

/// Spacing for a density level from 1 (packed) to 9 (sparse)
///
/// Levels outside 1-9 use the level 5 spacing.
pub fn params_for_density(density: i32) -> GalaxyParams {
    let (min_step_length, max_step_length, min_distance) = match density {
        1 => (1.2, 1.5, 1.2),
        2 => (1.4, 2.0, 1.5),
        3 => (1.6, 2.5, 1.7),
        4 => (1.8, 3.0, 2.0),
        6 => (2.2, 4.2, 2.4),
        7 => (2.5, 5.0, 2.6),
        8 => (2.7, 6.0, 2.8),
        9 => (3.0, 7.0, 3.0),
        _ => (2.0, 3.5, 2.3),
    };

    GalaxyParams {
        min_distance,
        min_step_length,
        max_step_length,
        graph_distance: GRAPH_DISTANCE,
        graph_max_stars: GRAPH_MAX_STARS,
    }
}
