//! Bias-controlled integer sampling
//!
//! A biased sample is a normal draw whose mean sits at `bias` percent of the
//! range. Each side of the mean uses its own deviation, a third of the
//! distance to that bound, so results cluster toward the closer end.

use planetary::SIZE_STEP;
use stellar::SeededRng;

use crate::config::{IntRange, check_percent};
use crate::error::{GenerationError, GenerationResult};

fn biased_value(rng: &mut SeededRng, min: i32, max: i32, bias: f64) -> GenerationResult<f64> {
    if min > max {
        return Err(GenerationError::invalid(format!(
            "sample range {}..{} is inverted",
            min, max
        )));
    }
    check_percent("bias", bias)?;

    let (min, max) = (min as f64, max as f64);
    let mean = min + bias / 100.0 * (max - min);
    let sd_low = (mean - min) / 3.0;
    let sd_high = (max - mean) / 3.0;

    let z = rng.gaussian(0.0, 1.0);
    let sd = if z < 0.0 { sd_low } else { sd_high };
    Ok(mean + z * sd)
}

/// Integer in `[min, max]` biased toward `bias` percent of the range
///
/// A deviate is drawn even when `min == max`.
pub fn sample_biased(rng: &mut SeededRng, min: i32, max: i32, bias: f64) -> GenerationResult<i32> {
    let value = biased_value(rng, min, max, bias)?;
    Ok((value.round() as i64).clamp(min as i64, max as i64) as i32)
}

/// Biased body size snapped to the size step, then clamped to the range
pub fn sample_size(rng: &mut SeededRng, range: IntRange, bias: f64) -> GenerationResult<i32> {
    let value = biased_value(rng, range.low, range.high, bias)?;
    let step = SIZE_STEP as f64;
    let snapped = (value / step).round() * step;
    Ok((snapped as i64).clamp(range.low as i64, range.high as i64) as i32)
}
