use std::f64::consts::PI;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

/// Sample from a Gaussian (normal) distribution using Box-Muller transform
///
/// # Arguments
/// * `rng` - Random number generator
/// * `mean` - Mean of the distribution
/// * `std_dev` - Standard deviation
///
/// # Returns
/// A sample from the normal distribution N(mean, std_dev²)
pub fn sample_gaussian(rng: &mut ChaChaRng, mean: f64, std_dev: f64) -> f64 {
    // 1 - u keeps the logarithm away from ln(0)
    let u1: f64 = 1.0 - rng.random::<f64>();
    let u2: f64 = rng.random();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
    mean + std_dev * z
}

/// Deterministic random source threaded through a single generation run
///
/// Every draw goes through this wrapper so that the call sequence, and
/// therefore the output, depends only on the seed. Degenerate ranges never
/// panic: they return the lower bound and still advance the stream.
#[derive(Debug, Clone)]
pub struct SeededRng {
    rng: ChaChaRng,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaChaRng::seed_from_u64(seed),
        }
    }

    /// Uniform float in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        self.rng.random()
    }

    /// Uniform float in `[min, max)`, or `min` when the range is empty
    pub fn range_f64(&mut self, min: f64, max: f64) -> f64 {
        let u = self.next_f64();
        if min >= max {
            return min;
        }
        min + (max - min) * u
    }

    /// Uniform integer in `[min, max)`, or `min` when the range is empty
    pub fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        let u = self.next_f64();
        if min >= max {
            return min;
        }
        let span = (max as i64 - min as i64) as f64;
        let offset = ((u * span).floor() as i64).min(max as i64 - min as i64 - 1);
        (min as i64 + offset) as i32
    }

    /// Uniform index in `[0, len)`; zero for an empty collection
    pub fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            let _ = self.next_f64();
            return 0;
        }
        self.range_i32(0, len.min(i32::MAX as usize) as i32) as usize
    }

    /// Standard-normal deviate scaled to `mean` and `std_dev`
    pub fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        sample_gaussian(&mut self.rng, mean, std_dev)
    }

    /// Returns `true` with the given probability
    pub fn pick(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }

    /// Uniformly chosen element, `None` for an empty slice
    pub fn item<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.index(items.len());
        items.get(index)
    }

    /// Fresh non-negative identifier drawn from the stream
    pub fn next_id(&mut self) -> u32 {
        self.rng.random_range(0..i32::MAX as u32)
    }
}
