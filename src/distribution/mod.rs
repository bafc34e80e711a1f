//! Tools to generate and clamp noise.

use rand::Rng;
use rand_distr::{Normal, Distribution};


/// Samples the normal distribution at the given mean and standard deviation using the
/// given random number generator and clamps the output value between the given minimum
/// and maximum, if standard deviation is `0.` the mean is always returned
pub fn limited_distr_with_rng<G: Rng>(
    rng: &mut G,
    mean: f32,
    std: f32,
    minimum: f32,
    maximum: f32,
) -> f32 {
    if std == 0.0 {
        return mean;
    }

    let normal = Normal::new(mean, std).unwrap();
    let output: f32 = normal.sample(rng);

    output.max(minimum).min(maximum)
}

/// Samples a clamped normal distribution using the thread local random number generator
pub fn limited_distr(mean: f32, std: f32, minimum: f32, maximum: f32) -> f32 {
    limited_distr_with_rng(&mut rand::thread_rng(), mean, std, minimum, maximum)
}
