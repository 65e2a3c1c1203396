//! Integer score and count string samplers.

use rand::Rng;

/// Generate a sub-score string: a float drawn from `[min, max)` rounded to an
/// integer and rendered without sign or padding.
pub fn score_string<R: Rng>(rng: &mut R, min: f64, max: f64) -> String {
    let value = rng.random_range(min..max);
    format!("{value:.0}")
}

/// Generate a count string: a uniform integer from `[0, bound)` rendered as
/// decimal digits.
pub fn count_string<R: Rng>(rng: &mut R, bound: u64) -> String {
    rng.random_range(0..bound).to_string()
}
