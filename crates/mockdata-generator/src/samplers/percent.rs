//! Percentage and rating string samplers.

use rand::Rng;

/// Generate a percentage string with two decimal digits and a trailing `%`.
///
/// The value is drawn uniformly from the half-open range `[min, max)`. A
/// negative `min` (the loss rate field) yields a leading `-` on the rendered
/// string; every other field uses non-negative bounds.
pub fn percent_string<R: Rng>(rng: &mut R, min: f64, max: f64) -> String {
    let value = rng.random_range(min..max);
    format!("{value:.2}%")
}

/// Generate a rating string with one decimal digit, drawn from `[min, max)`.
pub fn rating_string<R: Rng>(rng: &mut R, min: f64, max: f64) -> String {
    let value = rng.random_range(min..max);
    format!("{value:.1}")
}
