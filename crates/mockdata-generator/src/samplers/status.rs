//! Status and weighting-penalty samplers.

use metrics_core::ServiceStatus;
use rand::Rng;

/// Probability that a compliance dimension reports the normal state.
pub const NORMAL_PROBABILITY: f64 = 0.9;

/// Probability that a weighting penalty was applied to a dimension.
pub const PENALTY_PROBABILITY: f64 = 0.2;

/// Sample a compliance status, normal with probability [`NORMAL_PROBABILITY`].
pub fn status<R: Rng>(rng: &mut R) -> ServiceStatus {
    if rng.random_bool(NORMAL_PROBABILITY) {
        ServiceStatus::Normal
    } else {
        ServiceStatus::Abnormal
    }
}

/// Sample a weighting-penalty string.
///
/// With probability `1 - PENALTY_PROBABILITY` the dimension carries no
/// deduction and the literal `"0"` is returned. Otherwise the magnitude is a
/// uniform integer from `[0, bound)` - the magnitude draw may itself be zero,
/// matching the observed dashboard data.
pub fn penalty_string<R: Rng>(rng: &mut R, bound: u64) -> String {
    if rng.random_bool(PENALTY_PROBABILITY) {
        rng.random_range(0..bound).to_string()
    } else {
        "0".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_status_distribution() {
        let mut rng = StdRng::seed_from_u64(42);
        let normals = (0..10_000).filter(|_| status(&mut rng).is_normal()).count();

        // 0.9 +/- a generous statistical margin
        assert!((8_700..=9_300).contains(&normals), "normals = {normals}");
    }

    #[test]
    fn test_penalty_is_mostly_zero() {
        let mut rng = StdRng::seed_from_u64(42);
        let zeros = (0..10_000)
            .filter(|_| penalty_string(&mut rng, 5) == "0")
            .count();

        // 80% "0" plus the zero draws from the magnitude range
        assert!(zeros >= 7_700, "zeros = {zeros}");
    }

    #[test]
    fn test_penalty_magnitude_stays_below_bound() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..10_000 {
            let s = penalty_string(&mut rng, 10);
            let value: u64 = s.parse().expect("integer penalty");
            assert!(value < 10);
        }
    }
}
