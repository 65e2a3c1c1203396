//! Report date sampler.

use chrono::NaiveDate;
use rand::Rng;

/// Reporting year the mock data is pinned to.
pub const REPORT_YEAR: i32 = 2025;

/// Generate a `YYYY-MM-DD` report date within the reporting year.
///
/// The day is capped at 28 so every month is valid.
pub fn report_date_string<R: Rng>(rng: &mut R) -> String {
    let month = rng.random_range(1..=12u32);
    let day = rng.random_range(1..=28u32);
    let date = NaiveDate::from_ymd_opt(REPORT_YEAR, month, day).unwrap();
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_report_date_shape_and_year() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..500 {
            let s = report_date_string(&mut rng);
            let date = NaiveDate::parse_from_str(&s, "%Y-%m-%d").expect("valid date");
            assert_eq!(date.format("%Y-%m-%d").to_string(), s, "zero-padded form");
            assert!(s.starts_with("2025-"));
        }
    }

    #[test]
    fn test_report_date_day_cap() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..500 {
            let s = report_date_string(&mut rng);
            let day: u32 = s[8..10].parse().unwrap();
            assert!((1..=28).contains(&day));
        }
    }
}
