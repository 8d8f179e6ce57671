//! Random admissible dates for tests and demos.

use crate::CivilDate;
use crate::consts::{MAX_MONTH, RANDOM_MAX_YEAR, RANDOM_MIN_YEAR};
use crate::types::month_length;
use rand::Rng;

impl CivilDate {
    /// Draws a uniformly distributed date: year uniform in
    /// `RANDOM_MIN_YEAR..=RANDOM_MAX_YEAR`, month uniform in `1..=12`, day
    /// uniform in `1..=days_in_month(month, year)`.
    ///
    /// The day bound is drawn against the already-chosen month and year, so
    /// the result is valid by construction.
    pub fn random(rng: &mut impl Rng) -> Self {
        let year = rng.random_range(RANDOM_MIN_YEAR..=RANDOM_MAX_YEAR);
        let month = rng.random_range(1..=MAX_MONTH);
        let day = rng.random_range(1..=month_length(month, year));

        Self { year, month, day }
    }

    /// Same draw using a fresh thread-local RNG.
    pub fn random_from_entropy() -> Self {
        Self::random(&mut rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_dates_are_always_valid() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..2000 {
            let d = CivilDate::random(&mut rng);
            assert!((RANDOM_MIN_YEAR..=RANDOM_MAX_YEAR).contains(&d.year()));
            assert!((1..=12).contains(&d.month()));
            assert!(d.month_day() >= 1);
            assert!(d.month_day() <= month_length(d.month(), d.year()));
        }
    }

    #[test]
    fn test_seeded_reproducibility() {
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(CivilDate::random(&mut rng1), CivilDate::random(&mut rng2));
        }
    }

    #[test]
    fn test_draws_cover_short_and_long_months() {
        // Over a few thousand draws every month should appear, including
        // days only a 31-day month can produce.
        let mut rng = StdRng::seed_from_u64(12345);
        let mut seen_months = [false; 13];
        let mut seen_day_31 = false;
        for _ in 0..5000 {
            let d = CivilDate::random(&mut rng);
            seen_months[d.month() as usize] = true;
            if d.month_day() == 31 {
                seen_day_31 = true;
            }
        }
        assert!(seen_months[1..].iter().all(|&m| m), "every month should be drawn");
        assert!(seen_day_31, "day 31 should be drawn from long months");
    }

    #[test]
    fn test_random_from_entropy_is_valid() {
        let d = CivilDate::random_from_entropy();
        assert!((RANDOM_MIN_YEAR..=RANDOM_MAX_YEAR).contains(&d.year()));
        assert!(d.month_day() <= d.days_in_month());
    }
}
