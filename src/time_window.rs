use rand::Rng;

use crate::{error::InvalidRangeError, seconds::Seconds};

/// Closed interval of seconds, inclusive on both ends.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    min_seconds: u64,
    max_seconds: u64,
}

impl TimeWindow {
    pub fn new(min: Seconds, max: Seconds) -> Result<Self, InvalidRangeError> {
        if min > max {
            return Err(InvalidRangeError {
                lower: min.0,
                upper: max.0,
            });
        }
        Ok(Self::between(min.0, max.0))
    }

    pub const fn fixed(value: Seconds) -> Self {
        Self::between(value.0, value.0)
    }

    // Callers guarantee min <= max.
    pub(crate) const fn between(min_seconds: u64, max_seconds: u64) -> Self {
        Self {
            min_seconds,
            max_seconds,
        }
    }

    pub fn min(&self) -> Seconds {
        Seconds(self.min_seconds)
    }

    pub fn max(&self) -> Seconds {
        Seconds(self.max_seconds)
    }

    pub fn contains(&self, value: Seconds) -> bool {
        (self.min_seconds..=self.max_seconds).contains(&value.0)
    }

    pub fn choose(&self) -> Seconds {
        let mut rnd = rand::thread_rng();
        self.choose_with(&mut rnd)
    }

    pub fn choose_with<R: Rng>(&self, rnd: &mut R) -> Seconds {
        let range = self.min_seconds..=self.max_seconds;
        Seconds(rnd.gen_range(range))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    /// Chi-square statistic of `trials` draws from `draw` against a uniform
    /// distribution over `window`.
    fn chi_square(window: TimeWindow, trials: usize, mut draw: impl FnMut() -> Seconds) -> f64 {
        let width = (window.max_seconds - window.min_seconds + 1) as usize;
        let mut observed = vec![0u64; width];
        for _ in 0..trials {
            let sample = draw();
            observed[(sample.0 - window.min_seconds) as usize] += 1;
        }
        let expected = trials as f64 / width as f64;
        observed
            .iter()
            .map(|&o| {
                let diff = o as f64 - expected;
                diff * diff / expected
            })
            .sum()
    }

    // Normal approximation of the 99.9th percentile of chi-square(df).
    fn critical_value(df: f64) -> f64 {
        df + 3.09 * (2.0 * df).sqrt()
    }

    #[test]
    fn rejects_inverted_bounds() {
        let result = TimeWindow::new(Seconds(900), Seconds(300));
        assert_eq!(
            result,
            Err(InvalidRangeError {
                lower: 900,
                upper: 300
            })
        );
    }

    #[test]
    fn degenerate_window_always_returns_its_bound() {
        let window = TimeWindow::new(Seconds(300), Seconds(300)).unwrap();
        assert_eq!(window, TimeWindow::fixed(Seconds(300)));
        for _ in 0..1_000 {
            assert_eq!(window.choose(), Seconds(300));
        }
    }

    #[test]
    fn samples_stay_within_bounds() {
        let window = TimeWindow::new(Seconds(60), Seconds(300)).unwrap();
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..100_000 {
            let sample = window.choose();
            assert!(window.contains(sample), "{} out of bounds", sample);
            seen_min |= sample == window.min();
            seen_max |= sample == window.max();
        }
        assert!(seen_min && seen_max, "both bounds are inclusive");
    }

    #[test]
    fn activity_range_is_uniform() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let window = TimeWindow::new(Seconds(300), Seconds(900)).unwrap();
        let statistic = chi_square(window, 100_000, || window.choose_with(&mut rng));
        assert!(statistic < critical_value(600.0), "chi-square {}", statistic);
    }

    #[test]
    fn delay_range_is_uniform() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let window = TimeWindow::new(Seconds(60), Seconds(300)).unwrap();
        let statistic = chi_square(window, 100_000, || window.choose_with(&mut rng));
        assert!(statistic < critical_value(240.0), "chi-square {}", statistic);
    }

    #[test]
    fn uniformity_check_rejects_a_missing_upper_bound() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let window = TimeWindow::new(Seconds(300), Seconds(900)).unwrap();
        let statistic = chi_square(window, 100_000, || Seconds(rng.gen_range(300..900)));
        assert!(statistic > critical_value(600.0), "chi-square {}", statistic);
    }

    #[test]
    fn seeded_rng_reproduces_samples() {
        let window = TimeWindow::new(Seconds(300), Seconds(900)).unwrap();
        let first: Vec<_> = {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            (0..16).map(|_| window.choose_with(&mut rng)).collect()
        };
        let second: Vec<_> = {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            (0..16).map(|_| window.choose_with(&mut rng)).collect()
        };
        assert_eq!(first, second);
    }
}
