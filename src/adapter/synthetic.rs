//! Synthetic display enrichment.
//!
//! The backend does not provide short-window win rates, price history,
//! simulated trade counts and similar panel filler. Every such value is
//! produced here and nowhere else, so it can be told apart from derived facts
//! and pinned with a seed in tests.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source for cosmetic, non-reproducible fields.
pub struct Jitter {
    rng: StdRng,
}

impl Jitter {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic source for tests.
    #[cfg(test)]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// `base` plus uniform noise in `[-spread/2, spread/2)`.
    pub fn around(&mut self, base: f64, spread: f64) -> f64 {
        base + (self.rng.gen::<f64>() - 0.5) * spread
    }

    /// Uniform value in `[low, low + width)`.
    pub fn between(&mut self, low: f64, width: f64) -> f64 {
        low + self.rng.gen::<f64>() * width
    }

    /// Simulated copy count in `[5, 20)`.
    pub fn trade_count(&mut self) -> u32 {
        self.rng.gen_range(5..20)
    }

    /// A moment within the last `max_hours`.
    pub fn recent(&mut self, now: DateTime<Utc>, max_hours: f64) -> DateTime<Utc> {
        let ms = self.rng.gen::<f64>() * max_hours * 3_600_000.0;
        now - Duration::milliseconds(ms as i64)
    }

    /// A moment between `min_days` and `min_days + span_days` ago.
    pub fn days_ago(&mut self, now: DateTime<Utc>, min_days: f64, span_days: f64) -> DateTime<Utc> {
        let days = self.between(min_days, span_days);
        now - Duration::milliseconds((days * 86_400_000.0) as i64)
    }
}

impl Default for Jitter {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let mut jitter = Jitter::seeded(7);
        for _ in 0..500 {
            let v = jitter.around(50.0, 10.0);
            assert!((45.0..55.0).contains(&v));

            let c = jitter.trade_count();
            assert!((5..20).contains(&c));

            let b = jitter.between(100_000.0, 1_000_000.0);
            assert!((100_000.0..1_100_000.0).contains(&b));
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = Jitter::seeded(42);
        let mut b = Jitter::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.trade_count(), b.trade_count());
        }
    }

    #[test]
    fn test_time_windows() {
        let now = Utc::now();
        let mut jitter = Jitter::seeded(1);

        let recent = jitter.recent(now, 24.0);
        assert!(recent <= now && recent >= now - Duration::hours(24));

        let joined = jitter.days_ago(now, 90.0, 365.0);
        assert!(joined <= now - Duration::days(90));
        assert!(joined >= now - Duration::days(455));
    }
}
