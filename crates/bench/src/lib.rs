use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const RNG_SEED: u64 = 0x5EED_2026;

/// Sample size, warm-up and measurement budget for one input size.
#[derive(Clone, Copy, Debug)]
pub struct RuntimeConfig {
    pub sample_size: usize,
    pub warm_up: Duration,
    pub measurement: Duration,
}

impl RuntimeConfig {
    pub const SMALL: Self = Self::from_millis(15, 100, 200);
    pub const MEDIUM: Self = Self::from_millis(15, 500, 1_000);
    pub const LARGE: Self = Self::from_millis(10, 800, 1_500);

    const fn from_millis(sample_size: usize, warm_up_ms: u64, measurement_ms: u64) -> Self {
        Self {
            sample_size,
            warm_up: Duration::from_millis(warm_up_ms),
            measurement: Duration::from_millis(measurement_ms),
        }
    }

    pub fn for_size(size: usize) -> Self {
        if size <= 4_096 {
            Self::SMALL
        } else if size <= 16_384 {
            Self::MEDIUM
        } else {
            Self::LARGE
        }
    }

    pub fn apply<M: Measurement>(self, group: &mut BenchmarkGroup<'_, M>) {
        group.sample_size(self.sample_size);
        group.warm_up_time(self.warm_up);
        group.measurement_time(self.measurement);
    }
}

pub fn apply_runtime_config_for_size<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    size: usize,
) {
    RuntimeConfig::for_size(size).apply(group);
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// `count` point updates `(index, delta)` over `[0, len)`.
pub fn random_point_updates<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    count: usize,
    delta: std::ops::RangeInclusive<i64>,
) -> Vec<(usize, i64)> {
    (0..count)
        .map(|_| (rng.random_range(0..len), rng.random_range(delta.clone())))
        .collect()
}

/// `count` closed, non-empty ranges `[l, r]` over `[0, len)`.
pub fn random_closed_ranges<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    count: usize,
) -> Vec<(usize, usize)> {
    (0..count)
        .map(|_| {
            let l = rng.random_range(0..len);
            let r = rng.random_range(l..len);
            (l, r)
        })
        .collect()
}
