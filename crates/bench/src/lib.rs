use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn apply_runtime_config_for_size<M: Measurement>(size: usize, group: &mut BenchmarkGroup<'_, M>) {
    if size <= 1_024 {
        apply_small_runtime_config(group);
    } else if size <= 16_384 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Input shapes for sorting benchmarks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Shape {
    RandomUniform,
    /// Ascending data with 1% of positions swapped.
    NearlySorted1pctSwaps,
    /// `runs` ascending runs dealt round-robin.
    Interleaved { runs: u64 },
    Descending,
}

impl Shape {
    pub fn label(self) -> String {
        match self {
            Self::RandomUniform => "random_uniform".to_owned(),
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps".to_owned(),
            Self::Interleaved { runs } => format!("interleaved_{runs}"),
            Self::Descending => "descending".to_owned(),
        }
    }
}

pub fn generate<R: Rng + ?Sized>(rng: &mut R, shape: Shape, size: usize) -> Vec<u64> {
    let n = size as u64;
    match shape {
        Shape::RandomUniform => (0..size).map(|_| rng.random::<u64>()).collect(),
        Shape::NearlySorted1pctSwaps => {
            let mut data: Vec<u64> = (0..n).collect();
            if size > 0 {
                for _ in 0..(size / 100).max(1) {
                    let a = rng.random_range(0..size);
                    let b = rng.random_range(0..size);
                    data.swap(a, b);
                }
            }
            data
        }
        Shape::Interleaved { runs } => {
            let runs = runs.max(1);
            (0..n).map(|i| (i % runs) * n + i / runs).collect()
        }
        Shape::Descending => (0..n).rev().collect(),
    }
}
