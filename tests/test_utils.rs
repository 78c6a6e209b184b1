#![allow(dead_code)] // each test crate uses a different subset of these helpers

use bs_sensitivity_lib::OptionParameters;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// S = K = 100, one year, 5% rate, 20% vol
pub fn reference_params() -> OptionParameters {
    OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2)
}

/// Deterministic stream of well-posed inputs (T > 0, σ > 0).
pub fn random_params(seed: u64, count: usize) -> Vec<OptionParameters> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            OptionParameters::new(
                rng.gen_range(5.0..500.0),
                rng.gen_range(5.0..500.0),
                rng.gen_range(0.01..5.0),
                rng.gen_range(0.0..0.2),
                rng.gen_range(0.01..2.0),
            )
        })
        .collect()
}

pub fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
    assert!(
        (actual - expected).abs() < tol,
        "{}: expected {}, got {} (tolerance {})",
        what,
        expected,
        actual,
        tol
    );
}
