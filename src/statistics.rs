use rand::distributions::Distribution;
use rand::Rng;
use serde::Serialize;
use statrs::distribution::Normal;
use statrs::statistics::Statistics;

use crate::prelude::*;

/// Number of draws behind the `/stats` summary.
pub const SAMPLE_SIZE: usize = 1000;

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,

    /// Population standard deviation.
    pub std: f64,

    pub min: f64,
    pub max: f64,
}

/// Draws `n` values from the standard normal distribution.
pub fn sample_standard_normal<R: Rng>(rng: &mut R, n: usize) -> Result<Vec<f64>> {
    let distribution = Normal::new(0.0, 1.0)?;
    Ok(distribution.sample_iter(rng).take(n).collect())
}

pub fn describe(sample: &[f64]) -> Result<Summary> {
    if sample.is_empty() {
        bail!("cannot describe an empty sample");
    }
    Ok(Summary {
        mean: Statistics::mean(sample),
        std: Statistics::population_std_dev(sample),
        min: Statistics::min(sample),
        max: Statistics::max(sample),
    })
}
