use serde::{Serialize, Deserialize};

use crate::error::{RegressionError, Result};
use crate::math::coefs::Coefs;

pub const LEARNING_RATE: f64 = 0.001;
pub const STEPS: usize = 100_000;
pub const DATA_SIZE: usize = 2000;
pub const X_UPPER_BOUND: f64 = 20.0;
pub const NOISE_UPPER_BOUND: f64 = 1.0;
pub const TRUE_A: f64 = 4.0;
pub const TRUE_B: f64 = 2.0;
pub const INITIAL_A: f64 = 1.0;
pub const INITIAL_B: f64 = 0.0;

/// Everything one regression run needs.
///
/// `Default` reproduces the built-in constants above. The binary never reads
/// these from the command line or the environment.
///
/// # Fields
/// - `learning_rate`     — gradient step multiplier
/// - `steps`             — exact number of descent iterations
/// - `data_size`         — number of synthetic observations
/// - `x_upper_bound`     — `x` is drawn from `[0, x_upper_bound)`
/// - `noise_upper_bound` — additive noise is drawn from `[0, noise_upper_bound)`
/// - `true_coefs`        — line the data is generated around
/// - `initial_coefs`     — starting point of the descent
/// - `seed`              — `Some` makes data generation reproducible;
///                         `None` seeds from OS entropy
/// - `guard_divergence`  — stop with an error on the first non-finite iterate
/// - `log_every`         — emit a debug progress record every N steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionConfig {
    pub learning_rate: f64,
    pub steps: usize,
    pub data_size: usize,
    pub x_upper_bound: f64,
    pub noise_upper_bound: f64,
    pub true_coefs: Coefs,
    pub initial_coefs: Coefs,
    pub seed: Option<u64>,
    pub guard_divergence: bool,
    pub log_every: Option<usize>,
}

impl Default for RegressionConfig {
    fn default() -> Self {
        RegressionConfig {
            learning_rate: LEARNING_RATE,
            steps: STEPS,
            data_size: DATA_SIZE,
            x_upper_bound: X_UPPER_BOUND,
            noise_upper_bound: NOISE_UPPER_BOUND,
            true_coefs: Coefs::new(TRUE_A, TRUE_B),
            initial_coefs: Coefs::new(INITIAL_A, INITIAL_B),
            seed: None,
            guard_divergence: true,
            log_every: Some(STEPS / 10),
        }
    }
}

impl RegressionConfig {
    /// Rejects non-positive sizes, rates and bounds before any work is done.
    pub fn validate(&self) -> Result<()> {
        RegressionError::require_positive("learning_rate", self.learning_rate)?;
        RegressionError::require_positive("data_size", self.data_size as f64)?;
        RegressionError::require_positive("x_upper_bound", self.x_upper_bound)?;
        RegressionError::require_positive("noise_upper_bound", self.noise_upper_bound)?;
        if self.log_every == Some(0) {
            return Err(RegressionError::InvalidConfiguration { field: "log_every", value: 0.0 });
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: RegressionError) -> &'static str {
        match err {
            RegressionError::InvalidConfiguration { field, .. } => field,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn defaults_are_valid() {
        let config = RegressionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.true_coefs, Coefs::new(4.0, 2.0));
        assert_eq!(config.initial_coefs, Coefs::new(1.0, 0.0));
        assert_eq!(config.steps, 100_000);
        assert_eq!(config.data_size, 2000);
    }

    #[test]
    fn each_invalid_field_is_reported() {
        let base = RegressionConfig::default();

        let config = RegressionConfig { learning_rate: 0.0, ..base.clone() };
        assert_eq!(field_of(config.validate().unwrap_err()), "learning_rate");

        let config = RegressionConfig { data_size: 0, ..base.clone() };
        assert_eq!(field_of(config.validate().unwrap_err()), "data_size");

        let config = RegressionConfig { x_upper_bound: -3.0, ..base.clone() };
        assert_eq!(field_of(config.validate().unwrap_err()), "x_upper_bound");

        let config = RegressionConfig { noise_upper_bound: f64::NAN, ..base.clone() };
        assert_eq!(field_of(config.validate().unwrap_err()), "noise_upper_bound");

        let config = RegressionConfig { log_every: Some(0), ..base };
        assert_eq!(field_of(config.validate().unwrap_err()), "log_every");
    }

    #[test]
    fn zero_steps_is_allowed() {
        let config = RegressionConfig { steps: 0, ..RegressionConfig::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn serializes_to_json() {
        let json = serde_json::to_value(RegressionConfig::default().with_seed(9)).unwrap();
        assert_eq!(json["seed"], 9);
        assert_eq!(json["true_coefs"]["a"], 4.0);
        assert_eq!(json["learning_rate"], 0.001);
    }
}
