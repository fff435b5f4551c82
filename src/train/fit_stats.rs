use std::time::Duration;

use serde::Serialize;

use crate::math::coefs::Coefs;

/// Outcome of a completed `fit`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Fit {
    /// Coefficients after the last step.
    pub coefs: Coefs,
    /// MSE of `coefs` on the training data.
    pub loss: f64,
    /// Number of steps actually applied.
    pub steps: usize,
    /// Wall-clock time spent in the descent loop only.
    pub elapsed: Duration,
}
