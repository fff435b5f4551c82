use crate::math::coefs::Coefs;

/// The result type used across the crate.
pub type Result<T> = std::result::Result<T, RegressionError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RegressionError {
    /// A configuration value that must be strictly positive (and finite) was not.
    #[error("invalid configuration: `{field}` must be positive and finite, got {value}")]
    InvalidConfiguration { field: &'static str, value: f64 },

    #[error("a dataset needs at least one observation")]
    EmptyDataset,

    /// The iterate left the finite range; `step` is 1-based.
    #[error("gradient descent diverged at step {step} ({coefs})")]
    NumericDivergence { step: usize, coefs: Coefs },
}

impl RegressionError {
    /// Checks that `value` is finite and strictly positive.
    pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<()> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(RegressionError::InvalidConfiguration { field, value })
        }
    }
}
