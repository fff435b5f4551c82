pub mod math;
pub mod data;
pub mod loss;
pub mod optim;
pub mod train;
pub mod config;
pub mod error;

// Convenience re-exports
pub use math::coefs::Coefs;
pub use data::dataset::{Dataset, Observation};
pub use loss::mse::MseLoss;
pub use optim::gd::GradientDescent;
pub use train::{fit, optimize, run, Fit, FitConfig, RunReport};
pub use config::RegressionConfig;
pub use error::{RegressionError, Result};
