pub mod trainer;
pub mod fit_stats;
pub mod train_config;
pub mod loop_fn;

pub use trainer::{run, RunReport};
pub use fit_stats::Fit;
pub use train_config::FitConfig;
pub use loop_fn::{fit, optimize};
