use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::{
    config::RegressionConfig,
    data::dataset::Dataset,
    error::Result,
    math::coefs::Coefs,
    optim::gd::GradientDescent,
    train::{loop_fn::fit, train_config::FitConfig},
};

/// Summary of one regression run, in the order it is reported.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunReport {
    pub data_size: usize,
    pub steps: usize,
    pub loss: f64,
    pub coefs: Coefs,
    pub elapsed_secs: f64,
}

/// Validates `config`, generates the dataset and fits a line to it.
///
/// Nothing is generated or trained if the configuration is invalid.
pub fn run(config: &RegressionConfig) -> Result<RunReport> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let dataset = Dataset::generate(
        config.data_size,
        config.true_coefs,
        config.x_upper_bound,
        config.noise_upper_bound,
        &mut rng,
    )?;
    info!("generated {} observations around {}", dataset.len(), config.true_coefs);

    let optimizer = GradientDescent::new(config.learning_rate);
    let fit_config = FitConfig {
        steps: config.steps,
        guard_divergence: config.guard_divergence,
        log_every: config.log_every,
    };
    let outcome = fit(&dataset, config.initial_coefs, &optimizer, &fit_config)?;
    info!("fit finished: loss={:.6} {}", outcome.loss, outcome.coefs);

    Ok(RunReport {
        data_size: dataset.len(),
        steps: outcome.steps,
        loss: outcome.loss,
        coefs: outcome.coefs,
        elapsed_secs: outcome.elapsed.as_secs_f64(),
    })
}
