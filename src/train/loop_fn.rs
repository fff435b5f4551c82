use std::time::Instant;

use log::{debug, log_enabled, Level};

use crate::data::dataset::Dataset;
use crate::error::{RegressionError, Result};
use crate::loss::mse::MseLoss;
use crate::math::coefs::Coefs;
use crate::optim::gd::GradientDescent;
use crate::train::fit_stats::Fit;
use crate::train::train_config::FitConfig;

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Runs exactly `steps` full-batch gradient descent updates from `initial`
/// and returns the last iterate.
///
/// No convergence test and no divergence check: with a learning rate that is
/// too large the result is silently non-finite. `steps == 0` returns
/// `initial` unchanged.
pub fn optimize(dataset: &Dataset, initial: Coefs, learning_rate: f64, steps: usize) -> Coefs {
    let optimizer = GradientDescent::new(learning_rate);
    (0..steps).fold(initial, |coefs, _| optimizer.step(dataset, coefs))
}

/// Trains from `initial` for `config.steps` steps, timing the loop and
/// evaluating the final loss.
///
/// The clock starts immediately before the first step and stops immediately
/// after the last; the final loss evaluation is not timed.
///
/// # Errors
/// `NumericDivergence` if `config.guard_divergence` is set and an iterate
/// becomes non-finite. The error carries the 1-based step that produced it.
pub fn fit(
    dataset: &Dataset,
    initial: Coefs,
    optimizer: &GradientDescent,
    config: &FitConfig,
) -> Result<Fit> {
    let progress_every = config.log_every.filter(|&k| k > 0 && log_enabled!(Level::Debug));

    let mut coefs = initial;

    let t_start = Instant::now();
    for step in 1..=config.steps {
        coefs = optimizer.step(dataset, coefs);

        if config.guard_divergence && !coefs.is_finite() {
            return Err(RegressionError::NumericDivergence { step, coefs });
        }

        if let Some(every) = progress_every {
            if step % every == 0 {
                report_progress(dataset, coefs, step, config.steps);
            }
        }
    }
    let elapsed = t_start.elapsed();

    Ok(Fit {
        coefs,
        loss: MseLoss::loss(dataset, coefs),
        steps: config.steps,
        elapsed,
    })
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn report_progress(dataset: &Dataset, coefs: Coefs, step: usize, total: usize) {
    let loss = MseLoss::loss(dataset, coefs);
    debug!("step {step}/{total}: loss={loss:.6} {coefs}");
}
