/// Configuration for a `fit` run.
///
/// # Fields
/// - `steps`            — exact number of descent iterations; there is no
///                        convergence test
/// - `guard_divergence` — when `true`, the loop checks every iterate and
///                        stops with `NumericDivergence` on the first
///                        non-finite value; when `false`, NaN and infinity
///                        propagate silently to the end of the run
/// - `log_every`        — emit a `debug` progress record every N steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitConfig {
    pub steps: usize,
    pub guard_divergence: bool,
    pub log_every: Option<usize>,
}

impl FitConfig {
    /// Creates a `FitConfig` with the divergence guard on and no progress logging.
    pub fn new(steps: usize) -> Self {
        FitConfig {
            steps,
            guard_divergence: true,
            log_every: None,
        }
    }
}
