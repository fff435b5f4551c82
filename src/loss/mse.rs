use crate::data::dataset::Dataset;
use crate::math::coefs::Coefs;

pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((y - (a·x + b))²)
    pub fn loss(dataset: &Dataset, coefs: Coefs) -> f64 {
        let n = dataset.len() as f64;
        dataset.iter()
            .map(|obs| (obs.y - coefs.predict(obs.x)).powi(2))
            .sum::<f64>() / n
    }

    /// Gradient of `loss` with respect to `(a, b)`:
    /// (2/n)·Σ(-x·r), (2/n)·Σ(-r)  where r = y - (a·x + b)
    pub fn gradient(dataset: &Dataset, coefs: Coefs) -> Coefs {
        let n = dataset.len() as f64;
        let (sum_a, sum_b) = dataset.iter()
            .fold((0.0, 0.0), |(sum_a, sum_b), obs| {
                let residual = obs.y - coefs.predict(obs.x);
                (sum_a - obs.x * residual, sum_b - residual)
            });
        Coefs::new(2.0 * sum_a / n, 2.0 * sum_b / n)
    }
}
