use crate::{data::dataset::Dataset, loss::mse::MseLoss, math::coefs::Coefs};

/// Plain batch gradient descent with a fixed step size.
#[derive(Debug, Clone, Copy)]
pub struct GradientDescent {
    pub learning_rate: f64,
}

impl GradientDescent {
    pub fn new(learning_rate: f64) -> GradientDescent {
        GradientDescent { learning_rate }
    }

    /// One update over the full dataset: `coefs - lr * ∇loss(coefs)`.
    pub fn step(&self, dataset: &Dataset, coefs: Coefs) -> Coefs {
        let grad = MseLoss::gradient(dataset, coefs);
        coefs - grad * self.learning_rate
    }
}
