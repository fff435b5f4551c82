use rand::Rng;

use crate::error::{RegressionError, Result};
use crate::math::coefs::Coefs;

/// One `(x, y)` sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub x: f64,
    pub y: f64,
}

/// An ordered, non-empty, read-only collection of observations.
///
/// Each observation keeps its `x` and `y` together, so every consumer sees the
/// same `n`.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    observations: Vec<Observation>,
}

impl Dataset {
    /// Draws `n` points around the line `true_coefs`.
    ///
    /// For each point, `x` is uniform on `[0, x_upper_bound)` and a noise term
    /// uniform on `[0, noise_upper_bound)` is added to `a·x + b`. `x` is drawn
    /// before the noise of the same point.
    ///
    /// # Errors
    /// - `EmptyDataset` if `n == 0`
    /// - `InvalidConfiguration` if either bound is not positive and finite
    pub fn generate<R: Rng + ?Sized>(
        n: usize,
        true_coefs: Coefs,
        x_upper_bound: f64,
        noise_upper_bound: f64,
        rng: &mut R,
    ) -> Result<Dataset> {
        if n == 0 {
            return Err(RegressionError::EmptyDataset);
        }
        RegressionError::require_positive("x_upper_bound", x_upper_bound)?;
        RegressionError::require_positive("noise_upper_bound", noise_upper_bound)?;

        let observations = (0..n)
            .map(|_| {
                let x = rng.gen::<f64>() * x_upper_bound;
                let noise = rng.gen::<f64>() * noise_upper_bound;
                Observation { x, y: true_coefs.predict(x) + noise }
            })
            .collect();

        Ok(Dataset { observations })
    }

    /// Builds a dataset from explicit `(x, y)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Result<Dataset>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let observations: Vec<Observation> = pairs.into_iter()
            .map(|(x, y)| Observation { x, y })
            .collect();
        if observations.is_empty() {
            return Err(RegressionError::EmptyDataset);
        }
        Ok(Dataset { observations })
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn generated_points_respect_bounds() {
        let truth = Coefs::new(4.0, 2.0);
        let data = Dataset::generate(500, truth, 20.0, 1.0, &mut seeded(7)).unwrap();

        assert_eq!(data.len(), 500);
        for obs in &data {
            assert!((0.0..20.0).contains(&obs.x), "x out of range: {}", obs.x);
            let noise = obs.y - truth.predict(obs.x);
            assert!((-1e-12..1.0 + 1e-12).contains(&noise), "noise out of range: {noise}");
        }
    }

    #[test]
    fn same_seed_gives_same_dataset() {
        let truth = Coefs::new(4.0, 2.0);
        let first = Dataset::generate(100, truth, 20.0, 1.0, &mut seeded(42)).unwrap();
        let second = Dataset::generate(100, truth, 20.0, 1.0, &mut seeded(42)).unwrap();
        let other = Dataset::generate(100, truth, 20.0, 1.0, &mut seeded(43)).unwrap();

        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn zero_size_is_rejected() {
        let err = Dataset::generate(0, Coefs::zeros(), 20.0, 1.0, &mut seeded(1)).unwrap_err();
        assert_eq!(err, RegressionError::EmptyDataset);
    }

    #[test]
    fn non_positive_bounds_are_rejected() {
        let err = Dataset::generate(10, Coefs::zeros(), 0.0, 1.0, &mut seeded(1)).unwrap_err();
        assert!(matches!(err, RegressionError::InvalidConfiguration { field: "x_upper_bound", .. }));

        let err = Dataset::generate(10, Coefs::zeros(), 20.0, -1.0, &mut seeded(1)).unwrap_err();
        assert!(matches!(err, RegressionError::InvalidConfiguration { field: "noise_upper_bound", .. }));
    }

    #[test]
    fn from_pairs_keeps_order_and_rejects_empty_input() {
        let data = Dataset::from_pairs(vec![(1.0, 2.0), (3.0, 4.0)]).unwrap();
        assert_eq!(
            data.observations(),
            &[Observation { x: 1.0, y: 2.0 }, Observation { x: 3.0, y: 4.0 }]
        );

        assert_eq!(Dataset::from_pairs(Vec::new()).unwrap_err(), RegressionError::EmptyDataset);
    }
}
