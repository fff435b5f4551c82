use serde::{Serialize, Deserialize};
use std::fmt;
use std::ops::{Add, Sub, Mul};

/// Slope and intercept of the line `y = a·x + b`.
///
/// The same shape doubles as a gradient vector, so the arithmetic below is
/// plain element-wise vector arithmetic. Values are never updated in place;
/// every optimizer step builds a new `Coefs`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coefs {
    pub a: f64,
    pub b: f64,
}

impl Coefs {
    pub fn new(a: f64, b: f64) -> Coefs {
        Coefs { a, b }
    }

    pub fn zeros() -> Coefs {
        Coefs::default()
    }

    /// Value of the line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.a * x + self.b
    }

    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite()
    }

    pub fn map<F>(&self, functor: F) -> Coefs
    where
        F: Fn(f64) -> f64,
    {
        Coefs::new(functor(self.a), functor(self.b))
    }
}

impl fmt::Display for Coefs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a={:.3}, b={:.3}", self.a, self.b)
    }
}

impl Add for Coefs {
    type Output = Coefs;

    fn add(self, rhs: Coefs) -> Coefs {
        Coefs::new(self.a + rhs.a, self.b + rhs.b)
    }
}

impl Sub for Coefs {
    type Output = Coefs;

    fn sub(self, rhs: Coefs) -> Coefs {
        Coefs::new(self.a - rhs.a, self.b - rhs.b)
    }
}

impl Mul<f64> for Coefs {
    type Output = Coefs;

    fn mul(self, rhs: f64) -> Coefs {
        self.map(|x| x * rhs)
    }
}
