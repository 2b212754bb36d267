//! Polynomial construction of (possibly asymmetric) potential wells.
//!
//! Potentials take the form
//! ```text
//! V(x) = a x² + b x³ + c x⁴ + d x⁵
//! ```
//! with the quintic coefficient *d* optional. Evaluation is pure and
//! elementwise; non-finite values (overflow, NaN) are propagated to the
//! caller untouched.

use ndarray as nd;
use crate::Arr1;

/// Coefficients of a polynomial potential well.
///
/// The quintic term is an explicit optional field; `None` is equivalent to a
/// coefficient of exactly 0.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PolyPotential {
    /// Quadratic coefficient (well depth).
    pub a: f64,
    /// Cubic coefficient (leading asymmetry).
    pub b: f64,
    /// Quartic coefficient (barrier height).
    pub c: f64,
    /// Optional quintic coefficient (fine asymmetry control).
    pub d: Option<f64>,
}

impl PolyPotential {
    /// Create a new `PolyPotential` with no quintic term.
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c, d: None }
    }

    /// Like [`Self::new`], but with the quintic coefficient set.
    pub fn with_quintic(self, d: f64) -> Self {
        Self { d: Some(d), ..self }
    }

    /// Evaluate the potential at a single point.
    pub fn value(&self, x: f64) -> f64 {
        let d = self.d.unwrap_or(0.0);
        self.a * x.powi(2)
            + self.b * x.powi(3)
            + self.c * x.powi(4)
            + d * x.powi(5)
    }

    /// Evaluate the potential over a coordinate array.
    pub fn evaluate<S>(&self, x: &Arr1<S>) -> nd::Array1<f64>
    where S: nd::Data<Elem = f64>
    {
        x.mapv(|xk| self.value(xk))
    }
}
