//! Miscellaneous numerical tools.

use std::ops::Add;
use ndarray::{ self as nd, Ix1 };
use num_traits::Float;

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = y.len();
    let two = A::one() + A::one();
    (dx / two) * (
        y[0]
        + two * y.iter().skip(1).take(n - 2).copied().fold(A::zero(), A::add)
        + y[n - 1]
    )
}

/// Calculate the norm squared of a wavefunction under trapezoidal quadrature.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_norm<S, A>(q: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = q.len();
    let two = A::one() + A::one();
    (dx / two) * (
        q[0].powi(2)
        + two * q.iter().skip(1).take(n - 2).map(|qk| qk.powi(2))
            .fold(A::zero(), A::add)
        + q[n - 1].powi(2)
    )
}

/// Calculate the inner product of two wavefunctions under trapezoidal
/// quadrature.
///
/// *Panics if either array has length less than 2*.
pub fn wf_dot<S, T, A>(
    q: &nd::ArrayBase<S, Ix1>,
    p: &nd::ArrayBase<T, Ix1>,
    dx: A,
) -> A
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = q.len().min(p.len());
    let two = A::one() + A::one();
    (dx / two) * (
        q[0] * p[0]
        + two * q.iter().zip(p).skip(1).take(n - 2)
            .fold(A::zero(), |acc, (qk, pk)| acc + *qk * *pk)
        + q[n - 1] * p[n - 1]
    )
}
