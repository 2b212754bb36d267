//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned from bound-state solver functions.
#[derive(Debug, Error)]
pub enum QError {
    /// Returned when the coordinate grid is too short to define a spacing.
    #[error("coordinate arrays must be at least 2 elements long; got {0}")]
    DomainTooShort(usize),

    /// Returned when the leading grid spacing is zero or negative.
    #[error("coordinate arrays must be strictly increasing; got leading spacing {0:e}")]
    BadSpacing(f64),

    /// Returned when a non-positive `mass` value is encountered.
    #[error("mass must be greater than 0; got {0}")]
    BadMass(f64),

    /// Returned when a non-positive `hbar` value is encountered.
    #[error("hbar must be greater than 0; got {0}")]
    BadHbar(f64),

    /// Returned when the requested number of eigenstates is zero or exceeds
    /// the grid size.
    #[error("num_eigen must lie in 1..={n}; got {requested}")]
    BadNumEigen {
        /// Requested number of eigenstates.
        requested: usize,
        /// Number of grid points.
        n: usize,
    },

    /// Returned when a computed wavefunction has a numerically degenerate
    /// (near-zero) norm under trapezoidal quadrature, instead of dividing
    /// through and propagating non-finite values.
    #[error("wavefunction {index} has numerically degenerate norm {norm:e}")]
    NormUnderflow {
        /// Index of the offending eigenstate, counting from the ground state.
        index: usize,
        /// The offending norm.
        norm: f64,
    },

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),
}

impl QError {
    pub(crate) fn check_domain_len(n: usize) -> Result<(), Self> {
        (n >= 2).then_some(()).ok_or(Self::DomainTooShort(n))
    }

    pub(crate) fn check_spacing(dx: f64) -> Result<(), Self> {
        (dx > 0.0).then_some(()).ok_or(Self::BadSpacing(dx))
    }

    pub(crate) fn check_mass(mass: f64) -> Result<(), Self> {
        (mass > 0.0).then_some(()).ok_or(Self::BadMass(mass))
    }

    pub(crate) fn check_hbar(hbar: f64) -> Result<(), Self> {
        (hbar > 0.0).then_some(()).ok_or(Self::BadHbar(hbar))
    }

    pub(crate) fn check_num_eigen(requested: usize, n: usize)
        -> Result<(), Self>
    {
        (1..=n).contains(&requested).then_some(())
            .ok_or(Self::BadNumEigen { requested, n })
    }
}
