//! Discretization of the one-dimensional, time-independent Schrödinger
//! equation (TISE) Hamiltonian and solution of its lowest bound states.
//!
//! The kinetic term is discretized with the three-point second-difference
//! stencil, giving a symmetric tridiagonal Hamiltonian
//! ```text
//! H[i, i]     = ħ²/(m δx²) + V(x[i])
//! H[i, i ± 1] = -ħ²/(2 m δx²)
//! ```
//! which is kept in its implicit two-array form and handed to the
//! [`tridiag`][crate::tridiag] eigensolver. Grid spacing is taken from the
//! first two samples only; uniformity of the rest of the grid is assumed, not
//! validated.

use std::cmp;
use ndarray as nd;
use crate::{
    Arr1,
    error::{ LengthError, QError },
    tridiag,
    utils::wf_norm,
    DEF_MASS,
    DEF_HBAR,
    DEF_NUM_EIGEN,
};

pub type QResult<T> = Result<T, QError>;

// trapezoidal norms below this bound are treated as numerically degenerate
// rather than divided through
pub(crate) const NORM_EPSILON: f64 = 1e-12;

/// A single bound-state solution to the TISE.
///
/// This struct is usually only returned by a solver function; you probably
/// won't ever instantiate it yourself. The wavefunction carries unit norm
/// under trapezoidal quadrature over the coordinate grid it was solved on.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Energy
    pub e: f64,
    /// Wavefunction
    pub wf: nd::Array1<f64>,
}

impl Solution {
    /// Compare two `Solution`s by their energy.
    pub fn cmp_energy(&self, other: &Self) -> Option<cmp::Ordering> {
        self.e.partial_cmp(&other.e)
    }
}

/// Solver parameters.
///
/// `mass` and `hbar` default to 1 (natural units) when left as `None`;
/// `num_eigen` must satisfy `1 ≤ num_eigen ≤ N` for a grid of `N` points.
#[derive(Copy, Clone, Debug)]
pub struct Config {
    /// Number of lowest eigenstates to compute.
    pub num_eigen: usize,
    /// Effective particle mass (default: `1.0`).
    pub mass: Option<f64>,
    /// Reduced Planck constant (default: `1.0`).
    pub hbar: Option<f64>,
}

impl Default for Config {
    fn default() -> Self {
        Self { num_eigen: DEF_NUM_EIGEN, mass: None, hbar: None }
    }
}

// main and off diagonals of the discretized Hamiltonian; the dense matrix is
// never formed
fn hamiltonian<S>(dx: f64, V: &Arr1<S>, mass: f64, hbar: f64)
    -> (Vec<f64>, Vec<f64>)
where S: nd::Data<Elem = f64>
{
    let n = V.len();
    let coeff = hbar.powi(2) / (2.0 * mass * dx.powi(2));
    let diag: Vec<f64> = V.iter().map(|Vk| 2.0 * coeff + *Vk).collect();
    let off = vec![-coeff; n - 1];
    (diag, off)
}

/// Solve for the `config.num_eigen` lowest bound states of the potential `V`
/// sampled over the coordinate grid `x`.
///
/// Returned solutions are in ascending energy order, and every wavefunction
/// is normalized so that its trapezoidal approximation of ∫|ψ|² dx equals 1.
/// Eigenvectors are defined only up to an overall sign; this implementation
/// fixes the sign deterministically (largest-magnitude component positive),
/// so identical inputs produce identical outputs.
///
/// Grid spacing is computed from `x[0]` and `x[1]` and assumed constant for
/// the remaining samples.
pub fn solve<S, T>(x: &Arr1<S>, V: &Arr1<T>, config: Config)
    -> QResult<Vec<Solution>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    LengthError::check(x, V)?;
    let n = x.len();
    QError::check_domain_len(n)?;
    let dx = x[1] - x[0];
    QError::check_spacing(dx)?;
    let mass = config.mass.unwrap_or(DEF_MASS);
    let hbar = config.hbar.unwrap_or(DEF_HBAR);
    QError::check_mass(mass)?;
    QError::check_hbar(hbar)?;
    QError::check_num_eigen(config.num_eigen, n)?;

    let (diag, off) = hamiltonian(dx, V, mass, hbar);
    let (evals, evecs) = tridiag::eigenpairs_lowest(&diag, &off, config.num_eigen);
    evals.into_iter().zip(evecs).enumerate()
        .map(|(index, (e, mut wf))| {
            let norm = wf_norm(&wf, dx).sqrt();
            if norm < NORM_EPSILON {
                return Err(QError::NormUnderflow { index, norm });
            }
            wf /= norm;
            Ok(Solution { e, wf })
        })
        .collect()
}

/// Simple record to keep track of coordinate and potential arrays.
///
/// Arrays borrowed from this type are guaranteed to have the same length and
/// to be sampled (or generated) for a coordinate grid with uniform spacing.
#[derive(Clone, Debug)]
pub struct System {
    // coordinate array
    x: nd::Array1<f64>,
    // coordinate array grid spacing
    dx: f64,
    // potential array
    V: nd::Array1<f64>,
    // array sizes
    n: usize,
}

impl System {
    /// Create a new `System`, generating the coordinate array from
    /// "linspace-style" arguments (start, inclusive end, and an array length)
    /// and sampling the potential over it.
    ///
    /// *Panics if the number of points is less than 2*.
    pub fn new_linspace<F>(xargs: (f64, f64, usize), V: F) -> Self
    where F: FnMut(f64) -> f64
    {
        let x: nd::Array1<f64>
            = nd::Array1::linspace(xargs.0, xargs.1, xargs.2);
        let dx = x[1] - x[0];
        let V: nd::Array1<f64> = x.mapv(V);
        let n = xargs.2;
        Self { x, dx, V, n }
    }

    /// Create a new `System`, generating the coordinate array from
    /// "range-style" arguments (start, exclusive end, and a step size).
    pub fn new_range<F>(xargs: (f64, f64, f64), V: F) -> Self
    where F: FnMut(f64) -> f64
    {
        let x: nd::Array1<f64>
            = nd::Array1::range(xargs.0, xargs.1, xargs.2);
        let dx = xargs.2;
        let V: nd::Array1<f64> = x.mapv(V);
        let n = x.len();
        Self { x, dx, V, n }
    }

    /// Create a new `System` from bare coordinate and potential arrays.
    pub fn new_arrays(x: nd::Array1<f64>, V: nd::Array1<f64>)
        -> QResult<Self>
    {
        LengthError::check(&x, &V)?;
        let n = x.len();
        QError::check_domain_len(n)?;
        let dx = x[1] - x[0];
        QError::check_spacing(dx)?;
        Ok(Self { x, dx, V, n })
    }

    /// Get a reference to the coordinate array.
    pub fn get_x(&self) -> &nd::Array1<f64> { &self.x }

    /// Get a reference to the potential array.
    pub fn get_V(&self) -> &nd::Array1<f64> { &self.V }

    /// Get the coordinate array grid spacing.
    pub fn get_dx(&self) -> f64 { self.dx }

    /// Get the length of the coordinate and potential arrays.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.n }

    /// Thin interface to [`solve`].
    pub fn solve(&self, config: Config) -> QResult<Vec<Solution>> {
        solve(&self.x, &self.V, config)
    }
}
