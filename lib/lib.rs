#![allow(dead_code, non_snake_case)]

//! Provides functions and higher-level constructs for automated solution of
//! bound states of the one-dimensional, time-independent Schrödinger equation
//! (TISE) for conservative potentials sampled on a uniform coordinate grid.
//!
//! The Hamiltonian is discretized with a three-point finite-difference stencil
//! into a symmetric tridiagonal matrix, held as two flat arrays and never
//! materialized densely. Eigenvalues are located by Sturm-sequence bisection
//! and eigenvectors recovered by inverse iteration, so only the lowest
//! `num_eigen` states are ever computed. All returned wavefunctions are
//! normalized against the continuum inner product via trapezoidal quadrature.
//!
//! See [`docs`] for theoretical background.
//!
//! ```
//! use ndarray as nd;
//! use qwell::{ potential::PolyPotential, solve::{ Config, solve } };
//!
//! let x: nd::Array1<f64> = nd::Array1::linspace(-0.3, 0.3, 1000);
//! let V = PolyPotential::new(50.0, -200.0, 500.0).evaluate(&x);
//! let sols = solve(&x, &V, Config { num_eigen: 3, ..Config::default() })
//!     .unwrap();
//! assert_eq!(sols.len(), 3);
//! assert!(sols[0].e < sols[1].e);
//! ```

pub mod error;
pub mod potential;
pub mod tridiag;
pub mod solve;
pub mod utils;

pub mod docs;

pub(crate) const DEF_MASS: f64 = 1.0;
pub(crate) const DEF_HBAR: f64 = 1.0;
pub(crate) const DEF_NUM_EIGEN: usize = 5;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
