//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Discretization](#discretization)
//! - [Eigensolve](#eigensolve)
//! - [Normalization](#normalization)
//!
//! # Background
//! Solution of the one-dimensional time-independent Schrödinger equation
//! (TISE) amounts to finding eigenpairs of the Hamiltonian operator
//! ```text
//!       ħ²  ∂²
//! H = - -- --- + V(x)
//!       2m ∂x²
//! ```
//! for a (conservative) potential *V*(*x*) and a relevant mass *m*. Since the
//! operator is Hermitian, its eigenvalues are real and its eigenfunctions can
//! be taken real-valued; bound states additionally decay toward the edges of
//! any domain that truncates the potential well.
//!
//! # Discretization
//! Assuming a uniform discretization
//! ```text
//! x[i] = x₀ + i δx, i ∊ {0, ..., N - 1}
//! ψ[i] = ψ(x[i])
//! V[i] = V(x[i])
//! ```
//! the second derivative is approximated with the three-point stencil
//! ```text
//! ψ''(x[i]) ≈ (ψ[i - 1] - 2 ψ[i] + ψ[i + 1]) / δx²
//! ```
//! which has an *O*(*δx*²) error term. Substituting into the TISE turns the
//! operator into a symmetric tridiagonal matrix,
//! ```text
//! H[i, i]     = ħ²/(m δx²) + V[i]
//! H[i, i ± 1] = -ħ²/(2 m δx²)
//! ```
//! Off the three central diagonals every element is zero, so the matrix is
//! stored as only two flat arrays (main diagonal, off-diagonal). Truncating
//! the stencil at the domain edges is equivalent to imposing hard-wall
//! (Dirichlet) boundary conditions, which is accurate exactly when the domain
//! is wide enough for bound states to decay before reaching it.
//!
//! # Eigensolve
//! The symmetric tridiagonal structure admits eigensolution without dense
//! *O*(*N*³) factorization. For a shift *λ*, the LDLT factorization of
//! *H* − *λI* proceeds by the scalar recurrence
//! ```text
//! q[0] = d[0] - λ
//! q[i] = (d[i] - λ) - e[i - 1]² / q[i - 1]
//! ```
//! and Sturm's theorem states that the number of negative *q*[*i*] equals the
//! number of eigenvalues below *λ*. Bisection on this count inside the
//! Gershgorin bounds of the spectrum pins down the *k*-th smallest eigenvalue
//! to machine precision, for any *k*, in *O*(*N* log 1/*ε*) operations; the
//! lowest `num_eigen` eigenvalues are found this way, ascending by
//! construction.
//!
//! Eigenvectors are then recovered by inverse iteration: for a converged
//! eigenvalue *λ*, repeated solves of
//! ```text
//! (H - λ I) w = v,  v ← w / ‖w‖
//! ```
//! converge onto the associated eigenvector in a few sweeps, since the
//! eigencomponent of *v* along *λ* is amplified by the reciprocal of its
//! (tiny) residual distance. Each solve is a Thomas-algorithm sweep over the
//! two diagonal arrays, *O*(*N*) per iteration, with pivots clamped away from
//! zero so a shift sitting exactly on an eigenvalue stays finite. Iterates
//! for eigenvalues closer to each other than the resolvable gap are
//! reorthogonalized against one another, so degenerate subspaces come out
//! orthogonal even though the basis chosen within them is arbitrary.
//!
//! # Normalization
//! Raw eigenvectors carry unit *Euclidean* norm, which is not the physical
//! normalization: the continuum condition is
//! ```text
//! ∫ |ψ(x)|² dx = 1
//! ```
//! approximated here by trapezoidal quadrature over the coordinate grid,
//! ```text
//!            δx
//! ∫ f dx ≈  --- (f[0] + 2 f[1] + ... + 2 f[N - 2] + f[N - 1])
//!            2
//! ```
//! Every returned wavefunction is divided by the square root of this
//! integral as a mandatory post-processing pass. A near-zero denominator is
//! reported as a distinct numerical-degeneracy error instead of being divided
//! through.
