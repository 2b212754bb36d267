//! Eigensolver for symmetric tridiagonal matrices.
//!
//! The matrix is held implicitly as a main diagonal of length *N* and an
//! off-diagonal of length *N* − 1; no dense storage is ever allocated.
//! Eigenvalues are counted with the LDLT factorization (Sturm sequence) and
//! located by per-index bisection within Gershgorin bounds, which yields them
//! in ascending order by construction. Eigenvectors are recovered afterward by
//! inverse iteration with pivot-guarded Thomas solves.

use ndarray as nd;

// near-zero LDLT pivots are replaced with ±PIVOT_GUARD to avoid non-finite
// intermediates in the Sturm recurrence
const PIVOT_GUARD: f64 = 1e-300;

// bisection step cap per eigenvalue
const MAX_BISECT: usize = 200;

// inverse-iteration sweeps per eigenvector
const INVIT_SWEEPS: usize = 5;

// eigenvalues within this fraction of the Gershgorin span share a degenerate
// cluster for reorthogonalization purposes
const CLUSTER_REL: f64 = 1e-8;

/// Count eigenvalues strictly less than `lambda`.
///
/// The number of negative pivots in the LDLT factorization of `T - λI` equals
/// the number of eigenvalues below `λ`.
pub fn sturm_count(diag: &[f64], off: &[f64], lambda: f64) -> usize {
    let n = diag.len();
    if n == 0 { return 0; }

    let mut count = 0;
    let mut q = diag[0] - lambda;
    if q < 0.0 { count += 1; }

    for i in 1..n {
        let q_safe
            = if q.abs() < PIVOT_GUARD {
                if q >= 0.0 { PIVOT_GUARD } else { -PIVOT_GUARD }
            } else {
                q
            };
        q = (diag[i] - lambda) - off[i - 1] * off[i - 1] / q_safe;
        if q < 0.0 { count += 1; }
    }
    count
}

// bounds on the whole spectrum via Gershgorin disks, padded by one unit
fn gershgorin(diag: &[f64], off: &[f64]) -> (f64, f64) {
    let n = diag.len();
    let mut lo = f64::MAX;
    let mut hi = f64::MIN;
    for i in 0..n {
        let e_left = if i > 0 { off[i - 1].abs() } else { 0.0 };
        let e_right = if i < n - 1 { off[i].abs() } else { 0.0 };
        lo = lo.min(diag[i] - e_left - e_right);
        hi = hi.max(diag[i] + e_left + e_right);
    }
    (lo - 1.0, hi + 1.0)
}

/// Find the `num` smallest eigenvalues via Sturm bisection, in ascending
/// order.
///
/// Exact to machine precision for well-separated eigenvalues. Complexity is
/// O(`num` · N · log(1/ε)).
///
/// *Panics if `num` exceeds the matrix dimension*.
pub fn eigenvalues_lowest(diag: &[f64], off: &[f64], num: usize) -> Vec<f64> {
    let n = diag.len();
    assert!(num <= n, "requested {num} eigenvalues of a {n}x{n} matrix");
    if n == 0 { return Vec::new(); }
    if n == 1 { return vec![diag[0]; num.min(1)]; }

    let (lo, hi) = gershgorin(diag, off);
    let mut eigenvalues = Vec::with_capacity(num);
    for k in 0..num {
        let mut a = lo;
        let mut b = hi;
        for _ in 0..MAX_BISECT {
            let mid = 0.5 * (a + b);
            if (b - a) < 2.0 * f64::EPSILON * mid.abs().max(1.0) { break; }
            if sturm_count(diag, off, mid) <= k {
                a = mid;
            } else {
                b = mid;
            }
        }
        eigenvalues.push(0.5 * (a + b));
    }
    eigenvalues
}

// solve (T - λI) v = rhs with the Thomas algorithm; pivots with magnitude
// below `floor` are clamped to keep the sweep finite when λ sits at an
// eigenvalue
fn thomas_shifted(
    diag: &[f64],
    off: &[f64],
    lambda: f64,
    rhs: &[f64],
    floor: f64,
) -> Vec<f64> {
    let n = rhs.len();
    let mut c_prime = vec![0.0; n];
    let mut d_prime = vec![0.0; n];

    let mut den = guard(diag[0] - lambda, floor);
    c_prime[0] = if n > 1 { off[0] / den } else { 0.0 };
    d_prime[0] = rhs[0] / den;
    for i in 1..n {
        den = guard((diag[i] - lambda) - off[i - 1] * c_prime[i - 1], floor);
        if i < n - 1 { c_prime[i] = off[i] / den; }
        d_prime[i] = (rhs[i] - off[i - 1] * d_prime[i - 1]) / den;
    }

    let mut v = vec![0.0; n];
    v[n - 1] = d_prime[n - 1];
    for i in (0..n - 1).rev() {
        v[i] = d_prime[i] - c_prime[i] * v[i + 1];
    }
    v
}

fn guard(den: f64, floor: f64) -> f64 {
    if den.abs() < floor {
        if den >= 0.0 { floor } else { -floor }
    } else {
        den
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

// scale to unit Euclidean norm; false if the vector is numerically zero
fn normalize(v: &mut [f64]) -> bool {
    let norm = dot(v, v).sqrt();
    if norm < PIVOT_GUARD { return false; }
    v.iter_mut().for_each(|vk| { *vk /= norm; });
    true
}

// largest-magnitude component made positive; pins down the overall sign so
// that repeated solves are bit-identical
fn fix_sign(v: &mut [f64]) {
    let lead
        = v.iter().copied()
        .fold(0.0_f64, |acc, vk| if vk.abs() > acc.abs() { vk } else { acc });
    if lead < 0.0 {
        v.iter_mut().for_each(|vk| { *vk = -*vk; });
    }
}

// minimal deterministic PRNG for inverse-iteration starting vectors
struct LcgRng(u64);

impl LcgRng {
    fn new(seed: u64) -> Self { Self(seed.wrapping_add(1)) }

    fn next_u64(&mut self) -> u64 {
        self.0 = self.0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0
    }

    fn uniform(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Find the `num` smallest eigenvalues and their eigenvectors.
///
/// Eigenvalues are ascending; eigenvectors have unit Euclidean norm and their
/// largest-magnitude component positive. Vectors belonging to degenerate (or
/// numerically near-degenerate) eigenvalues are reorthogonalized against each
/// other, so the returned set spans the correct subspace, though the basis
/// chosen within it is not canonical.
///
/// *Panics if `num` exceeds the matrix dimension*.
pub fn eigenpairs_lowest(diag: &[f64], off: &[f64], num: usize)
    -> (Vec<f64>, Vec<nd::Array1<f64>>)
{
    let n = diag.len();
    let evals = eigenvalues_lowest(diag, off, num);
    if n <= 1 {
        let evecs = evals.iter().map(|_| nd::array![1.0]).collect();
        return (evals, evecs);
    }

    let (lo, hi) = gershgorin(diag, off);
    let span = (hi - lo).max(f64::MIN_POSITIVE);
    // ∞-norm of T sets the pivot floor for the shifted solves
    let tnorm
        = (0..n)
        .map(|i| {
            let e_left = if i > 0 { off[i - 1].abs() } else { 0.0 };
            let e_right = if i < n - 1 { off[i].abs() } else { 0.0 };
            diag[i].abs() + e_left + e_right
        })
        .fold(0.0_f64, f64::max);
    let floor = (f64::EPSILON * tnorm).max(PIVOT_GUARD);

    let mut rng = LcgRng::new(0x5eed);
    let mut vecs: Vec<Vec<f64>> = Vec::with_capacity(num);
    for &lam in evals.iter() {
        // nudge off the converged eigenvalue; far smaller than any resolvable
        // gap, but keeps the shifted system comfortably invertible
        let shift = lam + span * f64::EPSILON;
        let mut v: Vec<f64> = (0..n).map(|_| rng.uniform() - 0.5).collect();
        normalize(&mut v);
        for _ in 0..INVIT_SWEEPS {
            let mut w = thomas_shifted(diag, off, shift, &v, floor);
            for (i, prev) in vecs.iter().enumerate() {
                if (evals[i] - lam).abs() > CLUSTER_REL * span { continue; }
                let proj = dot(&w, prev);
                w.iter_mut().zip(prev).for_each(|(wk, pk)| *wk -= proj * pk);
            }
            if !normalize(&mut w) {
                // the projection annihilated the iterate; restart it
                w.iter_mut().for_each(|wk| { *wk = rng.uniform() - 0.5; });
                normalize(&mut w);
            }
            v = w;
        }
        fix_sign(&mut v);
        vecs.push(v);
    }
    (evals, vecs.into_iter().map(nd::Array1::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    // y = T x for the implicit tridiagonal representation
    fn apply(diag: &[f64], off: &[f64], x: &[f64]) -> Vec<f64> {
        let n = diag.len();
        (0..n)
            .map(|i| {
                let left = if i > 0 { off[i - 1] * x[i - 1] } else { 0.0 };
                let right = if i < n - 1 { off[i] * x[i + 1] } else { 0.0 };
                left + diag[i] * x[i] + right
            })
            .collect()
    }

    #[test]
    fn sturm_count_2x2() {
        // [[1, -1], [-1, 3]] → eigenvalues ≈ 0.382, 3.618
        let d = [1.0, 3.0];
        let e = [-1.0];
        assert_eq!(sturm_count(&d, &e, 0.0), 0);
        assert_eq!(sturm_count(&d, &e, 1.0), 1);
        assert_eq!(sturm_count(&d, &e, 4.0), 2);
    }

    #[test]
    fn chain_eigenvalues() {
        // tight-binding chain: d_i = 0, e_i = -1
        // spectrum: -2 cos(kπ/(N+1)) for k = 1..N
        let n = 50;
        let num = 5;
        let d = vec![0.0; n];
        let e = vec![-1.0; n - 1];
        let evals = eigenvalues_lowest(&d, &e, num);

        let mut exact: Vec<f64>
            = (1..=n)
            .map(|k| -2.0 * (k as f64 * std::f64::consts::PI / (n as f64 + 1.0)).cos())
            .collect();
        exact.sort_by(|a, b| a.partial_cmp(b).unwrap());
        for (k, (ev, ex)) in evals.iter().zip(&exact).enumerate() {
            assert!(
                (ev - ex).abs() < 1e-10,
                "k={k}, exact={ex:.8}, computed={ev:.8}"
            );
        }
    }

    #[test]
    fn eigenvalues_sorted() {
        let mut rng = LcgRng::new(42);
        let n = 200;
        let d: Vec<f64> = (0..n).map(|_| 4.0 * rng.uniform() - 2.0).collect();
        let e = vec![-1.0; n - 1];
        let evals = eigenvalues_lowest(&d, &e, n);
        for i in 1..n {
            assert!(
                evals[i] >= evals[i - 1] - 1e-12,
                "eigenvalues not sorted at index {i}"
            );
        }
    }

    #[test]
    fn eigenpair_residuals() {
        let mut rng = LcgRng::new(7);
        let n = 100;
        let d: Vec<f64> = (0..n).map(|_| 4.0 * rng.uniform() - 2.0).collect();
        let e = vec![-1.0; n - 1];
        let (evals, evecs) = eigenpairs_lowest(&d, &e, 6);
        for (lam, v) in evals.iter().zip(&evecs) {
            let v = v.as_slice().unwrap();
            let tv = apply(&d, &e, v);
            let resid
                = tv.iter().zip(v)
                .map(|(tvk, vk)| (tvk - lam * vk).abs())
                .fold(0.0_f64, f64::max);
            assert!(resid < 1e-8, "residual {resid:.2e} for λ = {lam:.6}");
        }
    }

    #[test]
    fn eigenvectors_orthonormal() {
        let n = 60;
        let d: Vec<f64> = (0..n).map(|i| (i as f64 * 0.83).sin()).collect();
        let e = vec![-0.5; n - 1];
        let (_, evecs) = eigenpairs_lowest(&d, &e, 8);
        for (i, vi) in evecs.iter().enumerate() {
            for (j, vj) in evecs.iter().enumerate() {
                let expected = if i == j { 1.0 } else { 0.0 };
                let d_ij
                    = dot(vi.as_slice().unwrap(), vj.as_slice().unwrap());
                assert!(
                    (d_ij - expected).abs() < 1e-8,
                    "⟨v{i}, v{j}⟩ = {d_ij:.2e}"
                );
            }
        }
    }

    #[test]
    fn degenerate_subspace_orthogonal() {
        // fully degenerate: T = 2 I
        let d = vec![2.0; 4];
        let e = vec![0.0; 3];
        let (evals, evecs) = eigenpairs_lowest(&d, &e, 4);
        for &ev in &evals {
            assert!((ev - 2.0).abs() < 1e-12, "got {ev}");
        }
        for i in 0..4 {
            for j in 0..i {
                let d_ij
                    = dot(
                        evecs[i].as_slice().unwrap(),
                        evecs[j].as_slice().unwrap(),
                    );
                assert!(d_ij.abs() < 1e-10, "⟨v{i}, v{j}⟩ = {d_ij:.2e}");
            }
        }
    }

    #[test]
    fn repeated_solves_identical() {
        let n = 80;
        let d: Vec<f64> = (0..n).map(|i| (i as f64 * 0.31).cos()).collect();
        let e = vec![-1.0; n - 1];
        let (ev1, vecs1) = eigenpairs_lowest(&d, &e, 3);
        let (ev2, vecs2) = eigenpairs_lowest(&d, &e, 3);
        assert_eq!(ev1, ev2);
        for (v1, v2) in vecs1.iter().zip(&vecs2) {
            assert_eq!(v1, v2);
        }
    }

    #[test]
    fn single_element_matrix() {
        let (evals, evecs) = eigenpairs_lowest(&[3.5], &[], 1);
        assert_eq!(evals, vec![3.5]);
        assert_eq!(evecs[0].len(), 1);
        assert!((evecs[0][0] - 1.0).abs() < 1e-15);
    }
}
