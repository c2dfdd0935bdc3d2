//! Augmented linear system of the periodic fit.
//!
//! For `n` samples the system is `(n + 4) x (n + 4)`:
//!
//! ```text
//! rows 0..n   : sum_j w_j K(x_j, x_i) + p(x_i)           = f_i
//! row  n      : sum_j w_j                                 = 0
//! row  n + d  : d-th derivative at x_0 minus at x_{n-1}   = 0    (d = 1, 2, 3)
//! ```
//!
//! where `p(q) = c0 + c1 q + c2 q^2 + c3 q^3` and the unknowns are
//! `[w_0 .. w_{n-1}, c0, c1, c2, c3]`.
//!
//! The matrix is neither symmetric nor guaranteed regular, so it is solved
//! with an SVD in the least-squares sense.
//!
//! Two cases lose a rank:
//! - sample sets symmetric about the middle of the period, e.g. evenly
//!   spaced ones, with any kernel. On such sets the second-derivative row
//!   vanishes for the part of `f` that is even about the midpoint, leaving
//!   that part one equation short. Only data odd about the midpoint is
//!   then reproduced exactly.
//! - the cubic kernel `|r|^3` on any sample set. Its third derivative jumps
//!   at every node, so third-derivative matching is one condition more
//!   than a periodic cubic spline can satisfy.
//!
//! [`Solution::residual`] tells the two outcomes apart: it stays at
//! rounding level when the data is still reproduced, and is large when it
//! is not.

use log::{debug, trace, warn};
use nalgebra::{DMatrix, DVector, SVD};

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::rbf::kernel::RbfKernel;


/// Number of polynomial coefficients appended to the RBF weights.
pub const POLY_TERMS: usize = 4;


/// Largest `|a w - b|`, relative to `max(1, |b|)`, still counted as an exact solve.
pub const RESIDUAL_TOL: f64 = 1e-8;


/// Solved weights, the numerical rank of the system they came from, and
/// the largest absolute entry of `a w - b`.
#[derive(Debug, Clone)]
pub struct Solution {
    pub weights: DVector<f64>,
    pub rank: usize,
    pub residual: f64,
}


/// Builds the system matrix for sample coordinates `x`.
///
/// Column `j < n` belongs to the basis function centred at `x[j]`, so the
/// kernel is always called as `K(center, query)`. For radial kernels this
/// is the same as `K(x_i, x_j)`.
pub fn assemble<K: RbfKernel + ?Sized>(kernel: &K, x: &[f64]) -> DMatrix<f64> {
    let n    = x.len();
    let size = n + POLY_TERMS;
    let mut a = DMatrix::<f64>::zeros(size, size);
    if n == 0 {
        return a;
    }

    let x_first = x[0];
    let x_last  = x[n - 1];

    for (i, &xi) in x.iter().enumerate() {
        // interpolation block
        for (j, &xj) in x.iter().enumerate() {
            a[(i, j)] = kernel.value(xj, xi);
        }

        // polynomial augmentation
        a[(i, n)]     = 1.0;
        a[(i, n + 1)] = xi;
        a[(i, n + 2)] = xi * xi;
        a[(i, n + 3)] = xi * xi * xi;

        // sum of weights
        a[(n, i)] = 1.0;

        // derivative matching at the period ends
        a[(n + 1, i)] = kernel.d1(xi, x_first) - kernel.d1(xi, x_last);
        a[(n + 2, i)] = kernel.d2(xi, x_first) - kernel.d2(xi, x_last);
        a[(n + 3, i)] = kernel.d3(xi, x_first) - kernel.d3(xi, x_last);
    }

    // polynomial part of the derivative matching rows;
    // the cubic's third derivative is constant and cancels
    a[(n + 1, n + 2)] = 2.0 * (x_first - x_last);
    a[(n + 1, n + 3)] = 3.0 * (x_first * x_first - x_last * x_last);
    a[(n + 2, n + 3)] = 6.0 * (x_first - x_last);

    a
}


/// Right-hand side: sample values, then four homogeneous constraints.
pub fn rhs(f: &[f64]) -> DVector<f64> {
    let mut b = DVector::<f64>::zeros(f.len() + POLY_TERMS);
    for (bi, &fi) in b.iter_mut().zip(f) {
        *bi = fi;
    }
    b
}


/// Minimum-norm least-squares solve of `a w = b`.
///
/// Singular values below `eps * size * sigma_max` are treated as zero.
/// A rank-deficient or inconsistent system still yields a solution; only
/// a failed decomposition is an error.
pub fn solve(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<Solution, InterpolationError> {
    let size = a.nrows();
    let svd  = SVD::new(a.clone(), true, true);

    let sigma_max = svd.singular_values.max();
    let threshold = f64::EPSILON * size as f64 * sigma_max;
    trace!("svd of {size}x{size} system: sigma_max={sigma_max:.3e}, threshold={threshold:.3e}");

    let rank = svd.singular_values.iter().filter(|&&s| s > threshold).count();
    if rank < size {
        warn!(
            "periodic rbf system is rank deficient ({rank} of {size}); using least-squares solution"
        );
    }

    let weights = svd.solve(b, threshold).map_err(InterpolationError::Solver)?;
    if weights.iter().any(|w| !w.is_finite()) {
        return Err(InterpolationError::Solver("non-finite weights"));
    }

    let residual = (a * &weights - b).amax();
    let scale    = b.amax().max(1.0);
    if residual > RESIDUAL_TOL * scale {
        warn!(
            "periodic rbf system has no exact solution (residual {residual:.3e}); \
             samples will not be reproduced"
        );
    }

    debug!("solved {size}x{size} periodic rbf system, rank {rank}, residual {residual:.3e}");
    Ok(Solution { weights, rank, residual })
}
