//! Periodic C3 RBF Interpolation
//!
//! Fits one period of a cyclic signal, samples `(x[i], f[i])` with
//! `f[0] == f[n-1]`, with
//!
//! ```text
//! s(q) = sum_i w_i K(x_i, q) + c0 + c1 q + c2 q^2 + c3 q^3
//! ```
//!
//! The weights make `s` pass through every sample, sum to zero, and give
//! `s`, `s'`, `s''` and `s'''` equal values at both ends of the period.
//! Queries anywhere on the real line are wrapped into `[x[0], x[n-1])`
//! first, so the interpolant repeats with period `x[n-1] - x[0]`.
//!
//! ```
//! use periodic_rbf::interpolation::Derivative;
//! use periodic_rbf::interpolation::rbf::{KernelType, PeriodicC3Rbf};
//!
//! # fn main() -> Result<(), periodic_rbf::interpolation::errors::InterpolationError> {
//! let mut rbf = PeriodicC3Rbf::new(KernelType::Quintic);
//! rbf.fit(&[0.0, 1.0, 2.0, 3.0, 4.0], &[0.0, 1.0, 0.0, -1.0, 0.0])?;
//!
//! let peak = rbf.evaluate(5.0, Derivative::Value)?;
//! assert!((peak - 1.0).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```


use log::debug;
use nalgebra::DVector;

use crate::interpolation::config::{impl_common_cfg, validate_samples, CommonCfg};
use crate::interpolation::derivative::Derivative;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::rbf::kernel::{KernelType, RbfKernel};
use crate::interpolation::rbf::system::{self, POLY_TERMS, RESIDUAL_TOL};
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::traits::Interpolator;
use crate::interpolation::wrap::wrap_to_range;


/// What a fit produced.
///
/// - `n_samples`   : number of `(x, f)` pairs
/// - `system_size` : `n_samples + 4`
/// - `rank`        : numerical rank of the solved system
/// - `residual`    : largest `|A w - b|`; rounding-sized when every sample
///   and boundary condition is met
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FitSummary {
    pub n_samples: usize,
    pub system_size: usize,
    pub rank: usize,
    pub residual: f64,
}

impl FitSummary {
    pub fn is_rank_deficient(&self) -> bool {
        self.rank < self.system_size
    }

    /// `true` when the samples and boundary conditions are met up to
    /// [`RESIDUAL_TOL`] relative to the largest sample value.
    pub fn is_exact(&self, f: &[f64]) -> bool {
        let scale = f.iter().fold(1.0_f64, |m, v| m.max(v.abs()));
        self.residual <= RESIDUAL_TOL * scale
    }
}


#[derive(Debug, Clone)]
struct Fitted {
    x: Vec<f64>,
    f: Vec<f64>,
    // n RBF weights followed by the four polynomial coefficients, low degree first
    weights: DVector<f64>,
}


/// Periodic, third-derivative-continuous RBF interpolant.
///
/// The default kernel is [`KernelType::Quintic`]. [`KernelType::Cubic`]
/// over-constrains the third-derivative matching and in general does not
/// reproduce the samples; see [`system`] for when a fit degrades.
///
/// Starts unfitted; [`PeriodicC3Rbf::fit`] installs samples and weights
/// together, and every evaluation before that returns
/// [`InterpolationError::NotFitted`].
///
/// Evaluation takes `&self`, so a fitted interpolant can be shared across
/// threads for reading; refitting needs `&mut self`.
#[derive(Debug, Clone)]
pub struct PeriodicC3Rbf<K = KernelType> {
    kernel: K,
    fitted: Option<Fitted>,
}

impl Default for PeriodicC3Rbf<KernelType> {
    fn default() -> Self {
        Self::new(KernelType::default())
    }
}

impl<K: RbfKernel> PeriodicC3Rbf<K> {
    pub fn new(kernel: K) -> Self {
        Self { kernel, fitted: None }
    }

    pub fn kernel(&self) -> &K { &self.kernel }

    pub fn is_fitted(&self) -> bool { self.fitted.is_some() }

    /// Fitted `(x, f)` samples.
    pub fn samples(&self) -> Option<(&[f64], &[f64])> {
        self.fitted.as_ref().map(|s| (s.x.as_slice(), s.f.as_slice()))
    }

    /// `n` RBF weights followed by the constant, linear, quadratic and
    /// cubic polynomial coefficients.
    pub fn weights(&self) -> Option<&[f64]> {
        self.fitted.as_ref().map(|s| s.weights.as_slice())
    }

    /// `x[n-1] - x[0]`; zero for fewer than two samples.
    pub fn period(&self) -> Option<f64> {
        self.fitted.as_ref().map(|s| match (s.x.first(), s.x.last()) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0,
        })
    }

    /// Fits the interpolant to one period of samples.
    ///
    /// # Errors
    /// - [`InterpolationError::UnequalLength`] if `x` and `f` differ in length
    /// - [`InterpolationError::NonFiniteVec`] on NaN or infinite input
    /// - [`InterpolationError::NonIncreasingX`] unless `x` is strictly increasing
    /// - [`InterpolationError::NonPeriodic`] if `f[0] != f[n-1]`
    /// - [`InterpolationError::Solver`] if the decomposition itself fails
    ///
    /// The previous fit, if any, is untouched on error. Empty input is
    /// accepted and fits the zero function.
    pub fn fit(&mut self, x: &[f64], f: &[f64]) -> Result<FitSummary, InterpolationError> {
        validate_samples(x, f)?;

        let n           = x.len();
        let system_size = n + POLY_TERMS;

        let (weights, rank, residual) = if n == 0 {
            (DVector::zeros(system_size), 0, 0.0)
        } else {
            let a   = system::assemble(&self.kernel, x);
            let b   = system::rhs(f);
            let sol = system::solve(&a, &b)?;
            (sol.weights, sol.rank, sol.residual)
        };

        debug!(
            "fitted periodic c3 rbf ({}) on {n} samples, rank {rank} of {system_size}",
            self.kernel.name()
        );

        self.fitted = Some(Fitted { x: x.to_vec(), f: f.to_vec(), weights });
        Ok(FitSummary { n_samples: n, system_size, rank, residual })
    }

    /// Evaluates the `order`-th derivative of the interpolant at `x`.
    ///
    /// `x` is wrapped into `[x[0], x[n-1])` first. With no samples the
    /// result is `0.0` for every order.
    ///
    /// # Errors
    /// - [`InterpolationError::NotFitted`] before a successful [`fit`](Self::fit)
    pub fn evaluate(&self, x: f64, order: Derivative) -> Result<f64, InterpolationError> {
        let fitted = self.fitted.as_ref().ok_or(InterpolationError::NotFitted)?;

        let centers = fitted.x.as_slice();
        let n = centers.len();
        if n == 0 {
            return Ok(0.0);
        }

        let q = wrap_to_range(x, centers[0], centers[n - 1]);
        let (w, c) = fitted.weights.as_slice().split_at(n);

        let rbf: f64 = centers
            .iter()
            .zip(w)
            .map(|(&xk, &wk)| wk * self.kernel.derivative(order, xk, q))
            .sum();

        let coeffs = [c[0], c[1], c[2], c[3]];
        Ok(rbf + order.polynomial_term(&coeffs, q))
    }
}

impl<K: RbfKernel> Interpolator for PeriodicC3Rbf<K> {
    fn eval_derivative(&self, x: f64, order: Derivative) -> Result<f64, InterpolationError> {
        self.evaluate(x, order)
    }
}


/// Periodic RBF batch configuration 
/// 
/// # Fields 
/// - `common`     : [`CommonCfg`]
/// - `kernel`     : [`KernelType`], [`KernelType::Quintic`] by default
/// - `derivative` : order evaluated at each `x_eval`, [`Derivative::Value`] by default
///
/// # Construction 
/// - Use [`PeriodicRbfCfg::new`] then optional setters. 
///
/// # Defaults 
/// - Minimum allowed spacing between consecutive `x` samples;
///   [`crate::interpolation::config::DEFAULT_X_TOL`] by default. 
#[derive(Debug, Clone, Copy)]
pub struct PeriodicRbfCfg<'a> {
    common: CommonCfg<'a>,
    kernel: KernelType,
    derivative: Derivative,
}
impl<'a> PeriodicRbfCfg<'a> {
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
            kernel: KernelType::default(),
            derivative: Derivative::Value,
        }
    }

    pub fn with_kernel(mut self, v: KernelType) -> Self { self.kernel = v; self }
    pub fn with_derivative(mut self, v: Derivative) -> Self { self.derivative = v; self }

    pub fn kernel(&self) -> KernelType { self.kernel }
    pub fn derivative(&self) -> Derivative { self.derivative }
}
impl_common_cfg!(PeriodicRbfCfg<'a>);


/// Fits a periodic C3 RBF to the data in [`CommonCfg`] and evaluates it.
///
/// # Behavior
/// Every evaluation point is wrapped into `[x[0], x[n-1])`, so unlike
/// bounded interpolators no point is out of range.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"periodic c3 rbf (<kernel>)"`
/// - `derivative`     : the configured derivative order
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `rank`           : numerical rank of the fit system
/// - `evaluated`      : interpolated values
///
/// # Errors
/// - [`InterpolationError::EmptyInput`] if `x` or `y` was never set
/// - [`InterpolationError::NonPeriodic`] if `y[0] != y[n-1]`
/// - any error of [`PeriodicC3Rbf::fit`]
pub fn interpolate(cfg: PeriodicRbfCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;

    let x     = cfg.common.x();
    let y     = cfg.common.y();
    let evals = cfg.common.x_eval();

    let mut rbf = PeriodicC3Rbf::new(cfg.kernel);
    let summary = rbf.fit(x, y)?;

    let mut report = InterpolationReport::new(
        format!("periodic c3 rbf ({})", cfg.kernel.name()),
        cfg.derivative,
        summary.n_samples,
        evals.len(),
    );
    report.rank      = summary.rank;
    report.evaluated = rbf.eval_many_derivative(evals, cfg.derivative)?;

    Ok(report)
}
