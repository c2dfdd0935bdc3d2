//! Defines the struct returned by batch interpolation.
//!
//! Defines the [`InterpolationReport`] struct returned by
//! [`crate::interpolation::rbf::periodic::interpolate`].
//!
//! This report summarizes key metadata about the interpolation process,
//! including the kernel used, number of data and evaluation points,
//! the numerical rank of the fitted system, and the evaluated results.

use crate::interpolation::derivative::Derivative;

/// Summary of an interpolation run.
///
/// [`InterpolationReport`]
/// - `algorithm_name` : name of the interpolation method (e.g. `"periodic c3 rbf (quintic)"`)
/// - `derivative`     : derivative order that was evaluated
/// - `n_provided`     : number of input data points `(x, y)`
/// - `n_evaluated`    : number of points at which interpolation was performed
/// - `rank`           : numerical rank of the `(n + 4) x (n + 4)` fit system
/// - `evaluated`      : interpolated values at each evaluation point
#[derive(Debug, Clone)]
pub struct InterpolationReport {
    pub algorithm_name: String,
    pub derivative: Derivative,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub rank: usize,
    pub evaluated: Vec<f64>,
}

impl InterpolationReport {
    pub fn new(
        algorithm_name: String,
        derivative: Derivative,
        n_provided: usize,
        n_evaluated: usize,
    ) -> Self {
        Self {
            algorithm_name,
            derivative,
            n_provided,
            n_evaluated,
            rank: 0,
            evaluated: Vec::new(),
        }
    }

    /// `true` when the fit system was solved in the least-squares sense.
    pub fn is_rank_deficient(&self) -> bool {
        self.rank < self.n_provided + 4
    }
}
