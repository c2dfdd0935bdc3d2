use crate::interpolation::derivative::Derivative;
use crate::interpolation::errors::InterpolationError;

/// Pointwise evaluation of a fitted interpolant and its derivatives.
pub trait Interpolator {
    /// evaluates the `order`-th derivative at a single point
    fn eval_derivative(&self, x: f64, order: Derivative) -> Result<f64, InterpolationError>;

    /// evaluates the interpolant itself
    #[inline]
    fn eval(&self, x: f64) -> Result<f64, InterpolationError> {
        self.eval_derivative(x, Derivative::Value)
    }

    /// evaluates many points
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, InterpolationError> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }

    /// evaluates the `order`-th derivative at many points
    #[inline]
    fn eval_many_derivative(
        &self,
        xs: &[f64],
        order: Derivative,
    ) -> Result<Vec<f64>, InterpolationError> {
        xs.iter().map(|&xq| self.eval_derivative(xq, order)).collect()
    }
}
