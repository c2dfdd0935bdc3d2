//! Shared configuration and input validation for periodic interpolation.
//!
//! Provides [`CommonCfg`] with the default minimum allowed spacing between
//! adjacent `x` samples; [`DEFAULT_X_TOL`].
//!
//! [`CommonCfg`] universal fields:
//! - `x`      : sample coordinates, one full period `[x[0], x[n-1]]`
//! - `y`      : sample values, `y[0] == y[n-1]`
//! - `x_eval` : x values to evaluate, wrapped into the period
//! - `x_tol`  : minimum spacing between consecutive sample coordinates
//!
//! [`CommonCfg::new`] initializes configuration with empty slices.
//!
//! [`validate_samples`] holds the checks every fit runs regardless of how
//! the data reached it.


use crate::interpolation::errors::InterpolationError;

pub const DEFAULT_X_TOL: f64 = 1e-12; 

/// A period needs both of its endpoints.
pub const MIN_CFG_POINTS: usize = 2;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg<'a> {
    pub(crate) x      : &'a [f64],
    pub(crate) y      : &'a [f64],
    pub(crate) x_eval : &'a [f64],       
    pub(crate) x_min_spacing: f64,
}

impl<'a> CommonCfg<'a> {
    pub fn new() -> Self {
        Self {
            x      : &[],
            y      : &[],
            x_eval : &[],
            x_min_spacing: DEFAULT_X_TOL, 
        }
    }

    pub fn validate(&self) -> Result<(), InterpolationError> {
        let x = self.x;
        let y = self.y;

        if x.is_empty() || y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if x.len() < MIN_CFG_POINTS {
            return Err(InterpolationError::InsufficientPoints { 
                got: x.len(), 
                need: MIN_CFG_POINTS, 
            });
        }
        // x_tol may have been tightened after set_x
        check_increasing(x, self.x_min_spacing)?;
        validate_samples(x, y)
    }

    // getters
    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }
    pub fn x_eval(&self) -> &'a [f64] { self.x_eval }
    pub fn x_min_spacing(&self)  -> f64 { self.x_min_spacing }

    // setters
    pub(crate) fn with_x(&mut self, v: &'a[f64]) { self.x = v; }
    pub(crate) fn with_y(&mut self, v: &'a[f64]) { self.y = v; }
    pub(crate) fn with_x_eval(&mut self, v: &'a[f64]) { self.x_eval = v; }
    pub(crate) fn with_x_min_spacing(&mut self, v: f64) { self.x_min_spacing = v; }
}

impl Default for CommonCfg<'_> {
    fn default() -> Self {
        Self::new()
    }
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}


/// Checks `x` is strictly increasing with adjacent gaps of at least `min_spacing`.
pub(crate) fn check_increasing(x: &[f64], min_spacing: f64) -> Result<(), InterpolationError> {
    for pair in x.windows(2) {
        let (x1, x2) = (pair[0], pair[1]);
        if x2 <= x1 {
            return Err(InterpolationError::NonIncreasingX);
        }
        if x2 - x1 < min_spacing {
            return Err(InterpolationError::DuplicateX { x1, x2 });
        }
    }
    Ok(())
}


/// Preconditions of a periodic fit.
///
/// - `x` and `f` have equal length
/// - every entry is finite
/// - `x` is strictly increasing
/// - `f[0] == f[n-1]`, compared exactly
///
/// Empty input passes; the fit then degenerates to the zero function.
pub fn validate_samples(x: &[f64], f: &[f64]) -> Result<(), InterpolationError> {
    if x.len() != f.len() {
        return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: f.len() });
    }
    if let Some(idx) = non_finite_idx(x) {
        return Err(InterpolationError::NonFiniteVec { name: "x", idx });
    }
    if let Some(idx) = non_finite_idx(f) {
        return Err(InterpolationError::NonFiniteVec { name: "f", idx });
    }
    check_increasing(x, 0.0)?;

    if let (Some(&first), Some(&last)) = (f.first(), f.last()) {
        if first != last {
            return Err(InterpolationError::NonPeriodic { first, last });
        }
    }
    Ok(())
}


macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl<'a> $cfg {
            pub fn set_x(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if v.is_empty() {
                    return Err(InterpolationError::EmptyInput);
                }
                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { name: "x", idx });
                }
                if v.len() < $crate::interpolation::config::MIN_CFG_POINTS {
                    return Err(InterpolationError::InsufficientPoints { 
                        got: v.len(), 
                        need: $crate::interpolation::config::MIN_CFG_POINTS,
                    });
                }
                $crate::interpolation::config::check_increasing(v, self.common.x_min_spacing)?;

                // length agreement check 
                // symmetric with set_y
                let y_len = self.common.y.len();
                if y_len != 0 && y_len != v.len() {
                    return Err(InterpolationError::UnequalLength { x_len: v.len(), y_len });
                }

                self.common.with_x(v);
                Ok(self)
            }

            pub fn set_y(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if v.is_empty() {
                    return Err(InterpolationError::EmptyInput);
                }
                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { name: "y", idx });
                }

                let x_len = self.common.x.len();
                let y_len = v.len();
                if x_len != 0 && y_len != x_len {
                    return Err(InterpolationError::UnequalLength { x_len, y_len });
                }

                self.common.with_y(v);
                Ok(self)
            }

            pub fn set_x_eval(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { name: "x_eval", idx });
                }

                self.common.with_x_eval(v);
                Ok(self)
            }

            pub fn set_x_tol(
                mut self,
                v: f64,
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if !v.is_finite() || v <= 0.0 {
                    return Err(InterpolationError::InvalidXTol { got: v });
                }

                self.common.with_x_min_spacing(v);
                Ok(self)
            }
        }
    };
}
pub(crate) use impl_common_cfg;
