//! Derivative orders an interpolant can be queried for.

use std::fmt;

use crate::interpolation::errors::InterpolationError;


/// Which derivative of the interpolant to evaluate.
///
/// Orders above three are not representable; the cubic polynomial term
/// and the periodic boundary conditions only reach the third derivative.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Derivative {
    #[default]
    Value,
    First,
    Second,
    Third,
}

impl Derivative {
    /// All orders, lowest first.
    pub const ALL: [Derivative; 4] = [
        Derivative::Value,
        Derivative::First,
        Derivative::Second,
        Derivative::Third,
    ];

    pub fn order(self) -> u8 {
        match self {
            Derivative::Value  => 0,
            Derivative::First  => 1,
            Derivative::Second => 2,
            Derivative::Third  => 3,
        }
    }

    /// Next-higher order, `None` past the third.
    pub fn next(self) -> Option<Derivative> {
        match self {
            Derivative::Value  => Some(Derivative::First),
            Derivative::First  => Some(Derivative::Second),
            Derivative::Second => Some(Derivative::Third),
            Derivative::Third  => None,
        }
    }

    /// `order`-th derivative of `c[0] + c[1] q + c[2] q^2 + c[3] q^3`.
    #[inline]
    pub fn polynomial_term(self, c: &[f64; 4], q: f64) -> f64 {
        match self {
            Derivative::Value  => c[0] + c[1] * q + c[2] * q * q + c[3] * q * q * q,
            Derivative::First  => c[1] + 2.0 * c[2] * q + 3.0 * c[3] * q * q,
            Derivative::Second => 2.0 * c[2] + 6.0 * c[3] * q,
            Derivative::Third  => 6.0 * c[3],
        }
    }
}

impl TryFrom<u8> for Derivative {
    type Error = InterpolationError;

    fn try_from(order: u8) -> Result<Self, Self::Error> {
        match order {
            0 => Ok(Derivative::Value),
            1 => Ok(Derivative::First),
            2 => Ok(Derivative::Second),
            3 => Ok(Derivative::Third),
            got => Err(InterpolationError::InvalidDerivativeOrder { got }),
        }
    }
}

impl fmt::Display for Derivative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Derivative::Value  => write!(f, "value"),
            Derivative::First  => write!(f, "first derivative"),
            Derivative::Second => write!(f, "second derivative"),
            Derivative::Third  => write!(f, "third derivative"),
        }
    }
}
