//! Periodic C3 radial-basis-function interpolation.
//!
//! See [`interpolation::rbf::periodic`] for the interpolant itself.

pub mod interpolation;
