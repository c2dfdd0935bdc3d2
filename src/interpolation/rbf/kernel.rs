//! Radial basis kernels
//!
//! A kernel `K(a, b)` couples a sample coordinate `a` with a query
//! coordinate `b`. The periodic fit needs the kernel together with its
//! first three partial derivatives in `b`; [`RbfKernel`] bundles them so
//! any kernel can be injected into
//! [`PeriodicC3Rbf`](crate::interpolation::rbf::periodic::PeriodicC3Rbf).
//!
//! Built-in kernels, radial in `r = b - a`:
//! - [`Cubic`]    : `|r|^3`, the 1-D polyharmonic spline; its third
//!   derivative jumps at every node, which leaves the periodic C3 fit one
//!   degree of freedom short
//! - [`Quintic`]  : `|r|^5`, the default
//! - [`Gaussian`] : `exp(-(eps r)^2)`

use crate::interpolation::derivative::Derivative;
use crate::interpolation::errors::InterpolationError;


/// Kernel and its derivatives with respect to the second argument.
///
/// Fitting and evaluation call the same four functions, so whatever
/// convention a kernel picks at `r = 0` is applied consistently to the
/// boundary-matching rows and to queries.
pub trait RbfKernel {
    /// short human-readable name, used in reports
    fn name(&self) -> &'static str;

    fn value(&self, a: f64, b: f64) -> f64;

    /// `dK/db`
    fn d1(&self, a: f64, b: f64) -> f64;

    /// `d2K/db2`
    fn d2(&self, a: f64, b: f64) -> f64;

    /// `d3K/db3`
    fn d3(&self, a: f64, b: f64) -> f64;

    #[inline]
    fn derivative(&self, order: Derivative, a: f64, b: f64) -> f64 {
        match order {
            Derivative::Value  => self.value(a, b),
            Derivative::First  => self.d1(a, b),
            Derivative::Second => self.d2(a, b),
            Derivative::Third  => self.d3(a, b),
        }
    }
}

impl<K: RbfKernel + ?Sized> RbfKernel for &K {
    fn name(&self) -> &'static str { (**self).name() }
    fn value(&self, a: f64, b: f64) -> f64 { (**self).value(a, b) }
    fn d1(&self, a: f64, b: f64) -> f64 { (**self).d1(a, b) }
    fn d2(&self, a: f64, b: f64) -> f64 { (**self).d2(a, b) }
    fn d3(&self, a: f64, b: f64) -> f64 { (**self).d3(a, b) }
}


/// `|r|^3`
///
/// The third derivative jumps from `-6` to `6` at `r = 0` and is taken
/// as `0` there. Because of that jump, matching third derivatives at the
/// period ends over-constrains the fit, and the least-squares solution
/// generally misses the samples.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Cubic;

impl RbfKernel for Cubic {
    fn name(&self) -> &'static str { "cubic" }

    #[inline]
    fn value(&self, a: f64, b: f64) -> f64 {
        let r = (b - a).abs();
        r * r * r
    }

    #[inline]
    fn d1(&self, a: f64, b: f64) -> f64 {
        let r = b - a;
        3.0 * r * r.abs()
    }

    #[inline]
    fn d2(&self, a: f64, b: f64) -> f64 {
        6.0 * (b - a).abs()
    }

    #[inline]
    fn d3(&self, a: f64, b: f64) -> f64 {
        let r = b - a;
        if r > 0.0 { 6.0 } else if r < 0.0 { -6.0 } else { 0.0 }
    }
}


/// `|r|^5`, continuous through its fourth derivative
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Quintic;

impl RbfKernel for Quintic {
    fn name(&self) -> &'static str { "quintic" }

    #[inline]
    fn value(&self, a: f64, b: f64) -> f64 {
        let r = (b - a).abs();
        r * r * r * r * r
    }

    #[inline]
    fn d1(&self, a: f64, b: f64) -> f64 {
        let r = b - a;
        5.0 * r * r * r * r.abs()
    }

    #[inline]
    fn d2(&self, a: f64, b: f64) -> f64 {
        let r = (b - a).abs();
        20.0 * r * r * r
    }

    #[inline]
    fn d3(&self, a: f64, b: f64) -> f64 {
        let r = b - a;
        60.0 * r * r.abs()
    }
}


/// `exp(-(eps r)^2)` with shape parameter `eps > 0`
///
/// Large shapes give narrow bumps; small shapes flatten the kernel and
/// quickly make the fit system ill-conditioned.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Gaussian {
    shape: f64,
}

impl Gaussian {
    pub fn new(shape: f64) -> Result<Self, InterpolationError> {
        if !shape.is_finite() || shape <= 0.0 {
            return Err(InterpolationError::InvalidShape { got: shape });
        }
        Ok(Self { shape })
    }

    pub fn shape(&self) -> f64 { self.shape }

    #[inline]
    fn phi(&self, r: f64) -> f64 {
        let er = self.shape * r;
        (-er * er).exp()
    }
}

impl RbfKernel for Gaussian {
    fn name(&self) -> &'static str { "gaussian" }

    #[inline]
    fn value(&self, a: f64, b: f64) -> f64 {
        self.phi(b - a)
    }

    #[inline]
    fn d1(&self, a: f64, b: f64) -> f64 {
        let r  = b - a;
        let e2 = self.shape * self.shape;
        -2.0 * e2 * r * self.phi(r)
    }

    #[inline]
    fn d2(&self, a: f64, b: f64) -> f64 {
        let r  = b - a;
        let e2 = self.shape * self.shape;
        (4.0 * e2 * e2 * r * r - 2.0 * e2) * self.phi(r)
    }

    #[inline]
    fn d3(&self, a: f64, b: f64) -> f64 {
        let r  = b - a;
        let e2 = self.shape * self.shape;
        (12.0 * e2 * e2 * r - 8.0 * e2 * e2 * e2 * r * r * r) * self.phi(r)
    }
}


/// Built-in kernel selection.
///
/// `Copy` so it can live in a config struct; delegates to the matching
/// kernel type.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum KernelType {
    Cubic,
    #[default]
    Quintic,
    Gaussian(Gaussian),
}

impl KernelType {
    /// Gaussian kernel with the given shape parameter.
    pub fn gaussian(shape: f64) -> Result<Self, InterpolationError> {
        Gaussian::new(shape).map(KernelType::Gaussian)
    }
}

impl RbfKernel for KernelType {
    fn name(&self) -> &'static str {
        match self {
            KernelType::Cubic       => Cubic.name(),
            KernelType::Quintic     => Quintic.name(),
            KernelType::Gaussian(g) => g.name(),
        }
    }

    fn value(&self, a: f64, b: f64) -> f64 {
        match self {
            KernelType::Cubic       => Cubic.value(a, b),
            KernelType::Quintic     => Quintic.value(a, b),
            KernelType::Gaussian(g) => g.value(a, b),
        }
    }

    fn d1(&self, a: f64, b: f64) -> f64 {
        match self {
            KernelType::Cubic       => Cubic.d1(a, b),
            KernelType::Quintic     => Quintic.d1(a, b),
            KernelType::Gaussian(g) => g.d1(a, b),
        }
    }

    fn d2(&self, a: f64, b: f64) -> f64 {
        match self {
            KernelType::Cubic       => Cubic.d2(a, b),
            KernelType::Quintic     => Quintic.d2(a, b),
            KernelType::Gaussian(g) => g.d2(a, b),
        }
    }

    fn d3(&self, a: f64, b: f64) -> f64 {
        match self {
            KernelType::Cubic       => Cubic.d3(a, b),
            KernelType::Quintic     => Quintic.d3(a, b),
            KernelType::Gaussian(g) => g.d3(a, b),
        }
    }
}
