pub mod kernel;
pub mod periodic;
pub mod system;

pub use kernel::{Cubic, Gaussian, KernelType, Quintic, RbfKernel};
pub use periodic::{FitSummary, PeriodicC3Rbf, PeriodicRbfCfg};
