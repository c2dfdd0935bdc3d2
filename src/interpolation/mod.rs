pub mod config; 
pub mod derivative;
pub mod errors; 
pub mod report; 
pub mod traits;
pub mod wrap;
pub use derivative::Derivative;
pub use traits::Interpolator;

pub mod rbf;
