pub mod gauss;
pub mod quadratic;
pub mod scalar;

pub use scalar::{is_valid, Scalar};
