use std::fmt::{Debug, Display};

use approx::{AbsDiffEq, RelativeEq};
use num_traits::{Float, FloatConst};

/// Floating-point type every formula in this crate is generic over (`f32` or `f64`).
///
/// Arithmetic, comparisons, `sqrt`/trig and the NaN/∞ predicates come from [`Float`]; this trait adds lossless-enough
/// construction from literals and integers, and the fixed thresholds the algorithms compare against.
pub trait Scalar
: Float
+ FloatConst
+ AbsDiffEq<Epsilon = Self>
+ RelativeEq
+ nalgebra::Scalar
+ Debug
+ Display
+ Default
+ Send
+ Sync
+ 'static
{
    fn lit(v: f64) -> Self;
    fn int(n: i32) -> Self;

    /// Threshold for discriminant/coefficient tests in conic classification.
    fn classify_epsilon() -> Self {
        Self::lit(1e-5)
    }
    /// Gap used to merge nearby roots, and the convergence bound for bisection.
    fn root_epsilon() -> Self {
        Self::lit(0.1)
    }
    /// Pivot threshold for Gaussian elimination, and the "parallel" test for lines.
    fn machine_epsilon() -> Self {
        Self::epsilon()
    }
}

macro_rules! impl_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                fn lit(v: f64) -> $t {
                    v as $t
                }
                fn int(n: i32) -> $t {
                    n as $t
                }
            }
        )*
    };
}

impl_scalar!(f32, f64);

/// Distinguishes usable samples from domain-invalid ones (negative discriminant, division by zero).
pub fn is_valid<D: Scalar>(v: D) -> bool {
    v.is_finite()
}
