use crate::{math::Scalar, r2::R2};

pub trait Rotate<D> {
    /// Counter-clockwise rotation about the origin by `theta` radians.
    fn rotate(&self, theta: &D) -> Self;
}

impl<D: Scalar> Rotate<D> for R2<D> {
    fn rotate(&self, theta: &D) -> R2<D> {
        let (sin, cos) = theta.sin_cos();
        R2 {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }
}
