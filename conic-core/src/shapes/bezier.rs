use serde::{Deserialize, Serialize};

use crate::{math::Scalar, r2::R2};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticBezier<D> {
    pub p0: R2<D>,
    pub p1: R2<D>,
    pub p2: R2<D>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier<D> {
    pub p0: R2<D>,
    pub p1: R2<D>,
    pub p2: R2<D>,
    pub p3: R2<D>,
}

impl<D: Scalar> QuadraticBezier<D> {
    pub fn point_at(&self, t: D) -> R2<D> {
        let one_t = D::one() - t;
        self.p0 * (one_t * one_t) + self.p1 * (D::int(2) * one_t * t) + self.p2 * (t * t)
    }

    /// Degree elevation; the cubic traces exactly the same curve.
    pub fn to_cubic(&self) -> CubicBezier<D> {
        let two_thirds = D::int(2) / D::int(3);
        CubicBezier {
            p0: self.p0,
            p1: self.p0 + (self.p1 - self.p0) * two_thirds,
            p2: self.p2 + (self.p1 - self.p2) * two_thirds,
            p3: self.p2,
        }
    }
}

impl<D: Scalar> CubicBezier<D> {
    pub fn point_at(&self, t: D) -> R2<D> {
        let one_t = D::one() - t;
        let three = D::int(3);
        self.p0 * (one_t * one_t * one_t)
            + self.p1 * (three * one_t * one_t * t)
            + self.p2 * (three * one_t * t * t)
            + self.p3 * (t * t * t)
    }
}
