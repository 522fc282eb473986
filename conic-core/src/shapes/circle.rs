use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{conic::ConicSection, math::Scalar, r2::R2};

use super::rect::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle<D> {
    pub c: R2<D>,
    pub r: D,
}

impl<D: Scalar> Circle<D> {
    pub fn new(h: D, k: D, r: D) -> Self {
        Circle { c: R2 { x: h, y: k }, r }
    }

    /// (x - h)² + (y - k)² - r² = 0
    pub fn conic_section(&self) -> ConicSection<D> {
        let R2 { x: h, y: k } = self.c;
        let two = D::int(2);
        ConicSection {
            a: D::one(),
            b: D::zero(),
            c: D::one(),
            d: -two * h,
            e: -two * k,
            f: h * h + k * k - self.r * self.r,
        }
    }

    /// Same orientation as [`super::ellipse::Ellipse::point_at`].
    pub fn point_at(&self, theta: D) -> R2<D> {
        let (sin, cos) = theta.sin_cos();
        self.c + R2 { x: self.r * cos, y: -self.r * sin }
    }

    pub fn bounds(&self) -> Rect<D> {
        let r = R2 { x: self.r, y: self.r };
        Rect::new(self.c - r, self.c + r)
    }
}

impl<D: Display> Display for Circle<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "C({:.3}, {:.3}, {:.3})", self.c.x, self.c.y, self.r)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use crate::conic::ConicSectionType;

    use super::*;

    #[test]
    fn conic() {
        let c = Circle::new(1., 2., 2.);
        assert_eq!(c.conic_section(), ConicSection::new(1., 0., 1., -2., -4., 1.));
        assert_abs_diff_eq!(c.conic_section().eval(&c.point_at(0.7)), 0., epsilon = 1e-12);
    }

    #[test]
    fn classified_as_circle() {
        for (h, k, r) in [ (0., 0., 1.), (3., 4., 5.), (-2.5, 7., 0.1), (100., -100., 30.) ] {
            let kind = Circle::new(h, k, r).conic_section().kind();
            assert_eq!(kind, ConicSectionType::Circle, "C({}, {}, {})", h, k, r);
        }
    }

    #[test]
    fn points() {
        let c = Circle::new(1., 1., 2.);
        assert_abs_diff_eq!(c.point_at(FRAC_PI_2), R2 { x: 1., y: -1. }, epsilon = 1e-12);
        assert_eq!(c.bounds(), Rect::new(R2 { x: -1., y: -1. }, R2 { x: 3., y: 3. }));
    }
}
