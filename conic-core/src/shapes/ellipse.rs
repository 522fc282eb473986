use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{conic::ConicSection, math::Scalar, r2::R2, rotate::Rotate};

use super::rect::Rect;

/// Ellipse centered at `c` with radii `r`, rotated counter-clockwise by `t` radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipse<D> {
    pub c: R2<D>,
    pub r: R2<D>,
    pub t: D,
}

impl<D: Scalar> Ellipse<D> {
    pub fn new(h: D, k: D, rx: D, ry: D, t: D) -> Self {
        Ellipse { c: R2 { x: h, y: k }, r: R2 { x: rx, y: ry }, t }
    }

    pub fn conic_section(&self) -> ConicSection<D> {
        let R2 { x: h, y: k } = self.c;
        let R2 { x: rx, y: ry } = self.r;
        let (sin, cos) = self.t.sin_cos();
        let two = D::int(2);
        let rx2 = rx * rx;
        let ry2 = ry * ry;
        let a = rx2 * sin * sin + ry2 * cos * cos;
        let b = two * (ry2 - rx2) * sin * cos;
        let c = rx2 * cos * cos + ry2 * sin * sin;
        ConicSection {
            a,
            b,
            c,
            d: -two * a * h - b * k,
            e: -b * h - two * c * k,
            f: a * h * h + b * h * k + c * k * k - rx2 * ry2,
        }
    }

    /// `c + Rotation(t)·(rx·cos θ, −ry·sin θ)`
    pub fn point_at(&self, theta: D) -> R2<D> {
        let (sin, cos) = theta.sin_cos();
        let local = R2 { x: self.r.x * cos, y: -self.r.y * sin };
        self.c + local.rotate(&self.t)
    }

    /// `n` points evenly spaced in θ, starting at θ = 0.
    pub fn sample(&self, n: usize) -> Vec<R2<D>> {
        let step = D::TAU() / D::int(n.max(1) as i32);
        (0..n).map(|i| self.point_at(step * D::int(i as i32))).collect()
    }

    /// Points of maximum x, minimum x, maximum y, minimum y, in that order.
    pub fn extremes(&self) -> [ R2<D>; 4 ] {
        let R2 { x: h, y: k } = self.c;
        let R2 { x: rx, y: ry } = self.r;
        if self.t.is_zero() {
            return [
                R2 { x: h + rx, y: k },
                R2 { x: h - rx, y: k },
                R2 { x: h, y: k + ry },
                R2 { x: h, y: k - ry },
            ];
        }
        let (sin, cos) = self.t.sin_cos();
        // dx/dθ = 0 and dy/dθ = 0 respectively; each has a second solution half a turn away
        let tx = (ry * sin).atan2(rx * cos);
        let ty = (-ry * cos).atan2(rx * sin);
        let pi = D::PI();
        let candidates = [ tx, tx + pi, ty, ty + pi ].map(|theta| self.point_at(theta));
        let [ x0, x1, y0, y1 ] = candidates;
        let (xmax, xmin) = if x0.x >= x1.x { (x0, x1) } else { (x1, x0) };
        let (ymax, ymin) = if y0.y >= y1.y { (y0, y1) } else { (y1, y0) };
        [ xmax, xmin, ymax, ymin ]
    }

    pub fn bounds(&self) -> Rect<D> {
        let [ xmax, xmin, ymax, ymin ] = self.extremes();
        Rect::new(R2 { x: xmin.x, y: ymin.y }, R2 { x: xmax.x, y: ymax.y })
    }
}

impl<D: Display> Display for Ellipse<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ c: {}, r: {}, t: {:.3} }}", self.c, self.r, self.t)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_4, FRAC_PI_6};

    use crate::conic::ConicSectionType;

    use super::*;
    use test_log::test;

    #[test]
    fn axis_aligned_conic() {
        // (x - 1)²/4 + (y + 1)² = 1, scaled by rx²·ry² = 4
        let e = Ellipse::new(1., -1., 2., 1., 0.);
        assert_eq!(e.conic_section(), ConicSection::new(1., 0., 4., -2., 8., 1.));
        assert_eq!(e.conic_section().kind(), ConicSectionType::Ellipse);
    }

    #[test]
    fn rotated_points_on_conic() {
        let e = Ellipse::new(2., -3., 4., 1.5, FRAC_PI_6);
        let conic = e.conic_section();
        assert_eq!(conic.kind(), ConicSectionType::Ellipse);
        for p in e.sample(12) {
            assert_abs_diff_eq!(conic.eval(&p), 0., epsilon = 1e-10);
        }
    }

    #[test]
    fn extremes() {
        let e = Ellipse::new(1., 2., 3., 1., 0.);
        assert_eq!(e.extremes(), [
            R2 { x: 4., y: 2. },
            R2 { x: -2., y: 2. },
            R2 { x: 1., y: 3. },
            R2 { x: 1., y: 1. },
        ]);

        let e = Ellipse::new(0., 0., 2., 1., FRAC_PI_4);
        let [ xmax, xmin, ymax, ymin ] = e.extremes();
        // For a 45° ellipse, the half-width is √((rx² + ry²) / 2)
        let w = 2.5_f64.sqrt();
        assert_relative_eq!(xmax.x, w, epsilon = 1e-12);
        assert_relative_eq!(xmin.x, -w, epsilon = 1e-12);
        assert_relative_eq!(ymax.y, w, epsilon = 1e-12);
        assert_relative_eq!(ymin.y, -w, epsilon = 1e-12);
        for p in e.sample(360) {
            assert!(p.x <= xmax.x + 1e-12 && p.x >= xmin.x - 1e-12);
            assert!(p.y <= ymax.y + 1e-12 && p.y >= ymin.y - 1e-12);
        }
        assert_relative_eq!(e.bounds().max, R2 { x: w, y: w }, epsilon = 1e-12);
    }
}
