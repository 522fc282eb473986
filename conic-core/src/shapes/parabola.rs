use serde::{Deserialize, Serialize};

use crate::{conic::ConicSection, error::{ConicError, Result}, math::Scalar, r2::R2, rotate::Rotate};

use super::{bezier::QuadraticBezier, rect::Rect};

/// y = a(x − h)² + k, with rotation `t`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VertexParabola<D> {
    pub a: D,
    pub h: D,
    pub k: D,
    pub t: D,
}

/// y = ax² + bx + c, with rotation `t`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StandardParabola<D> {
    pub a: D,
    pub b: D,
    pub c: D,
    pub t: D,
}

/// Substitutes `u = x·cos t + y·sin t`, `v = −x·sin t + y·cos t` into `v = au² + bu + c`, but drops the `xy` term the
/// rotation introduces. The result is exact for `t = 0` only; for other angles it is not the rotated parabola.
fn parabola_conic<D: Scalar>(a: D, b: D, c: D, t: D) -> ConicSection<D> {
    let (sin, cos) = t.sin_cos();
    ConicSection {
        a: a * cos * cos,
        b: D::zero(),
        c: a * sin * sin,
        d: b * cos + sin,
        e: b * sin - cos,
        f: c,
    }
}

/// Quadratic Bezier tracing `y = ax² + bx + c` over `[x1, x2]`: the control point is where the endpoint tangents meet.
fn parabola_bezier<D: Scalar>(a: D, b: D, c: D, x1: D, x2: D) -> QuadraticBezier<D> {
    let y = |x: D| a * x * x + b * x + c;
    let y1 = y(x1);
    let two = D::int(2);
    QuadraticBezier {
        p0: R2 { x: x1, y: y1 },
        p1: R2 {
            x: (x1 + x2) / two,
            y: a * (x2 * x1 - x1 * x1) + b * (x2 - x1) / two + y1,
        },
        p2: R2 { x: x2, y: y(x2) },
    }
}

/// x-bounds for [`parabola_bezier`] from a crop rectangle's `min`/`max` corners rotated by `t`. Only these bounds are
/// rotated, not the curve.
fn rotated_bounds<D: Scalar>(rect: &Rect<D>, t: D) -> (D, D) {
    (rect.min.rotate(&t).x, rect.max.rotate(&t).x)
}

impl<D: Scalar> VertexParabola<D> {
    pub fn new(a: D, h: D, k: D, t: D) -> Self {
        VertexParabola { a, h, k, t }
    }

    pub fn vertex(&self) -> R2<D> {
        R2 { x: self.h, y: self.k }
    }

    pub fn y_at(&self, x: D) -> D {
        let dx = x - self.h;
        self.a * dx * dx + self.k
    }

    /// `b = −2ah`, `c = b²/4a + k`.
    pub fn to_standard(&self) -> Result<StandardParabola<D>> {
        let VertexParabola { a, h, k, t } = *self;
        if a.is_zero() {
            return Err(ConicError::ZeroLeadingCoefficient);
        }
        let b = -D::int(2) * a * h;
        let c = b * b / (D::int(4) * a) + k;
        Ok(StandardParabola { a, b, c, t })
    }

    /// Standard-form coefficients, expanded directly (no division, so `a = 0` is allowed).
    fn expanded(&self) -> (D, D, D) {
        let VertexParabola { a, h, k, .. } = *self;
        (a, -D::int(2) * a * h, a * h * h + k)
    }

    /// See [`parabola_conic`]: the rotation's `xy` term is dropped.
    pub fn conic_section(&self) -> ConicSection<D> {
        let (a, b, c) = self.expanded();
        parabola_conic(a, b, c, self.t)
    }

    pub fn bezier(&self, x1: D, x2: D) -> QuadraticBezier<D> {
        let (a, b, c) = self.expanded();
        parabola_bezier(a, b, c, x1, x2)
    }

    /// See [`rotated_bounds`]: only the crop window is rotated.
    pub fn bezier_in(&self, rect: &Rect<D>) -> QuadraticBezier<D> {
        let (x1, x2) = rotated_bounds(rect, self.t);
        self.bezier(x1, x2)
    }

    /// See [`StandardParabola::sample`].
    pub fn sample(&self, xmin: D, xmax: D, n: usize) -> Vec<R2<D>> {
        let (a, b, c) = self.expanded();
        StandardParabola { a, b, c, t: self.t }.sample(xmin, xmax, n)
    }
}

impl<D: Scalar> StandardParabola<D> {
    pub fn new(a: D, b: D, c: D, t: D) -> Self {
        StandardParabola { a, b, c, t }
    }

    pub fn y_at(&self, x: D) -> D {
        self.a * x * x + self.b * x + self.c
    }

    /// `h = −b/2a`, `k = c − b²/4a`.
    pub fn to_vertex(&self) -> Result<VertexParabola<D>> {
        let StandardParabola { a, b, c, t } = *self;
        if a.is_zero() {
            return Err(ConicError::ZeroLeadingCoefficient);
        }
        Ok(VertexParabola {
            a,
            h: -b / (D::int(2) * a),
            k: c - b * b / (D::int(4) * a),
            t,
        })
    }

    /// See [`parabola_conic`]: the rotation's `xy` term is dropped.
    pub fn conic_section(&self) -> ConicSection<D> {
        parabola_conic(self.a, self.b, self.c, self.t)
    }

    pub fn bezier(&self, x1: D, x2: D) -> QuadraticBezier<D> {
        parabola_bezier(self.a, self.b, self.c, x1, x2)
    }

    /// See [`rotated_bounds`]: only the crop window is rotated.
    pub fn bezier_in(&self, rect: &Rect<D>) -> QuadraticBezier<D> {
        let (x1, x2) = rotated_bounds(rect, self.t);
        self.bezier(x1, x2)
    }

    /// `n + 1` points of the curve rotated by `t` about the origin, for local `x ∈ [xmin, xmax]`.
    pub fn sample(&self, xmin: D, xmax: D, n: usize) -> Vec<R2<D>> {
        let n = n.max(1);
        let step = (xmax - xmin) / D::int(n as i32);
        (0..=n)
            .map(|i| xmin + step * D::int(i as i32))
            .map(|x| R2 { x, y: self.y_at(x) }.rotate(&self.t))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use crate::conic::ConicSectionType;

    use super::*;

    #[test]
    fn vertex_standard() {
        let v = VertexParabola::new(2., 3., -1., 0.);
        let s = v.to_standard().unwrap();
        assert_eq!(s, StandardParabola::new(2., -12., 17., 0.));
        let back = s.to_vertex().unwrap();
        assert_relative_eq!(back.a, v.a);
        assert_relative_eq!(back.h, v.h);
        assert_relative_eq!(back.k, v.k);
        for x in [ -2., 0., 0.5, 3., 10. ] {
            assert_relative_eq!(s.y_at(x), v.y_at(x));
        }
    }

    #[test]
    fn vertex_standard_inverse() {
        for (a, h, k) in [ (0.5, -1.25, 3.), (-3., 0.1, -7.5), (1e-3, 40., 0.) ] {
            let v = VertexParabola::new(a, h, k, 0.);
            let back = v.to_standard().unwrap().to_vertex().unwrap();
            assert_relative_eq!(back.a, a);
            assert_relative_eq!(back.h, h, max_relative = 1e-12);
            assert_abs_diff_eq!(back.k, k, epsilon = 1e-9);
        }
    }

    #[test]
    fn zero_leading_coefficient() {
        assert_eq!(VertexParabola::new(0., 1., 2., 0.).to_standard(), Err(ConicError::ZeroLeadingCoefficient));
        assert_eq!(StandardParabola::new(0_f32, 1., 2., 0.).to_vertex(), Err(ConicError::ZeroLeadingCoefficient));
    }

    #[test]
    fn unrotated_conic() {
        let v = VertexParabola::new(2., 3., -1., 0.);
        let conic = v.conic_section();
        assert_eq!(conic, ConicSection::new(2., 0., 0., -12., -1., 17.));
        assert_eq!(conic.kind(), ConicSectionType::Parabola);
        assert_eq!(conic, v.to_standard().unwrap().conic_section());
        for x in [ -1., 0., 2.5 ] {
            assert_eq!(conic.eval(&R2 { x, y: v.y_at(x) }), 0.);
        }
    }

    #[test]
    fn rotated_conic_drops_xy_term() {
        let s = StandardParabola::new(1., 0., 0., FRAC_PI_2);
        let conic = s.conic_section();
        assert_eq!(conic.b, 0.);
        assert_abs_diff_eq!(conic.a, 0., epsilon = 1e-15);
        assert_relative_eq!(conic.c, 1.);
        assert_relative_eq!(conic.d, 1.);
        assert_abs_diff_eq!(conic.e, 0., epsilon = 1e-15);
        // At a quarter turn the dropped term vanishes too, so the rotated curve x = -y² is recovered
        for p in s.sample(-2., 2., 8) {
            assert_abs_diff_eq!(conic.eval(&p), 0., epsilon = 1e-12);
        }
    }

    #[test]
    fn bezier() {
        // y = x² over [-1, 2]: tangents at (-1, 1) and (2, 4) meet at (0.5, -2)
        let s = StandardParabola::new(1., 0., 0., 0.);
        let q = s.bezier(-1., 2.);
        assert_eq!(q.p0, R2 { x: -1., y: 1. });
        assert_eq!(q.p1, R2 { x: 0.5, y: -2. });
        assert_eq!(q.p2, R2 { x: 2., y: 4. });
        // A quadratic Bezier reproduces a parabola exactly
        for i in 0..=8 {
            let p = q.point_at(i as f64 / 8.);
            assert_relative_eq!(p.y, s.y_at(p.x), epsilon = 1e-12);
        }
        let v = VertexParabola::new(1., 0., 0., 0.);
        assert_eq!(v.bezier(-1., 2.), q);
    }

    #[test]
    fn bezier_in_rotated_rect() {
        let rect = Rect::new(R2 { x: -1., y: 0. }, R2 { x: 1., y: 2. });
        let s = StandardParabola::new(1., 0., 0., 0.);
        assert_eq!(s.bezier_in(&rect), s.bezier(-1., 1.));
        // Quarter turn: (x, y) ↦ (-y, x), so the bounds become -0 and -2
        let s = StandardParabola::new(1., 0., 0., FRAC_PI_2);
        let q = s.bezier_in(&rect);
        assert_abs_diff_eq!(q.p0.x, 0., epsilon = 1e-15);
        assert_relative_eq!(q.p2.x, -2.);
        assert_relative_eq!(q.p2.y, 4.);
    }
}
