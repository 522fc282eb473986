use serde::{Deserialize, Serialize};

use crate::{conic::ConicSection, math::Scalar, r2::R2};

/// Infinite line through `p` with direction `d`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line<D> {
    pub p: R2<D>,
    pub d: R2<D>,
}

/// Segment from `p0` (t = 0) to `p1` (t = 1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment<D> {
    pub p0: R2<D>,
    pub p1: R2<D>,
}

impl<D: Scalar> Line<D> {
    pub fn new(x: D, y: D, dx: D, dy: D) -> Self {
        Line { p: R2 { x, y }, d: R2 { x: dx, y: dy } }
    }

    pub fn through(p0: R2<D>, p1: R2<D>) -> Self {
        Line { p: p0, d: p1 - p0 }
    }

    pub fn point_at(&self, t: D) -> R2<D> {
        self.p + self.d * t
    }

    /// dy·(x − px) − dx·(y − py) = 0
    pub fn conic_section(&self) -> ConicSection<D> {
        let Line { p, d } = *self;
        ConicSection {
            a: D::zero(),
            b: D::zero(),
            c: D::zero(),
            d: d.y,
            e: -d.x,
            f: d.x * p.y - d.y * p.x,
        }
    }
}

impl<D: Scalar> LineSegment<D> {
    pub fn new(p0: R2<D>, p1: R2<D>) -> Self {
        LineSegment { p0, p1 }
    }

    pub fn line(&self) -> Line<D> {
        Line::through(self.p0, self.p1)
    }

    pub fn point_at(&self, t: D) -> R2<D> {
        self.line().point_at(t)
    }

    pub fn conic_section(&self) -> ConicSection<D> {
        self.line().conic_section()
    }
}

#[cfg(test)]
mod tests {
    use crate::conic::ConicSectionType;

    use super::*;

    #[test]
    fn conic() {
        let l = Line::new(1., 2., 3., 1.);
        let c = l.conic_section();
        assert_eq!(c, ConicSection::new(0., 0., 0., 1., -3., 5.));
        assert_eq!(c.kind(), ConicSectionType::Line);
        assert_eq!(c.eval(&l.point_at(2.5)), 0.);
    }

    #[test]
    fn segment() {
        let s = LineSegment::new(R2 { x: 0., y: 1. }, R2 { x: 4., y: 3. });
        assert_eq!(s.point_at(0.5), R2 { x: 2., y: 2. });
        assert_eq!(s.conic_section().eval(&R2 { x: 8., y: 5. }), 0.);
        assert_eq!(s.conic_section().kind(), ConicSectionType::Line);
    }
}
