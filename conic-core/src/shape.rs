use derive_more::From;
use serde::{Deserialize, Serialize};

use crate::{
    conic::{ConicSection, Sign},
    error::{ConicError, Result},
    intersect::{intersect_conics, line::dedup, Intersect, IntersectConfig},
    math::Scalar,
    r2::R2,
    shapes::{Circle, Ellipse, Hyperbola, Line, LineSegment, Rect, StandardParabola, VertexParabola},
};

/// Any entity the kernel understands, tagged by `kind` in JSON.
#[derive(Debug, Clone, Copy, From, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Shape<D> {
    Circle(Circle<D>),
    Ellipse(Ellipse<D>),
    Hyperbola(Hyperbola<D>),
    Line(Line<D>),
    Segment(LineSegment<D>),
    Rect(Rect<D>),
    VertexParabola(VertexParabola<D>),
    StandardParabola(StandardParabola<D>),
    Conic(ConicSection<D>),
}

pub fn circle<D: Scalar>(h: D, k: D, r: D) -> Shape<D> {
    Shape::Circle(Circle::new(h, k, r))
}
pub fn ellipse<D: Scalar>(h: D, k: D, rx: D, ry: D, t: D) -> Shape<D> {
    Shape::Ellipse(Ellipse::new(h, k, rx, ry, t))
}
pub fn line<D: Scalar>(x: D, y: D, dx: D, dy: D) -> Shape<D> {
    Shape::Line(Line::new(x, y, dx, dy))
}
pub fn segment<D: Scalar>(x0: D, y0: D, x1: D, y1: D) -> Shape<D> {
    Shape::Segment(LineSegment::new(R2 { x: x0, y: y0 }, R2 { x: x1, y: y1 }))
}

impl<D> Shape<D> {
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Circle(_) => "Circle",
            Shape::Ellipse(_) => "Ellipse",
            Shape::Hyperbola(_) => "Hyperbola",
            Shape::Line(_) => "Line",
            Shape::Segment(_) => "Segment",
            Shape::Rect(_) => "Rect",
            Shape::VertexParabola(_) => "VertexParabola",
            Shape::StandardParabola(_) => "StandardParabola",
            Shape::Conic(_) => "Conic",
        }
    }
}

impl<D: Scalar> Shape<D> {
    /// Implicit form, computed on each call. Fails for hyperbolas (not implemented) and rectangles (not a conic).
    pub fn conic_section(&self) -> Result<ConicSection<D>> {
        match self {
            Shape::Circle(c) => Ok(c.conic_section()),
            Shape::Ellipse(e) => Ok(e.conic_section()),
            Shape::Hyperbola(h) => h.conic_section(),
            Shape::Line(l) => Ok(l.conic_section()),
            Shape::Segment(s) => Ok(s.conic_section()),
            Shape::Rect(_) => Err(ConicError::NotAConic("Rect")),
            Shape::VertexParabola(p) => Ok(p.conic_section()),
            Shape::StandardParabola(p) => Ok(p.conic_section()),
            Shape::Conic(c) => Ok(*c),
        }
    }

    /// Polylines tracing the shape, for a renderer. Closed curves come back as one closed polyline of `n` segments;
    /// open curves are cut to `x ∈ [xmin, xmax]`. Hyperbolas and general conics yield one polyline per sheet/branch.
    pub fn polylines(&self, n: usize, xmin: D, xmax: D) -> Vec<Vec<R2<D>>> {
        let n = n.max(1);
        match self {
            Shape::Circle(c) => {
                let step = D::TAU() / D::int(n as i32);
                vec![ (0..=n).map(|i| c.point_at(step * D::int(i as i32))).collect() ]
            }
            Shape::Ellipse(e) => {
                let mut points = e.sample(n);
                points.push(e.point_at(D::zero()));
                vec![ points ]
            }
            Shape::Hyperbola(h) => {
                // Parameter range whose (unrotated) sheets reach the farther window edge
                let w = (xmin - h.c.x).abs().max((xmax - h.c.x).abs());
                let s_max = (w / h.r.x).max(D::one()).acosh();
                h.sample(n, s_max).into_iter().collect()
            }
            Shape::Line(l) => {
                let points = if l.d.x.abs() < D::machine_epsilon() {
                    let half = (xmax - xmin) / (D::int(2) * l.d.norm());
                    vec![ l.point_at(-half), l.point_at(half) ]
                } else {
                    vec![ l.point_at((xmin - l.p.x) / l.d.x), l.point_at((xmax - l.p.x) / l.d.x) ]
                };
                vec![ points ]
            }
            Shape::Segment(s) => vec![ vec![ s.p0, s.p1 ] ],
            Shape::Rect(r) => {
                let mut points = r.corners().to_vec();
                points.push(r.min);
                vec![ points ]
            }
            Shape::VertexParabola(p) => vec![ p.sample(xmin, xmax, n) ],
            Shape::StandardParabola(p) => vec![ p.sample(xmin, xmax, n) ],
            Shape::Conic(c) => Sign::ALL
                .iter()
                .map(|sign| c.sample(xmin, xmax, n, *sign))
                .filter(|points| !points.is_empty())
                .collect(),
        }
    }

    /// Intersection points with `o`.
    ///
    /// Lines, segments and rectangles go through the exact linear/quadratic routines (a rectangle as its four edges);
    /// two curves go through [`intersect_conics`] over `[xmin, xmax]` with `config`.
    pub fn intersect(&self, o: &Shape<D>, xmin: D, xmax: D, config: &IntersectConfig) -> Result<Vec<R2<D>>> {
        let points = match (self, o) {
            (Shape::Line(l0), Shape::Line(l1)) => l0.intersect(l1),
            (Shape::Line(l), Shape::Segment(s)) | (Shape::Segment(s), Shape::Line(l)) => l.intersect(s),
            (Shape::Segment(s0), Shape::Segment(s1)) => s0.intersect(s1),
            (Shape::Line(l), Shape::Rect(r)) | (Shape::Rect(r), Shape::Line(l)) => l.intersect(r),
            (Shape::Segment(s), Shape::Rect(r)) | (Shape::Rect(r), Shape::Segment(s)) => s.intersect(r),
            (Shape::Rect(r0), Shape::Rect(r1)) => dedup(r0.edges().iter().flat_map(|edge| edge.intersect(r1))),
            (Shape::Line(l), other) | (other, Shape::Line(l)) => other.conic_section()?.intersect(l),
            (Shape::Segment(s), other) | (other, Shape::Segment(s)) => other.conic_section()?.intersect(s),
            (Shape::Rect(r), other) | (other, Shape::Rect(r)) => {
                let conic = other.conic_section()?;
                dedup(r.edges().iter().flat_map(|edge| conic.intersect(edge)))
            }
            (a, b) => intersect_conics(&a.conic_section()?, &b.conic_section()?, xmin, xmax, config),
        };
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use crate::conic::ConicSectionType;

    use super::*;
    use test_log::test;

    #[test]
    fn json() {
        let s: Shape<f64> = serde_json::from_str(r#"{ "kind": "Circle", "c": { "x": 1, "y": 2 }, "r": 3 }"#).unwrap();
        assert_eq!(s, circle(1., 2., 3.));
        let s: Shape<f64> = serde_json::from_str(r#"{ "kind": "Conic", "a": 1, "b": 0, "c": 1, "d": 0, "e": 0, "f": -1 }"#).unwrap();
        assert_eq!(s.conic_section().unwrap().kind(), ConicSectionType::Circle);
        let json = serde_json::to_string(&segment(0., 0., 1., 1.)).unwrap();
        assert_eq!(json, r#"{"kind":"Segment","p0":{"x":0.0,"y":0.0},"p1":{"x":1.0,"y":1.0}}"#);
    }

    #[test]
    fn conic_sections() {
        assert_eq!(circle(0., 0., 1.).conic_section(), Ok(ConicSection::new(1., 0., 1., 0., 0., -1.)));
        let h: Shape<f64> = Hyperbola::new(0., 0., 1., 1., 0.).into();
        assert!(matches!(h.conic_section(), Err(ConicError::NotImplemented(_))));
        let r: Shape<f64> = Rect::new(R2 { x: 0., y: 0. }, R2 { x: 1., y: 1. }).into();
        assert_eq!(r.conic_section(), Err(ConicError::NotAConic("Rect")));
        assert_eq!(r.kind(), "Rect");
    }

    #[test]
    fn dispatch() {
        let config = IntersectConfig::default();
        let unit = circle(0., 0., 1.);

        let points = unit.intersect(&segment(-2., 0., 2., 0.), -2., 2., &config).unwrap();
        assert_eq!(points, vec![ R2 { x: -1., y: 0. }, R2 { x: 1., y: 0. } ]);
        // Symmetric in its arguments for line-like shapes
        let points = segment(-2., 0., 2., 0.).intersect(&unit, -2., 2., &config).unwrap();
        assert_eq!(points.len(), 2);

        let points = unit.intersect(&circle(1., 0., 1.), -2., 2., &config).unwrap();
        assert_eq!(points.len(), 2);
        assert_abs_diff_eq!(points[0].x, 0.5, epsilon = 1e-9);

        let points = line(0., 0., 1., 1.).intersect(&line(4., 0., -1., 1.), 0., 0., &config).unwrap();
        assert_eq!(points, vec![ R2 { x: 2., y: 2. } ]);

        let h: Shape<f64> = Hyperbola::new(0., 0., 1., 1., 0.).into();
        assert!(unit.intersect(&h, -2., 2., &config).is_err());
    }

    #[test]
    fn rect_dispatch() {
        let config = IntersectConfig::default();
        let r: Shape<f64> = Rect::new(R2 { x: -2., y: 0. }, R2 { x: 2., y: 0.5 }).into();
        let points = circle(0., 0., 1.).intersect(&r, -2., 2., &config).unwrap();
        let h = 0.75_f64.sqrt();
        // Bottom edge (left to right), then top edge (right to left)
        assert_eq!(points.len(), 4);
        assert_relative_eq!(points[0], R2 { x: -1., y: 0. });
        assert_relative_eq!(points[1], R2 { x: 1., y: 0. });
        assert_relative_eq!(points[2], R2 { x: h, y: 0.5 }, epsilon = 1e-12);
        assert_relative_eq!(points[3], R2 { x: -h, y: 0.5 }, epsilon = 1e-12);

        let r2: Shape<f64> = Rect::new(R2 { x: 1., y: -1. }, R2 { x: 3., y: 0.25 }).into();
        let points = r.intersect(&r2, 0., 0., &config).unwrap();
        // r's bottom edge crosses r2's left edge; r's right edge crosses r2's top edge
        assert_eq!(points, vec![ R2 { x: 1., y: 0. }, R2 { x: 2., y: 0.25 } ]);
    }

    #[test]
    fn polylines() {
        let [ closed ] = <[_; 1]>::try_from(circle(1., 1., 2.).polylines(8, 0., 0.)).unwrap();
        assert_eq!(closed.len(), 9);
        assert_relative_eq!(closed[0], closed[8], epsilon = 1e-12);

        let l = line(0., 1., 2., 1.).polylines(1, -2., 2.);
        assert_eq!(l, vec![ vec![ R2 { x: -2., y: 0. }, R2 { x: 2., y: 2. } ] ]);

        // Unit circle as a raw conic: one polyline per branch, invalid samples dropped
        let c: Shape<f64> = ConicSection::new(1., 0., 1., 0., 0., -1.).into();
        let branches = c.polylines(8, -2., 2.);
        assert_eq!(branches.len(), 2);
        for branch in &branches {
            assert_eq!(branch.len(), 5);
            assert!(branch.iter().all(|p| p.x.abs() <= 1.));
        }

        let h: Shape<f64> = Hyperbola::new(0., 0., 1., 1., 0.).into();
        let sheets = h.polylines(4, -3., 3.);
        assert_eq!(sheets.len(), 2);
        assert_relative_eq!(sheets[0][0].x, 3., epsilon = 1e-12);
        assert_relative_eq!(sheets[1][0].x, -3., epsilon = 1e-12);
    }
}
