use itertools::Itertools;
use log::debug;
use ordered_float::OrderedFloat;

use crate::{math::Scalar, r2::R2, shapes::{Line, LineSegment, Rect}};

use super::Intersect;

fn in_unit<D: Scalar>(t: D) -> bool {
    t >= D::zero() && t <= D::one()
}

fn key<D: Scalar>(v: D) -> OrderedFloat<f64> {
    OrderedFloat(v.to_f64().unwrap_or(f64::NAN))
}

/// Exact-coordinate dedup, so a corner reached through two edges is reported once.
pub(crate) fn dedup<D: Scalar>(points: impl IntoIterator<Item = R2<D>>) -> Vec<R2<D>> {
    points.into_iter().unique_by(|p| (key(p.x), key(p.y))).collect()
}

/// Where `line` meets `seg`.
///
/// Parallel lines (|det| below machine epsilon) are coincident when the numerator is exactly zero, in which case both
/// segment endpoints are returned; otherwise they don't meet.
pub fn line_segment<D: Scalar>(line: &Line<D>, seg: &LineSegment<D>) -> Vec<R2<D>> {
    let e = seg.p1 - seg.p0;
    let det = line.d.cross(&e);
    let num = (seg.p0 - line.p).cross(&line.d);
    if det.abs() < D::machine_epsilon() {
        return if num.is_zero() {
            vec![ seg.p0, seg.p1 ]
        } else {
            vec![]
        };
    }
    let t = num / det;
    if in_unit(t) {
        vec![ seg.point_at(t) ]
    } else {
        vec![]
    }
}

pub fn line_line<D: Scalar>(l0: &Line<D>, l1: &Line<D>) -> Vec<R2<D>> {
    let det = l0.d.cross(&l1.d);
    if det.abs() < D::machine_epsilon() {
        debug!("line_line: parallel lines, det {}", det);
        return vec![];
    }
    let s = (l1.p - l0.p).cross(&l1.d) / det;
    vec![ l0.point_at(s) ]
}

/// Both parameters must lie in `[0, 1]`. Collinear segments yield the endpoints of each that lie on the other.
pub fn segment_segment<D: Scalar>(s0: &LineSegment<D>, s1: &LineSegment<D>) -> Vec<R2<D>> {
    let d0 = s0.p1 - s0.p0;
    let d1 = s1.p1 - s1.p0;
    let det = d0.cross(&d1);
    let ap = s1.p0 - s0.p0;
    if det.abs() < D::machine_epsilon() {
        if !ap.cross(&d0).is_zero() {
            return vec![];
        }
        let on = |seg_p: R2<D>, d: R2<D>, p: R2<D>| {
            let len2 = d.norm2();
            !len2.is_zero() && in_unit((p - seg_p).dot(&d) / len2)
        };
        let endpoints = [ s1.p0, s1.p1 ].into_iter().filter(|p| on(s0.p0, d0, *p))
            .chain([ s0.p0, s0.p1 ].into_iter().filter(|p| on(s1.p0, d1, *p)));
        return dedup(endpoints);
    }
    let s = ap.cross(&d1) / det;
    let t = ap.cross(&d0) / det;
    if in_unit(s) && in_unit(t) {
        vec![ s0.point_at(s) ]
    } else {
        vec![]
    }
}

impl<D: Scalar> Intersect<D, Line<D>> for Line<D> {
    fn intersect(&self, o: &Line<D>) -> Vec<R2<D>> {
        line_line(self, o)
    }
}

impl<D: Scalar> Intersect<D, LineSegment<D>> for Line<D> {
    fn intersect(&self, o: &LineSegment<D>) -> Vec<R2<D>> {
        line_segment(self, o)
    }
}

impl<D: Scalar> Intersect<D, Line<D>> for LineSegment<D> {
    fn intersect(&self, o: &Line<D>) -> Vec<R2<D>> {
        line_segment(o, self)
    }
}

impl<D: Scalar> Intersect<D, LineSegment<D>> for LineSegment<D> {
    fn intersect(&self, o: &LineSegment<D>) -> Vec<R2<D>> {
        segment_segment(self, o)
    }
}

impl<D: Scalar> Intersect<D, Rect<D>> for Line<D> {
    fn intersect(&self, rect: &Rect<D>) -> Vec<R2<D>> {
        dedup(rect.edges().iter().flat_map(|edge| line_segment(self, edge)))
    }
}

impl<D: Scalar> Intersect<D, Rect<D>> for LineSegment<D> {
    fn intersect(&self, rect: &Rect<D>) -> Vec<R2<D>> {
        dedup(rect.edges().iter().flat_map(|edge| segment_segment(self, edge)))
    }
}
