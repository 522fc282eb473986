use log::debug;

use crate::{
    conic::ConicSection,
    math::{quadratic::{quadratic, Roots}, Scalar},
    r2::R2,
    shapes::{Line, LineSegment},
};

use super::Intersect;

/// Substitute `p + t·d` into the conic, leaving a quadratic in `t`.
pub fn line_params<D: Scalar>(conic: &ConicSection<D>, p: &R2<D>, d: &R2<D>) -> Roots<D> {
    let ConicSection { a, b, c, d: cd, e, .. } = *conic;
    let two = D::int(2);
    let qa = a * d.x * d.x + b * d.x * d.y + c * d.y * d.y;
    let qb = two * a * p.x * d.x + b * (p.x * d.y + p.y * d.x) + two * c * p.y * d.y + cd * d.x + e * d.y;
    let qc = conic.eval(p);
    let roots = quadratic(qa, qb, qc);
    debug!("line_params: {}·t² + {}·t + {}: {:?}", qa, qb, qc, roots);
    roots
}

impl<D: Scalar> Intersect<D, Line<D>> for ConicSection<D> {
    fn intersect(&self, line: &Line<D>) -> Vec<R2<D>> {
        line_params(self, &line.p, &line.d)
            .reals()
            .into_iter()
            .map(|t| line.point_at(t))
            .collect()
    }
}

impl<D: Scalar> Intersect<D, LineSegment<D>> for ConicSection<D> {
    fn intersect(&self, seg: &LineSegment<D>) -> Vec<R2<D>> {
        let line = seg.line();
        line_params(self, &line.p, &line.d)
            .reals()
            .into_iter()
            .filter(|t| *t >= D::zero() && *t <= D::one())
            .map(|t| line.point_at(t))
            .collect()
    }
}
