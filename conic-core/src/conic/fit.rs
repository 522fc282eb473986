use log::debug;
use nalgebra::DMatrix;

use crate::{math::{gauss::{self, Solution}, Scalar}, r2::R2};

use super::ConicSection;

impl<D: Scalar> ConicSection<D> {
    /// Conic through five points, normalized to `F = 1`.
    ///
    /// Each point contributes a row `[x², xy, y², x, y | −1]`. `None` when that system has no unique solution: the points
    /// admit infinitely many conics (e.g. collinear points) or none with `F = 1` (e.g. a conic through the origin).
    pub fn from_points(points: &[R2<D>; 5]) -> Option<ConicSection<D>> {
        let m = DMatrix::from_fn(5, 6, |i, j| {
            let R2 { x, y } = points[i];
            match j {
                0 => x * x,
                1 => x * y,
                2 => y * y,
                3 => x,
                4 => y,
                _ => -D::one(),
            }
        });
        // `m` is 5 × 6 by construction
        match gauss::solve(m).ok()? {
            Solution::Unique(xs) => Some(ConicSection::new(xs[0], xs[1], xs[2], xs[3], xs[4], D::one())),
            Solution::Infinite => {
                debug!("from_points: infinitely many conics pass through {:?}", points);
                None
            },
            Solution::Inconsistent => {
                debug!("from_points: no conic with F = 1 passes through {:?}", points);
                None
            },
        }
    }
}
