use serde::{Deserialize, Serialize};

use crate::{math::Scalar, r2::R2};

use super::line::LineSegment;

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect<D> {
    pub min: R2<D>,
    pub max: R2<D>,
}

impl<D: Scalar> Rect<D> {
    /// From any two opposite corners.
    pub fn new(p0: R2<D>, p1: R2<D>) -> Self {
        Rect { min: p0.min(&p1), max: p0.max(&p1) }
    }

    pub fn width(&self) -> D {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> D {
        self.max.y - self.min.y
    }

    /// Counter-clockwise from `min`.
    pub fn corners(&self) -> [ R2<D>; 4 ] {
        let Rect { min, max } = *self;
        [
            min,
            R2 { x: max.x, y: min.y },
            max,
            R2 { x: min.x, y: max.y },
        ]
    }

    pub fn edges(&self) -> [ LineSegment<D>; 4 ] {
        let [ c0, c1, c2, c3 ] = self.corners();
        [
            LineSegment::new(c0, c1),
            LineSegment::new(c1, c2),
            LineSegment::new(c2, c3),
            LineSegment::new(c3, c0),
        ]
    }

    /// Closed: points on the boundary are contained.
    pub fn contains(&self, p: &R2<D>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}
