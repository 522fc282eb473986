use serde::{Deserialize, Serialize};

use crate::math::Scalar;

use super::ConicSection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConicSectionType {
    Point,
    Line,
    Circle,
    Ellipse,
    Parabola,
    Hyperbola,
    RectangularHyperbola,
    CrossingLines,
}

/// -1, 0 or 1.
fn sign<D: Scalar>(v: D) -> i8 {
    if v > D::zero() {
        1
    } else if v < D::zero() {
        -1
    } else {
        0
    }
}

/// Classify by the discriminant `B² − 4AC`.
///
/// A point is an elliptic conic whose 3×3 matrix is singular ([`ConicSection::is_degenerate`]).
///
/// Hyperbolic conics with `|A + C| < 1e-5` split on the signs of `A` and `B`: differing signs give `CrossingLines`,
/// matching signs `RectangularHyperbola`. This looks at no constant or linear term, so non-degenerate curves like
/// `x² − y² = 1` and `xy = 1` come back as `CrossingLines`, while e.g. `x² + 2xy − y² = 0` (a line pair) comes back
/// as `RectangularHyperbola`.
pub fn classify<D: Scalar>(a: D, b: D, c: D, d: D, e: D, f: D) -> ConicSectionType {
    use ConicSectionType::*;
    let ε = D::classify_epsilon();
    let disc = b * b - D::int(4) * a * c;
    if disc.abs() < ε {
        if a.is_zero() && b.is_zero() && c.is_zero() {
            Line
        } else {
            Parabola
        }
    } else if disc < D::zero() {
        if ConicSection::new(a, b, c, d, e, f).is_degenerate() {
            Point
        } else if (a - c).abs() < ε && b.abs() < ε {
            Circle
        } else {
            Ellipse
        }
    } else if (a + c).abs() < ε {
        if sign(a) != sign(b) {
            CrossingLines
        } else {
            RectangularHyperbola
        }
    } else {
        Hyperbola
    }
}
