use serde::{Deserialize, Serialize};

use crate::math::Scalar;

use super::ConicSection;

/// Which of the two y-solutions of a conic (solved for y given x) to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Pos,
    Neg,
}

impl Sign {
    pub const ALL: [Sign; 2] = [ Sign::Pos, Sign::Neg ];

    pub fn value<D: Scalar>(&self) -> D {
        match self {
            Sign::Pos => D::one(),
            Sign::Neg => -D::one(),
        }
    }
}

/// y on the `sign` branch of `conic` at `x`:
///
/// y = (-(Bx + E) ± √((Bx + E)² − 4C(Ax² + Dx + F))) / 2C
///
/// Non-finite (NaN/∞) when `x` is outside the branch's real extent, or when `C = 0`; callers rely on that rather than on
/// an error.
pub fn branch_y<D: Scalar>(x: D, conic: &ConicSection<D>, sign: Sign) -> D {
    let ConicSection { a, b, c, d, e, f } = *conic;
    let bxe = b * x + e;
    let disc = bxe * bxe - D::int(4) * c * (a * x * x + d * x + f);
    (-bxe + sign.value::<D>() * disc.sqrt()) / (D::int(2) * c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_branches() {
        // (x - 1)² + (y - 2)² = 4
        let c = ConicSection::new(1., 0., 1., -2., -4., 1.);
        assert_relative_eq!(branch_y(1., &c, Sign::Pos), 4.);
        assert_relative_eq!(branch_y(1., &c, Sign::Neg), 0.);
        assert_relative_eq!(branch_y(3., &c, Sign::Pos), 2.);
    }

    #[test]
    fn rotated_branches() {
        // xy = 1
        let c = ConicSection::new(0., 1., 0., 0., 0., -1.);
        assert!(branch_y(2_f64, &c, Sign::Pos).is_nan());
        // x² + xy + y² = 3
        let c = ConicSection::new(1., 1., 1., 0., 0., -3.);
        assert_relative_eq!(branch_y(1., &c, Sign::Pos), 1.);
        assert_relative_eq!(branch_y(1., &c, Sign::Neg), -2.);
    }

    #[test]
    fn out_of_domain() {
        let unit = ConicSection::new(1_f32, 0., 1., 0., 0., -1.);
        assert!(branch_y(1.5, &unit, Sign::Pos).is_nan());
        assert!(!branch_y(1.5, &unit, Sign::Neg).is_finite());
        // y = x² has C = 0
        let parabola = ConicSection::new(1., 0., 0., 0., -1., 0.);
        assert!(!branch_y(1_f64, &parabola, Sign::Pos).is_finite());
    }
}
