pub mod branch;
pub mod fit;
pub mod kind;
pub mod matrix;
pub mod rescale;

pub use branch::{branch_y, Sign};
pub use kind::{classify, ConicSectionType};

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::{math::{is_valid, Scalar}, r2::R2};

/// Ax² + Bxy + Cy² + Dx + Ey + F = 0
///
/// No canonical scale is imposed; see [`ConicSection::rescale`] for a conditioning aid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ConicSection<D> {
    pub a: D,
    pub b: D,
    pub c: D,
    pub d: D,
    pub e: D,
    pub f: D,
}

impl<D> ConicSection<D> {
    pub fn new(a: D, b: D, c: D, d: D, e: D, f: D) -> Self {
        ConicSection { a, b, c, d, e, f }
    }
}

impl<D: Copy> ConicSection<D> {
    /// The "sextic" form: `[A, B, C, D, E, F]`.
    pub fn coefficients(&self) -> [D; 6] {
        let ConicSection { a, b, c, d, e, f } = *self;
        [ a, b, c, d, e, f ]
    }
}

impl<D> From<[D; 6]> for ConicSection<D> {
    fn from([ a, b, c, d, e, f ]: [D; 6]) -> Self {
        ConicSection { a, b, c, d, e, f }
    }
}

impl<D: Scalar> ConicSection<D> {
    /// Value of the polynomial at `p`; zero on the curve.
    pub fn eval(&self, p: &R2<D>) -> D {
        let ConicSection { a, b, c, d, e, f } = *self;
        let R2 { x, y } = *p;
        a * x * x + b * x * y + c * y * y + d * x + e * y + f
    }

    pub fn kind(&self) -> ConicSectionType {
        classify(self.a, self.b, self.c, self.d, self.e, self.f)
    }

    pub fn branch_y(&self, x: D, sign: Sign) -> D {
        branch_y(x, self, sign)
    }

    /// `n + 1` evenly spaced samples of one branch over `[xmin, xmax]`, keeping only the valid ones.
    pub fn sample(&self, xmin: D, xmax: D, n: usize, sign: Sign) -> Vec<R2<D>> {
        let n = n.max(1);
        let step = (xmax - xmin) / D::int(n as i32);
        (0..=n)
            .map(|i| xmin + step * D::int(i as i32))
            .map(|x| R2 { x, y: self.branch_y(x, sign) })
            .filter(|p| is_valid(p.y))
            .collect()
    }
}

impl<D: Display> Display for ConicSection<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.4}x² + {:.4}xy + {:.4}y² + {:.4}x + {:.4}y + {:.4}",
            self.a, self.b, self.c, self.d, self.e, self.f,
        )
    }
}
