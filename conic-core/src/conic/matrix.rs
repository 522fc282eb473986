use nalgebra::{DMatrix, Matrix3};

use crate::{error::{ConicError, Result}, math::Scalar};

use super::ConicSection;

impl<D: Scalar> ConicSection<D> {
    /// Symmetric matrix `M` with `[x y 1] M [x y 1]ᵀ` equal to the conic polynomial.
    pub fn to_matrix(&self) -> Matrix3<D> {
        let ConicSection { a, b, c, d, e, f } = *self;
        let half = D::lit(0.5);
        Matrix3::new(
            a,        b * half, d * half,
            b * half, c,        e * half,
            d * half, e * half, f,
        )
    }

    /// Inverse of [`ConicSection::to_matrix`]; off-diagonal pairs are summed, so non-symmetric input describes the same
    /// quadratic form as its symmetric part.
    pub fn from_matrix(m: &DMatrix<D>) -> Result<ConicSection<D>> {
        if m.shape() != (3, 3) {
            let (rows, cols) = m.shape();
            return Err(ConicError::ShapeMismatch { expected: (3, 3), found: (rows, cols) });
        }
        Ok(ConicSection {
            a: m[(0, 0)],
            b: m[(0, 1)] + m[(1, 0)],
            c: m[(1, 1)],
            d: m[(0, 2)] + m[(2, 0)],
            e: m[(1, 2)] + m[(2, 1)],
            f: m[(2, 2)],
        })
    }

    /// Products summed by [`ConicSection::determinant`].
    fn determinant_terms(&self) -> [ D; 5 ] {
        let ConicSection { a, b, c, d, e, f } = *self;
        let four = D::int(4);
        [
            a * c * f,
            b * d * e / four,
            -a * e * e / four,
            -b * b * f / four,
            -c * d * d / four,
        ]
    }

    /// Determinant of [`ConicSection::to_matrix`]; zero for degenerate conics (points, line pairs).
    pub fn determinant(&self) -> D {
        self.determinant_terms().iter().fold(D::zero(), |acc, t| acc + *t)
    }

    /// Whether the determinant vanishes to within rounding of the terms it sums.
    ///
    /// Relative to those terms rather than to a fixed threshold, so a small circle (determinant `−r²`) is never mistaken
    /// for a point, however far it sits from the origin.
    pub fn is_degenerate(&self) -> bool {
        let terms = self.determinant_terms();
        let det = terms.iter().fold(D::zero(), |acc, t| acc + *t);
        let scale = terms.iter().fold(D::zero(), |acc, t| acc + t.abs());
        det.abs() <= D::int(16) * D::machine_epsilon() * scale
    }
}

/// [`ConicSection::to_matrix`] over a bare `[A, B, C, D, E, F]`.
pub fn sextic_to_matrix<D: Scalar>(sextic: [D; 6]) -> Matrix3<D> {
    ConicSection::from(sextic).to_matrix()
}

pub fn matrix_to_sextic<D: Scalar>(m: &DMatrix<D>) -> Result<[D; 6]> {
    ConicSection::from_matrix(m).map(|c| c.coefficients())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout() {
        let m = sextic_to_matrix([ 1., 2., 3., 4., 5., 6. ]);
        assert_eq!(m, Matrix3::new(
            1., 1. , 2. ,
            1., 3. , 2.5,
            2., 2.5, 6. ,
        ));
        let back = matrix_to_sextic(&DMatrix::from_column_slice(3, 3, m.as_slice())).unwrap();
        assert_eq!(back, [ 1., 2., 3., 4., 5., 6. ]);
    }

    #[test]
    fn shape_mismatch() {
        let m = DMatrix::<f64>::zeros(2, 3);
        assert_eq!(ConicSection::from_matrix(&m), Err(ConicError::ShapeMismatch { expected: (3, 3), found: (2, 3) }));
    }

    #[test]
    fn determinant_matches_nalgebra() {
        let c = ConicSection::new(2., -1., 3., 0.5, -4., 1.5);
        assert_relative_eq!(c.determinant(), c.to_matrix().determinant(), max_relative = 1e-12);
        assert_eq!(ConicSection::new(1., 0., -1., 0., 0., 0.).determinant(), 0.);
    }

    #[test]
    fn degeneracy_is_scale_relative() {
        // (x - 1)² + 2(y + 2)² = 0
        assert!(ConicSection::new(1_f64, 0., 2., -2., 8., 9.).is_degenerate());
        // (x - 5)² + (y - 5)² = 1e-6: determinant -1e-6, far below any fixed threshold but not a rounding artifact
        let c = ConicSection::new(1_f64, 0., 1., -10., -10., 50. - 1e-6);
        assert!(!c.is_degenerate());
        // Scaling the whole polynomial doesn't change the answer
        let scaled = ConicSection::from(c.coefficients().map(|v| v * 1e-4));
        assert!(!scaled.is_degenerate());
    }
}
