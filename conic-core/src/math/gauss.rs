use log::debug;
use nalgebra::DMatrix;

use crate::error::{ConicError, Result};

use super::scalar::Scalar;

/// Outcome of solving an augmented `n × (n+1)` linear system.
#[derive(Debug, Clone, PartialEq)]
pub enum Solution<D> {
    Unique(Vec<D>),
    /// A zero pivot whose row is entirely zero: the system is underdetermined.
    Infinite,
    /// A zero pivot whose row still has a non-zero right-hand side.
    Inconsistent,
}

impl<D> Solution<D> {
    pub fn unique(self) -> Option<Vec<D>> {
        match self {
            Solution::Unique(xs) => Some(xs),
            _ => None,
        }
    }
}

/// Gaussian elimination with partial pivoting, followed by back-substitution.
///
/// Rows are only swapped when the current pivot is below machine epsilon; the first lower row with a usable entry in
/// that column is brought up. Fails with [`ConicError::ShapeMismatch`] unless `m` is `n × (n+1)`.
pub fn solve<D: Scalar>(mut m: DMatrix<D>) -> Result<Solution<D>> {
    let n = m.nrows();
    if m.ncols() != n + 1 {
        return Err(ConicError::ShapeMismatch { expected: (n, n + 1), found: m.shape() });
    }
    let ε = D::machine_epsilon();

    for k in 0..n {
        if m[(k, k)].abs() < ε {
            if let Some(swap) = (k + 1..n).find(|&i| m[(i, k)].abs() >= ε) {
                m.swap_rows(k, swap);
            }
        }
        let pivot = m[(k, k)];
        if pivot.abs() < ε {
            continue;
        }
        for i in k + 1..n {
            let factor = m[(i, k)] / pivot;
            if factor.is_zero() {
                continue;
            }
            for j in k..=n {
                let v = m[(k, j)];
                m[(i, j)] = m[(i, j)] - factor * v;
            }
        }
    }

    if let Some(k) = (0..n).find(|&k| m[(k, k)].abs() < ε) {
        let rhs_zero = (k..=n).all(|j| m[(k, j)].abs() < ε);
        return Ok(if rhs_zero {
            debug!("singular system (zero pivot in row {}): infinitely many solutions", k);
            Solution::Infinite
        } else {
            debug!("singular system (zero pivot in row {}): no solution", k);
            Solution::Inconsistent
        });
    }

    let mut xs = vec![D::zero(); n];
    for i in (0..n).rev() {
        let mut acc = m[(i, n)];
        for j in i + 1..n {
            acc = acc - m[(i, j)] * xs[j];
        }
        xs[i] = acc / m[(i, i)];
    }
    Ok(Solution::Unique(xs))
}
