use log::trace;

use super::scalar::Scalar;

/// Real roots of `a2·t² + a1·t + a0 = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Roots<D> {
    /// `a2` vanished, leaving `a1·t + a0 = 0`.
    Linear(D),
    Double(D),
    Reals([ D; 2 ]),
    NoReal,
}

use Roots::{Linear, Double, Reals, NoReal};

impl<D: Copy> Roots<D> {
    pub fn reals(&self) -> Vec<D> {
        match self {
            Linear(r) => vec![ *r ],
            Double(r) => vec![ *r ],
            Reals(rs) => rs.to_vec(),
            NoReal => vec![],
        }
    }
}

/// `a2` is treated as zero below machine epsilon; a fully vanishing polynomial has no isolated roots.
pub fn quadratic<D: Scalar>(a2: D, a1: D, a0: D) -> Roots<D> {
    let ε = D::machine_epsilon();
    let roots = if a2.abs() < ε {
        if a1.abs() < ε {
            NoReal
        } else {
            Linear(-a0 / a1)
        }
    } else {
        let d = a1 * a1 - D::int(4) * a2 * a0;
        if d < D::zero() {
            NoReal
        } else if d.is_zero() {
            Double(-a1 / (D::int(2) * a2))
        } else {
            let d = d.sqrt();
            let a2x2 = D::int(2) * a2;
            Reals([ (-a1 - d) / a2x2, (-a1 + d) / a2x2 ])
        }
    };
    trace!("quadratic({}, {}, {}) = {:?}", a2, a1, a0, roots);
    roots
}
