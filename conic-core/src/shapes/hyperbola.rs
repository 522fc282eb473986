use serde::{Deserialize, Serialize};

use crate::{conic::{ConicSection, Sign}, error::{ConicError, Result}, math::Scalar, r2::R2, rotate::Rotate};

/// Hyperbola centered at `c` with semi-axes `r`, opening along its (rotated) x-axis, rotated counter-clockwise by `t`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hyperbola<D> {
    pub c: R2<D>,
    pub r: R2<D>,
    pub t: D,
}

impl<D: Scalar> Hyperbola<D> {
    pub fn new(h: D, k: D, rx: D, ry: D, t: D) -> Self {
        Hyperbola { c: R2 { x: h, y: k }, r: R2 { x: rx, y: ry }, t }
    }

    // TODO: derive the rotated-hyperbola coefficients (the ellipse derivation with ry² negated) and cover them with
    //  point_at-on-conic tests before enabling this.
    pub fn conic_section(&self) -> Result<ConicSection<D>> {
        Err(ConicError::NotImplemented("Hyperbola → ConicSection"))
    }

    /// Point on the `sign` sheet at hyperbolic parameter `s`: `c + Rotation(t)·(±rx·cosh s, ry·sinh s)`.
    pub fn point_at(&self, s: D, sign: Sign) -> R2<D> {
        let local = R2 { x: sign.value::<D>() * self.r.x * s.cosh(), y: self.r.y * s.sinh() };
        self.c + local.rotate(&self.t)
    }

    /// `n + 1` points per sheet, for `s ∈ [−s_max, s_max]`.
    pub fn sample(&self, n: usize, s_max: D) -> [ Vec<R2<D>>; 2 ] {
        let n = n.max(1);
        let step = s_max * D::int(2) / D::int(n as i32);
        Sign::ALL.map(|sign| {
            (0..=n).map(|i| self.point_at(-s_max + step * D::int(i as i32), sign)).collect()
        })
    }
}
