use crate::{error::{ConicError, Result}, math::Scalar};

use super::ConicSection;

/// Divide all six coefficients by the smallest coefficient magnitude, so that coefficient becomes ±1.
///
/// A zero coefficient would scale everything to ±∞, so it is reported as [`ConicError::DegenerateScale`].
pub fn rescale_sextic<D: Scalar>(sextic: [D; 6]) -> Result<[D; 6]> {
    let min = sextic.iter().fold(D::infinity(), |min, v| min.min(v.abs()));
    if min.is_zero() {
        return Err(ConicError::DegenerateScale);
    }
    Ok(sextic.map(|v| v / min))
}

impl<D: Scalar> ConicSection<D> {
    pub fn rescale(&self) -> Result<ConicSection<D>> {
        rescale_sextic(self.coefficients()).map(ConicSection::from)
    }
}
