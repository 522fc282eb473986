#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConicError {
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    #[error("Cannot rescale: the smallest-magnitude coefficient is zero")]
    DegenerateScale,

    #[error("Expected a {}x{} matrix, found {}x{}", expected.0, expected.1, found.0, found.1)]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("{0} has no conic-section form")]
    NotAConic(&'static str),

    #[error("Leading coefficient is zero (a degree-zero parabola is a line)")]
    ZeroLeadingCoefficient,
}

pub type Result<T> = std::result::Result<T, ConicError>;
