use thiserror::Error;

/// Errors returned by the checked operations of this crate.
///
/// Unchecked counterparts of these operations (indexing with `[]`, [`Vector::swizzle`], etc.)
/// panic instead, just like slice indexing does.
///
/// [`Vector::swizzle`]: crate::Vector::swizzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A checked element access used an index past the end.
    #[error("index {index} is out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// A checked matrix access used a row or column past the end.
    #[error("element ({row}, {col}) is out of range for a {rows}x{cols} matrix")]
    CellOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// More values were supplied than the target type can hold.
    #[error("expected at most {max} values, got {got}")]
    TooManyValues { max: usize, got: usize },

    /// A swizzle selector referred to a component the source vector doesn't have.
    #[error("swizzle selects component {index} of a {len}-dimensional vector")]
    InvalidSwizzle { index: usize, len: usize },

    /// The matrix has a determinant of zero and cannot be inverted.
    #[error("attempt to invert a non-invertible matrix")]
    Singular,
}

/// Result alias used by the checked operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::OutOfRange { index: 3, len: 2 }.to_string(),
            "index 3 is out of range for length 2"
        );
        assert_eq!(
            Error::CellOutOfRange {
                row: 0,
                col: 4,
                rows: 3,
                cols: 3
            }
            .to_string(),
            "element (0, 4) is out of range for a 3x3 matrix"
        );
        assert_eq!(
            Error::TooManyValues { max: 4, got: 5 }.to_string(),
            "expected at most 4 values, got 5"
        );
    }
}
