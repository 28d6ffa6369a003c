use std::error::Error;
use std::fmt;

/// Failures raised by matrix and vector construction, access and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// Supplied elements do not fit the declared `rows x cols` shape.
    ShapeMismatch {
        rows: usize,
        cols: usize,
        found: String,
    },
    /// Runtime sizes of two operands are incompatible for `op`.
    InconsistentOperands {
        op: &'static str,
        lhs: usize,
        rhs: usize,
    },
    /// Checked accessor called with `index >= bound` along `axis`.
    OutOfRange {
        axis: &'static str,
        index: usize,
        bound: usize,
    },
}

pub type Result<T> = std::result::Result<T, MathError>;

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::ShapeMismatch { rows, cols, found } => {
                write!(f, "shape mismatch: expected ({}, {}), got {}", rows, cols, found)
            }
            MathError::InconsistentOperands { op, lhs, rhs } => write!(
                f,
                "inconsistent operands for {}: left size {}, right size {}",
                op, lhs, rhs
            ),
            MathError::OutOfRange { axis, index, bound } => write!(
                f,
                "{} index {} out of range for bound {}",
                axis, index, bound
            ),
        }
    }
}

impl Error for MathError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        let err = MathError::ShapeMismatch {
            rows: 3,
            cols: 5,
            found: "row 0 with 4 elements".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "shape mismatch: expected (3, 5), got row 0 with 4 elements"
        );

        let err = MathError::InconsistentOperands {
            op: "matrix * vector",
            lhs: 5,
            rhs: 4,
        };
        assert!(err.to_string().contains("matrix * vector"));

        let err = MathError::OutOfRange {
            axis: "element",
            index: 6,
            bound: 6,
        };
        assert_eq!(err.to_string(), "element index 6 out of range for bound 6");
    }
}
