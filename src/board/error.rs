//! Error types for board operations.

use std::fmt;

/// Error type for square construction and notation parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Index outside 0..64
    IndexOutOfBounds { index: usize },
    /// Algebraic notation that does not name a square
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::IndexOutOfBounds { index } => {
                write!(f, "Square index {index} out of bounds (must be 0-63)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_error_index_bounds() {
        let err = SquareError::IndexOutOfBounds { index: 64 };
        assert!(err.to_string().contains("64"));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "z9".to_string(),
        };
        assert!(err.to_string().contains("z9"));
    }

    #[test]
    fn test_error_equality() {
        let err1 = SquareError::IndexOutOfBounds { index: 70 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
