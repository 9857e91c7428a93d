//! Error types for typeans-core.

use crate::types::Side;
use thiserror::Error;

/// Result type alias using DiffError.
pub type Result<T> = std::result::Result<T, DiffError>;

/// Internal invariant violations. These indicate a defect in the engine,
/// never a problem with the input text.
#[derive(Debug, Error)]
pub enum DiffError {
    #[error("edit script does not reconstruct the {side} text: expected {expected:?}, got {actual:?}")]
    Reconstruction {
        side: Side,
        expected: String,
        actual: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstruction_display() {
        let error = DiffError::Reconstruction {
            side: Side::Correct,
            expected: "ab".to_string(),
            actual: "a".to_string(),
        };
        assert_eq!(
            error.to_string(),
            r#"edit script does not reconstruct the correct text: expected "ab", got "a""#
        );
    }
}
