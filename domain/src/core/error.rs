//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid quantization mode: '{0}' (expected one of: none, int8, int4, bbq)")]
    InvalidQuantization(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl DomainError {
    /// Check if this error was caused by an unknown quantization selector
    pub fn is_invalid_quantization(&self) -> bool {
        matches!(self, DomainError::InvalidQuantization(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_quantization_display() {
        let error = DomainError::InvalidQuantization("fp16".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid quantization mode: 'fp16' (expected one of: none, int8, int4, bbq)"
        );
    }

    #[test]
    fn test_is_invalid_quantization_check() {
        assert!(DomainError::InvalidQuantization("x".to_string()).is_invalid_quantization());
        assert!(!DomainError::InvalidQuery("empty".to_string()).is_invalid_quantization());
    }
}
