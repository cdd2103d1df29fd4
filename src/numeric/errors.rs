// ============================================================================
// Calculation Errors
// Error types for arithmetic, formula and history operations
// ============================================================================

use std::fmt;

/// Errors that can occur while calculating or restoring history.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CalcError {
    /// Divisor was exactly zero
    DivisionByZero,
    /// Input outside the domain of a formula or configuration
    InvalidArgument(&'static str),
    /// History payload could not be restored
    ImportError(String),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::DivisionByZero => write!(f, "Division by zero is not allowed"),
            CalcError::InvalidArgument(reason) => write!(f, "{}", reason),
            CalcError::ImportError(reason) => {
                write!(f, "Failed to import history: {}", reason)
            },
        }
    }
}

impl std::error::Error for CalcError {}

/// Result type alias for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CalcError::DivisionByZero.to_string(),
            "Division by zero is not allowed"
        );
        assert_eq!(
            CalcError::InvalidArgument("Capital cannot be negative").to_string(),
            "Capital cannot be negative"
        );
        assert_eq!(
            CalcError::ImportError("Invalid data format".to_string()).to_string(),
            "Failed to import history: Invalid data format"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(CalcError::DivisionByZero, CalcError::DivisionByZero);
        assert_ne!(
            CalcError::DivisionByZero,
            CalcError::InvalidArgument("Capital cannot be negative")
        );
    }
}
