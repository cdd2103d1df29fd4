// ============================================================================
// Validation Module
// Input checks that report failures as values instead of errors
// ============================================================================

pub mod validator;

pub use validator::{
    validate_division, validate_number, validate_percentage, validate_positive_number,
    validate_value, ValidationResult,
};
