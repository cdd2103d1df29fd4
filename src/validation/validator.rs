// ============================================================================
// Input Validators
// Layered predicates reporting failures as data
// ============================================================================

use serde::Serialize;
use serde_json::Value;

/// Outcome of a validation check.
///
/// Validators never fail; a rejected input is reported here with a
/// human-readable reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

impl ValidationResult {
    pub const fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub const fn invalid(reason: &'static str) -> Self {
        Self {
            is_valid: false,
            error: Some(reason),
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    #[inline]
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Run `next` only if this result is valid; otherwise keep this failure.
    #[inline]
    pub fn and_then<F>(self, next: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        if self.is_valid {
            next()
        } else {
            self
        }
    }

    /// Convert into a `Result`, with the reason as the error.
    pub fn into_result(self) -> Result<(), &'static str> {
        match (self.is_valid, self.error) {
            (true, _) => Ok(()),
            (false, reason) => Err(reason.unwrap_or("Invalid value")),
        }
    }
}

fn check(passes: bool, reason: &'static str) -> ValidationResult {
    if passes {
        ValidationResult::valid()
    } else {
        ValidationResult::invalid(reason)
    }
}

// ============================================================================
// Validators
// ============================================================================

/// Validate untyped input, e.g. a field of a JSON request.
///
/// Anything that is not a JSON number fails with "Value must be a number";
/// numbers go through [`validate_number`].
pub fn validate_value(value: &Value) -> ValidationResult {
    match value.as_f64() {
        Some(number) => validate_number(number),
        None => ValidationResult::invalid("Value must be a number"),
    }
}

/// Reject NaN and infinities.
pub fn validate_number(value: f64) -> ValidationResult {
    check(!value.is_nan(), "Value cannot be NaN")
        .and_then(|| check(value.is_finite(), "Value must be finite"))
}

/// A finite number that is not below zero.
pub fn validate_positive_number(value: f64) -> ValidationResult {
    validate_number(value).and_then(|| check(value >= 0.0, "Value must be positive"))
}

/// A finite number in `[0, 100]`, bounds included.
pub fn validate_percentage(value: f64) -> ValidationResult {
    validate_number(value).and_then(|| {
        check(
            (0.0..=100.0).contains(&value),
            "Percentage must be between 0 and 100",
        )
    })
}

/// Both operands finite and the denominator non-zero.
pub fn validate_division(numerator: f64, denominator: f64) -> ValidationResult {
    validate_number(numerator)
        .and_then(|| validate_number(denominator))
        .and_then(|| check(denominator != 0.0, "Division by zero is not allowed"))
}
