// ============================================================================
// Calculator
// Stateful accumulator with chainable operations
// ============================================================================

use super::arithmetic;
use super::errors::CalcResult;

/// Single-register calculator.
///
/// Every operation applies the matching pure function to
/// `(current value, operand)` and stores the result back.
///
/// # Example
/// ```
/// use financial_calculator::numeric::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.add(10.0).multiply(2.0).subtract(5.0).divide(3.0)?;
/// assert!((calc.value() - 5.0).abs() < 1e-9);
/// # Ok::<(), financial_calculator::numeric::CalcError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calculator {
    current_value: f64,
}

impl Calculator {
    /// Create a calculator with the register at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator seeded with `value`.
    pub fn with_value(value: f64) -> Self {
        Self {
            current_value: value,
        }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.current_value
    }

    /// Set the register back to zero.
    pub fn reset(&mut self) {
        tracing::trace!(previous = self.current_value, "calculator reset");
        self.current_value = 0.0;
    }

    pub fn add(&mut self, value: f64) -> &mut Self {
        self.apply("add", value, arithmetic::add)
    }

    pub fn subtract(&mut self, value: f64) -> &mut Self {
        self.apply("subtract", value, arithmetic::subtract)
    }

    pub fn multiply(&mut self, value: f64) -> &mut Self {
        self.apply("multiply", value, arithmetic::multiply)
    }

    /// Divide the register by `value`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when `value` is zero. The register is left
    /// untouched in that case.
    pub fn divide(&mut self, value: f64) -> CalcResult<&mut Self> {
        let result = arithmetic::divide(self.current_value, value)?;
        tracing::trace!(operand = value, result, "calculator divide");
        self.current_value = result;
        Ok(self)
    }

    fn apply(&mut self, operation: &str, value: f64, op: fn(f64, f64) -> f64) -> &mut Self {
        self.current_value = op(self.current_value, value);
        tracing::trace!(operation, operand = value, result = self.current_value, "calculator step");
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::CalcError;

    #[test]
    fn test_starts_at_zero() {
        let calc = Calculator::new();
        assert_eq!(calc.value(), 0.0);
    }

    #[test]
    fn test_individual_operations() {
        let mut calc = Calculator::new();
        assert_eq!(calc.add(5.0).value(), 5.0);
        assert_eq!(calc.subtract(2.0).value(), 3.0);
        assert_eq!(calc.multiply(4.0).value(), 12.0);
        assert_eq!(calc.divide(3.0).unwrap().value(), 4.0);
    }

    #[test]
    fn test_chaining() {
        let mut calc = Calculator::new();
        calc.add(10.0)
            .multiply(2.0)
            .subtract(5.0)
            .divide(3.0)
            .unwrap();
        assert!((calc.value() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_divide_by_zero_keeps_value() {
        let mut calc = Calculator::new();
        calc.add(10.0);

        let result = calc.divide(0.0).map(|c| c.value());
        assert!(matches!(result, Err(CalcError::DivisionByZero)));
        assert_eq!(calc.value(), 10.0);
    }

    #[test]
    fn test_reset() {
        let mut calc = Calculator::with_value(42.0);
        assert_eq!(calc.value(), 42.0);

        calc.reset();
        assert_eq!(calc.value(), 0.0);

        calc.add(1.0);
        assert_eq!(calc.value(), 1.0);
    }
}
