// ============================================================================
// Financial Calculator Library
// Arithmetic, financial formulas, input validation and a bounded history
// ============================================================================

//! # Financial Calculator
//!
//! A small toolkit for everyday financial arithmetic.
//!
//! ## Features
//!
//! - **Pure arithmetic** (add, subtract, multiply, divide) over `f64`
//! - **Financial formulas**: percentage, VAT amount (TVA), tax-inclusive
//!   price (TTC) and compound interest
//! - **Chainable accumulator** for step-by-step calculations
//! - **Validators** that report bad input as data instead of errors
//! - **Bounded history** with FIFO eviction and JSON export/import
//!
//! The three parts are independent: the caller validates, calculates and
//! records as it sees fit.
//!
//! ## Example
//!
//! ```rust
//! use financial_calculator::prelude::*;
//!
//! let mut history = History::with_capacity(10);
//!
//! if validate_percentage(20.0).is_valid() {
//!     let ttc = calculate_prix_ttc(100.0, 20.0);
//!     history.save("calculate-ttc", vec![100.0, 20.0], ttc);
//! }
//!
//! let mut calc = Calculator::new();
//! calc.add(10.0).multiply(2.0);
//! history.save("multiply", vec![2.0], calc.value());
//!
//! assert_eq!(history.get_size(), 2);
//! assert_eq!(history.get_last().map(|e| e.result), Some(20.0));
//!
//! let exported = history.export();
//! let mut restored = History::new();
//! restored.import(&exported)?;
//! assert_eq!(restored.get_size(), 2);
//! # Ok::<(), CalcError>(())
//! ```

pub mod domain;
pub mod numeric;
pub mod validation;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{History, HistoryConfig, HistoryEntry};
    pub use crate::numeric::{
        add, calculate_interets_composes, calculate_percentage, calculate_prix_ttc,
        calculate_tva, divide, multiply, subtract, CalcError, CalcResult, Calculator,
    };
    pub use crate::validation::{
        validate_division, validate_number, validate_percentage, validate_positive_number,
        validate_value, ValidationResult,
    };
}
