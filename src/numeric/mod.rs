// ============================================================================
// Numeric Module
// Floating-point arithmetic and financial formulas
// ============================================================================
//
// This module provides:
// - Pure functions: add/subtract/multiply/divide, percentage, TVA/TTC,
//   compound interest
// - Calculator: stateful accumulator with chainable operations
// - CalcError: Error types shared by the whole crate
//
// Design principles:
// - Plain f64 with IEEE-754 semantics, no rounding applied
// - Fallible operations return Result (no panics)
// - Arithmetic never calls the validators

pub mod arithmetic;
mod calculator;
mod errors;

pub use arithmetic::{
    add, calculate_interets_composes, calculate_percentage, calculate_prix_ttc, calculate_tva,
    divide, multiply, subtract,
};
pub use calculator::Calculator;
pub use errors::{CalcError, CalcResult};
