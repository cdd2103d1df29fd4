// ============================================================================
// Arithmetic
// Basic operations and closed-form financial formulas over f64
// ============================================================================

use super::errors::{CalcError, CalcResult};

// ============================================================================
// Basic Operations
// ============================================================================

#[inline]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

#[inline]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

#[inline]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`.
///
/// # Errors
/// Returns `DivisionByZero` when `b` is exactly zero (either sign). Tiny
/// non-zero divisors are divided normally.
#[inline]
pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

// ============================================================================
// Financial Formulas
// ============================================================================

/// `percentage` percent of `value`, e.g. 25% of 200 is 50.
#[inline]
pub fn calculate_percentage(value: f64, percentage: f64) -> f64 {
    (value * percentage) / 100.0
}

/// Tax amount (TVA) owed on a tax-exclusive price.
#[inline]
pub fn calculate_tva(prix_ht: f64, taux_tva: f64) -> f64 {
    calculate_percentage(prix_ht, taux_tva)
}

/// Tax-inclusive price (TTC) from a tax-exclusive price (HT) and a rate.
#[inline]
pub fn calculate_prix_ttc(prix_ht: f64, taux_tva: f64) -> f64 {
    prix_ht + calculate_tva(prix_ht, taux_tva)
}

/// Compound interest: `capital * (1 + taux_annuel / 100) ^ nombre_annees`.
///
/// Years may be fractional.
///
/// # Errors
/// Returns `InvalidArgument` for a negative capital, a rate outside
/// `[0, 100]` or a negative number of years, checked in that order.
pub fn calculate_interets_composes(
    capital: f64,
    taux_annuel: f64,
    nombre_annees: f64,
) -> CalcResult<f64> {
    if capital < 0.0 {
        return Err(CalcError::InvalidArgument("Capital cannot be negative"));
    }
    if taux_annuel < 0.0 || taux_annuel > 100.0 {
        return Err(CalcError::InvalidArgument(
            "Interest rate must be between 0 and 100",
        ));
    }
    if nombre_annees < 0.0 {
        return Err(CalcError::InvalidArgument(
            "Number of years cannot be negative",
        ));
    }

    let taux = taux_annuel / 100.0;
    Ok(capital * (1.0 + taux).powf(nombre_annees))
}

// ============================================================================
// Tests
// ============================================================================
