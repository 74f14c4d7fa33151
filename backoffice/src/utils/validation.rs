//! Input validation helpers
//!
//! Centralized limits and checks for form input. Validation failures
//! are local: they block submission before any network call and carry
//! the offending field name for inline display.

use shared::error::{AppError, AppResult};

// ── Text length limits ──────────────────────────────────────────────

/// Names: cashier, shift, bank, supplier, concept
pub const MAX_NAME_LEN: usize = 200;

/// References, invoice numbers, product codes
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Free-form descriptions
pub const MAX_NOTE_LEN: usize = 500;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(field, format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(
            field,
            format!("{field} is too long ({} chars, max {max_len})", value.len()),
        ));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> AppResult<()> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(
            field,
            format!("{field} is too long ({} chars, max {max_len})", v.len()),
        ));
    }
    Ok(())
}

/// Validate that an amount is finite and strictly positive.
pub fn validate_positive_amount(value: f64, field: &str) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::validation(
            field,
            format!("{field} must be a finite number, got {value}"),
        ));
    }
    if value <= 0.0 {
        return Err(AppError::validation(
            field,
            format!("{field} must be greater than zero, got {value}"),
        ));
    }
    Ok(())
}

/// Validate that every named monetary field is finite and non-negative.
pub fn validate_monetary_fields(campos: &[(&'static str, f64)]) -> AppResult<()> {
    for (field, value) in campos {
        if !value.is_finite() {
            return Err(AppError::validation(
                *field,
                format!("{field} must be a finite number, got {value}"),
            ));
        }
        if *value < 0.0 {
            return Err(AppError::validation(
                *field,
                format!("{field} must be non-negative, got {value}"),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_blank_and_overlong() {
        assert!(validate_required_text("Ana", "cajero", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("   ", "cajero", MAX_NAME_LEN).is_err());
        assert!(validate_required_text(&"x".repeat(201), "cajero", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn optional_text_allows_absent() {
        assert!(validate_optional_text(&None, "nota", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_text(&Some("ok".into()), "nota", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_text(&Some("x".repeat(501)), "nota", MAX_NOTE_LEN).is_err());
    }

    #[test]
    fn positive_amount_rejects_zero_and_nan() {
        assert!(validate_positive_amount(40.0, "tasa").is_ok());
        assert!(validate_positive_amount(0.0, "tasa").is_err());
        assert!(validate_positive_amount(-1.0, "tasa").is_err());
        assert!(validate_positive_amount(f64::NAN, "tasa").is_err());
    }

    #[test]
    fn monetary_fields_reject_first_negative() {
        let campos = [("efectivoBs", 10.0), ("zelleUsd", -0.5)];
        let err = validate_monetary_fields(&campos).unwrap_err();
        assert_eq!(err.field(), Some("zelleUsd"));
    }
}
