//! Field rules for order payloads.
//!
//! These are the pure checks behind the request schema: a status must carry
//! visible text, a total can never go below zero, and notes are capped at
//! [`MAX_NOTES_LENGTH`] characters. The db layer wires them into its
//! `validator` derives so the HTTP layer rejects bad input before any store
//! call happens.

use rust_decimal::Decimal;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of the free-text `notes` field, counted in characters.
pub const MAX_NOTES_LENGTH: u64 = 255;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate that a status string contains at least one non-whitespace character.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if status.trim().is_empty() {
        return Err(CoreError::Validation(
            "status must not be blank".to_string(),
        ));
    }
    Ok(())
}

/// Validate that an order total is zero or positive.
pub fn validate_total(total: &Decimal) -> Result<(), CoreError> {
    if total.is_sign_negative() && !total.is_zero() {
        return Err(CoreError::Validation(format!(
            "total must be greater than or equal to 0.00, got {total}"
        )));
    }
    Ok(())
}

/// Validate that notes, when present, do not exceed [`MAX_NOTES_LENGTH`] characters.
pub fn validate_notes(notes: Option<&str>) -> Result<(), CoreError> {
    let Some(notes) = notes else {
        return Ok(());
    };
    let len = notes.chars().count() as u64;
    if len > MAX_NOTES_LENGTH {
        return Err(CoreError::Validation(format!(
            "notes must be at most {MAX_NOTES_LENGTH} characters, got {len}"
        )));
    }
    Ok(())
}
