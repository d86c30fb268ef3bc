//! Field rules shared by the entity constructors and mutators.

use crate::error::{DomainError, DomainResult};

/// Rejects values that are empty or consist only of whitespace.
pub(crate) fn require_not_blank(value: &str, message: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(message));
    }
    Ok(())
}

/// Rejects values longer than `max` characters.
pub(crate) fn require_max_chars(value: &str, max: usize, message: &str) -> DomainResult<()> {
    if value.chars().count() > max {
        return Err(DomainError::validation(message));
    }
    Ok(())
}

pub(crate) fn require_exact_chars(value: &str, len: usize, message: &str) -> DomainResult<()> {
    if value.chars().count() != len {
        return Err(DomainError::validation(message));
    }
    Ok(())
}

pub(crate) fn require_digits(value: &str, message: &str) -> DomainResult<()> {
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(DomainError::validation(message));
    }
    Ok(())
}
