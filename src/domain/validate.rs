//! Field validation rules shared by console front ends.

use crate::domain::error::DomainError;

const PASSWORD_MIN: usize = 6;
const PASSWORD_MAX: usize = 128;

/// Reject blank values.
pub fn required(value: &str, field: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} is required")));
    }
    Ok(())
}

/// Structural email check: one `@`, non-empty local part, dotted domain.
pub fn email(value: &str) -> Result<(), DomainError> {
    let mut parts = value.split('@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    let well_formed = parts.next().is_none()
        && !local.is_empty()
        && domain.split('.').count() >= 2
        && domain.split('.').all(|segment| !segment.is_empty())
        && !value.chars().any(char::is_whitespace);
    if well_formed {
        Ok(())
    } else {
        Err(DomainError::validation(
            "Please enter a valid email address",
        ))
    }
}

pub fn password(value: &str) -> Result<(), DomainError> {
    if value.is_empty() {
        return Err(DomainError::validation("Password is required"));
    }
    if value.chars().count() < PASSWORD_MIN {
        return Err(DomainError::validation(format!(
            "Password must be at least {PASSWORD_MIN} characters long"
        )));
    }
    if value.chars().count() > PASSWORD_MAX {
        return Err(DomainError::validation(format!(
            "Password must be less than {PASSWORD_MAX} characters"
        )));
    }
    Ok(())
}

/// Enforce a character-count range on a free-text field.
pub fn length(value: &str, min: usize, max: usize, field: &str) -> Result<(), DomainError> {
    let count = value.chars().count();
    if count < min {
        return Err(DomainError::validation(format!(
            "{field} must be at least {min} characters long"
        )));
    }
    if count > max {
        return Err(DomainError::validation(format!(
            "{field} must be less than {max} characters"
        )));
    }
    Ok(())
}
