use thiserror::Error;

use crate::domain::error::DomainError;
use crate::infra::error::{InfraError, TransportError};

/// Application-level failure taxonomy.
///
/// Resource clients and the session manager catch transport and decoding
/// failures and re-throw them as these typed variants; the store traps
/// them at the action boundary and keeps only `user_message()` as display
/// state, so nothing below ever reaches a render path unhandled.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("invalid or expired token")]
    InvalidOrExpiredToken,
    #[error("{entity} not found")]
    NotFound { entity: &'static str },
}

impl AppError {
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    /// Message suitable for an inline banner or toast.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Transport(err) => err.to_string(),
            AppError::Domain(err) => err.to_string(),
            AppError::Infra(_) => "An unexpected error occurred".to_string(),
            AppError::InvalidCredentials => "Invalid credentials".to_string(),
            AppError::InvalidOrExpiredToken => "Invalid or expired token".to_string(),
            AppError::NotFound { .. } => "Resource not found".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_messages_pass_through_verbatim() {
        let err = AppError::from(TransportError::status(500));
        assert_eq!(err.user_message(), "Server error - please try again later");

        let err = AppError::from(TransportError::network());
        assert_eq!(
            err.user_message(),
            "Network error - please check your connection"
        );
    }

    #[test]
    fn not_found_uses_the_generic_banner_text() {
        let err = AppError::not_found("entry");
        assert_eq!(err.user_message(), "Resource not found");
    }
}
