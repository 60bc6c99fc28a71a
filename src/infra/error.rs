use thiserror::Error;

/// Failures surfaced by the upstream HTTP transport.
///
/// Messages are user-facing; the store keeps them as display state
/// verbatim.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{message}")]
    Network { message: String },
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("failed to decode response body: {0}")]
    Decode(String),
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl TransportError {
    /// Transport-level failure with no HTTP status (unreachable, timeout).
    pub fn network() -> Self {
        Self::Network {
            message: "Network error - please check your connection".to_string(),
        }
    }

    /// Non-2xx response, carrying the human-readable status mapping.
    pub fn status(status: u16) -> Self {
        Self::Status {
            status,
            message: status_message(status).to_string(),
        }
    }
}

/// Human-readable message for an upstream HTTP status.
pub fn status_message(status: u16) -> &'static str {
    match status {
        400 => "Bad request - please check your input",
        401 => "Unauthorized - please log in again",
        403 => "Forbidden - you do not have permission to perform this action",
        404 => "Resource not found",
        429 => "Too many requests - please try again later",
        500 => "Server error - please try again later",
        502 => "Bad gateway - service temporarily unavailable",
        503 => "Service unavailable - please try again later",
        _ => "An error occurred",
    }
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("telemetry initialization failed: {0}")]
    Telemetry(String),
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl InfraError {
    pub fn telemetry(message: impl Into<String>) -> Self {
        Self::Telemetry(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
