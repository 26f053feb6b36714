//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ClientError and FlowError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-8 are reserved for specific error categories.
//! - A flow error maps through the client error of the step that failed.

use sources_client::{ClientError, FlowError};

/// Structured exit codes for sources-cli.
///
/// These codes enable scripts to distinguish between different failure modes
/// and take appropriate action (retry, refresh credentials, fail fast, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Authentication failure - rejected or unencodable identity.
    ///
    /// Scripts should check the account number or identity configuration.
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, or DNS failure.
    ///
    /// Scripts may retry with exponential backoff.
    ConnectionError = 3,

    /// Resource not found - source, endpoint, authentication, etc.
    ///
    /// Scripts should verify resource identifiers.
    NotFound = 4,

    /// Validation error - bad parameters or an unknown source type.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// Permission denied - insufficient privileges.
    ///
    /// Scripts should escalate permissions or use different credentials.
    PermissionDenied = 6,

    /// Rate limited - HTTP 429 Too Many Requests.
    ///
    /// Scripts should back off and retry later.
    RateLimited = 7,

    /// Service unavailable - HTTP 502/503/504, maintenance mode.
    ///
    /// Scripts should back off and retry later.
    ServiceUnavailable = 8,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }

    /// Returns true if this exit code indicates a retryable condition.
    ///
    /// Retryable conditions include:
    /// - Connection errors (temporary network issues)
    /// - Rate limiting (should retry after delay)
    /// - Service unavailable (maintenance mode may resolve)
    #[allow(dead_code)]
    pub const fn is_retryable(self) -> bool {
        matches!(
            self,
            ExitCode::ConnectionError | ExitCode::RateLimited | ExitCode::ServiceUnavailable
        )
    }
}

impl From<&ClientError> for ExitCode {
    /// Map ClientError variants to structured exit codes.
    ///
    /// Each variant is categorized based on how scripts should respond.
    fn from(err: &ClientError) -> Self {
        match err {
            // Identity header could not be established (exit code 2)
            ClientError::Identity(_) => ExitCode::AuthenticationFailed,
            ClientError::ApiError { status: 401, .. } => ExitCode::AuthenticationFailed,

            // Connection errors (exit code 3)
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,

            // Not found (exit code 4)
            ClientError::ApiError { status: 404, .. } => ExitCode::NotFound,

            // Validation errors (exit code 5)
            ClientError::ApiError { status: 400, .. } => ExitCode::ValidationError,
            ClientError::InvalidResponse(_) => ExitCode::ValidationError,

            // Permission denied (exit code 6)
            ClientError::ApiError { status: 403, .. } => ExitCode::PermissionDenied,

            // Rate limited (exit code 7)
            ClientError::ApiError { status: 429, .. } => ExitCode::RateLimited,

            // Service unavailable (exit code 8)
            ClientError::ApiError {
                status: 502..=504, ..
            } => ExitCode::ServiceUnavailable,

            // HttpError - check if it's a connection/timeout error
            ClientError::HttpError(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }

            // Default: general error
            ClientError::ApiError { .. } => ExitCode::GeneralError,
        }
    }
}

impl From<&FlowError> for ExitCode {
    /// Map flow errors to exit codes.
    ///
    /// An unknown source type is caller input; a failed step carries the
    /// client error of the request that failed.
    fn from(err: &FlowError) -> Self {
        match err {
            FlowError::UnknownSourceType(_) => ExitCode::ValidationError,
            FlowError::Step { source, .. } => Self::from(source),
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
///
/// This trait provides a convenient way to get the appropriate exit code
/// from any anyhow error, handling client, flow, and other error types.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if the error is neither a ClientError
    /// nor a FlowError.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if let Some(flow_err) = cause.downcast_ref::<FlowError>() {
                return ExitCode::from(flow_err);
            }
        }

        ExitCode::GeneralError
    }
}
