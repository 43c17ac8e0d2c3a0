//! Shared error types across lhmetrics crates.

use thiserror::Error;

use crate::artifacts::ArtifactName;

/// Stable error codes surfaced to the host framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// A required artifact is absent.
    MissingArtifact,
    /// The timing-summary provider failed.
    ComputationFailed,
    /// Invalid configuration.
    BadConfig,
    /// Unsupported config version.
    UnsupportedVersion,
}

impl ErrorCode {
    /// String representation used in audit results.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingArtifact => "MISSING_ARTIFACT",
            ErrorCode::ComputationFailed => "COMPUTATION_FAILED",
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, AuditError>;

/// Failure reported by a timing-summary provider.
///
/// `Clone` so that every waiter on a shared in-flight computation observes the
/// same error value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComputeError {
    #[error("malformed trace: {0}")]
    MalformedTrace(String),
    #[error("malformed devtools log: {0}")]
    MalformedDevtoolsLog(String),
    #[error("internal: {0}")]
    Internal(String),
}

/// Unified error type used by core and audit crates.
#[derive(Debug, Error)]
pub enum AuditError {
    /// `pass` is `None` when the whole collection is empty.
    #[error("missing artifact: {artifact}{}", .pass.as_deref().map(|p| format!(" (pass {p})")).unwrap_or_default())]
    MissingArtifact {
        artifact: ArtifactName,
        pass: Option<String>,
    },
    #[error("timing summary failed: {0}")]
    Computation(#[from] ComputeError),
    #[error("bad config: {0}")]
    Config(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
}

impl AuditError {
    /// Map the error to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            AuditError::MissingArtifact { .. } => ErrorCode::MissingArtifact,
            AuditError::Computation(_) => ErrorCode::ComputationFailed,
            AuditError::Config(_) => ErrorCode::BadConfig,
            AuditError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
        }
    }

    pub fn missing(artifact: ArtifactName, pass: &str) -> Self {
        AuditError::MissingArtifact {
            artifact,
            pass: Some(pass.to_string()),
        }
    }
}
