// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Sentia Kernel Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all Sentia Kernel failures.
///
/// Gate failures are never errors — they are terminal statuses on
/// [`crate::Outcome`]. This hierarchy covers configuration, input
/// parsing, and audit-chain validation only.
#[derive(Error, Debug)]
pub enum SentiaError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Invalid input (event, parameters).
    #[error("validation error: {0}")]
    Validation(String),

    /// Audit chain link or digest mismatch.
    #[error("audit chain error: {0}")]
    Chain(String),

    /// Canonical serialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

pub type SentiaResult<T> = Result<T, SentiaError>;
