// SPDX-License-Identifier: MIT

//! Application error types shared across the device core.

/// Core error type.
///
/// Storage reads deliberately do not surface here: an unreadable session
/// collection is treated as empty so the progress screen always has
/// something to render. Failed writes do propagate, since masking one
/// would silently lose user data.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid session transition: {0}")]
    InvalidTransition(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, AppError>;
