//! Error types shared across the bot's modules.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the external API requesters.
///
/// The dispatch loop never propagates these as fatal: handlers that call
/// external services map them to a degraded reply or to no reply at all.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be completed (connection, timeout, body
    /// decoding).
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status code.
    #[error("unexpected status code {0}")]
    Status(StatusCode),
}

/// Errors returned by the persistence layer on name conflicts.
///
/// These are the only store operations that can fail: creating a text
/// command or an alias under a name that is already taken. Handlers surface
/// them as "already exists" style replies.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A text command with this name already exists.
    #[error("the command {0} already exists")]
    CommandExists(String),

    /// An alias with this name already exists.
    #[error("the alias {0} is already assigned")]
    AliasExists(String),
}
