//! Use case error types.
//!
//! Validation failures carry joi-style field messages so the boundary can
//! report every violated field at once, not just the first.

use thiserror::Error;

use crate::domain::RepositoryError;

/// Error raised by participant registration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    #[error("participant name '{0}' is already taken")]
    NameTaken(String),
    #[error("invalid registration: {0:?}")]
    Validation(Vec<String>),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Error raised by posting a message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostMessageError {
    #[error("sender '{0}' is not a registered participant")]
    Unauthorized(String),
    #[error("invalid message: {0:?}")]
    Validation(Vec<String>),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Error raised by polling the message log
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchMessagesError {
    #[error("user '{0}' is not a registered participant")]
    Unauthorized(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Error raised by the heartbeat operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefreshPresenceError {
    #[error("participant '{0}' not found")]
    NotFound(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
