//! # AppError
//!
//! Centralized error handling for the Linkboard core.
//! Local guard failures never touch the network; anything the data service
//! rejects collapses into `Transport`.

use thiserror::Error;

/// The primary error type for all lb-core operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Vote or submission attempted with no session
    #[error("you need to sign in first")]
    Unauthenticated,

    /// Redundant same-direction vote; the ledger gains no entry
    #[error("you already voted")]
    AlreadyVoted,

    /// Submission attempted with an empty title
    #[error("a post title is required")]
    MissingTitle,

    /// No fixed topic and the draft names none
    #[error("a community topic is required")]
    MissingTopic,

    /// A data-service round trip rejected; surfaced as one generic failure,
    /// never retried, never rolled back
    #[error("something went wrong")]
    Transport(#[source] anyhow::Error),
}

impl AppError {
    /// True for failures raised before any network call was issued.
    pub fn is_local(&self) -> bool {
        !matches!(self, AppError::Transport(_))
    }
}

/// A specialized Result type for Linkboard logic.
pub type Result<T> = std::result::Result<T, AppError>;
