//! Error types for the chat widget

use thiserror::Error;

/// Everything that can go wrong between the draft box and the result list.
///
/// The `Display` text is what the user sees in the inline error line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("Message is empty")]
    EmptyQuery,

    #[error("Message too long (max {max} characters)")]
    InputTooLong { max: usize },

    #[error("A search is already in progress")]
    Busy,

    #[error("Failed to reach backend: {0}")]
    Transport(String),

    #[error("{detail}")]
    Http { status: u16, detail: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ChatError {
    /// Errors that are rejected before a request is attempted and never
    /// produce a bot message.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            ChatError::EmptyQuery | ChatError::InputTooLong { .. } | ChatError::Busy
        )
    }
}

pub type Result<T> = std::result::Result<T, ChatError>;
