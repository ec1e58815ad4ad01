//! Menu error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("an action with the name `{name}` already exists")]
    DuplicateName { name: String },

    #[error("input stream closed before a valid choice was made")]
    InputClosed,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MenuError>;
