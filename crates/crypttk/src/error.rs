//! Error types for the sealer.

use crypttk_blocks::{BlocksError, ErrorKind};
use thiserror::Error;

/// Errors that can occur while sealing or opening an envelope.
#[derive(Debug, Error)]
pub enum Error {
    /// Cipher, serializer or codec error.
    #[error("blocks error: {0}")]
    Blocks(#[from] BlocksError),
}

impl Error {
    /// The underlying error kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Blocks(e) => e.kind(),
        }
    }

    /// Whether the envelope failed authentication.
    pub fn is_authentication_failure(&self) -> bool {
        self.kind() == ErrorKind::AuthenticationFailure
    }
}

/// Result type for sealer operations.
pub type Result<T> = std::result::Result<T, Error>;
