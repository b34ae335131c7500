//! Error types for crypttk blocks.

use thiserror::Error;

use crate::codec::CodecError;

/// Errors that can occur while sealing, opening or encoding a container.
#[derive(Debug, Error)]
pub enum BlocksError {
    /// The key length is not accepted by AES (16, 24 or 32 bytes).
    #[error("invalid key length: {0} bytes (expected 16, 24 or 32)")]
    InvalidKeyLength(usize),

    /// The OS random source could not produce an IV.
    #[error("random source failure: {0}")]
    RandomSource(String),

    /// The plaintext length does not fit in one block as decimal digits.
    #[error("length header overflow: {0} does not fit in a single block")]
    LengthHeaderOverflow(usize),

    /// The container tag does not match the recomputed HMAC.
    #[error("HMAC mismatch")]
    HmacMismatch,

    /// The container carries no tag at all.
    #[error("HMAC missing")]
    HmacMissing,

    /// The decrypted length header is not a decimal integer.
    #[error("invalid length header: {0}")]
    LengthParse(String),

    /// The decrypted length header points past the end of the data.
    #[error("length header out of range: {length} > {available}")]
    LengthOutOfRange { length: usize, available: usize },

    /// An authenticated container has fields of the wrong shape.
    #[error("malformed container: {0}")]
    MalformedContainer(String),

    /// The outer transport codec rejected its input.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// The envelope bytes are not a canonical encoded container.
    #[error("deserialize error: {0}")]
    Deserialize(String),
}

/// Coarse classification of [`BlocksError`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidKeyLength,
    RandomSourceFailure,
    LengthHeaderOverflow,
    AuthenticationFailure,
    LengthParseFailure,
    LengthOutOfRange,
    MalformedContainer,
    CodecFailure,
    DeserializeFailure,
}

impl BlocksError {
    /// The error kind this value belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlocksError::InvalidKeyLength(_) => ErrorKind::InvalidKeyLength,
            BlocksError::RandomSource(_) => ErrorKind::RandomSourceFailure,
            BlocksError::LengthHeaderOverflow(_) => ErrorKind::LengthHeaderOverflow,
            BlocksError::HmacMismatch | BlocksError::HmacMissing => {
                ErrorKind::AuthenticationFailure
            }
            BlocksError::LengthParse(_) => ErrorKind::LengthParseFailure,
            BlocksError::LengthOutOfRange { .. } => ErrorKind::LengthOutOfRange,
            BlocksError::MalformedContainer(_) => ErrorKind::MalformedContainer,
            BlocksError::Codec(_) => ErrorKind::CodecFailure,
            BlocksError::Deserialize(_) => ErrorKind::DeserializeFailure,
        }
    }

    /// Whether this error means the container failed authentication.
    pub fn is_authentication_failure(&self) -> bool {
        self.kind() == ErrorKind::AuthenticationFailure
    }
}

/// Result type for block operations.
pub type Result<T> = std::result::Result<T, BlocksError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hmac_errors_are_authentication_failures() {
        assert!(BlocksError::HmacMismatch.is_authentication_failure());
        assert!(BlocksError::HmacMissing.is_authentication_failure());
        assert!(!BlocksError::InvalidKeyLength(10).is_authentication_failure());
    }

    #[test]
    fn test_codec_error_converts() {
        let err: BlocksError = CodecError::Hex(hex::FromHexError::OddLength).into();
        assert_eq!(err.kind(), ErrorKind::CodecFailure);
    }

    #[test]
    fn test_display_includes_bounds() {
        let err = BlocksError::LengthOutOfRange {
            length: 40,
            available: 32,
        };
        assert_eq!(err.to_string(), "length header out of range: 40 > 32");
    }
}
