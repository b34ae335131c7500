//! Transport codecs applied around the binary envelope.
//!
//! A codec is a plain function from bytes to bytes. Encoders and decoders are
//! separate functions and callers pair them explicitly; [`Transport`] names the
//! built-in pairs.

use std::fmt;
use std::str::FromStr;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by the decoding side of a codec.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Input is not valid lowercase/uppercase hex of even length.
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Input is not valid padded standard base64.
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Signature shared by every encoder and decoder.
pub type CodecFn = fn(&[u8]) -> Result<Vec<u8>, CodecError>;

/// Identity codec: returns the input unchanged.
pub fn no_encoding(data: &[u8]) -> Result<Vec<u8>, CodecError> {
    Ok(data.to_vec())
}

/// Lowercase hex encoding.
pub fn hex_encoding(data: &[u8]) -> Result<Vec<u8>, CodecError> {
    Ok(hex::encode(data).into_bytes())
}

/// Hex decoding. Fails on odd length or non-hex characters.
pub fn hex_decoding(data: &[u8]) -> Result<Vec<u8>, CodecError> {
    Ok(hex::decode(data)?)
}

/// Standard-alphabet base64 with `=` padding.
pub fn base64_encoding(data: &[u8]) -> Result<Vec<u8>, CodecError> {
    Ok(STANDARD.encode(data).into_bytes())
}

/// Standard base64 decoding. Fails on illegal characters or bad padding.
pub fn base64_decoding(data: &[u8]) -> Result<Vec<u8>, CodecError> {
    Ok(STANDARD.decode(data)?)
}

/// A named pair of inverse codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// Raw envelope bytes.
    Identity,
    /// Lowercase hex text.
    Hex,
    /// Padded standard base64 text.
    #[default]
    Base64,
}

impl Transport {
    /// The encoding half of this pair.
    pub fn encoder(self) -> CodecFn {
        match self {
            Transport::Identity => no_encoding,
            Transport::Hex => hex_encoding,
            Transport::Base64 => base64_encoding,
        }
    }

    /// The decoding half of this pair.
    pub fn decoder(self) -> CodecFn {
        match self {
            Transport::Identity => no_encoding,
            Transport::Hex => hex_decoding,
            Transport::Base64 => base64_decoding,
        }
    }

    /// Encode with this transport.
    pub fn encode(self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        (self.encoder())(data)
    }

    /// Decode with this transport.
    pub fn decode(self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        (self.decoder())(data)
    }

    /// Lowercase name, as used in configuration.
    pub const fn as_str(self) -> &'static str {
        match self {
            Transport::Identity => "identity",
            Transport::Hex => "hex",
            Transport::Base64 => "base64",
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unknown transport name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown transport: {0}")]
pub struct UnknownTransport(pub String);

impl FromStr for Transport {
    type Err = UnknownTransport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "identity" | "none" | "raw" => Ok(Transport::Identity),
            "hex" => Ok(Transport::Hex),
            "base64" => Ok(Transport::Base64),
            _ => Err(UnknownTransport(s.to_string())),
        }
    }
}
