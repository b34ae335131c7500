//! The authenticated ciphertext container.

use std::fmt;

use crate::canonical::{canonical_container_bytes, decode_container};
use crate::error::Result;

/// An authenticated ciphertext envelope.
///
/// Produced by [`encrypt`](crate::encrypt) and consumed by
/// [`decrypt`](crate::decrypt). All four fields are independent owned buffers:
///
/// - `iv`: the CBC initialization vector (one block)
/// - `length`: the encrypted, zero-padded decimal plaintext length (one block)
/// - `data`: the encrypted plaintext, zero-padded to a block multiple
/// - `hmac`: HMAC-SHA256 over `iv || length || data`
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Container {
    pub iv: Vec<u8>,
    pub length: Vec<u8>,
    pub data: Vec<u8>,
    pub hmac: Vec<u8>,
}

impl Container {
    /// Build a container from its four fields.
    pub fn new(
        iv: impl Into<Vec<u8>>,
        length: impl Into<Vec<u8>>,
        data: impl Into<Vec<u8>>,
        hmac: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            iv: iv.into(),
            length: length.into(),
            data: data.into(),
            hmac: hmac.into(),
        }
    }

    /// True when every field is empty.
    pub fn is_empty(&self) -> bool {
        self.iv.is_empty() && self.length.is_empty() && self.data.is_empty() && self.hmac.is_empty()
    }

    /// The bytes covered by the container tag: `iv || length || data`.
    pub fn authenticated_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.iv.len() + self.length.len() + self.data.len());
        buf.extend_from_slice(&self.iv);
        buf.extend_from_slice(&self.length);
        buf.extend_from_slice(&self.data);
        buf
    }

    /// Encode to the canonical binary envelope (no transport codec).
    pub fn to_bytes(&self) -> Vec<u8> {
        canonical_container_bytes(self)
    }

    /// Decode from the canonical binary envelope (no transport codec).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        decode_container(bytes)
    }
}

/// Shows field sizes and a short prefix, never whole buffers.
impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("iv", &Abbrev(&self.iv))
            .field("length", &Abbrev(&self.length))
            .field("data", &Abbrev(&self.data))
            .field("hmac", &Abbrev(&self.hmac))
            .finish()
    }
}

struct Abbrev<'a>(&'a [u8]);

impl fmt::Debug for Abbrev<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = &self.0[..self.0.len().min(4)];
        write!(f, "{}B({}", self.0.len(), hex::encode(shown))?;
        if self.0.len() > shown.len() {
            f.write_str("...")?;
        }
        f.write_str(")")
    }
}
