//! The Sealer: one call from plaintext to wire bytes and back.
//!
//! A sealer composes the three layers of the library: the cipher turns
//! plaintext into a [`Container`], the canonical envelope turns the container
//! into bytes, and the configured [`Transport`] makes those bytes safe to
//! carry.

use std::fmt;

use crypttk_blocks::{
    authenticate, decrypt, deserialize_container, encrypt, serialize_container, BlocksError,
    Container, Transport,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for a [`Sealer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SealerConfig {
    /// Outer encoding applied to the serialized envelope.
    pub transport: Transport,
}

impl SealerConfig {
    /// Config using the given transport.
    pub fn with_transport(transport: Transport) -> Self {
        Self { transport }
    }
}

/// Seals and opens envelopes under a single key.
///
/// The key is copied at construction. Its length is not checked until the
/// first cipher operation.
#[derive(Clone)]
pub struct Sealer {
    key: Vec<u8>,
    config: SealerConfig,
}

impl Sealer {
    /// Create a sealer for `key`.
    pub fn new(key: impl AsRef<[u8]>, config: SealerConfig) -> Self {
        Self {
            key: key.as_ref().to_vec(),
            config,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &SealerConfig {
        &self.config
    }

    /// The configured transport.
    pub fn transport(&self) -> Transport {
        self.config.transport
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Wire operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Encrypt `plaintext` and encode it for the wire.
    pub fn seal(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let container = self.seal_container(plaintext)?;
        let wire = serialize_container(&container, self.transport().encoder())?;

        tracing::debug!(
            plaintext_len = plaintext.len(),
            wire_len = wire.len(),
            transport = %self.transport(),
            "sealed envelope"
        );
        Ok(wire)
    }

    /// Decode wire bytes, authenticate and decrypt them.
    pub fn open(&self, wire: &[u8]) -> Result<Vec<u8>> {
        let container = self.decode(wire)?;
        let plaintext = self.open_container(&container)?;

        tracing::debug!(
            wire_len = wire.len(),
            plaintext_len = plaintext.len(),
            transport = %self.transport(),
            "opened envelope"
        );
        Ok(plaintext)
    }

    /// Decode wire bytes and check their tag without decrypting.
    pub fn authenticate(&self, wire: &[u8]) -> Result<()> {
        let container = self.decode(wire)?;
        authenticate(&container, &self.key).map_err(|e| self.reject(e))?;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Container operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Encrypt `plaintext` into a container without encoding it.
    pub fn seal_container(&self, plaintext: &[u8]) -> Result<Container> {
        Ok(encrypt(plaintext, &self.key)?)
    }

    /// Decrypt a container produced by [`Sealer::seal_container`].
    pub fn open_container(&self, container: &Container) -> Result<Vec<u8>> {
        decrypt(container, &self.key).map_err(|e| self.reject(e).into())
    }

    fn decode(&self, wire: &[u8]) -> Result<Container> {
        deserialize_container(wire, self.transport().decoder()).map_err(|e| {
            tracing::debug!(
                wire_len = wire.len(),
                transport = %self.transport(),
                error = %e,
                "envelope decode failed"
            );
            e.into()
        })
    }

    fn reject(&self, error: BlocksError) -> BlocksError {
        if error.is_authentication_failure() {
            tracing::warn!(transport = %self.transport(), "envelope failed authentication");
        }
        error
    }
}

impl fmt::Debug for Sealer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sealer")
            .field("key", &format_args!("<{} bytes>", self.key.len()))
            .field("config", &self.config)
            .finish()
    }
}
