//! # crypttk
//!
//! Authenticated symmetric encryption of byte buffers into self-describing,
//! transport-safe envelopes.
//!
//! ## Overview
//!
//! - **Container**: IV, encrypted length header, AES-CBC data and an
//!   HMAC-SHA256 tag over all three
//! - **Envelope**: the container serialized as canonical CBOR
//! - **Transport**: an outer identity, hex or base64 encoding
//! - **Sealer**: all three layers behind `seal` / `open`
//!
//! ## Usage
//!
//! ```rust
//! use crypttk::{Sealer, SealerConfig, Transport};
//!
//! let sealer = Sealer::new(b"dontuserandomkey", SealerConfig::with_transport(Transport::Hex));
//!
//! let wire = sealer.seal(b"attack at dawn").unwrap();
//! assert_eq!(sealer.open(&wire).unwrap(), b"attack at dawn");
//! ```
//!
//! Keys are plain byte buffers of 16, 24 or 32 bytes. Deriving and storing
//! them is up to the caller.
//!
//! ## Re-exports
//!
//! - `crypttk::blocks` - Cipher, container, envelope and codec primitives

pub mod error;
pub mod sealer;

pub use crypttk_blocks as blocks;

pub use error::{Error, Result};
pub use sealer::{Sealer, SealerConfig};

pub use crypttk_blocks::{
    authenticate, base64_decoding, base64_encoding, data_tag, decrypt, deserialize_container,
    encrypt, encrypt_with_iv, hex_decoding, hex_encoding, no_encoding, serialize_container,
    verify, BlocksError, CodecError, CodecFn, Container, ErrorKind, Transport, UnknownTransport,
    BLOCK_SIZE, HMAC_SIZE,
};
