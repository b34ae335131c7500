//! # crypttk blocks
//!
//! Authenticated symmetric encryption of byte buffers into self-describing
//! containers.
//!
//! This crate contains no I/O and no logging. It is pure computation over
//! byte buffers, plus one draw from the OS random source per encryption.
//!
//! ## Key Types
//!
//! - [`Container`] - The four-field envelope: IV, encrypted length, data, HMAC
//! - [`Transport`] - A named identity / hex / base64 codec pair
//! - [`BlocksError`] - Every failure, classified by [`ErrorKind`]
//!
//! ## Pipeline
//!
//! ```rust
//! use crypttk_blocks::{
//!     decrypt, deserialize_container, encrypt, hex_decoding, hex_encoding,
//!     serialize_container,
//! };
//!
//! let key = b"dontuserandomkey";
//! let container = encrypt(b"attack at dawn", key).unwrap();
//! let wire = serialize_container(&container, hex_encoding).unwrap();
//!
//! let received = deserialize_container(&wire, hex_decoding).unwrap();
//! assert_eq!(decrypt(&received, key).unwrap(), b"attack at dawn");
//! ```
//!
//! ## Envelope
//!
//! Containers are serialized as canonical CBOR. See [`canonical`] module.

pub mod canonical;
pub mod cipher;
pub mod codec;
pub mod container;
pub mod crypto;
pub mod error;

pub use canonical::{deserialize_container, serialize_container};
pub use cipher::{authenticate, decrypt, encrypt, encrypt_with_iv, verify};
pub use codec::{
    base64_decoding, base64_encoding, hex_decoding, hex_encoding, no_encoding, CodecError,
    CodecFn, Transport, UnknownTransport,
};
pub use container::Container;
pub use crypto::{data_tag, BLOCK_SIZE, HMAC_SIZE};
pub use error::{BlocksError, ErrorKind, Result};
