//! Canonical CBOR envelope for containers.
//!
//! A container is encoded as a CBOR (RFC 8949) map with deterministic rules:
//! - Four text keys, all always present: `iv`, `data`, `hmac`, `length`
//! - Keys sorted by their encoded bytes (shorter keys first)
//! - Every value is a definite-length byte string
//!
//! Decoding accepts only that exact form: one item, no trailing bytes, no
//! missing, duplicate or unknown keys.

use std::io::Cursor;

use ciborium::value::Value;

use crate::codec::CodecError;
use crate::container::Container;
use crate::error::{BlocksError, Result};

/// CBOR map key names.
mod keys {
    pub const IV: &str = "iv";
    pub const LENGTH: &str = "length";
    pub const DATA: &str = "data";
    pub const HMAC: &str = "hmac";

    pub const ALL: [&str; 4] = [IV, LENGTH, DATA, HMAC];
}

/// Encode a container to canonical CBOR bytes.
pub fn canonical_container_bytes(container: &Container) -> Vec<u8> {
    let entries = vec![
        (
            Value::Text(keys::IV.to_string()),
            Value::Bytes(container.iv.clone()),
        ),
        (
            Value::Text(keys::LENGTH.to_string()),
            Value::Bytes(container.length.clone()),
        ),
        (
            Value::Text(keys::DATA.to_string()),
            Value::Bytes(container.data.clone()),
        ),
        (
            Value::Text(keys::HMAC.to_string()),
            Value::Bytes(container.hmac.clone()),
        ),
    ];

    let mut buf = Vec::new();
    encode_map_canonical(&mut buf, &entries);
    buf
}

/// Decode a container from canonical CBOR bytes.
pub fn decode_container(bytes: &[u8]) -> Result<Container> {
    let mut cursor = Cursor::new(bytes);
    let value: Value = ciborium::from_reader(&mut cursor)
        .map_err(|e| BlocksError::Deserialize(e.to_string()))?;

    if cursor.position() as usize != bytes.len() {
        return Err(BlocksError::Deserialize("trailing bytes after envelope".into()));
    }

    let map = match value {
        Value::Map(m) => m,
        _ => return Err(BlocksError::Deserialize("expected map".into())),
    };

    if let Some(unknown) = map
        .iter()
        .find(|(k, _)| !matches!(k, Value::Text(s) if keys::ALL.contains(&s.as_str())))
    {
        return Err(BlocksError::Deserialize(format!(
            "unexpected field: {:?}",
            unknown.0
        )));
    }

    // Helper to take a byte-string field by key; exactly one occurrence allowed
    let field = |key: &str| -> Result<Vec<u8>> {
        let mut found = map
            .iter()
            .filter(|(k, _)| matches!(k, Value::Text(s) if s == key));
        match (found.next(), found.next()) {
            (Some((_, Value::Bytes(b))), None) => Ok(b.clone()),
            (Some(_), None) => Err(BlocksError::Deserialize(format!("{key} must be bytes"))),
            (Some(_), Some(_)) => Err(BlocksError::Deserialize(format!("duplicate {key}"))),
            (None, _) => Err(BlocksError::Deserialize(format!("missing {key}"))),
        }
    };

    let container = Container {
        iv: field(keys::IV)?,
        length: field(keys::LENGTH)?,
        data: field(keys::DATA)?,
        hmac: field(keys::HMAC)?,
    };

    // Rejects indefinite lengths, oversized length prefixes and key reordering
    if canonical_container_bytes(&container) != bytes {
        return Err(BlocksError::Deserialize("non-canonical envelope".into()));
    }

    Ok(container)
}

/// Serialize a container, then pass it through `encode`.
///
/// `encode` is usually one of the [`codec`](crate::codec) encoders.
pub fn serialize_container<F>(container: &Container, encode: F) -> Result<Vec<u8>>
where
    F: FnOnce(&[u8]) -> std::result::Result<Vec<u8>, CodecError>,
{
    let bytes = canonical_container_bytes(container);
    Ok(encode(&bytes)?)
}

/// Pass `bytes` through `decode`, then parse the envelope.
pub fn deserialize_container<F>(bytes: &[u8], decode: F) -> Result<Container>
where
    F: FnOnce(&[u8]) -> std::result::Result<Vec<u8>, CodecError>,
{
    let raw = decode(bytes)?;
    decode_container(&raw)
}

/// Encode an unsigned integer with the given major type.
fn encode_uint(buf: &mut Vec<u8>, major: u8, n: u64) {
    let mt = major << 5;
    if n < 24 {
        buf.push(mt | (n as u8));
    } else if n <= 0xff {
        buf.push(mt | 24);
        buf.push(n as u8);
    } else if n <= 0xffff {
        buf.push(mt | 25);
        buf.extend_from_slice(&(n as u16).to_be_bytes());
    } else if n <= 0xffffffff {
        buf.push(mt | 26);
        buf.extend_from_slice(&(n as u32).to_be_bytes());
    } else {
        buf.push(mt | 27);
        buf.extend_from_slice(&n.to_be_bytes());
    }
}

/// Encode a CBOR value. Only the shapes an envelope uses are supported.
fn encode_value_to(buf: &mut Vec<u8>, value: &Value) {
    match value {
        Value::Bytes(b) => {
            encode_uint(buf, 2, b.len() as u64);
            buf.extend_from_slice(b);
        }
        Value::Text(s) => {
            encode_uint(buf, 3, s.len() as u64);
            buf.extend_from_slice(s.as_bytes());
        }
        Value::Map(entries) => encode_map_canonical(buf, entries),
        _ => unreachable!("envelope only contains text keys and byte values"),
    }
}

/// Encode a map canonically (major type 5), keys sorted by encoded bytes.
fn encode_map_canonical(buf: &mut Vec<u8>, entries: &[(Value, Value)]) {
    let mut pairs: Vec<(Vec<u8>, &Value)> = entries
        .iter()
        .map(|(k, v)| {
            let mut key_buf = Vec::new();
            encode_value_to(&mut key_buf, k);
            (key_buf, v)
        })
        .collect();

    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    encode_uint(buf, 5, pairs.len() as u64);
    for (key_bytes, value) in pairs {
        buf.extend_from_slice(&key_bytes);
        encode_value_to(buf, value);
    }
}
