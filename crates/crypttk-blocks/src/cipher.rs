//! Encrypt, decrypt and verify containers.
//!
//! The plaintext is zero-padded to a block multiple and encrypted with
//! AES-CBC. Its original length travels in a separate one-block header,
//! written as ASCII decimal digits, zero-filled on the right, and encrypted
//! as its own CBC stream under the same IV. The tag is HMAC-SHA256 over
//! `iv || length || data`, computed after encryption with the same key.

use crate::container::Container;
use crate::crypto::{random_iv, tag, tag_matches, AesVariant, BLOCK_SIZE, HMAC_SIZE};
use crate::error::{BlocksError, Result};

/// Encrypt `plaintext` under `key` into a signed container.
///
/// `key` must be 16, 24 or 32 bytes (AES-128/192/256). A fresh IV is drawn
/// from the OS random source on every call.
///
/// # Errors
///
/// [`BlocksError::InvalidKeyLength`], [`BlocksError::RandomSource`], or
/// [`BlocksError::LengthHeaderOverflow`] if the plaintext length has more
/// decimal digits than fit in one block.
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<Container> {
    AesVariant::for_key(key)?;
    let iv = random_iv()?;
    encrypt_with_iv(plaintext, key, &iv)
}

/// Encrypt with a caller-chosen IV.
///
/// Produces exactly what [`encrypt`] would have produced had it drawn `iv`.
/// Intended for known-answer tests: never use the same IV twice under one
/// key.
pub fn encrypt_with_iv(plaintext: &[u8], key: &[u8], iv: &[u8; BLOCK_SIZE]) -> Result<Container> {
    let variant = AesVariant::for_key(key)?;

    let mut length = encode_length_header(plaintext.len())?.to_vec();

    let padded_len = plaintext.len().div_ceil(BLOCK_SIZE) * BLOCK_SIZE;
    let mut data = Vec::with_capacity(padded_len);
    data.extend_from_slice(plaintext);
    data.resize(padded_len, 0);

    // Two independent CBC streams sharing one IV
    variant.encrypt_cbc(key, iv, &mut length)?;
    variant.encrypt_cbc(key, iv, &mut data)?;

    let mut container = Container {
        iv: iv.to_vec(),
        length,
        data,
        hmac: Vec::new(),
    };
    container.hmac = container_tag(&container, key).to_vec();
    Ok(container)
}

/// Check the container tag, then decrypt and return the original plaintext.
///
/// The tag is checked before anything else, including the key length, so a
/// wrong key of any length fails the same way.
///
/// # Errors
///
/// [`BlocksError::HmacMismatch`] if the tag does not cover this container
/// under `key`. After authentication: [`BlocksError::InvalidKeyLength`],
/// [`BlocksError::MalformedContainer`], [`BlocksError::LengthParse`] or
/// [`BlocksError::LengthOutOfRange`].
pub fn decrypt(container: &Container, key: &[u8]) -> Result<Vec<u8>> {
    authenticate(container, key)?;

    let variant = AesVariant::for_key(key)?;
    check_shape(container)?;

    let mut header = container.length.clone();
    let mut data = container.data.clone();
    variant.decrypt_cbc(key, &container.iv, &mut header)?;
    variant.decrypt_cbc(key, &container.iv, &mut data)?;

    let length = decode_length_header(&header)?;
    if length > data.len() {
        return Err(BlocksError::LengthOutOfRange {
            length,
            available: data.len(),
        });
    }

    data.truncate(length);
    Ok(data)
}

/// Check that the container tag covers `iv || length || data` under `key`.
///
/// This is the first step of [`decrypt`]. It validates containers produced
/// by [`encrypt`] without decrypting them. The comparison is constant time.
pub fn authenticate(container: &Container, key: &[u8]) -> Result<()> {
    let parts = [
        container.iv.as_slice(),
        container.length.as_slice(),
        container.data.as_slice(),
    ];
    if tag_matches(&parts, key, &container.hmac) {
        Ok(())
    } else {
        Err(BlocksError::HmacMismatch)
    }
}

/// Quick check of a tag computed over `data` only.
///
/// **This does not authenticate containers produced by [`encrypt`].** Their
/// tag covers `iv || length || data`; this function hashes `data` alone and
/// so returns `Ok(false)` for them. Use [`authenticate`] for those. `verify`
/// accepts containers whose `hmac` is [`data_tag`](crate::data_tag) of their
/// `data`.
///
/// # Errors
///
/// [`BlocksError::HmacMissing`] if the container has an empty tag.
pub fn verify(container: &Container, key: &[u8]) -> Result<bool> {
    if container.hmac.is_empty() {
        return Err(BlocksError::HmacMissing);
    }
    Ok(tag_matches(&[container.data.as_slice()], key, &container.hmac))
}

fn container_tag(container: &Container, key: &[u8]) -> [u8; HMAC_SIZE] {
    tag(
        &[
            container.iv.as_slice(),
            container.length.as_slice(),
            container.data.as_slice(),
        ],
        key,
    )
}

fn check_shape(container: &Container) -> Result<()> {
    if container.iv.len() != BLOCK_SIZE {
        return Err(BlocksError::MalformedContainer(format!(
            "iv is {} bytes, expected {BLOCK_SIZE}",
            container.iv.len()
        )));
    }
    if container.length.len() != BLOCK_SIZE {
        return Err(BlocksError::MalformedContainer(format!(
            "length header is {} bytes, expected {BLOCK_SIZE}",
            container.length.len()
        )));
    }
    if container.data.len() % BLOCK_SIZE != 0 {
        return Err(BlocksError::MalformedContainer(format!(
            "data is {} bytes, not a multiple of {BLOCK_SIZE}",
            container.data.len()
        )));
    }
    Ok(())
}

/// Render `len` as left-aligned ASCII decimal in a zero-filled block.
fn encode_length_header(len: usize) -> Result<[u8; BLOCK_SIZE]> {
    let digits = len.to_string();
    if digits.len() > BLOCK_SIZE {
        return Err(BlocksError::LengthHeaderOverflow(len));
    }
    let mut header = [0u8; BLOCK_SIZE];
    header[..digits.len()].copy_from_slice(digits.as_bytes());
    Ok(header)
}

/// Parse a decrypted header. Every NUL byte is dropped, not just trailing ones.
fn decode_length_header(header: &[u8]) -> Result<usize> {
    let digits: Vec<u8> = header.iter().copied().filter(|&b| b != 0).collect();
    let text =
        std::str::from_utf8(&digits).map_err(|e| BlocksError::LengthParse(e.to_string()))?;
    text.parse::<usize>()
        .map_err(|e| BlocksError::LengthParse(format!("{text:?}: {e}")))
}
