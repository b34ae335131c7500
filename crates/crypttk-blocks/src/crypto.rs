//! Cryptographic primitives: AES-CBC without padding, HMAC-SHA256 tags and
//! IV generation.

use aes::{Aes128, Aes192, Aes256};
use cbc::cipher::{
    block_padding::NoPadding, BlockCipher, BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit,
};
use hmac::{Hmac, Mac};
use rand::{rngs::OsRng, RngCore};
use sha2::Sha256;

use crate::error::{BlocksError, Result};

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// HMAC-SHA256 output size in bytes.
pub const HMAC_SIZE: usize = 32;

type HmacSha256 = Hmac<Sha256>;

fn mac_for(key: &[u8]) -> HmacSha256 {
    <HmacSha256 as Mac>::new_from_slice(key).expect("HMAC accepts keys of any length")
}

/// Compute HMAC-SHA256 over the concatenation of `parts`.
pub(crate) fn tag(parts: &[&[u8]], key: &[u8]) -> [u8; HMAC_SIZE] {
    let mut mac = mac_for(key);
    for part in parts {
        mac.update(part);
    }
    mac.finalize().into_bytes().into()
}

/// Check `expected` against HMAC-SHA256 over `parts` in constant time.
///
/// A tag of the wrong length never matches.
pub(crate) fn tag_matches(parts: &[&[u8]], key: &[u8], expected: &[u8]) -> bool {
    let mut mac = mac_for(key);
    for part in parts {
        mac.update(part);
    }
    mac.verify_slice(expected).is_ok()
}

/// HMAC-SHA256 of a single buffer.
///
/// This is the tag shape [`verify`](crate::verify) checks: it covers `data`
/// alone, not a whole container.
pub fn data_tag(data: &[u8], key: &[u8]) -> [u8; HMAC_SIZE] {
    tag(&[data], key)
}

/// Draw a fresh IV from the OS random source.
pub(crate) fn random_iv() -> Result<[u8; BLOCK_SIZE]> {
    let mut iv = [0u8; BLOCK_SIZE];
    OsRng
        .try_fill_bytes(&mut iv)
        .map_err(|e| BlocksError::RandomSource(e.to_string()))?;
    Ok(iv)
}

/// AES variant selected by key length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AesVariant {
    Aes128,
    Aes192,
    Aes256,
}

impl AesVariant {
    /// Pick the variant for a key, or reject the key length.
    pub(crate) fn for_key(key: &[u8]) -> Result<Self> {
        match key.len() {
            16 => Ok(Self::Aes128),
            24 => Ok(Self::Aes192),
            32 => Ok(Self::Aes256),
            len => Err(BlocksError::InvalidKeyLength(len)),
        }
    }

    /// CBC-encrypt `buf` in place. `buf` must be a whole number of blocks.
    pub(crate) fn encrypt_cbc(self, key: &[u8], iv: &[u8], buf: &mut [u8]) -> Result<()> {
        match self {
            Self::Aes128 => cbc_encrypt::<Aes128>(key, iv, buf),
            Self::Aes192 => cbc_encrypt::<Aes192>(key, iv, buf),
            Self::Aes256 => cbc_encrypt::<Aes256>(key, iv, buf),
        }
    }

    /// CBC-decrypt `buf` in place. `buf` must be a whole number of blocks.
    pub(crate) fn decrypt_cbc(self, key: &[u8], iv: &[u8], buf: &mut [u8]) -> Result<()> {
        match self {
            Self::Aes128 => cbc_decrypt::<Aes128>(key, iv, buf),
            Self::Aes192 => cbc_decrypt::<Aes192>(key, iv, buf),
            Self::Aes256 => cbc_decrypt::<Aes256>(key, iv, buf),
        }
    }
}

fn cbc_encrypt<C>(key: &[u8], iv: &[u8], buf: &mut [u8]) -> Result<()>
where
    C: BlockCipher + BlockEncryptMut + KeyInit,
{
    let encryptor = cbc::Encryptor::<C>::new_from_slices(key, iv)
        .map_err(|_| BlocksError::InvalidKeyLength(key.len()))?;
    let len = buf.len();
    encryptor
        .encrypt_padded_mut::<NoPadding>(buf, len)
        .map_err(|_| BlocksError::MalformedContainer("input is not block aligned".into()))?;
    Ok(())
}

fn cbc_decrypt<C>(key: &[u8], iv: &[u8], buf: &mut [u8]) -> Result<()>
where
    C: BlockCipher + BlockDecryptMut + KeyInit,
{
    let decryptor = cbc::Decryptor::<C>::new_from_slices(key, iv)
        .map_err(|_| BlocksError::InvalidKeyLength(key.len()))?;
    decryptor
        .decrypt_padded_mut::<NoPadding>(buf)
        .map_err(|_| BlocksError::MalformedContainer("input is not block aligned".into()))?;
    Ok(())
}
