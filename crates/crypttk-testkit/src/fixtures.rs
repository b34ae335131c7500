//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use crypttk_blocks::{data_tag, encrypt, Container};
use rand::RngCore;

/// The fixed 16-byte key used throughout the test suites.
pub const TEST_KEY: &[u8; 16] = b"dontuserandomkey";

/// A test fixture holding one symmetric key.
pub struct TestFixture {
    pub key: Vec<u8>,
}

impl TestFixture {
    /// Create a fixture with a random key of `len` bytes.
    pub fn random(len: usize) -> Self {
        let mut key = vec![0u8; len];
        rand::thread_rng().fill_bytes(&mut key);
        Self { key }
    }

    /// Create a fixture with the fixed [`TEST_KEY`].
    pub fn new() -> Self {
        Self {
            key: TEST_KEY.to_vec(),
        }
    }

    /// Encrypt `plaintext` under this fixture's key.
    pub fn sealed(&self, plaintext: &[u8]) -> Container {
        encrypt(plaintext, &self.key).expect("fixture key must be a valid AES key")
    }

    /// A container whose tag covers `data` only, the shape `verify` accepts.
    pub fn data_signed(&self, data: &[u8]) -> Container {
        Container {
            data: data.to_vec(),
            hmac: data_tag(data, &self.key).to_vec(),
            ..Default::default()
        }
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A container with only its data field set.
pub fn data_only(data: &[u8]) -> Container {
    Container {
        data: data.to_vec(),
        ..Default::default()
    }
}

/// Fixtures for every AES key size, with distinct random keys.
pub fn all_key_sizes() -> Vec<TestFixture> {
    [16, 24, 32].into_iter().map(TestFixture::random).collect()
}

/// Plaintext `1, 2, ..., n`.
pub fn counting(n: u8) -> Vec<u8> {
    (1..=n).collect()
}
