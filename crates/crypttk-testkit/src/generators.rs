//! Proptest generators for property-based testing.

use proptest::prelude::*;

use crypttk_blocks::{Container, Transport, BLOCK_SIZE};

/// Generate a key of a length AES accepts.
pub fn aes_key() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 16),
        prop::collection::vec(any::<u8>(), 24),
        prop::collection::vec(any::<u8>(), 32),
    ]
}

/// Generate two different keys of valid lengths.
pub fn distinct_keys() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    (aes_key(), aes_key()).prop_filter("keys must differ", |(a, b)| a != b)
}

/// Generate a key AES rejects.
pub fn invalid_key() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..48)
        .prop_filter("length must not be 16, 24 or 32", |k| {
            !matches!(k.len(), 16 | 24 | 32)
        })
}

/// Generate a random IV.
pub fn iv() -> impl Strategy<Value = [u8; BLOCK_SIZE]> {
    any::<[u8; BLOCK_SIZE]>()
}

/// Generate plaintext bytes of specified max length.
pub fn plaintext(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate a transport.
pub fn transport() -> impl Strategy<Value = Transport> {
    prop_oneof![
        Just(Transport::Identity),
        Just(Transport::Hex),
        Just(Transport::Base64),
    ]
}

/// Generate an arbitrary container, not necessarily a valid ciphertext.
pub fn container() -> impl Strategy<Value = Container> {
    (
        plaintext(32),
        plaintext(32),
        plaintext(300),
        plaintext(40),
    )
        .prop_map(|(iv, length, data, hmac)| Container::new(iv, length, data, hmac))
}

/// Parameters for a single encryption.
#[derive(Debug, Clone)]
pub struct SealParams {
    pub key: Vec<u8>,
    pub plaintext: Vec<u8>,
    pub transport: Transport,
}

impl Arbitrary for SealParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (aes_key(), plaintext(512), transport())
            .prop_map(|(key, plaintext, transport)| SealParams {
                key,
                plaintext,
                transport,
            })
            .boxed()
    }
}
