//! End-to-end scenarios: cipher, envelope and transport together.

use crypttk::{
    base64_decoding, base64_encoding, decrypt, deserialize_container, encrypt, hex_decoding,
    hex_encoding, no_encoding, serialize_container, verify, BlocksError, Container, ErrorKind,
    Sealer, SealerConfig, Transport, BLOCK_SIZE, HMAC_SIZE,
};
use crypttk_testkit::{counting, data_only, TestFixture, TEST_KEY};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[test]
fn four_bytes_have_one_block_of_data() {
    let c = encrypt(&[1, 2, 3, 4], TEST_KEY).unwrap();
    assert_eq!(c.iv.len(), BLOCK_SIZE);
    assert_eq!(c.length.len(), BLOCK_SIZE);
    assert_eq!(c.data.len(), BLOCK_SIZE);
    assert_eq!(c.hmac.len(), HMAC_SIZE);
    assert_eq!(decrypt(&c, TEST_KEY).unwrap(), vec![1, 2, 3, 4]);
}

#[test]
fn ten_bytes_pad_to_one_block() {
    let c = encrypt(&counting(10), TEST_KEY).unwrap();
    assert_eq!(c.data.len(), 16);
    assert_eq!(decrypt(&c, TEST_KEY).unwrap(), counting(10));
}

#[test]
fn twelve_bytes_roundtrip() {
    let c = encrypt(&counting(12), TEST_KEY).unwrap();
    assert_eq!(decrypt(&c, TEST_KEY).unwrap(), counting(12));
}

#[test]
fn full_block_is_not_extended() {
    let c = encrypt(&counting(16), TEST_KEY).unwrap();
    assert_eq!(c.data.len(), 16);
    assert_eq!(decrypt(&c, TEST_KEY).unwrap(), counting(16));
}

#[test]
fn data_only_container_through_each_codec() {
    let c = data_only(&[1, 2, 3, 4]);

    let hexed = serialize_container(&c, hex_encoding).unwrap();
    let back = deserialize_container(&hexed, hex_decoding).unwrap();
    assert_eq!(back, c);
    assert!(back.iv.is_empty() && back.length.is_empty() && back.hmac.is_empty());

    let b64 = serialize_container(&c, base64_encoding).unwrap();
    assert_eq!(deserialize_container(&b64, base64_decoding).unwrap(), c);

    let raw = serialize_container(&c, no_encoding).unwrap();
    assert_eq!(deserialize_container(&raw, no_encoding).unwrap(), c);
}

#[test]
fn empty_container_roundtrips() {
    let raw = serialize_container(&Container::default(), no_encoding).unwrap();
    assert_eq!(
        deserialize_container(&raw, no_encoding).unwrap(),
        Container::default()
    );
}

#[test]
fn garbage_is_not_an_envelope() {
    let err = deserialize_container(&[1, 2, 3, 4], no_encoding).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DeserializeFailure);
}

#[test]
fn mismatched_codec_fails() {
    let wire = serialize_container(&data_only(&[9]), base64_encoding).unwrap();
    let err = deserialize_container(&wire, hex_decoding).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CodecFailure);
}

#[test]
fn verify_accepts_data_only_tag() {
    let fixture = TestFixture::new();
    let c = fixture.data_signed(&[1, 2, 3, 4]);
    assert!(verify(&c, TEST_KEY).unwrap());

    let unsigned = data_only(&[1, 2, 3, 4]);
    assert!(matches!(
        verify(&unsigned, TEST_KEY),
        Err(BlocksError::HmacMissing)
    ));
}

#[test]
fn verify_does_not_accept_encrypt_output() {
    let c = encrypt(&[1, 2, 3, 4], TEST_KEY).unwrap();
    assert!(!verify(&c, TEST_KEY).unwrap());
    crypttk::authenticate(&c, TEST_KEY).unwrap();
}

#[test]
fn decrypt_without_iv_fails() {
    let c = TestFixture::new().data_signed(&[1, 2, 3, 4]);
    assert!(decrypt(&c, TEST_KEY).is_err());
}

#[test]
fn decrypt_empty_container_fails() {
    let err = decrypt(&Container::default(), TEST_KEY).unwrap_err();
    assert!(err.is_authentication_failure());
}

#[test]
fn decrypt_with_short_key_is_authentication_failure() {
    let c = encrypt(&[1, 2, 3, 4], TEST_KEY).unwrap();
    let err = decrypt(&c, b"invalidkey").unwrap_err();
    assert!(err.is_authentication_failure());
}

#[test]
fn encrypt_with_short_key_is_invalid_key_length() {
    let err = encrypt(&[1, 2, 3, 4], b"invalidkey").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidKeyLength);
}

#[test]
fn tampered_wire_is_rejected() {
    init_tracing();
    let sealer = Sealer::new(TEST_KEY, SealerConfig::with_transport(Transport::Identity));
    let mut wire = sealer.seal(b"do not touch").unwrap();

    // Last byte belongs to the encrypted length header.
    let last = wire.len() - 1;
    wire[last] ^= 0x80;

    let err = sealer.open(&wire).unwrap_err();
    assert!(err.is_authentication_failure());
}

#[test]
fn sealer_roundtrip_across_key_sizes() {
    init_tracing();
    for fixture in crypttk_testkit::all_key_sizes() {
        for transport in [Transport::Identity, Transport::Hex, Transport::Base64] {
            let sealer = Sealer::new(&fixture.key, SealerConfig::with_transport(transport));
            let wire = sealer.seal(b"across the wire").unwrap();
            assert_eq!(sealer.open(&wire).unwrap(), b"across the wire");
        }
    }
}

#[test]
fn sealer_matches_manual_pipeline() {
    let sealer = Sealer::new(TEST_KEY, SealerConfig::with_transport(Transport::Hex));
    let container = encrypt(b"manual", TEST_KEY).unwrap();
    let wire = serialize_container(&container, hex_encoding).unwrap();
    assert_eq!(sealer.open(&wire).unwrap(), b"manual");
}

#[test]
fn sealer_with_other_key_cannot_open() {
    init_tracing();
    let alice = Sealer::new(TEST_KEY, SealerConfig::default());
    let mallory = Sealer::new(b"dontuserandomkez", SealerConfig::default());
    let wire = alice.seal(b"for alice only").unwrap();
    assert!(mallory.open(&wire).unwrap_err().is_authentication_failure());
}

#[test]
fn sealed_containers_are_independent_across_threads() {
    let sealer = std::sync::Arc::new(Sealer::new(TEST_KEY, SealerConfig::default()));
    let handles: Vec<_> = (0..4u8)
        .map(|i| {
            let sealer = sealer.clone();
            std::thread::spawn(move || {
                let plaintext = vec![i; 40];
                let wire = sealer.seal(&plaintext).unwrap();
                assert_eq!(sealer.open(&wire).unwrap(), plaintext);
                wire
            })
        })
        .collect();

    let wires: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for (i, a) in wires.iter().enumerate() {
        for b in &wires[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

mod properties {
    use super::*;
    use crypttk_testkit::generators::{distinct_keys, plaintext, SealParams};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn seal_open_roundtrip(params: SealParams) {
            let sealer = Sealer::new(&params.key, SealerConfig::with_transport(params.transport));
            let wire = sealer.seal(&params.plaintext).unwrap();
            prop_assert_eq!(sealer.open(&wire).unwrap(), params.plaintext);
        }

        #[test]
        fn iv_is_fresh(params: SealParams) {
            let a = encrypt(&params.plaintext, &params.key).unwrap();
            let b = encrypt(&params.plaintext, &params.key).unwrap();
            prop_assert_ne!(a.iv, b.iv);
        }

        #[test]
        fn other_key_cannot_open((k1, k2) in distinct_keys(), p in plaintext(128)) {
            let wire = Sealer::new(&k1, SealerConfig::default()).seal(&p).unwrap();
            let err = Sealer::new(&k2, SealerConfig::default()).open(&wire).unwrap_err();
            prop_assert!(err.is_authentication_failure());
        }
    }
}
