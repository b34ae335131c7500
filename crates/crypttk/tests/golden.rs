//! Golden test vectors for cross-implementation verification.
//!
//! Every implementation of the envelope format must produce identical:
//! - encrypted length header
//! - encrypted data
//! - tag
//! - canonical envelope bytes
//! - transport text

use crypttk::{
    decrypt, deserialize_container, encrypt_with_iv, serialize_container, Container, ErrorKind,
    Sealer, SealerConfig, Transport,
};
use crypttk_testkit::{all_vectors, TEST_KEY};
use serde::Serialize;

#[test]
fn test_vectors_reproduce() {
    for v in all_vectors() {
        let c = encrypt_with_iv(&v.plaintext_bytes(), &v.key_bytes(), &v.iv).unwrap();
        assert_eq!(hex::encode(&c.length), v.length, "length mismatch for {}", v.name);
        assert_eq!(hex::encode(&c.data), v.data, "data mismatch for {}", v.name);
        assert_eq!(hex::encode(&c.hmac), v.hmac, "hmac mismatch for {}", v.name);
        assert_eq!(hex::encode(c.to_bytes()), v.envelope, "envelope mismatch for {}", v.name);
    }
}

#[test]
fn test_vectors_open_through_every_transport() {
    for v in all_vectors() {
        let envelope = hex::decode(v.envelope).unwrap();
        for transport in [Transport::Identity, Transport::Hex, Transport::Base64] {
            let wire = transport.encode(&envelope).unwrap();
            let sealer = Sealer::new(v.key_bytes(), SealerConfig::with_transport(transport));
            assert_eq!(
                sealer.open(&wire).unwrap(),
                v.plaintext_bytes(),
                "{} over {transport}",
                v.name
            );
        }
    }
}

#[test]
fn test_hex_transport_is_lowercase_envelope_hex() {
    for v in all_vectors() {
        let wire = serialize_container(&v.expected_container(), Transport::Hex.encoder()).unwrap();
        assert_eq!(String::from_utf8(wire).unwrap(), v.envelope, "{}", v.name);
    }
}

#[test]
fn print_golden_vectors_json() {
    #[derive(Serialize)]
    struct VectorJson {
        name: &'static str,
        key: &'static str,
        iv: String,
        plaintext: &'static str,
        length: &'static str,
        data: &'static str,
        hmac: &'static str,
        envelope: &'static str,
    }

    let vectors: Vec<_> = all_vectors()
        .into_iter()
        .map(|v| VectorJson {
            name: v.name,
            key: v.key,
            iv: hex::encode(v.iv),
            plaintext: v.plaintext,
            length: v.length,
            data: v.data,
            hmac: v.hmac,
            envelope: v.envelope,
        })
        .collect();

    let json = serde_json::to_string_pretty(&vectors).unwrap();
    println!("{}", json);
}

// =============================================================================
// REJECTION TEST VECTORS
// These test that altered envelopes are properly rejected.
// =============================================================================

#[test]
fn test_reject_each_flipped_field() {
    let vectors = all_vectors();
    let v = &vectors[0];
    let good = v.expected_container();
    for field in ["iv", "length", "data", "hmac"] {
        let mut c: Container = good.clone();
        let bytes = match field {
            "iv" => &mut c.iv,
            "length" => &mut c.length,
            "data" => &mut c.data,
            _ => &mut c.hmac,
        };
        bytes[0] ^= 0x01;
        let err = decrypt(&c, &v.key_bytes()).unwrap_err();
        assert!(err.is_authentication_failure(), "field {field}");
    }
}

#[test]
fn test_reject_reordered_envelope() {
    // Same fields as the empty container, length before data.
    let reordered = hex::decode("a462697640666c656e6774684064646174614064686d616340").unwrap();
    let err = deserialize_container(&reordered, Transport::Identity.decoder()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DeserializeFailure);
}

#[test]
fn test_reject_wrong_key() {
    let vectors = all_vectors();
    let v = &vectors[0];
    assert_ne!(v.key_bytes(), b"0123456789abcdef");
    let err = decrypt(&v.expected_container(), b"0123456789abcdef").unwrap_err();
    assert!(err.is_authentication_failure());
}

#[test]
fn test_first_vector_uses_test_key() {
    assert_eq!(all_vectors()[0].key_bytes(), TEST_KEY);
}
