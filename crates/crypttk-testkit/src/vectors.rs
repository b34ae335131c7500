//! Golden test vectors for deterministic verification.
//!
//! Each vector fixes the key, IV and plaintext, and records every container
//! field and the canonical envelope as hex. Any change to padding, the length
//! header, the shared IV or the tag input shows up here.

use crypttk_blocks::{encrypt_with_iv, Container, BLOCK_SIZE};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Key bytes (hex).
    pub key: &'static str,
    /// IV bytes.
    pub iv: [u8; BLOCK_SIZE],
    /// Plaintext bytes (hex).
    pub plaintext: &'static str,
    /// Expected encrypted length header (hex).
    pub length: &'static str,
    /// Expected encrypted data (hex).
    pub data: &'static str,
    /// Expected tag (hex).
    pub hmac: &'static str,
    /// Expected canonical envelope (hex).
    pub envelope: &'static str,
}

impl GoldenVector {
    /// Decoded key bytes.
    pub fn key_bytes(&self) -> Vec<u8> {
        unhex(self.key)
    }

    /// Decoded plaintext bytes.
    pub fn plaintext_bytes(&self) -> Vec<u8> {
        unhex(self.plaintext)
    }

    /// The container this vector expects.
    pub fn expected_container(&self) -> Container {
        Container::new(
            self.iv.to_vec(),
            unhex(self.length),
            unhex(self.data),
            unhex(self.hmac),
        )
    }
}

fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).expect("golden vectors hold valid hex")
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "four bytes, AES-128",
            key: "646f6e7475736572616e646f6d6b6579",
            iv: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
            plaintext: "01020304",
            length: "d3f679b78e8ebfcd1c337a00d22524d7",
            data: "144a2a185e81940b1afa2bf4e36accad",
            hmac: "ddb1d26b3b9fb9e66eb50adc10c44f60294b150cc82149497f45f426007ef7c2",
            envelope: "a462697650000102030405060708090a0b0c0d0e0f646461746150144a2a185e\
                       81940b1afa2bf4e36accad64686d61635820ddb1d26b3b9fb9e66eb50adc10c4\
                       4f60294b150cc82149497f45f426007ef7c2666c656e67746850d3f679b78e8e\
                       bfcd1c337a00d22524d7",
        },
        GoldenVector {
            name: "empty plaintext",
            key: "646f6e7475736572616e646f6d6b6579",
            iv: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
            plaintext: "",
            length: "127145d579104a578c464868f84adbf3",
            data: "",
            hmac: "cd63aad82da9ddb62964afb7c69627eb2157599b7e245191937e368ca36db9ea",
            envelope: "a462697650000102030405060708090a0b0c0d0e0f64646174614064686d6163\
                       5820cd63aad82da9ddb62964afb7c69627eb2157599b7e245191937e368ca36d\
                       b9ea666c656e67746850127145d579104a578c464868f84adbf3",
        },
        GoldenVector {
            name: "exactly one block is not extended",
            key: "646f6e7475736572616e646f6d6b6579",
            iv: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
            plaintext: "0102030405060708090a0b0c0d0e0f10",
            length: "94d8d9a70b8ee3273b16a48619fc92bf",
            data: "e668de15506216be416c1ccb75c3af40",
            hmac: "5f8aefb8f60d10268a2df43fed1308278997960c0026a63035729268eac4e321",
            envelope: "a462697650000102030405060708090a0b0c0d0e0f646461746150e668de1550\
                       6216be416c1ccb75c3af4064686d616358205f8aefb8f60d10268a2df43fed13\
                       08278997960c0026a63035729268eac4e321666c656e6774685094d8d9a70b8e\
                       e3273b16a48619fc92bf",
        },
        GoldenVector {
            name: "trailing zero bytes survive",
            key: "646f6e7475736572616e646f6d6b6579",
            iv: [0xff; BLOCK_SIZE],
            plaintext: "6162630000",
            length: "502fc1d39a540769b4bed7b6c2f8a159",
            data: "657f836e75fc3f89dedc9d7a6efc0914",
            hmac: "e523df4c332d54c13b54c73bdaf33cf8c2187f6e3ee42f16a8df54bc28cf2c8c",
            envelope: "a462697650ffffffffffffffffffffffffffffffff646461746150657f836e75\
                       fc3f89dedc9d7a6efc091464686d61635820e523df4c332d54c13b54c73bdaf3\
                       3cf8c2187f6e3ee42f16a8df54bc28cf2c8c666c656e67746850502fc1d39a54\
                       0769b4bed7b6c2f8a159",
        },
        GoldenVector {
            name: "hello world, AES-256",
            key: "4242424242424242424242424242424242424242424242424242424242424242",
            iv: [0xa5; BLOCK_SIZE],
            plaintext: "68656c6c6f20776f726c64",
            length: "cd0d67e00292ace8cf421e2c06334431",
            data: "af2442372362a1c30ac74910d6c2deb2",
            hmac: "44bff42160d477444d24039891f37b46bc4c655b90fa927a0453b2ccfa681280",
            envelope: "a462697650a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5646461746150af24423723\
                       62a1c30ac74910d6c2deb264686d6163582044bff42160d477444d24039891f3\
                       7b46bc4c655b90fa927a0453b2ccfa681280666c656e67746850cd0d67e00292\
                       ace8cf421e2c06334431",
        },
        GoldenVector {
            name: "three blocks, AES-192",
            key: "242424242424242424242424242424242424242424242424",
            iv: [0x11; BLOCK_SIZE],
            plaintext: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f\
                        2021222324252627",
            length: "bd15fe8d2c5effa07dee15a28c582b21",
            data: "89827ebc11c82b34add9565bdcfa95c5267f78d3f1f929c80a06f9151e892b1f\
                   98350ec2065b6440ff13730fff828696",
            hmac: "f5d285555e1cd929604b3340515dffb859fcb5ba88e24ae856f30876a092fc30",
            envelope: "a462697650111111111111111111111111111111116464617461583089827ebc\
                       11c82b34add9565bdcfa95c5267f78d3f1f929c80a06f9151e892b1f98350ec2\
                       065b6440ff13730fff82869664686d61635820f5d285555e1cd929604b334051\
                       5dffb859fcb5ba88e24ae856f30876a092fc30666c656e67746850bd15fe8d2c\
                       5effa07dee15a28c582b21",
        },
    ]
}

/// Encrypt a vector's inputs with its fixed IV.
pub fn container_from_vector(vector: &GoldenVector) -> Container {
    encrypt_with_iv(&vector.plaintext_bytes(), &vector.key_bytes(), &vector.iv)
        .expect("golden vector keys are valid AES keys")
}

/// Check every golden vector against this implementation.
///
/// Returns `(name, matches, envelope_hex)` for each vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let container = container_from_vector(v);
            let envelope = hex::encode(container.to_bytes());
            let matches = container == v.expected_container() && envelope == v.envelope;
            (v.name.to_string(), matches, envelope)
        })
        .collect()
}
