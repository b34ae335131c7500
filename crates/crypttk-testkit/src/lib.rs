//! # crypttk Testkit
//!
//! Testing utilities for crypttk.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Fixed key, IV and plaintext with every expected output byte
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Helper structs for setting up test scenarios
//!
//! ## Golden Vectors
//!
//! ```rust
//! use crypttk_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, envelope) in verify_all_vectors() {
//!     assert!(matches, "{name}: {envelope}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use crypttk_testkit::generators::SealParams;
//!
//! proptest! {
//!     #[test]
//!     fn roundtrip(params: SealParams) {
//!         let c = crypttk_blocks::encrypt(&params.plaintext, &params.key).unwrap();
//!         prop_assert_eq!(crypttk_blocks::decrypt(&c, &params.key).unwrap(), params.plaintext);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use crypttk_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let container = fixture.sealed(b"initial data");
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{all_key_sizes, counting, data_only, TestFixture, TEST_KEY};
pub use generators::SealParams;
pub use vectors::{all_vectors, container_from_vector, verify_all_vectors, GoldenVector};
