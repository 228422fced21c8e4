//! AES Key Wrap (RFC 3394) for Rust.
//!
//! This crate wraps (encrypts) a cryptographic key under a key-encryption
//! key (KEK) and unwraps it again, detecting tampered data and wrong KEKs.
//! The wrapped key is always exactly 8 bytes longer than the key, and the
//! transform is deterministic: no nonce, no randomness.
//!
//! # Quick Start
//!
//! ```rust
//! use aeskeywrap::{unwrap_key, wrap_key};
//!
//! // Test vector from RFC 3394 section 4.1.
//! let key = hex::decode("00112233445566778899AABBCCDDEEFF").expect("valid hex");
//! let kek = hex::decode("000102030405060708090A0B0C0D0E0F").expect("valid hex");
//!
//! let wrapped_key = wrap_key(&key, &kek).expect("wrap should succeed");
//! assert_eq!(
//!     hex::encode_upper(&wrapped_key),
//!     "1FA68B0A8112B447AEF34BD8FB5A7B829D3E862371D2CFE5"
//! );
//!
//! let recovered = unwrap_key(&wrapped_key, &kek).expect("unwrap should succeed");
//! assert_eq!(recovered.as_slice(), key.as_slice());
//! ```
//!
//! # Operations
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`wrap_key`] | Wrap a key under a KEK |
//! | [`unwrap_key`] | Unwrap a wrapped key, verifying its integrity |
//! | [`wrap_key_to_string`] | Wrap and encode the result as text |
//! | [`unwrap_key_from_string`] | Decode a wrapped key from text and unwrap it |
//! | [`to_string`] / [`from_string`] | Convert bytes to/from encoded strings |
//!
//! The KEK must be 16, 24, or 32 bytes, selecting AES-128, AES-192, or
//! AES-256; the key to wrap must be the same length as the KEK. A typed
//! layer is available as [`Kek`] and [`WrappedKey`] for callers who want
//! validation at construction time instead of per call.
//!
//! # Failure behavior
//!
//! Wrong buffer sizes fail with [`KeywrapError::InvalidLength`] before any
//! cryptographic work. Unwrapping tampered data, or unwrapping with a
//! different KEK than the one used to wrap, fails with
//! [`KeywrapError::AuthenticationFailed`] after the full computation; the
//! two causes are deliberately indistinguishable, and no partial key bytes
//! are ever returned.
//!
//! # Security
//!
//! - Key material is zeroized on drop ([`Kek`], recovered keys)
//! - Debug output redacts key and ciphertext material
//! - The integrity check and secret comparisons are constant-time
//! - No unsafe code
//!
//! # Modules
//!
//! - [`core`] - Core types and operations

#![forbid(unsafe_code)]

pub mod core;

// Re-export commonly used items at crate root
pub use crate::core::encoding::{from_string, to_string, Encoding};
pub use crate::core::error::{KeywrapError, KeywrapResult};
pub use crate::core::operations::wrap::{
    unwrap_key, unwrap_key_from_string, wrap_key, wrap_key_to_string,
};
pub use crate::core::types::{AesKeySize, Kek, WrappedKey};
