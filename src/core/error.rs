//! Error types for key wrap operations.
//!
//! This module provides a unified error type for all wrap, unwrap, and
//! encoding operations. The authentication error message is intentionally
//! vague: tampered ciphertext and a wrong KEK are observably identical so
//! that the caller cannot be used as an oracle.

use thiserror::Error;

/// Errors that can occur when wrapping, unwrapping, or encoding keys.
#[derive(Debug, Error)]
pub enum KeywrapError {
    /// An input buffer has the wrong size. The KEK must be 16, 24, or 32
    /// bytes, a key to wrap must be the same length as the KEK, and a
    /// wrapped key must be 8 bytes longer than the KEK.
    #[error("invalid data length: kek must be 16, 24 or 32 bytes, key the same length, wrapped key 8 bytes longer")]
    InvalidLength,

    /// The integrity check failed after unwrapping.
    /// Intentionally vague: tampered data and a wrong KEK are not distinguished.
    #[error("unauthentic data or wrong KEK")]
    AuthenticationFailed,

    /// Base64 decoding error.
    #[error("base64 decode error: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    /// Hex decoding error.
    #[error("hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),

    /// The bytes or characters cannot be represented in the requested
    /// text encoding.
    #[error("data is not representable in the requested encoding")]
    InvalidText,

    /// The encoding name is not recognized.
    #[error("unsupported encoding: {0}")]
    UnsupportedEncoding(String),
}

/// Result type alias for key wrap operations.
pub type KeywrapResult<T> = Result<T, KeywrapError>;
