//! `WrappedKey` - a key wrapped under a KEK.
//!
//! This module provides the `WrappedKey` type, an owned wrapped-key buffer
//! whose length has been checked on construction, with conversions to and
//! from encoded strings.

use core::fmt::{self, Debug};

use crate::core::encoding::{self, Encoding};
use crate::core::error::{KeywrapError, KeywrapResult};

/// A key wrapped under a KEK: the integrity-register semiblock followed by
/// the encrypted key semiblocks.
///
/// The buffer is always 8 bytes longer than the key it carries, so valid
/// lengths are 24, 32, and 40 bytes. Unwrapping and authentication happen
/// through [`Kek::try_unwrap`](crate::core::types::Kek::try_unwrap).
///
/// # Example
///
/// ```rust
/// use aeskeywrap::{Encoding, Kek, WrappedKey};
///
/// let kek = Kek::try_from([0x42u8; 16].as_slice()).expect("valid KEK length");
/// let wrapped = kek.try_wrap(&[0x13u8; 16]).expect("wrap should succeed");
///
/// // Serialize for a text channel and parse it back.
/// let encoded = wrapped.encode(Encoding::Base64).expect("base64 is total");
/// let parsed = WrappedKey::decode(&encoded, Encoding::Base64).expect("parse should succeed");
/// assert_eq!(parsed, wrapped);
/// ```
#[derive(Clone)]
pub struct WrappedKey {
    bytes: Vec<u8>,
}

impl WrappedKey {
    /// Creates a `WrappedKey` from owned bytes.
    ///
    /// # Errors
    ///
    /// Returns [`KeywrapError::InvalidLength`] unless the buffer is 24,
    /// 32, or 40 bytes long (a valid key length plus 8).
    pub fn new(bytes: Vec<u8>) -> KeywrapResult<Self> {
        match bytes.len() {
            24 | 32 | 40 => Ok(Self { bytes }),
            _ => Err(KeywrapError::InvalidLength),
        }
    }

    /// Returns a reference to the wrapped-key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the `WrappedKey` and returns the wrapped-key bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Serializes the wrapped key to an encoded string.
    ///
    /// # Errors
    ///
    /// Returns [`KeywrapError::InvalidText`] if the bytes cannot be
    /// represented in `encoding` (only possible for [`Encoding::Utf8`]).
    pub fn encode(&self, encoding: Encoding) -> KeywrapResult<String> {
        encoding::to_string(&self.bytes, encoding)
    }

    /// Parses a wrapped key from an encoded string.
    ///
    /// # Errors
    ///
    /// Returns a decode error if the string is not valid for `encoding`,
    /// or [`KeywrapError::InvalidLength`] if the decoded buffer is not a
    /// valid wrapped-key length.
    pub fn decode(encoded: &str, encoding: Encoding) -> KeywrapResult<Self> {
        Self::new(encoding::from_string(encoded, encoding)?)
    }
}

// =============================================================================
// TryFrom (validated construction)
// =============================================================================

impl TryFrom<&[u8]> for WrappedKey {
    type Error = KeywrapError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::new(bytes.to_vec())
    }
}

impl TryFrom<Vec<u8>> for WrappedKey {
    type Error = KeywrapError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(bytes)
    }
}

// =============================================================================
// Debug (don't expose ciphertext bytes)
// =============================================================================

impl Debug for WrappedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WrappedKey")
            .field("length", &self.bytes.len())
            .field("bytes", &"[WRAPPED]")
            .finish()
    }
}

// =============================================================================
// PartialEq (constant-time comparison)
// =============================================================================

impl PartialEq for WrappedKey {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        self.bytes.ct_eq(&other.bytes).into()
    }
}

impl Eq for WrappedKey {}
