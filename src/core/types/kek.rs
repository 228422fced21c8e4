//! `Kek` - a validated key-encryption key.
//!
//! This module provides the `Kek` type, an owned KEK whose length has been
//! checked on construction, and the `AesKeySize` enum naming the AES
//! variant the KEK selects.

use core::fmt::{self, Debug};

use zeroize::{Zeroize, Zeroizing};

use crate::core::error::{KeywrapError, KeywrapResult};
use crate::core::operations::wrap::{unwrap_key, wrap_key};
use crate::core::types::WrappedKey;

/// The AES variant selected by a KEK.
///
/// The variant is derived solely from the KEK byte length, as RFC 3394
/// does; there is no independent algorithm-selection parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AesKeySize {
    /// 128-bit key (16-byte KEK).
    Aes128,
    /// 192-bit key (24-byte KEK).
    Aes192,
    /// 256-bit key (32-byte KEK).
    Aes256,
}

impl AesKeySize {
    /// Returns the KEK length in bytes for this variant.
    #[must_use]
    pub const fn kek_length(&self) -> usize {
        match self {
            Self::Aes128 => 16,
            Self::Aes192 => 24,
            Self::Aes256 => 32,
        }
    }
}

/// A key-encryption key of a valid AES length.
///
/// # Security
///
/// - Key material is zeroized on drop
/// - Debug output redacts the key
/// - Equality comparison is constant-time
///
/// # Example
///
/// ```rust
/// use aeskeywrap::Kek;
///
/// let kek = Kek::try_from([0x42u8; 16].as_slice()).expect("valid KEK length");
///
/// let wrapped = kek.try_wrap(&[0x13u8; 16]).expect("wrap should succeed");
/// let recovered = kek.try_unwrap(&wrapped).expect("unwrap should succeed");
///
/// assert_eq!(recovered.as_slice(), &[0x13u8; 16]);
/// ```
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct Kek {
    bytes: Vec<u8>,
}

impl Kek {
    /// Creates a `Kek` from owned bytes.
    ///
    /// # Errors
    ///
    /// Returns [`KeywrapError::InvalidLength`] unless the buffer is 16,
    /// 24, or 32 bytes long.
    pub fn new(bytes: Vec<u8>) -> KeywrapResult<Self> {
        match bytes.len() {
            16 | 24 | 32 => Ok(Self { bytes }),
            _ => Err(KeywrapError::InvalidLength),
        }
    }

    /// Returns a reference to the raw KEK bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the AES variant this KEK selects.
    #[must_use]
    pub fn key_size(&self) -> AesKeySize {
        match self.bytes.len() {
            16 => AesKeySize::Aes128,
            24 => AesKeySize::Aes192,
            // Construction admits no other length.
            _ => AesKeySize::Aes256,
        }
    }

    /// Wraps a key under this KEK.
    ///
    /// # Errors
    ///
    /// Returns [`KeywrapError::InvalidLength`] if the key is not the same
    /// length as the KEK.
    pub fn try_wrap(&self, key: &[u8]) -> KeywrapResult<WrappedKey> {
        WrappedKey::new(wrap_key(key, &self.bytes)?)
    }

    /// Unwraps a wrapped key under this KEK, verifying its integrity.
    ///
    /// # Errors
    ///
    /// Returns [`KeywrapError::InvalidLength`] if the wrapped key is not
    /// exactly 8 bytes longer than the KEK, and
    /// [`KeywrapError::AuthenticationFailed`] if the data is unauthentic
    /// or the KEK is wrong.
    pub fn try_unwrap(&self, wrapped_key: &WrappedKey) -> KeywrapResult<Zeroizing<Vec<u8>>> {
        unwrap_key(wrapped_key.as_bytes(), &self.bytes)
    }
}

// =============================================================================
// TryFrom (validated construction)
// =============================================================================

impl TryFrom<&[u8]> for Kek {
    type Error = KeywrapError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::new(bytes.to_vec())
    }
}

impl TryFrom<Vec<u8>> for Kek {
    type Error = KeywrapError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(bytes)
    }
}

// =============================================================================
// Debug (security: don't expose key material)
// =============================================================================

impl Debug for Kek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Kek")
            .field("key_size", &self.key_size())
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// PartialEq (constant-time comparison)
// =============================================================================

impl PartialEq for Kek {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        self.bytes.ct_eq(&other.bytes).into()
    }
}

impl Eq for Kek {}
