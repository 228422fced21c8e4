//! Byte/string conversions for presenting wrapped keys as text.
//!
//! Wrap and unwrap operate on raw bytes; this module converts those bytes
//! to and from encoded strings so wrapped keys can travel through text
//! channels. It performs no cryptographic logic.

use core::fmt::{self, Display};
use core::str::FromStr;

use base64::prelude::*;

use crate::core::error::{KeywrapError, KeywrapResult};

/// A byte/string encoding supported at the text boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Lowercase hexadecimal. Decoding accepts both cases.
    Hex,
    /// Standard base64 with padding.
    Base64,
    /// Base64 with `+` replaced by `-` and `/` by `_`; padding unchanged.
    Base64Url,
    /// UTF-8 text. Encoding fails on bytes that are not valid UTF-8.
    Utf8,
    /// ISO 8859-1: each byte maps to the code point of the same value.
    Latin1,
}

impl Encoding {
    /// Returns the canonical lowercase name of this encoding.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Base64 => "base64",
            Self::Base64Url => "base64url",
            Self::Utf8 => "utf8",
            Self::Latin1 => "latin1",
        }
    }
}

impl Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = KeywrapError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "hex" => Ok(Self::Hex),
            "base64" => Ok(Self::Base64),
            "base64url" => Ok(Self::Base64Url),
            "utf8" | "utf-8" => Ok(Self::Utf8),
            "latin1" | "binary" => Ok(Self::Latin1),
            other => Err(KeywrapError::UnsupportedEncoding(other.to_string())),
        }
    }
}

/// Converts bytes to an encoded string.
///
/// # Errors
///
/// Returns [`KeywrapError::InvalidText`] if `encoding` is [`Encoding::Utf8`]
/// and the bytes are not valid UTF-8. All other encodings are total.
pub fn to_string(bytes: &[u8], encoding: Encoding) -> KeywrapResult<String> {
    match encoding {
        Encoding::Hex => Ok(hex::encode(bytes)),
        Encoding::Base64 => Ok(BASE64_STANDARD.encode(bytes)),
        Encoding::Base64Url => Ok(BASE64_URL_SAFE.encode(bytes)),
        Encoding::Utf8 => {
            String::from_utf8(bytes.to_vec()).map_err(|_| KeywrapError::InvalidText)
        }
        Encoding::Latin1 => Ok(bytes.iter().map(|&byte| char::from(byte)).collect()),
    }
}

/// Converts an encoded string back to bytes; inverse of [`to_string`].
///
/// # Errors
///
/// Returns [`KeywrapError::Base64Decode`] or [`KeywrapError::HexDecode`]
/// for malformed input, and [`KeywrapError::InvalidText`] if `encoding` is
/// [`Encoding::Latin1`] and the string contains a character above U+00FF.
pub fn from_string(string: &str, encoding: Encoding) -> KeywrapResult<Vec<u8>> {
    match encoding {
        Encoding::Hex => Ok(hex::decode(string)?),
        Encoding::Base64 => Ok(BASE64_STANDARD.decode(string)?),
        Encoding::Base64Url => Ok(BASE64_URL_SAFE.decode(string)?),
        Encoding::Utf8 => Ok(string.as_bytes().to_vec()),
        Encoding::Latin1 => string
            .chars()
            .map(|character| {
                u8::try_from(u32::from(character)).map_err(|_| KeywrapError::InvalidText)
            })
            .collect(),
    }
}
