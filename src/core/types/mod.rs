//! First-class types for key wrap operations.
//!
//! This module provides the validated types the wrap API is built from:
//!
//! - [`Kek`] - a key-encryption key of a valid AES length
//! - [`AesKeySize`] - the AES variant a KEK selects
//! - [`WrappedKey`] - a key wrapped under a KEK

mod kek;
mod wrapped_key;

pub use kek::{AesKeySize, Kek};
pub use wrapped_key::WrappedKey;
