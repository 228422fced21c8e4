//! Core types and operations for AES Key Wrap.
//!
//! This module provides the fundamental building blocks of the crate:
//!
//! - [`error`] - Error types for wrap, unwrap, and encoding operations
//! - [`encoding`] - Byte/string conversions at the text boundary
//! - [`types`] - First-class types ([`types::Kek`], [`types::WrappedKey`])
//! - [`operations`] - The round engines and their helpers

pub mod encoding;
pub mod error;
pub mod operations;
pub mod types;

// Re-export commonly used items
pub use error::{KeywrapError, KeywrapResult};
