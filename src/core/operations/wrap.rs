//! AES Key Wrap round engines (RFC 3394).
//!
//! Wrapping runs six rounds of single-block AES over an integrity
//! register `A` and the key semiblocks `R[0..n]`; each step folds the
//! round counter `t = n*j + i + 1` into the register. Unwrapping runs the
//! exact mirror (rounds and semiblock indices descending) and then checks
//! the register against the fixed initial value. A register mismatch means
//! tampered data or a wrong KEK; no key bytes are returned in that case.
//!
//! The `*_to_string`/`*_from_string` functions compose the engines with
//! [`crate::core::encoding`] so wrapped keys can cross text channels.

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

use crate::core::encoding::{self, Encoding};
use crate::core::error::{KeywrapError, KeywrapResult};
use crate::core::operations::block_cipher::KekCipher;
use crate::core::operations::semiblock::{
    concat, halves, join, split, xor_with_counter, Semiblock, SEMIBLOCK_SIZE,
};

/// Initial value of the integrity register, RFC 3394 section 2.2.3.1.
pub(crate) const IV: Semiblock = [0xA6; SEMIBLOCK_SIZE];

/// Number of rounds over the full semiblock set.
const ROUNDS: usize = 6;

/// Round counter for round `j` and semiblock `i` of an `n`-semiblock key.
fn round_counter(n: usize, j: usize, i: usize) -> u64 {
    (n * j + i + 1) as u64
}

fn check_kek_length(kek: &[u8]) -> KeywrapResult<()> {
    match kek.len() {
        16 | 24 | 32 => Ok(()),
        _ => Err(KeywrapError::InvalidLength),
    }
}

/// Wraps (encrypts) a key with a KEK.
///
/// The KEK must be 16, 24, or 32 bytes, selecting AES-128/192/256, and the
/// key must be the same length as the KEK. The wrapped key is exactly
/// 8 bytes longer than the key. Deterministic: the same inputs always
/// produce the same output.
///
/// # Errors
///
/// Returns [`KeywrapError::InvalidLength`] if either buffer has the wrong
/// size. Length validation happens before any cryptographic work.
pub fn wrap_key(key: &[u8], kek: &[u8]) -> KeywrapResult<Vec<u8>> {
    check_kek_length(kek)?;
    if key.len() != kek.len() {
        return Err(KeywrapError::InvalidLength);
    }

    let cipher = KekCipher::new(kek)?;
    let mut r = split(key);
    let n = r.len();
    let mut a = IV;

    for j in 0..ROUNDS {
        for i in 0..n {
            let block = cipher.encrypt(concat(&a, &r[i]));
            let (hi, lo) = halves(&block);
            a = xor_with_counter(&hi, round_counter(n, j, i));
            r[i] = lo;
        }
    }

    let mut wrapped_key = Vec::with_capacity((n + 1) * SEMIBLOCK_SIZE);
    wrapped_key.extend_from_slice(&a);
    wrapped_key.extend_from_slice(&join(&r));
    Ok(wrapped_key)
}

/// Unwraps (decrypts) a wrapped key with a KEK, verifying its integrity.
///
/// The KEK must be 16, 24, or 32 bytes and the wrapped key exactly 8 bytes
/// longer. The recovered key is returned in a [`Zeroizing`] buffer that
/// erases itself on drop.
///
/// # Errors
///
/// Returns [`KeywrapError::InvalidLength`] if either buffer has the wrong
/// size, before any cryptographic work. Returns
/// [`KeywrapError::AuthenticationFailed`] if the integrity register does
/// not match the initial value after the rounds; tampered data and a wrong
/// KEK are indistinguishable, and no key bytes are surfaced.
pub fn unwrap_key(wrapped_key: &[u8], kek: &[u8]) -> KeywrapResult<Zeroizing<Vec<u8>>> {
    check_kek_length(kek)?;
    if wrapped_key.len() != kek.len() + SEMIBLOCK_SIZE {
        return Err(KeywrapError::InvalidLength);
    }

    let cipher = KekCipher::new(kek)?;
    let mut r = split(wrapped_key);
    let mut a = r.remove(0);
    let n = r.len();

    for j in (0..ROUNDS).rev() {
        for i in (0..n).rev() {
            let block = cipher.decrypt(concat(
                &xor_with_counter(&a, round_counter(n, j, i)),
                &r[i],
            ));
            let (hi, lo) = halves(&block);
            a = hi;
            r[i] = lo;
        }
    }

    let authentic: bool = a.ct_eq(&IV).into();
    if !authentic {
        r.zeroize();
        return Err(KeywrapError::AuthenticationFailed);
    }

    Ok(Zeroizing::new(join(&r)))
}

/// Wraps a key with a KEK and returns the wrapped key as an encoded string.
///
/// # Errors
///
/// Fails like [`wrap_key`]; additionally [`KeywrapError::InvalidText`] if
/// the wrapped bytes cannot be represented in `encoding`.
pub fn wrap_key_to_string(key: &[u8], kek: &[u8], encoding: Encoding) -> KeywrapResult<String> {
    encoding::to_string(&wrap_key(key, kek)?, encoding)
}

/// Decodes an encoded wrapped key and unwraps it with a KEK.
///
/// # Errors
///
/// Fails with a decode error if the string is not valid for `encoding`,
/// and like [`unwrap_key`] otherwise.
pub fn unwrap_key_from_string(
    encoded_wrapped_key: &str,
    kek: &[u8],
    encoding: Encoding,
) -> KeywrapResult<Zeroizing<Vec<u8>>> {
    unwrap_key(&encoding::from_string(encoded_wrapped_key, encoding)?, kek)
}
