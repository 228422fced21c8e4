//! Single-block AES adapter keyed by the KEK.
//!
//! The round engines consume exactly one 16-byte ECB block operation at a
//! time: no mode of operation, no padding. `KekCipher` selects the AES
//! variant from the KEK length and keeps the underlying cipher types out
//! of the engines.

use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256, Block};

use crate::core::error::{KeywrapError, KeywrapResult};

/// Size of one AES block in bytes.
pub(crate) const BLOCK_SIZE: usize = 16;

/// An AES block cipher keyed with a KEK, selected by KEK length:
/// 16 bytes for AES-128, 24 for AES-192, 32 for AES-256.
pub(crate) enum KekCipher {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

impl KekCipher {
    /// Creates a cipher for the given KEK.
    ///
    /// # Errors
    ///
    /// Returns [`KeywrapError::InvalidLength`] if the KEK is not 16, 24,
    /// or 32 bytes long.
    pub(crate) fn new(kek: &[u8]) -> KeywrapResult<Self> {
        match kek.len() {
            16 => Aes128::new_from_slice(kek)
                .map(Self::Aes128)
                .map_err(|_| KeywrapError::InvalidLength),
            24 => Aes192::new_from_slice(kek)
                .map(Self::Aes192)
                .map_err(|_| KeywrapError::InvalidLength),
            32 => Aes256::new_from_slice(kek)
                .map(Self::Aes256)
                .map_err(|_| KeywrapError::InvalidLength),
            _ => Err(KeywrapError::InvalidLength),
        }
    }

    /// Encrypts one block in ECB mode.
    pub(crate) fn encrypt(&self, block: [u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let mut block = Block::from(block);
        match self {
            Self::Aes128(cipher) => cipher.encrypt_block(&mut block),
            Self::Aes192(cipher) => cipher.encrypt_block(&mut block),
            Self::Aes256(cipher) => cipher.encrypt_block(&mut block),
        }
        block.into()
    }

    /// Decrypts one block in ECB mode.
    pub(crate) fn decrypt(&self, block: [u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let mut block = Block::from(block);
        match self {
            Self::Aes128(cipher) => cipher.decrypt_block(&mut block),
            Self::Aes192(cipher) => cipher.decrypt_block(&mut block),
            Self::Aes256(cipher) => cipher.decrypt_block(&mut block),
        }
        block.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_from_hex(hex_str: &str) -> [u8; BLOCK_SIZE] {
        let bytes = hex::decode(hex_str).expect("valid hex");
        bytes.try_into().expect("exactly one block")
    }

    // Single-block vectors from FIPS-197 Appendix C.
    const PLAINTEXT: &str = "00112233445566778899aabbccddeeff";

    const AES128_KEY: &str = "000102030405060708090a0b0c0d0e0f";
    const AES128_CIPHERTEXT: &str = "69c4e0d86a7b0430d8cdb78070b4c55a";

    const AES192_KEY: &str = "000102030405060708090a0b0c0d0e0f1011121314151617";
    const AES192_CIPHERTEXT: &str = "dda97ca4864cdfe06eaf70a0ec0d7191";

    const AES256_KEY: &str = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";
    const AES256_CIPHERTEXT: &str = "8ea2b7ca516745bfeafc49904b496089";

    #[test]
    fn test_encrypt_single_block_vectors() {
        for (key, ciphertext) in [
            (AES128_KEY, AES128_CIPHERTEXT),
            (AES192_KEY, AES192_CIPHERTEXT),
            (AES256_KEY, AES256_CIPHERTEXT),
        ] {
            let kek = hex::decode(key).expect("valid hex");
            let cipher = KekCipher::new(&kek).expect("valid KEK length");

            let encrypted = cipher.encrypt(block_from_hex(PLAINTEXT));
            assert_eq!(hex::encode(encrypted), ciphertext);
        }
    }

    #[test]
    fn test_decrypt_single_block_vectors() {
        for (key, ciphertext) in [
            (AES128_KEY, AES128_CIPHERTEXT),
            (AES192_KEY, AES192_CIPHERTEXT),
            (AES256_KEY, AES256_CIPHERTEXT),
        ] {
            let kek = hex::decode(key).expect("valid hex");
            let cipher = KekCipher::new(&kek).expect("valid KEK length");

            let decrypted = cipher.decrypt(block_from_hex(ciphertext));
            assert_eq!(hex::encode(decrypted), PLAINTEXT);
        }
    }

    #[test]
    fn test_decrypt_inverts_encrypt() {
        let cipher = KekCipher::new(&[0x42u8; 24]).expect("valid KEK length");
        let block = [0x13u8; BLOCK_SIZE];

        assert_eq!(cipher.decrypt(cipher.encrypt(block)), block);
    }

    #[test]
    fn test_rejects_invalid_kek_lengths() {
        for length in [0, 8, 15, 17, 20, 31, 33, 48] {
            let kek = vec![0u8; length];
            assert!(matches!(
                KekCipher::new(&kek),
                Err(KeywrapError::InvalidLength)
            ));
        }
    }
}
