//! Semiblock helpers for the key wrap rounds.
//!
//! RFC 3394 operates on 8-byte semiblocks, half of one AES block. The
//! helpers here are pure: they return new values instead of mutating
//! shared buffers, so the round engines never hold aliased key material.

/// Size of one semiblock in bytes.
pub(crate) const SEMIBLOCK_SIZE: usize = 8;

/// One 8-byte semiblock, the atomic unit of the algorithm.
pub(crate) type Semiblock = [u8; SEMIBLOCK_SIZE];

/// Splits a buffer into an ordered list of semiblocks.
///
/// Callers guarantee the length is a positive multiple of 8; the engines
/// validate input lengths before splitting.
pub(crate) fn split(buffer: &[u8]) -> Vec<Semiblock> {
    debug_assert!(!buffer.is_empty() && buffer.len() % SEMIBLOCK_SIZE == 0);

    buffer
        .chunks_exact(SEMIBLOCK_SIZE)
        .map(|chunk| {
            let mut semiblock = [0u8; SEMIBLOCK_SIZE];
            semiblock.copy_from_slice(chunk);
            semiblock
        })
        .collect()
}

/// Concatenates semiblocks back into a contiguous buffer; inverse of [`split`].
pub(crate) fn join(semiblocks: &[Semiblock]) -> Vec<u8> {
    semiblocks.concat()
}

/// XORs a semiblock with the 8-byte big-endian encoding of the round
/// counter `t`, returning a new semiblock.
pub(crate) fn xor_with_counter(semiblock: &Semiblock, t: u64) -> Semiblock {
    let counter = t.to_be_bytes();
    core::array::from_fn(|i| semiblock[i] ^ counter[i])
}

/// Assembles one 16-byte AES block from two semiblocks.
pub(crate) fn concat(hi: &Semiblock, lo: &Semiblock) -> [u8; 2 * SEMIBLOCK_SIZE] {
    let mut block = [0u8; 2 * SEMIBLOCK_SIZE];
    block[..SEMIBLOCK_SIZE].copy_from_slice(hi);
    block[SEMIBLOCK_SIZE..].copy_from_slice(lo);
    block
}

/// Disassembles one 16-byte AES block into its two semiblocks.
pub(crate) fn halves(block: &[u8; 2 * SEMIBLOCK_SIZE]) -> (Semiblock, Semiblock) {
    let mut hi = [0u8; SEMIBLOCK_SIZE];
    let mut lo = [0u8; SEMIBLOCK_SIZE];
    hi.copy_from_slice(&block[..SEMIBLOCK_SIZE]);
    lo.copy_from_slice(&block[SEMIBLOCK_SIZE..]);
    (hi, lo)
}
