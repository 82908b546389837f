//! Message padding (FIPS 180-4 Section 5.1.1).

#![forbid(unsafe_code)]

use sha1hex_core::{Error, Result, BLOCK_BYTES, LENGTH_BYTES};

/// Message length in bits, or `InputTooLarge` if it does not fit in 64 bits.
pub fn bit_length(len: usize) -> Result<u64> {
    u64::try_from(len)
        .ok()
        .and_then(|bytes| bytes.checked_mul(8))
        .ok_or(Error::InputTooLarge { len })
}

/// Padded size for a message of `len` bytes: the smallest multiple of 64
/// that is at least `len + 9`.
pub fn padded_len(len: usize) -> Result<usize> {
    len.checked_add(1 + LENGTH_BYTES)
        .and_then(|min| min.div_ceil(BLOCK_BYTES).checked_mul(BLOCK_BYTES))
        .ok_or(Error::InputTooLarge { len })
}

/// Pad `input` to a whole number of blocks.
///
/// input || 0x80 || 0x00* || bit_len (u64, big-endian)
pub fn pad(input: &[u8]) -> Result<Vec<u8>> {
    let bit_len = bit_length(input.len())?;
    let mut padded = Vec::with_capacity(padded_len(input.len())?);
    padded.extend_from_slice(input);

    // Append bit '1' (0x80 byte)
    padded.push(0x80);

    // Append zeros until length ≡ 56 (mod 64)
    while padded.len() % BLOCK_BYTES != BLOCK_BYTES - LENGTH_BYTES {
        padded.push(0x00);
    }

    padded.extend_from_slice(&bit_len.to_be_bytes());

    Ok(padded)
}
