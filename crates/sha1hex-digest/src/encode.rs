//! Digest serialization.

#![forbid(unsafe_code)]

use crate::compress::State;
use sha1hex_core::{DIGEST_BYTES, HEX_LEN, WORD_BITS, WORD_BYTES};

#[inline]
fn nibble_to_hex(nibble: u32) -> char {
    match nibble {
        0..=9 => (b'0' + nibble as u8) as char,
        _ => (b'a' + (nibble - 10) as u8) as char,
    }
}

/// Render the state as 40 lowercase hex characters, A first, each word
/// most significant nibble first.
pub fn to_hex(state: &State) -> String {
    let mut hex = String::with_capacity(HEX_LEN);
    for &word in state {
        for shift in (0..WORD_BITS).step_by(4).rev() {
            hex.push(nibble_to_hex((word >> shift) & 0xf));
        }
    }
    hex
}

/// Serialize the state as 20 big-endian bytes.
pub fn to_bytes(state: &State) -> [u8; DIGEST_BYTES] {
    let mut out = [0u8; DIGEST_BYTES];
    for (chunk, word) in out.chunks_exact_mut(WORD_BYTES).zip(state) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    out
}
