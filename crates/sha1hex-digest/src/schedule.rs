//! Message schedule expansion (FIPS 180-4 Section 6.1.2, step 1).

#![forbid(unsafe_code)]

use sha1hex_core::{Error, Result, BLOCK_BYTES, BLOCK_WORDS, ROUND_COUNT, WORD_BYTES};

/// 80-word schedule for one block, consumed one word per round.
pub type Schedule = [u32; ROUND_COUNT];

/// Build the schedule for block `block_index` of a padded message.
pub fn make_schedule(padded: &[u8], block_index: usize) -> Result<Schedule> {
    if padded.is_empty() || padded.len() % BLOCK_BYTES != 0 {
        return Err(Error::UnalignedBuffer { len: padded.len() });
    }

    let blocks = padded.len() / BLOCK_BYTES;
    if block_index >= blocks {
        return Err(Error::BlockOutOfRange {
            index: block_index,
            blocks,
        });
    }

    let start = block_index * BLOCK_BYTES;
    let mut block = [0u8; BLOCK_BYTES];
    block.copy_from_slice(&padded[start..start + BLOCK_BYTES]);

    Ok(schedule_block(&block))
}

/// Expand one 64-byte block into its 80-word schedule.
pub fn schedule_block(block: &[u8; BLOCK_BYTES]) -> Schedule {
    let mut w = [0u32; ROUND_COUNT];

    // First 16 words from block, most significant byte first
    for (i, chunk) in block.chunks_exact(WORD_BYTES).enumerate() {
        w[i] = chunk
            .iter()
            .fold(0u32, |word, &byte| (word << 8) | u32::from(byte));
    }

    for i in BLOCK_WORDS..ROUND_COUNT {
        w[i] = (w[i - 16] ^ w[i - 14] ^ w[i - 8] ^ w[i - 3]).rotate_left(1);
    }

    w
}
