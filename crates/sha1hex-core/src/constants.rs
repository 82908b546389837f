//! SHA-1 sizes and fixed tables (FIPS 180-4 Sections 4.2.1, 5.3.1).

/// Bytes per 32-bit word.
pub const WORD_BYTES: usize = 4;

/// Bits per word.
pub const WORD_BITS: u32 = 32;

/// Bytes per message block.
pub const BLOCK_BYTES: usize = 64;

/// Words per message block.
pub const BLOCK_WORDS: usize = BLOCK_BYTES / WORD_BYTES;

/// Size of the trailing big-endian bit-length field.
pub const LENGTH_BYTES: usize = 8;

/// Rounds per block, and words per message schedule.
pub const ROUND_COUNT: usize = 80;

/// Rounds sharing one stage function and round constant.
pub const STAGE_ROUNDS: usize = 20;

/// Words in the digest state (A, B, C, D, E).
pub const DIGEST_WORDS: usize = 5;

/// Digest size in bytes.
pub const DIGEST_BYTES: usize = DIGEST_WORDS * WORD_BYTES;

/// Length of the rendered hex digest.
pub const HEX_LEN: usize = DIGEST_BYTES * 2;

/// Initial digest state H0..H4.
pub const INITIAL_STATE: [u32; DIGEST_WORDS] =
    [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// One constant per 20-round stage.
pub const ROUND_CONSTANTS: [u32; ROUND_COUNT / STAGE_ROUNDS] =
    [0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xca62c1d6];
