//! Published SHA-1 test vectors.

/// An input and its expected lowercase hex digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownAnswer {
    pub input: &'static [u8],
    pub hex: &'static str,
}

/// Vectors checked at startup and in tests.
pub const KNOWN_ANSWERS: &[KnownAnswer] = &[
    KnownAnswer {
        input: b"",
        hex: "da39a3ee5e6b4b0d3255bfef95601890afd80709",
    },
    // FIPS 180-4 one-block example
    KnownAnswer {
        input: b"abc",
        hex: "a9993e364706816aba3e25717850c26c9cd0d89d",
    },
    // FIPS 180-4 two-block example (56 bytes, padding spills)
    KnownAnswer {
        input: b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        hex: "84983e441c3bd26ebaae4aa1f95129e5e54670f1",
    },
    KnownAnswer {
        input: b"The quick brown fox jumps over the lazy dog",
        hex: "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12",
    },
    KnownAnswer {
        input: b"The quick brown fox jumps over the lazy cog",
        hex: "de9f2c7fd25e1b3afad3e85a0bd17d9b100db4b3",
    },
    KnownAnswer {
        input: b"huh",
        hex: "5a9213b1f721b28fad5d446d00c74cbf6e107439",
    },
];
