//! SHA-1 digest pipeline (FIPS 180-4 Section 6.1).
//!
//! pad → per block: schedule → compress → hex encode.
//! Reference crates (sha1, hex) are dev-dependencies only.

#![forbid(unsafe_code)]

pub mod compress;
pub mod encode;
pub mod pad;
pub mod schedule;

pub use compress::{compress, rounds, Stage, State};
pub use encode::{to_bytes, to_hex};
pub use pad::{bit_length, pad, padded_len};
pub use schedule::{make_schedule, schedule_block, Schedule};

use sha1hex_core::{Error, Result, BLOCK_BYTES, DIGEST_BYTES, INITIAL_STATE, KNOWN_ANSWERS};

/// Run the full pipeline and return the final digest state.
pub fn digest(input: &[u8]) -> Result<State> {
    let padded = pad(input)?;
    let mut state = INITIAL_STATE;

    for block_index in 0..padded.len() / BLOCK_BYTES {
        let schedule = make_schedule(&padded, block_index)?;
        compress(&schedule, &mut state);
    }

    Ok(state)
}

/// Compute the 20-byte SHA-1 digest of `input`.
pub fn digest_bytes(input: &[u8]) -> Result<[u8; DIGEST_BYTES]> {
    digest(input).map(|state| to_bytes(&state))
}

/// Compute the SHA-1 of `input` as 40 lowercase hex characters.
///
/// Accepts anything byte-like, so `hash("abc")` and `hash(b"abc")` agree.
pub fn hash(input: impl AsRef<[u8]>) -> Result<String> {
    digest(input.as_ref()).map(|state| to_hex(&state))
}

/// Verify the implementation against the built-in known-answer vectors.
pub fn self_check() -> Result<()> {
    for answer in KNOWN_ANSWERS {
        let actual = hash(answer.input)?;
        if actual != answer.hex {
            return Err(Error::SelfCheckFailed {
                input: String::from_utf8_lossy(answer.input).into_owned(),
                expected: answer.hex,
                actual,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha1hex_core::HEX_LEN;

    #[test]
    fn test_empty() {
        assert_eq!(hash("").unwrap(), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[test]
    fn test_quick_brown_fox() {
        assert_eq!(
            hash("The quick brown fox jumps over the lazy dog").unwrap(),
            "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12"
        );
    }

    #[test]
    fn test_huh() {
        assert_eq!(hash("huh").unwrap(), "5a9213b1f721b28fad5d446d00c74cbf6e107439");
    }

    #[test]
    fn test_abc() {
        // FIPS 180-4 example: SHA-1("abc")
        assert_eq!(hash(b"abc").unwrap(), "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    #[test]
    fn test_448_bits() {
        // FIPS 180-4 example: 448-bit message (56 bytes)
        let result = hash(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq");
        assert_eq!(result.unwrap(), "84983e441c3bd26ebaae4aa1f95129e5e54670f1");
    }

    #[test]
    fn test_million_a() {
        let input = vec![b'a'; 1_000_000];
        assert_eq!(hash(&input).unwrap(), "34aa973cd4c4daa4f61eeb2bdbad27316534016f");
    }

    #[test]
    fn test_self_check_passes() {
        assert_eq!(self_check(), Ok(()));
    }

    #[test]
    fn test_deterministic() {
        let data = b"repeat me";
        let first = hash(data).unwrap();
        for _ in 0..10 {
            assert_eq!(hash(data).unwrap(), first);
        }
    }

    #[test]
    fn test_output_shape() {
        for len in [0usize, 1, 3, 55, 56, 64, 100, 1000] {
            let hex = hash(vec![0x5au8; len]).unwrap();
            assert_eq!(hex.len(), HEX_LEN);
            assert!(hex.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
        }
    }

    #[test]
    fn test_block_boundaries_against_sha1_crate() {
        use sha1::{Digest, Sha1};

        for len in [55usize, 56, 57, 63, 64, 65, 119, 120, 127, 128, 129] {
            let data: Vec<u8> = (0..len).map(|i| i as u8).collect();
            let ours = digest_bytes(&data).unwrap();
            let reference: [u8; 20] = Sha1::digest(&data).into();
            assert_eq!(ours, reference, "mismatch for input len {}", len);
        }
    }

    #[test]
    fn test_every_length_against_sha1_crate() {
        use sha1::{Digest, Sha1};

        let data: Vec<u8> = (0..200u32).map(|i| (i * 31 + 7) as u8).collect();
        for len in 0..=data.len() {
            let ours = hash(&data[..len]).unwrap();
            assert_eq!(ours, hex::encode(Sha1::digest(&data[..len])), "len {}", len);
        }
    }

    #[test]
    fn test_boundary_lengths_give_distinct_digests() {
        let digests: Vec<String> = [55usize, 56, 57, 63, 64, 65]
            .iter()
            .map(|&len| hash(vec![b'x'; len]).unwrap())
            .collect();
        for i in 0..digests.len() {
            for j in i + 1..digests.len() {
                assert_ne!(digests[i], digests[j]);
            }
        }
    }

    #[test]
    fn test_single_bit_flip_avalanche() {
        let base = b"The quick brown fox jumps over the lazy dog".to_vec();
        let original = hash(&base).unwrap();

        for bit in [0usize, 7, 100, 200, 343] {
            let mut flipped = base.clone();
            flipped[bit / 8] ^= 1 << (bit % 8);
            let changed = hash(&flipped).unwrap();

            let differing = original
                .bytes()
                .zip(changed.bytes())
                .filter(|(a, b)| a != b)
                .count();
            assert!(differing >= 20, "bit {} only changed {} hex chars", bit, differing);
        }
    }

    #[test]
    fn test_chaining_binds_second_block() {
        let mut first = vec![b'A'; 64];
        first.extend_from_slice(b"second block one");
        let mut second = vec![b'A'; 64];
        second.extend_from_slice(b"second block two");

        assert_ne!(hash(&first).unwrap(), hash(&second).unwrap());
    }

    #[test]
    fn test_chaining_binds_first_block() {
        let mut first = vec![b'A'; 64];
        first.extend_from_slice(b"tail");
        let mut second = vec![b'B'; 64];
        second.extend_from_slice(b"tail");

        assert_ne!(hash(&first).unwrap(), hash(&second).unwrap());
    }

    #[test]
    fn test_str_and_bytes_agree() {
        assert_eq!(hash("huh").unwrap(), hash(b"huh".as_slice()).unwrap());
        assert_eq!(hash(String::from("huh")).unwrap(), hash(vec![b'h', b'u', b'h']).unwrap());
    }
}
