//! SHA-1 compression function (FIPS 180-4 Section 6.1.2, steps 2-4).

#![forbid(unsafe_code)]

use crate::schedule::Schedule;
use sha1hex_core::{DIGEST_WORDS, ROUND_CONSTANTS, STAGE_ROUNDS};

/// Running digest state, registers A..E in order.
pub type State = [u32; DIGEST_WORDS];

/// One of the four 20-round bands, each with its own function and constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Rounds 0..20: Ch(b, c, d)
    Choose,
    /// Rounds 20..40
    Parity,
    /// Rounds 40..60: Maj(b, c, d)
    Majority,
    /// Rounds 60..80, same function as `Parity` with a different constant
    FinalParity,
}

impl Stage {
    /// Stage for round `round` (0..80).
    #[inline]
    pub fn for_round(round: usize) -> Self {
        debug_assert!(round < STAGE_ROUNDS * ROUND_CONSTANTS.len());
        match round / STAGE_ROUNDS {
            0 => Stage::Choose,
            1 => Stage::Parity,
            2 => Stage::Majority,
            _ => Stage::FinalParity,
        }
    }

    #[inline]
    fn index(self) -> usize {
        match self {
            Stage::Choose => 0,
            Stage::Parity => 1,
            Stage::Majority => 2,
            Stage::FinalParity => 3,
        }
    }

    /// Nonlinear stage function f(B, C, D).
    #[inline]
    pub fn mix(self, b: u32, c: u32, d: u32) -> u32 {
        match self {
            Stage::Choose => (b & c) | (!b & d),
            Stage::Parity | Stage::FinalParity => b ^ c ^ d,
            Stage::Majority => (b & c) | (b & d) | (c & d),
        }
    }

    /// Round constant K for this stage.
    #[inline]
    pub fn constant(self) -> u32 {
        ROUND_CONSTANTS[self.index()]
    }
}

/// Run the 80 rounds over `state` without the final feed-forward.
pub fn rounds(schedule: &Schedule, state: &State) -> State {
    let [mut a, mut b, mut c, mut d, mut e] = *state;

    for (round, &word) in schedule.iter().enumerate() {
        let stage = Stage::for_round(round);
        let new_a = e
            .wrapping_add(word)
            .wrapping_add(a.rotate_left(5))
            .wrapping_add(stage.mix(b, c, d))
            .wrapping_add(stage.constant());

        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = new_a;
    }

    [a, b, c, d, e]
}

/// Compress one scheduled block into the running state.
pub fn compress(schedule: &Schedule, state: &mut State) {
    let worked = rounds(schedule, state);

    // Feed-forward: add the pre-block state back in
    for (word, add) in state.iter_mut().zip(worked) {
        *word = word.wrapping_add(add);
    }
}
