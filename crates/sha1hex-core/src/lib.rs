//! Core types, constants, and known-answer vectors for sha1hex.

#![forbid(unsafe_code)]

mod constants;
mod error;
mod vectors;

pub use constants::*;
pub use error::Error;
pub use vectors::{KnownAnswer, KNOWN_ANSWERS};

pub type Result<T> = std::result::Result<T, Error>;
