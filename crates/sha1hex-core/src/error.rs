use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("input too large: {len} bytes overflows the 64-bit message length field")]
    InputTooLarge { len: usize },

    #[error("block index {index} out of range: padded message has {blocks} block(s)")]
    BlockOutOfRange { index: usize, blocks: usize },

    #[error("padded buffer length {len} is not a positive multiple of 64 bytes")]
    UnalignedBuffer { len: usize },

    #[error("self-check failed for {input:?}: expected {expected}, got {actual}")]
    SelfCheckFailed {
        input: String,
        expected: &'static str,
        actual: String,
    },
}
