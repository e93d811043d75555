use thiserror::Error;

/// Result type for codec operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors returned by [`encode`](crate::encode) and [`decode`](crate::decode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Input length is not a whole number of blocks.
    #[error("invalid input length {len}: must be a multiple of {block}")]
    InvalidLength { len: usize, block: usize },

    /// A byte outside the alphabet was found while decoding.
    #[error("invalid character {byte:#04x} at position {position}")]
    InvalidCharacter { position: usize, byte: u8 },
}
