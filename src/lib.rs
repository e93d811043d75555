//! Block Base32 codec over the `A`-`Z`, `1`-`6` alphabet.
//!
//! Every 5 input bytes become exactly 8 symbols and every 8 symbols become
//! exactly 5 bytes. There is no padding, so inputs must be whole blocks.

pub mod base32;
pub mod error;
pub mod selftest;

pub use crate::base32::{
    ALPHABET, ENCODED_BLOCK_LEN, RAW_BLOCK_LEN, decode, decode_block, decoded_len, encode,
    encode_block, encoded_len,
};
pub use crate::error::{Error, Result};
