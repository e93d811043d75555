// Base32 block codec
use crate::error::{Error, Result};

/// Symbol table, indexed by 5-bit group value.
pub const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ123456";

/// Bytes consumed by one encode step.
pub const RAW_BLOCK_LEN: usize = 5;

/// Symbols consumed by one decode step.
pub const ENCODED_BLOCK_LEN: usize = 8;

const INVALID: u8 = 0xff;

const DECODE_TABLE: [u8; 256] = build_decode_table();

const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Length of the encoding of `raw_len` bytes.
pub fn encoded_len(raw_len: usize) -> Result<usize> {
    if raw_len % RAW_BLOCK_LEN != 0 {
        return Err(Error::InvalidLength {
            len: raw_len,
            block: RAW_BLOCK_LEN,
        });
    }
    Ok(raw_len / RAW_BLOCK_LEN * ENCODED_BLOCK_LEN)
}

/// Length of the bytes decoded from `encoded_len` symbols.
pub fn decoded_len(encoded_len: usize) -> Result<usize> {
    if encoded_len % ENCODED_BLOCK_LEN != 0 {
        return Err(Error::InvalidLength {
            len: encoded_len,
            block: ENCODED_BLOCK_LEN,
        });
    }
    Ok(encoded_len / ENCODED_BLOCK_LEN * RAW_BLOCK_LEN)
}

/// Encode one block. The 5 bytes are read as a big-endian 40-bit integer and
/// the most significant 5-bit group becomes the first symbol.
pub fn encode_block(block: [u8; RAW_BLOCK_LEN]) -> [u8; ENCODED_BLOCK_LEN] {
    let mut wide = [0u8; 8];
    wide[8 - RAW_BLOCK_LEN..].copy_from_slice(&block);
    let value = u64::from_be_bytes(wide);

    let mut symbols = [0u8; ENCODED_BLOCK_LEN];
    for (i, symbol) in symbols.iter_mut().enumerate() {
        let shift = 5 * (ENCODED_BLOCK_LEN - 1 - i);
        *symbol = ALPHABET[((value >> shift) & 0x1f) as usize];
    }
    symbols
}

/// Decode one block. An invalid character is reported with its offset
/// inside the block.
pub fn decode_block(block: &[u8; ENCODED_BLOCK_LEN]) -> Result<[u8; RAW_BLOCK_LEN]> {
    let mut value = 0u64;
    for (position, &byte) in block.iter().enumerate() {
        let index = DECODE_TABLE[usize::from(byte)];
        if index == INVALID {
            return Err(Error::InvalidCharacter { position, byte });
        }
        value = (value << 5) | u64::from(index);
    }

    let mut raw = [0u8; RAW_BLOCK_LEN];
    raw.copy_from_slice(&value.to_be_bytes()[8 - RAW_BLOCK_LEN..]);
    Ok(raw)
}

/// Encode `input`, whose length must be a multiple of 5.
pub fn encode(input: impl AsRef<[u8]>) -> Result<String> {
    let input = input.as_ref();
    let mut output = String::with_capacity(encoded_len(input.len())?);

    for chunk in input.chunks_exact(RAW_BLOCK_LEN) {
        let mut block = [0u8; RAW_BLOCK_LEN];
        block.copy_from_slice(chunk);
        output.extend(encode_block(block).iter().map(|&symbol| char::from(symbol)));
    }

    log::trace!("encoded {} bytes into {} symbols", input.len(), output.len());
    Ok(output)
}

/// Decode `input`, whose length must be a multiple of 8 and whose bytes must
/// all belong to [`ALPHABET`].
pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>> {
    let input = input.as_ref();
    let mut output = Vec::with_capacity(decoded_len(input.len())?);

    for (index, chunk) in input.chunks_exact(ENCODED_BLOCK_LEN).enumerate() {
        let mut block = [0u8; ENCODED_BLOCK_LEN];
        block.copy_from_slice(chunk);
        let raw = decode_block(&block).map_err(|err| match err {
            Error::InvalidCharacter { position, byte } => Error::InvalidCharacter {
                position: index * ENCODED_BLOCK_LEN + position,
                byte,
            },
            other => other,
        })?;
        output.extend_from_slice(&raw);
    }

    log::trace!("decoded {} symbols into {} bytes", input.len(), output.len());
    Ok(output)
}
