use crate::constants::{ADDRESS_LENGTH, WORD_LENGTH};
use alloy_primitives::{Address, Bytes, B256, U256};
use thiserror::Error;

/// Return data that does not match the expected ABI shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbiDecodeError {
    /// Fewer bytes than the type needs
    #[error("expected at least {expected} bytes, got {got}")]
    ShortReturn {
        /// Minimum length required
        expected: usize,
        /// Actual length
        got: usize,
    },

    /// A dynamic offset or length points outside the return data
    #[error("dynamic data at word {0} is out of bounds")]
    OutOfBounds(usize),
}

/// Decode an address from a 32-byte word (low 20 bytes, high bytes masked).
pub fn decode_address(value: B256) -> Address {
    Address::from_slice(&value[WORD_LENGTH - ADDRESS_LENGTH..])
}

/// Encode an address into a 32-byte word (left-padded).
pub fn encode_address(addr: Address) -> B256 {
    let mut bytes = [0u8; 32];
    bytes[12..32].copy_from_slice(addr.as_slice());
    B256::from(bytes)
}

/// Encode a u64 value into a 32-byte word.
pub fn encode_u64(value: u64) -> B256 {
    B256::from(U256::from(value).to_be_bytes())
}

/// Encode a bool into a 32-byte word.
pub fn encode_bool(value: bool) -> B256 {
    encode_u64(value as u64)
}

/// Build calldata: 4-byte selector followed by static 32-byte arguments.
pub fn encode_call(selector: [u8; 4], args: &[B256]) -> Bytes {
    let mut data = Vec::with_capacity(4 + args.len() * WORD_LENGTH);
    data.extend_from_slice(&selector);
    for arg in args {
        data.extend_from_slice(arg.as_slice());
    }
    Bytes::from(data)
}

/// Read the `index`-th 32-byte word of ABI return data.
pub fn word_at(data: &[u8], index: usize) -> Result<B256, AbiDecodeError> {
    let start = index.checked_mul(WORD_LENGTH).ok_or(AbiDecodeError::OutOfBounds(index))?;
    let end = start.checked_add(WORD_LENGTH).ok_or(AbiDecodeError::OutOfBounds(index))?;
    if data.len() < end {
        return Err(AbiDecodeError::ShortReturn { expected: end, got: data.len() });
    }
    Ok(B256::from_slice(&data[start..end]))
}

/// Decode a single `bool` return value.
pub fn decode_bool_return(data: &[u8]) -> Result<bool, AbiDecodeError> {
    Ok(!word_at(data, 0)?.is_zero())
}

/// Decode a single `uint256` return value.
pub fn decode_u256_return(data: &[u8]) -> Result<U256, AbiDecodeError> {
    Ok(U256::from_be_bytes(word_at(data, 0)?.0))
}

/// Decode a single `address` return value.
pub fn decode_address_return(data: &[u8]) -> Result<Address, AbiDecodeError> {
    word_at(data, 0).map(decode_address)
}

/// Decode a single `address[]` return value.
///
/// Layout: word 0 is the offset of the array, the word at that offset is the
/// length, and the elements follow.
pub fn decode_address_array_return(data: &[u8]) -> Result<Vec<Address>, AbiDecodeError> {
    let offset = word_to_index(word_at(data, 0)?, 0)?;
    if offset % WORD_LENGTH != 0 {
        return Err(AbiDecodeError::OutOfBounds(0));
    }
    let length_word = offset / WORD_LENGTH;
    let length = word_to_index(word_at(data, length_word)?, length_word)?;

    let available = data.len() / WORD_LENGTH;
    if length > available.saturating_sub(length_word + 1) {
        return Err(AbiDecodeError::OutOfBounds(length_word));
    }

    (0..length)
        .map(|i| word_at(data, length_word + 1 + i).map(decode_address))
        .collect()
}

/// Encode a single `address[]` return value.
pub fn encode_address_array(addrs: &[Address]) -> Bytes {
    let mut data = Vec::with_capacity((2 + addrs.len()) * WORD_LENGTH);
    data.extend_from_slice(encode_u64(WORD_LENGTH as u64).as_slice());
    data.extend_from_slice(encode_u64(addrs.len() as u64).as_slice());
    for addr in addrs {
        data.extend_from_slice(encode_address(*addr).as_slice());
    }
    Bytes::from(data)
}

fn word_to_index(value: B256, word: usize) -> Result<usize, AbiDecodeError> {
    usize::try_from(U256::from_be_bytes(value.0)).map_err(|_| AbiDecodeError::OutOfBounds(word))
}
