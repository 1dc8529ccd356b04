//! 32-byte Word decoders.
//!
//! The `_exact` forms expect the buffer to hold nothing but the value. The
//! offset forms only require `offset + 32` bytes and ignore the rest, so the
//! offset doubles as an assertion on the minimum trailing length.

use primitive_types::U256;

use crate::bounds::{self, WORD_LEN};
use crate::error::Result;
use crate::source::ByteSource;

/// A 256-bit unsigned value read big-endian from one argument slot.
pub type Word = U256;

#[inline]
fn word_from(bytes: &[u8]) -> Word {
    U256::from_big_endian(bytes)
}

/// Decode a buffer that is exactly one Word long.
pub fn decode_word_exact<S: ByteSource + ?Sized>(src: &S) -> Result<Word> {
    let data = src.as_bytes();
    bounds::check_exact(data.len(), WORD_LEN)?;
    Ok(word_from(data))
}

/// Decode a buffer that is exactly one Word long as a boolean.
///
/// Any nonzero word is `true`; the canonical `0x..01` form is not required.
pub fn decode_bool_exact<S: ByteSource + ?Sized>(src: &S) -> Result<bool> {
    let data = src.as_bytes();
    bounds::check_exact(data.len(), WORD_LEN)?;
    Ok(data.iter().any(|&b| b != 0))
}

/// Decode the Word at `offset`; requires `len >= offset + 32`.
pub fn decode_word_at<S: ByteSource + ?Sized>(src: &S, offset: usize) -> Result<Word> {
    let data = src.as_bytes();
    let r = bounds::span(data.len(), offset, WORD_LEN)?;
    Ok(word_from(&data[r]))
}

/// Decode the leading Word; trailing bytes are ignored.
#[inline]
pub fn decode_word<S: ByteSource + ?Sized>(src: &S) -> Result<Word> {
    decode_word_at(src, 0)
}
