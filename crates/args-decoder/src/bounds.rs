//! Length validation shared by every decode operation.
//!
//! All arithmetic is `checked_add`: an adversarial `start` near `usize::MAX`
//! must fail the check instead of wrapping past it.

use core::ops::Range;

use crate::error::{DecodeError, Result};
use crate::metrics;

/// Width of a Word (one ABI argument slot).
pub const WORD_LEN: usize = 32;
/// Width of a function selector.
pub const SELECTOR_LEN: usize = 4;
/// Width of an address-class identifier.
pub const ADDRESS_LEN: usize = 20;

#[cold]
#[inline(never)]
fn reject(len: usize, start: usize, width: usize) -> DecodeError {
    log::trace!("args-decoder: reject len={len} start={start} width={width}");
    metrics::incorrect_length_inc();
    DecodeError::IncorrectDataLength
}

/// Succeeds iff `start + width <= len` without overflow.
#[inline]
pub fn check(len: usize, start: usize, width: usize) -> Result<()> {
    span(len, start, width).map(|_| ())
}

/// Succeeds iff `len == width`.
#[inline]
pub fn check_exact(len: usize, width: usize) -> Result<()> {
    if len == width {
        Ok(())
    } else {
        Err(reject(len, 0, width))
    }
}

/// Validated byte range `start..start + width` inside a buffer of `len` bytes.
#[inline]
pub(crate) fn span(len: usize, start: usize, width: usize) -> Result<Range<usize>> {
    match start.checked_add(width) {
        Some(end) if end <= len => Ok(start..end),
        _ => Err(reject(len, start, width)),
    }
}
