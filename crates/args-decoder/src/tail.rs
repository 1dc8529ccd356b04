use crate::bounds;
use crate::error::Result;
use crate::source::ByteSource;

/// Everything from `offset` to the end. Requires `offset <= len`; an offset
/// equal to the length yields an empty tail.
pub fn decode_tail_at<S: ByteSource + ?Sized>(src: &S, offset: usize) -> Result<&[u8]> {
    let data = src.as_bytes();
    bounds::check(data.len(), offset, 0)?;
    Ok(&data[offset..])
}
