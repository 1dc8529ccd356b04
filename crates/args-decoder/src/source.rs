//! Buffer kinds the decoders accept.
//!
//! `Calldata` is the caller-supplied, read-only input region. `Scratch` is a
//! mutable region owned by the current execution context. Both (and plain
//! byte containers) expose the same read view through [`ByteSource`], so every
//! decoder is written once and applies identical rules to either.

use core::ops::Deref;

/// Read access to a contiguous byte buffer.
pub trait ByteSource {
    fn as_bytes(&self) -> &[u8];

    #[inline]
    fn len(&self) -> usize {
        self.as_bytes().len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ByteSource for [u8] {
    #[inline]
    fn as_bytes(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> ByteSource for [u8; N] {
    #[inline]
    fn as_bytes(&self) -> &[u8] {
        self
    }
}

impl ByteSource for Vec<u8> {
    #[inline]
    fn as_bytes(&self) -> &[u8] {
        self
    }
}

/// Immutable input region.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Calldata<'a>(&'a [u8]);

impl<'a> Calldata<'a> {
    #[inline]
    pub fn new(bytes: &'a [u8]) -> Self {
        Calldata(bytes)
    }

    /// The underlying slice with the region's own lifetime.
    #[inline]
    pub fn bytes(&self) -> &'a [u8] {
        self.0
    }
}

impl ByteSource for Calldata<'_> {
    #[inline]
    fn as_bytes(&self) -> &[u8] {
        self.0
    }
}

impl<'a> From<&'a [u8]> for Calldata<'a> {
    fn from(b: &'a [u8]) -> Self {
        Calldata(b)
    }
}

impl Deref for Calldata<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.0
    }
}

/// Mutable scratch region owned by one execution context.
///
/// Decoding borrows it shared, so no write can overlap a live decoded tail.
#[derive(Debug, PartialEq, Eq)]
pub struct Scratch<'a>(&'a mut [u8]);

impl<'a> Scratch<'a> {
    #[inline]
    pub fn new(bytes: &'a mut [u8]) -> Self {
        Scratch(bytes)
    }

    /// Write access for the owning context.
    #[inline]
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        self.0
    }
}

impl ByteSource for Scratch<'_> {
    #[inline]
    fn as_bytes(&self) -> &[u8] {
        self.0
    }
}

impl<'a> From<&'a mut [u8]> for Scratch<'a> {
    fn from(b: &'a mut [u8]) -> Self {
        Scratch(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn len_of<S: ByteSource + ?Sized>(s: &S) -> usize {
        s.len()
    }

    #[test]
    fn all_sources_report_same_view() {
        let raw = [1u8, 2, 3, 4, 5];
        let mut copy = raw;
        let v = raw.to_vec();

        assert_eq!(len_of(&raw[..]), 5);
        assert_eq!(len_of(&raw), 5);
        assert_eq!(len_of(&v), 5);
        assert_eq!(Calldata::new(&raw).as_bytes(), &raw[..]);
        assert_eq!(Scratch::new(&mut copy).as_bytes(), &raw[..]);
    }

    #[test]
    fn scratch_writes_are_visible_to_reads() {
        let mut buf = [0u8; 4];
        let mut s = Scratch::new(&mut buf);
        s.as_mut_bytes()[3] = 0xAA;
        assert_eq!(s.as_bytes(), &[0, 0, 0, 0xAA]);
        assert!(!s.is_empty());
    }

    #[test]
    fn empty_calldata() {
        let c = Calldata::new(&[]);
        assert!(c.is_empty());
        assert_eq!(c.bytes(), &[] as &[u8]);
    }
}
