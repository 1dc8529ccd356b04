//! 20-byte address-class identifiers and the "target + payload" split.
//!
//! # Layout
//! A routed call buffer is `target (20 bytes) || payload (any length)`. The
//! target is opaque: it is compared and forwarded, never used as a number.
//!
//! # Encodings
//! * In buffers: raw 20 bytes.
//! * For humans: `0x` + 40 hex chars. Parsing accepts `0x`, `0X` or no prefix
//!   but insists on exactly 40 nibbles; no padding or truncation.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use crate::bounds::{self, ADDRESS_LEN};
use crate::error::{ParseHexError, Result};
use crate::source::ByteSource;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde_support", serde(transparent))]
pub struct Address(pub [u8; ADDRESS_LEN]);

impl Address {
    #[inline]
    pub const fn from_bytes(b: [u8; ADDRESS_LEN]) -> Self {
        Address(b)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }
}

impl AsRef<[u8]> for Address {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = ParseHexError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let mut out = [0u8; ADDRESS_LEN];
        parse_fixed_hex(s, &mut out)?;
        Ok(Address(out))
    }
}

/// Strict hex parse into `out`: optional `0x`/`0X`, then exactly
/// `2 * out.len()` nibbles.
pub(crate) fn parse_fixed_hex(s: &str, out: &mut [u8]) -> core::result::Result<(), ParseHexError> {
    let s = s.trim();
    let h = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if h.len() != out.len() * 2 {
        return Err(ParseHexError::WrongLength {
            expected: out.len() * 2,
            got: h.len(),
        });
    }
    hex::decode_to_slice(h, out)?;
    Ok(())
}

/// Decode the address at `offset`; requires `len >= offset + 20`.
pub fn decode_address_at<S: ByteSource + ?Sized>(src: &S, offset: usize) -> Result<Address> {
    let data = src.as_bytes();
    let r = bounds::span(data.len(), offset, ADDRESS_LEN)?;
    let mut out = [0u8; ADDRESS_LEN];
    out.copy_from_slice(&data[r]);
    Ok(Address(out))
}

/// Split `target || payload`. Requires `len >= 20`; the payload may be empty.
pub fn decode_identifier_and_tail<S: ByteSource + ?Sized>(src: &S) -> Result<(Address, &[u8])> {
    let data = src.as_bytes();
    bounds::check(data.len(), 0, ADDRESS_LEN)?;
    let (head, tail) = data.split_at(ADDRESS_LEN);
    let mut out = [0u8; ADDRESS_LEN];
    out.copy_from_slice(head);
    Ok((Address(out), tail))
}


#[cfg(all(test, feature = "serde_support"))]
mod serde_tests {
    use super::*;
    use crate::error::DecodeError;
    use crate::selector::Selector;

    #[test]
    fn address_serializes_as_bare_byte_array() {
        let a = Address([7u8; 20]);
        let v = serde_json::to_value(a).unwrap();
        let arr = v.as_array().expect("transparent: plain array, no wrapper");
        assert_eq!(arr.len(), ADDRESS_LEN);
        assert!(arr.iter().all(|x| x.as_u64() == Some(7)));

        let back: Address = serde_json::from_value(v).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn selector_serializes_as_bare_byte_array() {
        let s = Selector([0xa9, 0x05, 0x9c, 0xbb]);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "[169,5,156,187]");
        assert_eq!(serde_json::from_str::<Selector>(&json).unwrap(), s);
    }

    #[test]
    fn decode_error_roundtrips() {
        let json = serde_json::to_string(&DecodeError::IncorrectDataLength).unwrap();
        assert_eq!(json, "\"IncorrectDataLength\"");
        assert_eq!(
            serde_json::from_str::<DecodeError>(&json).unwrap(),
            DecodeError::IncorrectDataLength
        );
    }
}
