//! 4-byte function selectors.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use crate::bounds::{self, SELECTOR_LEN};
use crate::error::{ParseHexError, Result};
use crate::source::ByteSource;

/// Opaque dispatch identifier. Compared, never used arithmetically.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde_support", serde(transparent))]
pub struct Selector(pub [u8; SELECTOR_LEN]);

impl Selector {
    #[inline]
    pub const fn from_bytes(b: [u8; SELECTOR_LEN]) -> Self {
        Selector(b)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; SELECTOR_LEN] {
        &self.0
    }

    /// Big-endian reading of the four bytes, for `match`-style dispatch tables.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        u32::from_be_bytes(self.0)
    }
}

impl From<u32> for Selector {
    fn from(v: u32) -> Self {
        Selector(v.to_be_bytes())
    }
}

impl AsRef<[u8]> for Selector {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::LowerHex for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self)
    }
}

impl FromStr for Selector {
    type Err = ParseHexError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let mut out = [0u8; SELECTOR_LEN];
        crate::address::parse_fixed_hex(s, &mut out)?;
        Ok(Selector(out))
    }
}

/// Decode the selector at `offset`; requires `len >= offset + 4`.
pub fn decode_selector_at<S: ByteSource + ?Sized>(src: &S, offset: usize) -> Result<Selector> {
    let data = src.as_bytes();
    let r = bounds::span(data.len(), offset, SELECTOR_LEN)?;
    let mut out = [0u8; SELECTOR_LEN];
    out.copy_from_slice(&data[r]);
    Ok(Selector(out))
}

/// Decode the leading selector; trailing bytes are ignored.
#[inline]
pub fn decode_selector<S: ByteSource + ?Sized>(src: &S) -> Result<Selector> {
    decode_selector_at(src, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;

    const TEST_SIG: [u8; 4] = [0x62, 0x9e, 0x7e, 0xc8];

    #[test]
    fn decodes_leading_selector() {
        let mut call = TEST_SIG.to_vec();
        call.extend_from_slice(&[0u8; 64]);
        assert_eq!(decode_selector(&call).unwrap(), Selector(TEST_SIG));
        assert_eq!(decode_selector(&TEST_SIG).unwrap().to_u32(), 0x629e_7ec8);
    }

    #[test]
    fn truncated_selector_rejected() {
        assert_eq!(decode_selector(&TEST_SIG[..3]), Err(DecodeError::IncorrectDataLength));
    }

    #[test]
    fn selector_at_offset_window() {
        let mut buf = vec![0xAB; 12];
        buf.extend_from_slice(&TEST_SIG);
        assert_eq!(decode_selector_at(&buf, 12).unwrap(), Selector(TEST_SIG));
        for o in 0..=12 {
            assert!(decode_selector_at(&buf, o).is_ok(), "offset {o}");
        }
        assert!(decode_selector_at(&buf, 13).is_err());
        assert!(decode_selector_at(&buf, usize::MAX - 2).is_err());
    }

    #[test]
    fn display_and_parse() {
        let s = Selector(TEST_SIG);
        assert_eq!(s.to_string(), "0x629e7ec8");
        assert_eq!(format!("{:x}", s), "629e7ec8");
        assert_eq!("0x629e7ec8".parse::<Selector>().unwrap(), s);
        assert_eq!("629E7EC8".parse::<Selector>().unwrap(), s);
        assert!("0x629e7e".parse::<Selector>().is_err());
        assert_eq!(Selector::from(0x629e_7ec8), s);
    }
}
