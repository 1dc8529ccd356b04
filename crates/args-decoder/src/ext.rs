//! Method-call surface over any [`ByteSource`].
//!
//! ```
//! use args_decoder::{ArgumentsDecoder, Calldata};
//!
//! let mut raw = [0u8; 36];
//! raw[..4].copy_from_slice(&[0xa9, 0x05, 0x9c, 0xbb]);
//! raw[35] = 5;
//! let call = Calldata::new(&raw);
//! assert_eq!(call.decode_selector().unwrap().to_u32(), 0xa905_9cbb);
//! assert_eq!(call.decode_word_at(4).unwrap().low_u64(), 5);
//! ```

use crate::address::{self, Address};
use crate::error::Result;
use crate::selector::{self, Selector};
use crate::source::ByteSource;
use crate::tail;
use crate::word::{self, Word};

/// Decode operations as methods. Implemented for every `ByteSource`; each
/// method forwards to the free function of the same name.
pub trait ArgumentsDecoder: ByteSource {
    #[inline]
    fn decode_word_exact(&self) -> Result<Word> {
        word::decode_word_exact(self)
    }

    #[inline]
    fn decode_bool_exact(&self) -> Result<bool> {
        word::decode_bool_exact(self)
    }

    #[inline]
    fn decode_word(&self) -> Result<Word> {
        word::decode_word(self)
    }

    #[inline]
    fn decode_word_at(&self, offset: usize) -> Result<Word> {
        word::decode_word_at(self, offset)
    }

    #[inline]
    fn decode_selector(&self) -> Result<Selector> {
        selector::decode_selector(self)
    }

    #[inline]
    fn decode_selector_at(&self, offset: usize) -> Result<Selector> {
        selector::decode_selector_at(self, offset)
    }

    #[inline]
    fn decode_address_at(&self, offset: usize) -> Result<Address> {
        address::decode_address_at(self, offset)
    }

    #[inline]
    fn decode_tail_at(&self, offset: usize) -> Result<&[u8]> {
        tail::decode_tail_at(self, offset)
    }

    #[inline]
    fn decode_identifier_and_tail(&self) -> Result<(Address, &[u8])> {
        address::decode_identifier_and_tail(self)
    }
}

impl<S: ByteSource + ?Sized> ArgumentsDecoder for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{Calldata, Scratch};

    #[test]
    fn methods_match_free_functions() {
        let raw: Vec<u8> = (0u8..64).collect();
        let mut copy = raw.clone();
        let c = Calldata::new(&raw);
        let s = Scratch::new(&mut copy);

        assert_eq!(c.decode_word_at(7), word::decode_word_at(&raw, 7));
        assert_eq!(s.decode_word_at(7), word::decode_word_at(&raw, 7));
        assert_eq!(c.decode_selector_at(60), s.decode_selector_at(60));
        assert_eq!(c.decode_tail_at(40).unwrap(), s.decode_tail_at(40).unwrap());
        assert_eq!(
            c.decode_identifier_and_tail().unwrap(),
            s.decode_identifier_and_tail().unwrap()
        );
        assert!(raw[..].decode_word_exact().is_err());
        assert!(raw[..32].decode_bool_exact().unwrap());
    }
}
