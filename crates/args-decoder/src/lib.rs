//! # args-decoder — bounds-checked call-argument decoding
//!
//! Extracts fixed-layout values from word-aligned byte buffers on the
//! dispatch path, without a generic ABI decode pass:
//!
//! * **Words** — 32-byte big-endian `U256`, either as the whole buffer
//!   (`decode_word_exact`) or at an offset inside a larger one
//!   (`decode_word_at`)
//! * **Booleans** — a whole-buffer Word tested for nonzero
//! * **Selectors** — 4-byte dispatch identifiers at an offset
//! * **Addresses** — 20-byte routing targets, split from their payload
//! * **Tails** — borrowed suffixes from an offset to the end
//!
//! ## Length rules
//!
//! | Operation | Succeeds iff |
//! |-----------|--------------|
//! | `decode_word_exact`, `decode_bool_exact` | `len == 32` |
//! | `decode_word_at(o)` | `len >= o + 32` |
//! | `decode_selector_at(o)` | `len >= o + 4` |
//! | `decode_address_at(o)` | `len >= o + 20` |
//! | `decode_tail_at(o)` | `o <= len` |
//! | `decode_identifier_and_tail` | `len >= 20` |
//!
//! Every failure is [`DecodeError::IncorrectDataLength`] and happens before
//! any byte is read. Offset sums are overflow-checked.
//!
//! Input (`Calldata`) and scratch (`Scratch`) regions both implement
//! [`ByteSource`], so the same rules apply to either.

pub mod address;
pub mod bounds;
pub mod error;
pub mod ext;
pub mod metrics;
pub mod selector;
pub mod source;
pub mod tail;
pub mod word;

pub use crate::address::{decode_address_at, decode_identifier_and_tail, Address};
pub use crate::bounds::{ADDRESS_LEN, SELECTOR_LEN, WORD_LEN};
pub use crate::error::{DecodeError, ParseHexError, Result};
pub use crate::ext::ArgumentsDecoder;
pub use crate::selector::{decode_selector, decode_selector_at, Selector};
pub use crate::source::{ByteSource, Calldata, Scratch};
pub use crate::tail::decode_tail_at;
pub use crate::word::{decode_bool_exact, decode_word, decode_word_at, decode_word_exact, Word};

pub use primitive_types::U256;
