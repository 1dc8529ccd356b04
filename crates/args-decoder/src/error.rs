// crates/args-decoder/src/error.rs

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// The one failure every decode operation can report.
///
/// Carries no payload: a caller that sees it must treat the whole buffer as
/// malformed and abort whatever produced it.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub enum DecodeError {
    #[error("incorrect data length")]
    IncorrectDataLength,
}

pub type Result<T> = core::result::Result<T, DecodeError>;

/// Failure to parse a hex-rendered `Selector` or `Address`.
///
/// Only produced by `FromStr`; decode operations never return it.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParseHexError {
    #[error("expected {expected} hex nibbles, got {got}")]
    WrongLength { expected: usize, got: usize },
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
}
