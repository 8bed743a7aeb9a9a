//! Bitfield primitives shared by the register decoders.
//!
//! A register layout is a list of [`FieldSpec`]s (name plus inclusive bit
//! range). Decoding a value against a layout produces [`DecodedField`]s,
//! which carry the raw field value alongside a human-readable description.
//! Input strings are turned into register values with [`parse_value`].

mod field;
mod parse;

pub use field::*;
pub use parse::*;

use thiserror::Error;

/// Why an input string was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    #[error("input is empty")]
    Empty,
    #[error("not a decimal or hexadecimal number")]
    NotANumber,
    #[error("value does not fit in 64 bits")]
    Overflow,
    #[error("value is wider than {bits} bits")]
    TooWide { bits: u8 },
}

/// Decoding errors.
///
/// There is a single failure mode: the input could not be turned into a
/// register value. Table lookups never fail, they fall back to a label.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Invalid input {input:?}: {reason}")]
    InvalidInput { input: String, reason: InvalidReason },
}

impl DecodeError {
    #[must_use]
    pub fn invalid(input: impl Into<String>, reason: InvalidReason) -> Self {
        Self::InvalidInput {
            input: input.into(),
            reason,
        }
    }

    /// The rejection reason.
    #[must_use]
    pub const fn reason(&self) -> InvalidReason {
        match self {
            Self::InvalidInput { reason, .. } => *reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;
