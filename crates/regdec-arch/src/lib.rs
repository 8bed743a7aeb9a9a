//! AArch64 system register layouts, lookup tables and decoders.
//!
//! Each register kind (ESR, MIDR, SMCCC function ID) lives in its own
//! module with its field layout and tables. All decoders are pure
//! functions over an immutable value; every lookup has a fallback label,
//! so the only failure is a malformed or over-wide input.

pub mod esr;
pub mod midr;
pub mod smccc;
mod tables;

pub use esr::{AbortSyndrome, CallKind, DebugKind, EsrDecoding, IssSyndrome, SysRegAccess};
pub use midr::MidrDecoding;
pub use smccc::SmcccDecoding;
pub use tables::TableId;

pub use regdec_fields::{DecodeError, DecodedField, FieldSpec, InvalidReason, Radix, Result};

use std::fmt;

/// Register kinds understood by the decoders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegisterKind {
    /// Exception Syndrome Register.
    Esr,
    /// Main ID Register.
    Midr,
    /// SMC Calling Convention function identifier.
    Smccc,
}

impl RegisterKind {
    pub const ALL: [Self; 3] = [Self::Esr, Self::Midr, Self::Smccc];

    /// Display name used in headers (`"ESR: 0x..."`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Esr => "ESR",
            Self::Midr => "MIDR",
            Self::Smccc => "Function ID",
        }
    }

    /// Widest accepted value in bits.
    #[must_use]
    pub const fn width(self) -> u8 {
        match self {
            Self::Esr => esr::layout::ESR_BITS,
            Self::Midr | Self::Smccc => 32,
        }
    }

    /// Decode a numeric value.
    ///
    /// # Errors
    ///
    /// Fails if `value` is wider than [`Self::width`].
    pub fn decode(self, value: u64) -> Result<Box<dyn RegisterView>> {
        Ok(match self {
            Self::Esr => Box::new(EsrDecoding::from_value(value)?),
            Self::Midr => Box::new(MidrDecoding::from_value(value)?),
            Self::Smccc => Box::new(SmcccDecoding::from_value(value)?),
        })
    }

    /// Parse and decode user input.
    ///
    /// # Errors
    ///
    /// Fails if the input is not a number or is wider than [`Self::width`].
    pub fn parse(self, input: &str, radix: Radix) -> Result<Box<dyn RegisterView>> {
        Ok(match self {
            Self::Esr => Box::new(EsrDecoding::parse(input, radix)?),
            Self::Midr => Box::new(MidrDecoding::parse(input, radix)?),
            Self::Smccc => Box::new(SmcccDecoding::parse(input, radix)?),
        })
    }
}

impl fmt::Display for RegisterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read-only view over a decoded register, independent of its kind.
///
/// Renderers (text, key/value, JSON) work purely through this trait.
pub trait RegisterView: fmt::Debug + Send + Sync {
    fn kind(&self) -> RegisterKind;

    /// The decoded value.
    fn raw(&self) -> u64;

    /// Every field, most significant first.
    fn fields(&self) -> Vec<DecodedField>;

    /// Human-readable headline lines.
    fn summary(&self) -> Vec<String>;

    /// Advisory notes. Never affects decoding.
    fn warnings(&self) -> Vec<String> {
        Vec::new()
    }

    /// Uppercase hex without prefix.
    ///
    /// Parses back to the same value under [`Radix::Auto`] only. Under
    /// [`Radix::Decimal`] the bare digits read as base 10, so prefix it
    /// with `0x` first.
    fn canonical_hex(&self) -> String {
        format!("{:X}", self.raw())
    }
}
