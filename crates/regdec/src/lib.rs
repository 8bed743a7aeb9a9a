//! regdec - AArch64 system register decoder
//!
//! Decodes Exception Syndrome Register values, Main ID Register values and
//! SMC Calling Convention function identifiers into named bitfields with
//! human-readable descriptions.
//!
//! # Example
//!
//! ```
//! let esr = regdec::decode_esr("0x96000045")?;
//! assert_eq!(esr.ec(), 0x25);
//!
//! let midr = regdec::decode_midr("0x410FD034")?;
//! assert_eq!(midr.part_name(), "Cortex-A53");
//! # Ok::<(), regdec::DecodeError>(())
//! ```

// Re-export from sub-crates
pub use regdec_arch::{
    AbortSyndrome, CallKind, DebugKind, EsrDecoding, IssSyndrome, MidrDecoding, RegisterKind,
    RegisterView, SmcccDecoding, SysRegAccess, TableId, esr, midr, smccc,
};
pub use regdec_fields::{
    DecodeError, DecodedField, FieldSpec, InvalidReason, Radix, coverage, parse_value,
};

mod error;
pub mod inputs;
pub mod render;

pub use error::{Error, Result};

/// Decode an ESR value from user input (hex preferred, `0x` optional).
///
/// # Errors
///
/// Returns [`DecodeError::InvalidInput`] for malformed or over-wide input.
pub fn decode_esr(input: &str) -> std::result::Result<EsrDecoding, DecodeError> {
    EsrDecoding::parse(input, Radix::Auto)
}

/// Decode a MIDR value from user input.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidInput`] for malformed or over-wide input.
pub fn decode_midr(input: &str) -> std::result::Result<MidrDecoding, DecodeError> {
    MidrDecoding::parse(input, Radix::Auto)
}

/// Decode an SMCCC function identifier from user input.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidInput`] for malformed or over-wide input.
pub fn decode_smccc(input: &str) -> std::result::Result<SmcccDecoding, DecodeError> {
    SmcccDecoding::parse(input, Radix::Auto)
}

/// Outcome of decoding one input: the decoded view or why it was rejected.
pub type Decoded = std::result::Result<Box<dyn RegisterView>, DecodeError>;

/// Decode every input as `kind`, keeping each input alongside its outcome.
#[must_use]
pub fn decode_all<'a, I>(kind: RegisterKind, inputs: I, radix: Radix) -> Vec<(String, Decoded)>
where
    I: IntoIterator<Item = &'a str>,
{
    inputs
        .into_iter()
        .map(|input| (input.to_string(), kind.parse(input, radix)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_points() {
        assert_eq!(decode_esr("0x78000000").unwrap().ec(), 0x1E);
        assert_eq!(decode_midr("0x410FD034").unwrap().revision(), 4);
        assert_eq!(decode_smccc("0x84000000").unwrap().owner(), 0x04);
    }

    #[test]
    fn test_entry_points_reject_garbage() {
        for input in ["", "0xZZ", "-1", "12.5"] {
            assert!(decode_esr(input).is_err(), "{input:?}");
            assert!(decode_midr(input).is_err(), "{input:?}");
            assert!(decode_smccc(input).is_err(), "{input:?}");
        }
    }

    #[test]
    fn test_decode_all_keeps_order() {
        let results = decode_all(RegisterKind::Midr, ["410FD034", "nope", "0x610F0220"], Radix::Auto);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].0, "410FD034");
        assert!(results[0].1.is_ok());
        assert!(results[1].1.is_err());
        assert_eq!(results[2].1.as_ref().unwrap().raw(), 0x610F_0220);
    }
}
