//! Register value parsing.
//!
//! Accepted forms, after trimming surrounding whitespace:
//! - `0x`/`0X` followed by hex digits
//! - a bare run of hex digits (hex wins, so `"123"` is `0x123`)
//! - a decimal numeral, or any string when [`Radix::Decimal`] is forced

use std::sync::LazyLock;

use regex::Regex;

use crate::{DecodeError, InvalidReason, Result};

static HEX_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]+$").expect("hex digit pattern is valid"));

static DEC_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("decimal digit pattern is valid"));

/// How to interpret a prefix-less numeral.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Radix {
    /// Hex when the digits allow it, decimal otherwise.
    #[default]
    Auto,
    /// Always base 10. A `0x` prefix is still honoured.
    Decimal,
}

/// Parse a register value from user input.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidInput`] if the trimmed input is empty,
/// contains anything other than the accepted digits, or overflows `u64`.
pub fn parse_value(input: &str, radix: Radix) -> Result<u64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DecodeError::invalid(input, InvalidReason::Empty));
    }

    let (digits, base) = if let Some(rest) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        (rest, 16)
    } else if radix == Radix::Auto && HEX_DIGITS.is_match(trimmed) {
        (trimmed, 16)
    } else {
        (trimmed, 10)
    };

    let valid = match base {
        16 => HEX_DIGITS.is_match(digits),
        _ => DEC_DIGITS.is_match(digits),
    };
    if !valid {
        return Err(DecodeError::invalid(input, InvalidReason::NotANumber));
    }

    // Digits were validated above, so the only remaining failure is overflow.
    u64::from_str_radix(digits, base)
        .map_err(|_| DecodeError::invalid(input, InvalidReason::Overflow))
}

/// Reject values with bits set above `bits`.
///
/// # Errors
///
/// Returns [`InvalidReason::TooWide`] when `value` does not fit.
pub fn check_width(input: &str, value: u64, bits: u8) -> Result<u64> {
    if bits < 64 && value >> bits != 0 {
        return Err(DecodeError::invalid(input, InvalidReason::TooWide { bits }));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auto(input: &str) -> Result<u64> {
        parse_value(input, Radix::Auto)
    }

    #[test]
    fn test_prefixed_hex() {
        assert_eq!(auto("0x96000045"), Ok(0x9600_0045));
        assert_eq!(auto("0X1e000000"), Ok(0x1E00_0000));
        assert_eq!(auto("  0x84000000\n"), Ok(0x8400_0000));
    }

    #[test]
    fn test_bare_hex_preferred() {
        assert_eq!(auto("410FD034"), Ok(0x410F_D034));
        assert_eq!(auto("123"), Ok(0x123));
        assert_eq!(auto("deadbeef"), Ok(0xDEAD_BEEF));
    }

    #[test]
    fn test_forced_decimal() {
        assert_eq!(parse_value("123", Radix::Decimal), Ok(123));
        assert_eq!(parse_value("0x10", Radix::Decimal), Ok(16));
        assert_eq!(
            parse_value("ff", Radix::Decimal).map_err(|e| e.reason()),
            Err(InvalidReason::NotANumber)
        );
    }

    #[test]
    fn test_invalid_inputs() {
        let reason = |input: &str| auto(input).map_err(|e| e.reason());
        assert_eq!(reason(""), Err(InvalidReason::Empty));
        assert_eq!(reason("   "), Err(InvalidReason::Empty));
        assert_eq!(reason("0x"), Err(InvalidReason::NotANumber));
        assert_eq!(reason("0x12zz"), Err(InvalidReason::NotANumber));
        assert_eq!(reason("-5"), Err(InvalidReason::NotANumber));
        assert_eq!(reason("12 34"), Err(InvalidReason::NotANumber));
        assert_eq!(reason("hello"), Err(InvalidReason::NotANumber));
        assert_eq!(reason("0x1_0000_0000_0000_0000"), Err(InvalidReason::NotANumber));
        assert_eq!(reason("0x10000000000000000"), Err(InvalidReason::Overflow));
    }

    #[test]
    fn test_error_message_keeps_input() {
        let err = auto("xyz").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input \"xyz\": not a decimal or hexadecimal number"
        );
    }

    #[test]
    fn test_check_width() {
        assert_eq!(check_width("v", 0xFFFF_FFFF, 32), Ok(0xFFFF_FFFF));
        assert_eq!(
            check_width("v", 0x1_0000_0000, 32).map_err(|e| e.reason()),
            Err(InvalidReason::TooWide { bits: 32 })
        );
        assert_eq!(check_width("v", u64::MAX, 64), Ok(u64::MAX));
    }
}
