//! Field layout descriptors and decoded field values.

use std::fmt;

/// Static descriptor for a register bitfield: name plus inclusive bit range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    pub name: &'static str,
    pub high: u8,
    pub low: u8,
}

impl FieldSpec {
    /// Field covering bits `[high:low]`.
    ///
    /// Evaluated in const context for every layout table, so a malformed
    /// range is a compile error rather than a runtime one.
    #[must_use]
    pub const fn new(name: &'static str, high: u8, low: u8) -> Self {
        assert!(high >= low, "field range is inverted");
        assert!(high < 64, "field exceeds 64 bits");
        Self { name, high, low }
    }

    /// Single-bit field.
    #[must_use]
    pub const fn bit(name: &'static str, bit: u8) -> Self {
        Self::new(name, bit, bit)
    }

    /// Field width in bits.
    #[inline]
    #[must_use]
    pub const fn width(self) -> u8 {
        self.high - self.low + 1
    }

    /// Unshifted mask (`width` low bits set).
    #[inline]
    #[must_use]
    pub const fn mask(self) -> u64 {
        if self.width() == 64 {
            u64::MAX
        } else {
            (1u64 << self.width()) - 1
        }
    }

    /// Mask positioned at the field's bits within the register.
    #[inline]
    #[must_use]
    pub const fn register_mask(self) -> u64 {
        self.mask() << self.low
    }

    /// Extract this field from a register value.
    #[inline]
    #[must_use]
    pub const fn extract(self, value: u64) -> u64 {
        (value >> self.low) & self.mask()
    }

    /// Whether the two fields share any bit.
    #[must_use]
    pub const fn overlaps(self, other: Self) -> bool {
        self.register_mask() & other.register_mask() != 0
    }

    /// Bit range label, `"31:26"` or `"25"` for single bits.
    #[must_use]
    pub fn range(self) -> String {
        if self.high == self.low {
            self.high.to_string()
        } else {
            format!("{}:{}", self.high, self.low)
        }
    }
}

/// Union of the bits covered by `specs`, or `None` if any two overlap.
#[must_use]
pub fn coverage(specs: &[FieldSpec]) -> Option<u64> {
    let mut covered = 0u64;
    for spec in specs {
        let mask = spec.register_mask();
        if covered & mask != 0 {
            return None;
        }
        covered |= mask;
    }
    Some(covered)
}

/// A field extracted from a register value, with its resolved label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedField {
    pub spec: FieldSpec,
    pub value: u64,
    pub description: String,
}

impl DecodedField {
    /// Extract `spec` from the register value `raw` and attach a label.
    #[must_use]
    pub fn new(spec: FieldSpec, raw: u64, description: impl Into<String>) -> Self {
        Self {
            spec,
            value: spec.extract(raw),
            description: description.into(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.spec.name
    }

    /// Value as a binary string, zero-padded to the field width.
    #[must_use]
    pub fn binary(&self) -> String {
        format!("{:0w$b}", self.value, w = usize::from(self.spec.width()))
    }

    /// Value as uppercase hex, zero-padded to whole nibbles of the width.
    #[must_use]
    pub fn hex(&self) -> String {
        let digits = usize::from(self.spec.width().div_ceil(4));
        format!("0x{:0w$X}", self.value, w = digits)
    }
}

impl fmt::Display for DecodedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] = {} (0b{})",
            self.spec.name,
            self.spec.range(),
            self.hex(),
            self.binary()
        )?;
        if !self.description.is_empty() {
            write!(f, " {}", self.description)?;
        }
        Ok(())
    }
}

/// Look up `code` in a static `(code, label)` table.
#[inline]
#[must_use]
pub fn lookup<K: Copy + PartialEq>(table: &[(K, &'static str)], code: K) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, label)| *label)
}
