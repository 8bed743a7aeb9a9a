//! SMC Calling Convention function identifier decoding.

use regdec_fields::{DecodedField, FieldSpec, Radix, Result, check_width, lookup, parse_value};
use tracing::debug;

use crate::{RegisterKind, RegisterView};

pub const CALL_TYPE: FieldSpec = FieldSpec::bit("Call Type", 31);
pub const CALL_CONVENTION: FieldSpec = FieldSpec::bit("Call Convention", 30);
pub const SERVICE_CALL: FieldSpec = FieldSpec::new("Service Call", 29, 24);
pub const MBZ: FieldSpec = FieldSpec::bit("MBZ", 23);
pub const RESERVED: FieldSpec = FieldSpec::new("RES0", 22, 17);
pub const SVE_HINT: FieldSpec = FieldSpec::bit("SVE Hint", 16);
pub const FUNCTION_NUMBER: FieldSpec = FieldSpec::new("Function Number", 15, 0);

pub const LAYOUT: [FieldSpec; 7] = [
    CALL_TYPE,
    CALL_CONVENTION,
    SERVICE_CALL,
    MBZ,
    RESERVED,
    SVE_HINT,
    FUNCTION_NUMBER,
];

pub const CALL_TYPES: &[(u8, &str)] = &[(0, "Yielding Call"), (1, "Fast Call")];

pub const SERVICE_OWNERS: &[(u8, &str)] = &[
    (0x00, "Arm Architecture Calls"),
    (0x01, "CPU Service Calls"),
    (0x02, "SiP (Silicon Partner) Service Calls"),
    (0x03, "OEM Service Calls"),
    (0x04, "Standard Service Calls"),
    (0x05, "Standard Hypervisor Service Calls"),
    (0x06, "Vendor Specific Hypervisor Service Calls"),
    (0x07, "Vendor Specific EL3 Monitor Calls"),
    (0x08, "Vendor Specific Secure Platform Service Calls"),
];

pub const MBZ_WARNING: &str = "Bit 23 (MBZ) is set but must be zero";

#[must_use]
pub const fn call_type_name(fast: bool) -> &'static str {
    if fast { "Fast Call" } else { "Yielding Call" }
}

#[must_use]
pub const fn call_type_description(fast: bool) -> &'static str {
    if fast {
        "Fast Call - returns quickly without context switch"
    } else {
        "Yielding Call - may perform context switch"
    }
}

#[must_use]
pub const fn convention_name(smc64: bool) -> &'static str {
    if smc64 {
        "SMC64/HVC64 (64-bit)"
    } else {
        "SMC32/HVC32 (32-bit)"
    }
}

#[must_use]
pub const fn convention_description(smc64: bool) -> &'static str {
    if smc64 {
        "64-bit calling convention - uses 64-bit registers"
    } else {
        "32-bit calling convention - uses 32-bit registers"
    }
}

/// Service owner name.
///
/// Exact entries win, then the trusted application (0x30-0x31) and
/// trusted OS (0x32-0x3F) ranges, then an "Unknown Service" fallback.
#[must_use]
pub fn service_owner_name(owner: u8) -> String {
    if let Some(name) = lookup(SERVICE_OWNERS, owner) {
        return name.to_string();
    }
    match owner {
        0x30..=0x31 => "Trusted Application Calls".to_string(),
        0x32..=0x3F => "Trusted OS Calls".to_string(),
        _ => format!("Unknown Service (0x{owner:X})"),
    }
}

/// A decoded SMCCC function identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SmcccDecoding {
    raw: u32,
    fast: bool,
    smc64: bool,
    owner: u8,
    mbz: bool,
    sve_hint: bool,
    function: u16,
}

#[allow(clippy::cast_possible_truncation)]
impl SmcccDecoding {
    /// Decode a 32-bit function identifier.
    #[must_use]
    pub fn new(raw: u32) -> Self {
        let value = u64::from(raw);
        let decoded = Self {
            raw,
            fast: CALL_TYPE.extract(value) != 0,
            smc64: CALL_CONVENTION.extract(value) != 0,
            owner: SERVICE_CALL.extract(value) as u8,
            mbz: MBZ.extract(value) != 0,
            sve_hint: SVE_HINT.extract(value) != 0,
            function: FUNCTION_NUMBER.extract(value) as u16,
        };
        debug!(
            value = %format_args!("{raw:#010x}"),
            owner = %format_args!("{:#04x}", decoded.owner),
            function = decoded.function,
            mbz = decoded.mbz,
            "decoded SMCCC function ID"
        );
        decoded
    }

    /// Decode a function identifier value.
    ///
    /// # Errors
    ///
    /// Fails if `value` does not fit in 32 bits.
    pub fn from_value(value: u64) -> Result<Self> {
        let value = check_width(&format!("{value:#x}"), value, 32)?;
        Ok(Self::new(value as u32))
    }

    /// Parse and decode user input.
    ///
    /// # Errors
    ///
    /// Fails if the input is not a number or does not fit in 32 bits.
    pub fn parse(input: &str, radix: Radix) -> Result<Self> {
        let value = check_width(input, parse_value(input, radix)?, 32)?;
        Ok(Self::new(value as u32))
    }

    /// Fast call (bit 31 set) rather than yielding.
    #[must_use]
    pub const fn is_fast(&self) -> bool {
        self.fast
    }

    /// SMC64/HVC64 calling convention (bit 30 set).
    #[must_use]
    pub const fn is_smc64(&self) -> bool {
        self.smc64
    }

    #[must_use]
    pub const fn owner(&self) -> u8 {
        self.owner
    }

    #[must_use]
    pub const fn mbz_set(&self) -> bool {
        self.mbz
    }

    /// SVE live state hint (SMCCC v1.3): caller has no live SVE state.
    #[must_use]
    pub const fn sve_hint(&self) -> bool {
        self.sve_hint
    }

    #[must_use]
    pub const fn function(&self) -> u16 {
        self.function
    }

    #[must_use]
    pub fn owner_name(&self) -> String {
        service_owner_name(self.owner)
    }

    /// Compact three-line interpretation of the identifier.
    #[must_use]
    pub fn interpretation(&self) -> String {
        format!(
            "{}, {}\n{}\nFunction: 0x{:X}",
            call_type_name(self.fast),
            convention_name(self.smc64),
            self.owner_name(),
            self.function
        )
    }
}

impl RegisterView for SmcccDecoding {
    fn kind(&self) -> RegisterKind {
        RegisterKind::Smccc
    }

    fn raw(&self) -> u64 {
        u64::from(self.raw)
    }

    fn fields(&self) -> Vec<DecodedField> {
        let raw = self.raw();
        vec![
            DecodedField::new(CALL_TYPE, raw, call_type_description(self.fast)),
            DecodedField::new(CALL_CONVENTION, raw, convention_description(self.smc64)),
            DecodedField::new(SERVICE_CALL, raw, self.owner_name()),
            DecodedField::new(
                MBZ,
                raw,
                if self.mbz { "Warning: must be zero" } else { "Must be zero" },
            ),
            DecodedField::new(RESERVED, raw, "Reserved"),
            DecodedField::new(
                SVE_HINT,
                raw,
                if self.sve_hint {
                    "No live SVE state"
                } else {
                    "SVE state may be live"
                },
            ),
            DecodedField::new(FUNCTION_NUMBER, raw, format!("{}", self.function)),
        ]
    }

    fn summary(&self) -> Vec<String> {
        vec![
            format!("Call Type: {}", call_type_name(self.fast)),
            format!("Calling Convention: {}", convention_name(self.smc64)),
            format!("Service Owner: {}", self.owner_name()),
            format!(
                "Function Number: 0x{:04X} ({})",
                self.function, self.function
            ),
        ]
    }

    fn warnings(&self) -> Vec<String> {
        if self.mbz {
            vec![MBZ_WARNING.to_string()]
        } else {
            Vec::new()
        }
    }
}
