//! Main ID Register (MIDR_EL1) decoding.

use regdec_fields::{DecodedField, FieldSpec, Radix, Result, check_width, lookup, parse_value};
use tracing::debug;

use crate::{RegisterKind, RegisterView};

pub const IMPLEMENTER: FieldSpec = FieldSpec::new("Implementer", 31, 24);
pub const VARIANT: FieldSpec = FieldSpec::new("Variant", 23, 20);
pub const ARCHITECTURE: FieldSpec = FieldSpec::new("Architecture", 19, 16);
pub const PART_NUM: FieldSpec = FieldSpec::new("PartNum", 15, 4);
pub const REVISION: FieldSpec = FieldSpec::new("Revision", 3, 0);

pub const LAYOUT: [FieldSpec; 5] = [IMPLEMENTER, VARIANT, ARCHITECTURE, PART_NUM, REVISION];

pub const IMPLEMENTER_ARM: u8 = 0x41;

/// Label for part numbers outside the Arm table or from other implementers.
pub const UNKNOWN_PART: &str = "Unknown";

pub const IMPLEMENTERS: &[(u8, &str)] = &[
    (0x00, "Reserved for software use"),
    (0x41, "Arm Limited"),
    (0x42, "Broadcom Corporation"),
    (0x43, "Cavium Inc."),
    (0x44, "Digital Equipment Corporation"),
    (0x46, "Fujitsu Ltd."),
    (0x49, "Infineon Technologies AG"),
    (0x4D, "Motorola/Freescale Semiconductor Inc."),
    (0x4E, "NVIDIA Corporation"),
    (0x50, "Applied Micro Circuits Corporation"),
    (0x51, "Qualcomm Inc."),
    (0x53, "Samsung Electronics Co., Ltd."),
    (0x56, "Marvell International Ltd."),
    (0x61, "Apple Inc."),
    (0x66, "Faraday Technology Corporation"),
    (0x69, "Intel Corporation"),
    (0x6D, "Microsoft Corporation"),
    (0xC0, "Ampere Computing"),
    (0xFE, "Phytium Technology Co., Ltd."),
];

pub const ARCHITECTURES: &[(u8, &str)] = &[
    (0x1, "Armv4"),
    (0x2, "Armv4T"),
    (0x3, "Armv5 (obsolete)"),
    (0x4, "Armv5T"),
    (0x5, "Armv5TE"),
    (0x6, "Armv5TEJ"),
    (0x7, "Armv6"),
    (0xF, "Architectural features defined by CPUID scheme"),
];

/// Arm Limited part numbers. Only meaningful when the implementer is 0x41.
pub const ARM_PARTS: &[(u16, &str)] = &[
    // Cortex-A
    (0xC05, "Cortex-A5"),
    (0xC07, "Cortex-A7"),
    (0xC08, "Cortex-A8"),
    (0xC09, "Cortex-A9"),
    (0xC0D, "Cortex-A12"),
    (0xC0F, "Cortex-A15"),
    (0xC0E, "Cortex-A17"),
    (0xD01, "Cortex-A32"),
    (0xD03, "Cortex-A53"),
    (0xD04, "Cortex-A35"),
    (0xD05, "Cortex-A55"),
    (0xD06, "Cortex-A65"),
    (0xD07, "Cortex-A57"),
    (0xD08, "Cortex-A72"),
    (0xD09, "Cortex-A73"),
    (0xD0A, "Cortex-A75"),
    (0xD0B, "Cortex-A76"),
    (0xD0C, "Neoverse-N1"),
    (0xD0D, "Cortex-A77"),
    (0xD0E, "Cortex-A76AE"),
    // Cortex-R and Cortex-M
    (0xD13, "Cortex-R52"),
    (0xD20, "Cortex-M23"),
    (0xD21, "Cortex-M33"),
    // Neoverse, Cortex-X and later Cortex-A
    (0xD40, "Neoverse-V1"),
    (0xD41, "Cortex-A78"),
    (0xD42, "Cortex-A78AE"),
    (0xD43, "Cortex-A65AE"),
    (0xD44, "Cortex-X1"),
    (0xD46, "Cortex-A510"),
    (0xD47, "Cortex-A710"),
    (0xD48, "Cortex-X2"),
    (0xD49, "Neoverse-N2"),
    (0xD4A, "Neoverse-E1"),
    (0xD4B, "Cortex-A78C"),
    (0xD4C, "Cortex-X1C"),
    (0xD4D, "Cortex-A715"),
    (0xD4E, "Cortex-X3"),
    (0xD4F, "Neoverse-V2"),
    (0xD80, "Cortex-A520"),
    (0xD81, "Cortex-A720"),
    (0xD82, "Cortex-X4"),
    (0xD84, "Neoverse-V3"),
    (0xD85, "Cortex-X925"),
    (0xD87, "Neoverse-N3"),
];

#[must_use]
pub fn implementer_name(implementer: u8) -> String {
    lookup(IMPLEMENTERS, implementer).map_or_else(
        || format!("Unknown (0x{implementer:X})"),
        str::to_string,
    )
}

#[must_use]
pub fn architecture_name(architecture: u8) -> String {
    lookup(ARCHITECTURES, architecture).map_or_else(
        || format!("Unknown (0x{architecture:X})"),
        str::to_string,
    )
}

/// Part name, scoped to the implementer.
///
/// Part numbers are assigned per implementer, so only Arm Limited codes
/// are resolved. Any other implementer yields [`UNKNOWN_PART`] even when
/// the number matches a known Arm part.
#[must_use]
pub fn part_name(implementer: u8, part: u16) -> &'static str {
    if implementer != IMPLEMENTER_ARM {
        return UNKNOWN_PART;
    }
    lookup(ARM_PARTS, part).unwrap_or(UNKNOWN_PART)
}

/// A decoded MIDR value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MidrDecoding {
    raw: u32,
    implementer: u8,
    variant: u8,
    architecture: u8,
    part: u16,
    revision: u8,
}

#[allow(clippy::cast_possible_truncation)]
impl MidrDecoding {
    /// Decode a 32-bit register value.
    #[must_use]
    pub fn new(raw: u32) -> Self {
        let value = u64::from(raw);
        let decoded = Self {
            raw,
            implementer: IMPLEMENTER.extract(value) as u8,
            variant: VARIANT.extract(value) as u8,
            architecture: ARCHITECTURE.extract(value) as u8,
            part: PART_NUM.extract(value) as u16,
            revision: REVISION.extract(value) as u8,
        };
        debug!(
            value = %format_args!("{raw:#010x}"),
            implementer = %format_args!("{:#04x}", decoded.implementer),
            part = %format_args!("{:#05x}", decoded.part),
            "decoded MIDR"
        );
        decoded
    }

    /// Decode a register value.
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

    #[must_use]
    pub const fn implementer(&self) -> u8 {
        self.implementer
    }

    #[must_use]
    pub const fn variant(&self) -> u8 {
        self.variant
    }

    #[must_use]
    pub const fn architecture(&self) -> u8 {
        self.architecture
    }

    #[must_use]
    pub const fn part(&self) -> u16 {
        self.part
    }

    #[must_use]
    pub const fn revision(&self) -> u8 {
        self.revision
    }

    #[must_use]
    pub fn implementer_name(&self) -> String {
        implementer_name(self.implementer)
    }

    #[must_use]
    pub fn architecture_name(&self) -> String {
        architecture_name(self.architecture)
    }

    #[must_use]
    pub fn part_name(&self) -> &'static str {
        part_name(self.implementer, self.part)
    }

    /// Processor identification lines.
    ///
    /// A recognised Arm part renders as `"Arm Limited Cortex-A53 r0p4"`.
    /// Otherwise the implementer name is followed by the raw part,
    /// variant and revision.
    #[must_use]
    pub fn identification(&self) -> Vec<String> {
        let implementer = self.implementer_name();
        let part = self.part_name();
        if part == UNKNOWN_PART {
            vec![
                implementer,
                format!(
                    "Part: 0x{:X}, Variant: r{}, Revision: p{}",
                    self.part, self.variant, self.revision
                ),
            ]
        } else {
            vec![format!(
                "{implementer} {part} r{}p{}",
                self.variant, self.revision
            )]
        }
    }
}

impl RegisterView for MidrDecoding {
    fn kind(&self) -> RegisterKind {
        RegisterKind::Midr
    }

    fn raw(&self) -> u64 {
        u64::from(self.raw)
    }

    fn fields(&self) -> Vec<DecodedField> {
        let raw = self.raw();
        vec![
            DecodedField::new(IMPLEMENTER, raw, self.implementer_name()),
            DecodedField::new(VARIANT, raw, format!("r{}", self.variant)),
            DecodedField::new(ARCHITECTURE, raw, self.architecture_name()),
            DecodedField::new(PART_NUM, raw, self.part_name()),
            DecodedField::new(REVISION, raw, format!("p{}", self.revision)),
        ]
    }

    fn summary(&self) -> Vec<String> {
        let mut lines = self.identification();
        lines.push(format!("Architecture: {}", self.architecture_name()));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regdec_fields::{InvalidReason, coverage};

    #[test]
    fn test_layout_covers_register() {
        assert_eq!(coverage(&LAYOUT), Some(0xFFFF_FFFF));
    }

    #[test]
    fn test_cortex_a53() {
        let midr = MidrDecoding::parse("0x410FD034", Radix::Auto).unwrap();
        assert_eq!(midr.implementer(), 0x41);
        assert_eq!(midr.implementer_name(), "Arm Limited");
        assert_eq!(midr.part(), 0xD03);
        assert_eq!(midr.part_name(), "Cortex-A53");
        assert_eq!(midr.variant(), 0);
        assert_eq!(midr.revision(), 4);
        assert_eq!(midr.architecture(), 0xF);
        assert_eq!(
            midr.summary(),
            vec![
                "Arm Limited Cortex-A53 r0p4".to_string(),
                "Architecture: Architectural features defined by CPUID scheme".to_string(),
            ]
        );
    }

    #[test]
    fn test_part_lookup_is_implementer_scoped() {
        // Apple implementer with a part number that is Cortex-A53 for Arm.
        let midr = MidrDecoding::new(0x610F_D034);
        assert_eq!(midr.implementer_name(), "Apple Inc.");
        assert_eq!(midr.part_name(), UNKNOWN_PART);
        for part in [0x000u16, 0x022, 0xD03, 0xD0C, 0xFFF] {
            assert_eq!(part_name(0x61, part), UNKNOWN_PART);
        }
        assert_eq!(
            midr.identification(),
            vec![
                "Apple Inc.".to_string(),
                "Part: 0xD03, Variant: r0, Revision: p4".to_string(),
            ]
        );
    }

    #[test]
    fn test_unrecognised_arm_part() {
        let midr = MidrDecoding::new(0x412F_FFF1);
        assert_eq!(midr.part_name(), UNKNOWN_PART);
        assert_eq!(
            midr.identification(),
            vec![
                "Arm Limited".to_string(),
                "Part: 0xFFF, Variant: r2, Revision: p1".to_string(),
            ]
        );
    }

    #[test]
    fn test_unknown_implementer_and_architecture() {
        let midr = MidrDecoding::new(0x2A30_0000);
        assert_eq!(midr.implementer_name(), "Unknown (0x2A)");
        assert_eq!(midr.architecture_name(), "Unknown (0x0)");
        assert_eq!(midr.fields()[0].description, "Unknown (0x2A)");
    }

    #[test]
    fn test_neoverse_n1_fields() {
        let midr = MidrDecoding::new(0x413F_D0C1);
        let fields = midr.fields();
        let names: Vec<_> = fields.iter().map(DecodedField::name).collect();
        assert_eq!(
            names,
            ["Implementer", "Variant", "Architecture", "PartNum", "Revision"]
        );
        assert_eq!(fields[1].description, "r3");
        assert_eq!(fields[3].description, "Neoverse-N1");
        assert_eq!(fields[3].hex(), "0xD0C");
        assert_eq!(fields[4].description, "p1");
        assert_eq!(midr.summary()[0], "Arm Limited Neoverse-N1 r3p1");
    }

    #[test]
    fn test_rejects_wide_values() {
        let err = MidrDecoding::parse("0x1410FD034", Radix::Auto).unwrap_err();
        assert_eq!(err.reason(), InvalidReason::TooWide { bits: 32 });
        assert!(MidrDecoding::from_value(0xFFFF_FFFF).is_ok());
    }
}
