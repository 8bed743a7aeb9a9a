//! Catalogue of the static lookup tables, for listing them.

use std::fmt;

use crate::{esr, midr, smccc};

/// Identifies one lookup table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TableId {
    ExceptionClass,
    FaultStatus,
    Implementer,
    Architecture,
    Part,
    ServiceOwner,
    CallType,
    AccessType,
    SyncErrorType,
    AccessSize,
}

impl TableId {
    pub const ALL: [Self; 10] = [
        Self::ExceptionClass,
        Self::FaultStatus,
        Self::Implementer,
        Self::Architecture,
        Self::Part,
        Self::ServiceOwner,
        Self::CallType,
        Self::AccessType,
        Self::SyncErrorType,
        Self::AccessSize,
    ];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::ExceptionClass => "ESR Exception Class (EC)",
            Self::FaultStatus => "ESR Fault Status Code (DFSC/IFSC)",
            Self::Implementer => "MIDR Implementer",
            Self::Architecture => "MIDR Architecture",
            Self::Part => "MIDR Part Number (Arm Limited)",
            Self::ServiceOwner => "SMCCC Service Owner",
            Self::CallType => "SMCCC Call Type",
            Self::AccessType => "ESR GPC Access Type",
            Self::SyncErrorType => "ESR Synchronous Error Type (SET)",
            Self::AccessSize => "ESR Syndrome Access Size (SAS)",
        }
    }

    /// Hex digits used when printing codes from this table.
    #[must_use]
    pub const fn code_digits(self) -> usize {
        match self {
            Self::Part => 3,
            Self::Architecture | Self::CallType | Self::AccessType | Self::SyncErrorType
            | Self::AccessSize => 1,
            _ => 2,
        }
    }

    /// Table rows as `(code, label)`.
    ///
    /// The service owner listing includes the trusted application and
    /// trusted OS ranges, expanded per code.
    #[must_use]
    pub fn entries(self) -> Vec<(u16, &'static str)> {
        fn widen<K: Copy + Into<u16>>(table: &[(K, &'static str)]) -> Vec<(u16, &'static str)> {
            table.iter().map(|&(code, label)| (code.into(), label)).collect()
        }

        match self {
            Self::ExceptionClass => widen(esr::tables::EXCEPTION_CLASSES),
            Self::FaultStatus => widen(esr::tables::FAULT_STATUS_CODES),
            Self::Implementer => widen(midr::IMPLEMENTERS),
            Self::Architecture => widen(midr::ARCHITECTURES),
            Self::Part => widen(midr::ARM_PARTS),
            Self::ServiceOwner => {
                let mut rows = widen(smccc::SERVICE_OWNERS);
                rows.extend((0x30..=0x31).map(|code| (code, "Trusted Application Calls")));
                rows.extend((0x32..=0x3F).map(|code| (code, "Trusted OS Calls")));
                rows
            }
            Self::CallType => widen(smccc::CALL_TYPES),
            Self::AccessType => widen(esr::tables::ACCESS_TYPES),
            Self::SyncErrorType => widen(esr::tables::SYNC_ERROR_TYPES),
            Self::AccessSize => widen(esr::tables::ACCESS_SIZES),
        }
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_sorted_and_unique() {
        for table in TableId::ALL {
            let entries = table.entries();
            assert!(!entries.is_empty(), "{table} is empty");
            assert!(
                entries.windows(2).all(|pair| pair[0].0 < pair[1].0) || table == TableId::Part,
                "{table} has unsorted or duplicate codes"
            );
        }
    }

    #[test]
    fn test_part_codes_unique() {
        let mut codes: Vec<_> = TableId::Part.entries().iter().map(|(code, _)| *code).collect();
        let len = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), len);
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(TableId::Implementer.entries().len(), 19);
        assert_eq!(TableId::Architecture.entries().len(), 8);
        assert_eq!(TableId::ServiceOwner.entries().len(), 9 + 16);
        assert_eq!(TableId::AccessSize.entries().len(), 4);
        assert_eq!(TableId::SyncErrorType.entries().len(), 4);
    }
}
