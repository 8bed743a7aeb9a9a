//! Exception Syndrome Register (ESR_ELx) decoding.
//!
//! The register splits into EC (31:26), IL (25) and ISS (24:0), with ISS2
//! (36:32) in the extended 64-bit form. The ISS layout depends on the
//! Exception Class; [`IssSyndrome`] captures the classes with a known
//! sub-layout and falls back to the raw ISS otherwise.

pub mod layout;
pub mod tables;


use regdec_fields::{DecodedField, Radix, Result, check_width, lookup, parse_value};
use tracing::debug;

use crate::{RegisterKind, RegisterView};
use layout::*;
use tables::{ACCESS_SIZES, ACCESS_TYPES, EXCEPTION_CLASSES, FAULT_STATUS_CODES, SYNC_ERROR_TYPES};

/// EC values with the Instruction/Data Abort ISS layout.
pub const ABORT_CLASSES: [u8; 5] = [0x20, 0x21, 0x24, 0x25, 0x26];
/// EC values for SVC, HVC and SMC from AArch32 and AArch64.
pub const CALL_CLASSES: [u8; 6] = [0x11, 0x12, 0x13, 0x15, 0x16, 0x17];

pub const EC_GRANULE_PROTECTION: u8 = 0x1E;
pub const EC_SVE_FP_BTI: u8 = 0x1F;
pub const EC_SYSTEM_INSTRUCTION: u8 = 0x18;

/// Exception Class label, always prefixed with the code: `"0x25 - ..."`.
#[must_use]
pub fn ec_description(ec: u8) -> String {
    let desc = lookup(EXCEPTION_CLASSES, ec).unwrap_or("Reserved or Unknown");
    format!("0x{ec:02X} - {desc}")
}

/// Fault Status Code label.
#[must_use]
pub fn fsc_description(fsc: u8) -> &'static str {
    lookup(FAULT_STATUS_CODES, fsc).unwrap_or("Unknown Fault Status Code")
}

/// Syndrome Access Size label.
#[must_use]
pub fn sas_description(sas: u8) -> &'static str {
    lookup(ACCESS_SIZES, sas).unwrap_or("Unknown")
}

/// Synchronous Error Type label.
#[must_use]
pub fn set_description(set: u8) -> &'static str {
    lookup(SYNC_ERROR_TYPES, set).unwrap_or("Unknown")
}

/// Granule protection check access type label.
#[must_use]
pub fn access_description(access: u8) -> &'static str {
    lookup(ACCESS_TYPES, access).unwrap_or("Unknown")
}

/// Which trapping instruction produced an SVC/HVC/SMC class exception.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallKind {
    Svc,
    Hvc,
    Smc,
}

impl CallKind {
    #[must_use]
    pub const fn from_ec(ec: u8) -> Option<Self> {
        match ec {
            0x11 | 0x15 => Some(Self::Svc),
            0x12 | 0x16 => Some(Self::Hvc),
            0x13 | 0x17 => Some(Self::Smc),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Svc => "SVC (Supervisor Call)",
            Self::Hvc => "HVC (Hypervisor Call)",
            Self::Smc => "SMC (Secure Monitor Call)",
        }
    }
}

/// Debug exception category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DebugKind {
    Breakpoint,
    SoftwareStep,
    Watchpoint,
}

impl DebugKind {
    #[must_use]
    pub const fn from_ec(ec: u8) -> Option<Self> {
        match ec {
            0x30 | 0x31 => Some(Self::Breakpoint),
            0x32 | 0x33 => Some(Self::SoftwareStep),
            0x34 | 0x35 => Some(Self::Watchpoint),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Breakpoint => "Breakpoint Exception",
            Self::SoftwareStep => "Software Step Exception",
            Self::Watchpoint => "Watchpoint Exception",
        }
    }
}

/// ISS of an Instruction or Data Abort.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AbortSyndrome {
    /// Instruction Abort (IFSC) rather than Data Abort (DFSC).
    pub instruction: bool,
    pub fsc: u8,
    pub wnr: bool,
    pub s1ptw: bool,
    pub cm: bool,
    pub ea: bool,
    pub fnv: bool,
    pub set: u8,
    pub vncr: bool,
    pub ar: bool,
    pub sf: bool,
    pub srt: u8,
    pub sse: bool,
    pub sas: u8,
    pub isv: bool,
}

/// ISS of a trapped MSR, MRS or System instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SysRegAccess {
    pub op0: u8,
    pub op1: u8,
    pub crn: u8,
    pub crm: u8,
    pub op2: u8,
    pub rt: u8,
    /// Direction bit: read from the system register (MRS) when set.
    pub read: bool,
}

impl SysRegAccess {
    /// Generic system register name, `S<op0>_<op1>_C<n>_C<m>_<op2>`.
    #[must_use]
    pub fn encoding_name(&self) -> String {
        format!(
            "S{}_{}_C{}_C{}_{}",
            self.op0, self.op1, self.crn, self.crm, self.op2
        )
    }
}

/// EC-specific interpretation of the ISS.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IssSyndrome {
    Abort(AbortSyndrome),
    GranuleProtection { gpf: bool, access: u8, gpcf: u8 },
    /// Implementation-defined syndrome, reported opaquely.
    SveFpBti { syndrome: u32 },
    SystemInstruction(SysRegAccess),
    Call { kind: CallKind, imm16: u16 },
    Debug { kind: DebugKind },
    /// No sub-layout for this class.
    Raw,
}

#[allow(clippy::cast_possible_truncation)]
impl IssSyndrome {
    fn decode(ec: u8, iss: u64) -> Self {
        let flag = |spec: regdec_fields::FieldSpec| spec.extract(iss) != 0;
        let field = |spec: regdec_fields::FieldSpec| spec.extract(iss) as u8;

        if ABORT_CLASSES.contains(&ec) {
            return Self::Abort(AbortSyndrome {
                instruction: matches!(ec, 0x20 | 0x21),
                fsc: field(ABORT_DFSC),
                wnr: flag(ABORT_WNR),
                s1ptw: flag(ABORT_S1PTW),
                cm: flag(ABORT_CM),
                ea: flag(ABORT_EA),
                fnv: flag(ABORT_FNV),
                set: field(ABORT_SET),
                vncr: flag(ABORT_VNCR),
                ar: flag(ABORT_AR),
                sf: flag(ABORT_SF),
                srt: field(ABORT_SRT),
                sse: flag(ABORT_SSE),
                sas: field(ABORT_SAS),
                isv: flag(ABORT_ISV),
            });
        }
        if let Some(kind) = CallKind::from_ec(ec) {
            return Self::Call {
                kind,
                imm16: CALL_IMM16.extract(iss) as u16,
            };
        }
        if let Some(kind) = DebugKind::from_ec(ec) {
            return Self::Debug { kind };
        }
        match ec {
            EC_GRANULE_PROTECTION => Self::GranuleProtection {
                gpf: flag(GPC_GPF),
                access: field(GPC_ACCESS),
                gpcf: field(GPC_GPCF),
            },
            EC_SVE_FP_BTI => Self::SveFpBti {
                syndrome: SVE_SYNDROME.extract(iss) as u32,
            },
            EC_SYSTEM_INSTRUCTION => Self::SystemInstruction(SysRegAccess {
                op0: field(SYS_OP0),
                op1: field(SYS_OP1),
                crn: field(SYS_CRN),
                crm: field(SYS_CRM),
                op2: field(SYS_OP2),
                rt: field(SYS_RT),
                read: flag(SYS_DIRECTION),
            }),
            _ => Self::Raw,
        }
    }
}

/// A decoded ESR value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EsrDecoding {
    raw: u64,
    ec: u8,
    il: bool,
    iss: u32,
    iss2: u8,
    syndrome: IssSyndrome,
}

#[allow(clippy::cast_possible_truncation)]
impl EsrDecoding {
    /// Decode a register value.
    ///
    /// # Errors
    ///
    /// Fails if `value` has bits set above ISS2 (bit 36).
    pub fn from_value(value: u64) -> Result<Self> {
        let value = check_width(&format!("{value:#x}"), value, ESR_BITS)?;
        Ok(Self::decode(value))
    }

    /// Parse and decode user input.
    ///
    /// # Errors
    ///
    /// Fails if the input is not a number or is wider than 37 bits.
    pub fn parse(input: &str, radix: Radix) -> Result<Self> {
        let value = parse_value(input, radix)?;
        let value = check_width(input, value, ESR_BITS)?;
        Ok(Self::decode(value))
    }

    fn decode(raw: u64) -> Self {
        let ec = EC.extract(raw) as u8;
        let iss = ISS.extract(raw);
        let decoded = Self {
            raw,
            ec,
            il: IL.extract(raw) != 0,
            iss: iss as u32,
            iss2: ISS2.extract(raw) as u8,
            syndrome: IssSyndrome::decode(ec, iss),
        };
        debug!(
            value = %format_args!("{raw:#010x}"),
            ec = %format_args!("{ec:#04x}"),
            syndrome = ?decoded.syndrome,
            "decoded ESR"
        );
        decoded
    }

    #[must_use]
    pub const fn ec(&self) -> u8 {
        self.ec
    }

    /// Instruction Length: set for a 32-bit trapped instruction.
    #[must_use]
    pub const fn il(&self) -> bool {
        self.il
    }

    #[must_use]
    pub const fn iss(&self) -> u32 {
        self.iss
    }

    #[must_use]
    pub const fn iss2(&self) -> u8 {
        self.iss2
    }

    #[must_use]
    pub const fn syndrome(&self) -> &IssSyndrome {
        &self.syndrome
    }

    /// Exception Class label, `"0xNN - <description>"`.
    #[must_use]
    pub fn class_description(&self) -> String {
        ec_description(self.ec)
    }

    /// The EC-specific ISS sub-fields, most significant first.
    #[must_use]
    pub fn iss_fields(&self) -> Vec<DecodedField> {
        let raw = self.raw;
        let yes_no = |set: bool, yes: &str, no: &str| (if set { yes } else { no }).to_string();

        match self.syndrome {
            IssSyndrome::Abort(abort) => {
                // SAS, SSE, SRT and SF only hold meaningful values when ISV is set.
                let gated = |label: String| {
                    if abort.isv {
                        label
                    } else {
                        format!("{label} (not valid, ISV=0)")
                    }
                };
                let fsc_spec = if abort.instruction { ABORT_IFSC } else { ABORT_DFSC };
                vec![
                    DecodedField::new(
                        ABORT_ISV,
                        raw,
                        yes_no(abort.isv, "Syndrome valid", "No valid instruction syndrome"),
                    ),
                    DecodedField::new(ABORT_SAS, raw, gated(sas_description(abort.sas).to_string())),
                    DecodedField::new(
                        ABORT_SSE,
                        raw,
                        gated(yes_no(abort.sse, "Sign extended", "Zero extended")),
                    ),
                    DecodedField::new(ABORT_SRT, raw, gated(format!("x{}", abort.srt))),
                    DecodedField::new(
                        ABORT_SF,
                        raw,
                        gated(yes_no(abort.sf, "64-bit register", "32-bit register")),
                    ),
                    DecodedField::new(
                        ABORT_AR,
                        raw,
                        yes_no(abort.ar, "Acquire/release semantics", "No acquire/release semantics"),
                    ),
                    DecodedField::new(
                        ABORT_VNCR,
                        raw,
                        yes_no(abort.vncr, "VNCR_EL2 register access", "Not a VNCR_EL2 access"),
                    ),
                    DecodedField::new(ABORT_SET, raw, set_description(abort.set)),
                    DecodedField::new(
                        ABORT_FNV,
                        raw,
                        yes_no(abort.fnv, "FAR not valid", "FAR valid"),
                    ),
                    DecodedField::new(
                        ABORT_EA,
                        raw,
                        yes_no(abort.ea, "External abort", "Not external abort"),
                    ),
                    DecodedField::new(
                        ABORT_CM,
                        raw,
                        yes_no(abort.cm, "Cache maintenance operation", "Not cache maintenance"),
                    ),
                    DecodedField::new(
                        ABORT_S1PTW,
                        raw,
                        yes_no(abort.s1ptw, "Stage 1 translation fault", "Not a stage 1 fault"),
                    ),
                    DecodedField::new(ABORT_WNR, raw, yes_no(abort.wnr, "Write", "Read")),
                    DecodedField::new(fsc_spec, raw, fsc_description(abort.fsc)),
                ]
            }
            IssSyndrome::GranuleProtection { gpf, access, .. } => vec![
                DecodedField::new(
                    GPC_GPF,
                    raw,
                    yes_no(gpf, "Granule Protection Fault", "Not a Granule Protection Fault"),
                ),
                DecodedField::new(GPC_ACCESS, raw, access_description(access)),
                DecodedField::new(GPC_GPCF, raw, "Granule Protection Check Fault type"),
            ],
            IssSyndrome::SveFpBti { .. } => vec![DecodedField::new(
                SVE_SYNDROME,
                raw,
                "Implementation defined",
            )],
            IssSyndrome::SystemInstruction(access) => vec![
                DecodedField::new(SYS_OP0, raw, ""),
                DecodedField::new(SYS_OP2, raw, ""),
                DecodedField::new(SYS_OP1, raw, ""),
                DecodedField::new(SYS_CRN, raw, ""),
                DecodedField::new(SYS_RT, raw, format!("x{}", access.rt)),
                DecodedField::new(SYS_CRM, raw, ""),
                DecodedField::new(
                    SYS_DIRECTION,
                    raw,
                    yes_no(access.read, "Read from system register", "Write to system register"),
                ),
            ],
            IssSyndrome::Call { kind, .. } => {
                vec![DecodedField::new(CALL_IMM16, raw, kind.label())]
            }
            IssSyndrome::Debug { .. } | IssSyndrome::Raw => Vec::new(),
        }
    }
}

impl RegisterView for EsrDecoding {
    fn kind(&self) -> RegisterKind {
        RegisterKind::Esr
    }

    fn raw(&self) -> u64 {
        self.raw
    }

    fn fields(&self) -> Vec<DecodedField> {
        let mut fields = vec![
            DecodedField::new(ISS2, self.raw, "Extended syndrome"),
            DecodedField::new(EC, self.raw, self.class_description()),
            DecodedField::new(
                IL,
                self.raw,
                if self.il {
                    "32-bit instruction trapped"
                } else {
                    "16-bit instruction trapped"
                },
            ),
            DecodedField::new(ISS, self.raw, "Instruction Specific Syndrome"),
        ];
        fields.extend(self.iss_fields());
        fields
    }

    fn summary(&self) -> Vec<String> {
        let mut lines = vec![format!("Exception Class: {}", self.class_description())];
        match self.syndrome {
            IssSyndrome::Abort(abort) => {
                lines.push(format!("Fault Status Code: {}", fsc_description(abort.fsc)));
                lines.push(format!("WnR: {}", if abort.wnr { "Write" } else { "Read" }));
                lines.push(format!(
                    "S1PTW: {}",
                    if abort.s1ptw {
                        "Stage 1 translation fault"
                    } else {
                        "Not a stage 1 fault"
                    }
                ));
                lines.push(format!(
                    "FnV: {}",
                    if abort.fnv { "FAR not valid" } else { "FAR valid" }
                ));
                lines.push(format!(
                    "EA: {}",
                    if abort.ea { "External abort" } else { "Not external abort" }
                ));
                if abort.isv {
                    lines.push(format!("SAS: {}", sas_description(abort.sas)));
                    lines.push(format!(
                        "SSE: {}",
                        if abort.sse { "Sign extended" } else { "Zero extended" }
                    ));
                    lines.push(format!("SRT: x{}", abort.srt));
                    lines.push(format!(
                        "SF: {} register",
                        if abort.sf { "64-bit" } else { "32-bit" }
                    ));
                }
                lines.push(format!("SET: {}", set_description(abort.set)));
            }
            IssSyndrome::GranuleProtection { gpf, access, gpcf } => {
                lines.push(format!("Granule Protection Fault (GPF): {gpf}"));
                lines.push(format!("Granule Protection Check Fault (GPCF): 0x{gpcf:X}"));
                lines.push(format!("Access: {}", access_description(access)));
                lines.push("RME (Realm Management Extension) Granule Protection violation".into());
            }
            IssSyndrome::SveFpBti { syndrome } => {
                lines.push(format!("ISS Value: 0x{syndrome:X}"));
                lines.push("SVE, FP, or BTI abort - specific syndrome depends on implementation".into());
            }
            IssSyndrome::SystemInstruction(access) => {
                lines.push(format!(
                    "Direction: {}",
                    if access.read {
                        "Read from system register"
                    } else {
                        "Write to system register"
                    }
                ));
                lines.push(format!(
                    "Op0: {}, Op1: {}, CRn: {}, CRm: {}, Op2: {} ({})",
                    access.op0,
                    access.op1,
                    access.crn,
                    access.crm,
                    access.op2,
                    access.encoding_name()
                ));
                lines.push(format!("Rt: x{}", access.rt));
            }
            IssSyndrome::Call { kind, imm16 } => {
                lines.push(format!("Call Type: {}", kind.label()));
                lines.push(format!("Immediate Value: 0x{imm16:04X} ({imm16})"));
            }
            IssSyndrome::Debug { kind } => {
                lines.push(kind.label().to_string());
                lines.push(format!("ISS: 0x{:X}", self.iss));
            }
            IssSyndrome::Raw => {
                lines.push(format!("ISS: 0x{:07X}", self.iss));
            }
        }
        if self.iss2 != 0 {
            lines.push(format!("ISS2: 0x{:02X}", self.iss2));
        }
        lines
    }
}
