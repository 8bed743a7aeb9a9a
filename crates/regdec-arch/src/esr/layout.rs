//! ESR field layouts.
//!
//! Top-level fields are fixed. The ISS (bits 24:0) is reinterpreted per
//! Exception Class; ISS sub-fields are given at their register positions,
//! which coincide with ISS positions since the ISS starts at bit 0.

use regdec_fields::FieldSpec;

pub const ISS2: FieldSpec = FieldSpec::new("ISS2", 36, 32);
pub const EC: FieldSpec = FieldSpec::new("EC", 31, 26);
pub const IL: FieldSpec = FieldSpec::bit("IL", 25);
pub const ISS: FieldSpec = FieldSpec::new("ISS", 24, 0);

/// Widest ESR value accepted (EC/IL/ISS plus ISS2).
pub const ESR_BITS: u8 = 37;

/// Top-level layout, most significant first.
pub const TOP_LEVEL: [FieldSpec; 4] = [ISS2, EC, IL, ISS];

// Instruction and Data Abort.
pub const ABORT_ISV: FieldSpec = FieldSpec::bit("ISV", 24);
pub const ABORT_SAS: FieldSpec = FieldSpec::new("SAS", 23, 22);
pub const ABORT_SSE: FieldSpec = FieldSpec::bit("SSE", 21);
pub const ABORT_SRT: FieldSpec = FieldSpec::new("SRT", 20, 16);
pub const ABORT_SF: FieldSpec = FieldSpec::bit("SF", 15);
pub const ABORT_AR: FieldSpec = FieldSpec::bit("AR", 14);
pub const ABORT_VNCR: FieldSpec = FieldSpec::bit("VNCR", 13);
pub const ABORT_SET: FieldSpec = FieldSpec::new("SET", 12, 11);
pub const ABORT_FNV: FieldSpec = FieldSpec::bit("FnV", 10);
pub const ABORT_EA: FieldSpec = FieldSpec::bit("EA", 9);
pub const ABORT_CM: FieldSpec = FieldSpec::bit("CM", 8);
pub const ABORT_S1PTW: FieldSpec = FieldSpec::bit("S1PTW", 7);
pub const ABORT_WNR: FieldSpec = FieldSpec::bit("WnR", 6);
pub const ABORT_DFSC: FieldSpec = FieldSpec::new("DFSC", 5, 0);
pub const ABORT_IFSC: FieldSpec = FieldSpec::new("IFSC", 5, 0);

// Granule Protection Check.
pub const GPC_GPF: FieldSpec = FieldSpec::bit("GPF", 24);
pub const GPC_ACCESS: FieldSpec = FieldSpec::new("Access", 9, 8);
pub const GPC_GPCF: FieldSpec = FieldSpec::new("GPCF", 7, 0);

// SVE, FP or BTI.
pub const SVE_SYNDROME: FieldSpec = FieldSpec::new("Syndrome", 23, 0);

// Trapped MSR, MRS or System instruction.
pub const SYS_OP0: FieldSpec = FieldSpec::new("Op0", 21, 20);
pub const SYS_OP2: FieldSpec = FieldSpec::new("Op2", 19, 17);
pub const SYS_OP1: FieldSpec = FieldSpec::new("Op1", 16, 14);
pub const SYS_CRN: FieldSpec = FieldSpec::new("CRn", 13, 10);
pub const SYS_RT: FieldSpec = FieldSpec::new("Rt", 9, 5);
pub const SYS_CRM: FieldSpec = FieldSpec::new("CRm", 4, 1);
pub const SYS_DIRECTION: FieldSpec = FieldSpec::bit("Direction", 0);

// SVC, HVC and SMC.
pub const CALL_IMM16: FieldSpec = FieldSpec::new("imm16", 15, 0);
