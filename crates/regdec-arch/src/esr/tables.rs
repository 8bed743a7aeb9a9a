//! ESR lookup tables: exception classes, fault status codes and the small
//! enumerations used inside the ISS.

/// Exception Class descriptions, keyed by EC.
pub const EXCEPTION_CLASSES: &[(u8, &str)] = &[
    (0x00, "Unknown reason"),
    (0x01, "Trapped WFI or WFE instruction"),
    (0x03, "Trapped MCR or MRC access (coproc=0b1111)"),
    (0x04, "Trapped MCRR or MRRC access (coproc=0b1111)"),
    (0x05, "Trapped MCR or MRC access (coproc=0b1110)"),
    (0x06, "Trapped LDC or STC access"),
    (0x07, "Trapped access to SVE, Advanced SIMD or FP"),
    (0x0C, "Trapped MRRC access (coproc=0b1110)"),
    (0x0E, "Illegal Execution state"),
    (0x11, "SVC instruction execution in AArch32"),
    (0x12, "HVC instruction execution in AArch32"),
    (0x13, "SMC instruction execution in AArch32"),
    (0x15, "SVC instruction execution in AArch64"),
    (0x16, "HVC instruction execution in AArch64"),
    (0x17, "SMC instruction execution in AArch64"),
    (0x18, "Trapped MSR, MRS or System instruction"),
    (0x19, "Trapped access to SVE"),
    (0x1E, "Granule Protection Check (RME)"),
    (0x1F, "Implementation defined exception (EL3)"),
    (0x20, "Instruction Abort from a lower Exception level"),
    (0x21, "Instruction Abort taken without a change in Exception level"),
    (0x22, "PC alignment fault"),
    (0x24, "Data Abort from a lower Exception level"),
    (0x25, "Data Abort taken without a change in Exception level"),
    (0x26, "SP alignment fault"),
    (0x28, "Trapped floating-point exception (AArch32)"),
    (0x2C, "Trapped floating-point exception (AArch64)"),
    (0x2F, "SError interrupt"),
    (0x30, "Breakpoint exception from a lower Exception level"),
    (0x31, "Breakpoint exception taken without a change in Exception level"),
    (0x32, "Software Step exception from a lower Exception level"),
    (0x33, "Software Step exception taken without a change in Exception level"),
    (0x34, "Watchpoint exception from a lower Exception level"),
    (0x35, "Watchpoint exception taken without a change in Exception level"),
    (0x38, "BKPT instruction execution (AArch32)"),
    (0x3A, "Vector Catch exception (AArch32)"),
    (0x3C, "BRK instruction execution (AArch64)"),
];

/// Fault Status Code descriptions (DFSC/IFSC), keyed by the 6-bit code.
pub const FAULT_STATUS_CODES: &[(u8, &str)] = &[
    (0x00, "Address size fault, level 0"),
    (0x01, "Address size fault, level 1"),
    (0x02, "Address size fault, level 2"),
    (0x03, "Address size fault, level 3"),
    (0x04, "Translation fault, level 0"),
    (0x05, "Translation fault, level 1"),
    (0x06, "Translation fault, level 2"),
    (0x07, "Translation fault, level 3"),
    (0x08, "Access flag fault, level 0"),
    (0x09, "Access flag fault, level 1"),
    (0x0A, "Access flag fault, level 2"),
    (0x0B, "Access flag fault, level 3"),
    (0x0C, "Permission fault, level 0"),
    (0x0D, "Permission fault, level 1"),
    (0x0E, "Permission fault, level 2"),
    (0x0F, "Permission fault, level 3"),
    (0x10, "Synchronous External abort, not on translation table walk"),
    (0x11, "Synchronous Tag Check Fault"),
    (0x12, "Synchronous External abort on translation table walk, level -2"),
    (0x13, "Synchronous External abort on translation table walk, level -1"),
    (0x14, "Synchronous External abort on translation table walk, level 0"),
    (0x15, "Synchronous External abort on translation table walk, level 1"),
    (0x16, "Synchronous External abort on translation table walk, level 2"),
    (0x17, "Synchronous External abort on translation table walk, level 3"),
    (0x18, "Synchronous parity or ECC error on memory access, not on translation table walk"),
    (0x1B, "Synchronous parity or ECC error on memory access on translation table walk, level -1"),
    (0x1C, "Synchronous parity or ECC error on memory access on translation table walk, level 0"),
    (0x1D, "Synchronous parity or ECC error on memory access on translation table walk, level 1"),
    (0x1E, "Synchronous parity or ECC error on memory access on translation table walk, level 2"),
    (0x1F, "Synchronous parity or ECC error on memory access on translation table walk, level 3"),
    (0x21, "Alignment fault"),
    (0x23, "Granule Protection Fault on translation table walk, level -1"),
    (0x24, "Granule Protection Fault on translation table walk, level 0"),
    (0x25, "Granule Protection Fault on translation table walk, level 1"),
    (0x26, "Granule Protection Fault on translation table walk, level 2"),
    (0x27, "Granule Protection Fault on translation table walk, level 3"),
    (0x28, "Granule Protection Fault, not on translation table walk"),
    (0x29, "Address size fault, level -1"),
    (0x2B, "Translation fault, level -1"),
    (0x30, "TLB conflict abort"),
    (0x31, "Unsupported atomic hardware update fault"),
    (0x33, "IMPLEMENTATION DEFINED fault (Lockdown)"),
    (0x34, "IMPLEMENTATION DEFINED fault (Unsupported Exclusive or Atomic access)"),
    (0x35, "IMPLEMENTATION DEFINED fault"),
    (0x36, "IMPLEMENTATION DEFINED fault"),
    (0x37, "IMPLEMENTATION DEFINED fault"),
    (0x38, "IMPLEMENTATION DEFINED fault"),
    (0x39, "IMPLEMENTATION DEFINED fault"),
    (0x3A, "IMPLEMENTATION DEFINED fault"),
    (0x3B, "IMPLEMENTATION DEFINED fault"),
    (0x3C, "IMPLEMENTATION DEFINED fault"),
    (0x3D, "IMPLEMENTATION DEFINED fault"),
    (0x3E, "IMPLEMENTATION DEFINED fault"),
    (0x3F, "IMPLEMENTATION DEFINED fault"),
];

/// Syndrome Access Size.
pub const ACCESS_SIZES: &[(u8, &str)] = &[
    (0, "Byte"),
    (1, "Halfword"),
    (2, "Word"),
    (3, "Doubleword"),
];

/// Synchronous Error Type.
pub const SYNC_ERROR_TYPES: &[(u8, &str)] = &[
    (0, "Recoverable state (UER)"),
    (1, "Uncontainable (UC)"),
    (2, "Restartable state (UEO)"),
    (3, "Unrecoverable state (UEU)"),
];

/// Granule protection check access type.
pub const ACCESS_TYPES: &[(u8, &str)] = &[
    (0, "Read"),
    (1, "Write"),
    (2, "Execute"),
];
