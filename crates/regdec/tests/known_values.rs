//! Decodes a catalogue of register values with known breakdowns.

use libtest_mimic::{Arguments, Failed, Trial};
use regdec::{Radix, RegisterKind, RegisterView};

struct Case {
    kind: RegisterKind,
    input: &'static str,
    fields: &'static [(&'static str, u64)],
    summary: &'static [&'static str],
    warnings: usize,
}

const CASES: &[Case] = &[
    Case {
        kind: RegisterKind::Esr,
        input: "0x96000045",
        fields: &[("EC", 0x25), ("IL", 1), ("ISV", 0), ("WnR", 1), ("DFSC", 0x05)],
        summary: &[
            "Exception Class: 0x25 - Data Abort taken without a change in Exception level",
            "Fault Status Code: Translation fault, level 1",
            "WnR: Write",
        ],
        warnings: 0,
    },
    Case {
        kind: RegisterKind::Esr,
        input: "0x78000000",
        fields: &[("EC", 0x1E), ("GPF", 0), ("GPCF", 0)],
        summary: &["Granule Protection Fault (GPF): false"],
        warnings: 0,
    },
    Case {
        kind: RegisterKind::Esr,
        input: "56001234",
        fields: &[("EC", 0x15), ("IL", 1), ("imm16", 0x1234)],
        summary: &[
            "Call Type: SVC (Supervisor Call)",
            "Immediate Value: 0x1234 (4660)",
        ],
        warnings: 0,
    },
    Case {
        kind: RegisterKind::Esr,
        input: "0x1F96000045",
        fields: &[("ISS2", 0x1F), ("EC", 0x25), ("DFSC", 0x05)],
        summary: &["ISS2: 0x1F"],
        warnings: 0,
    },
    Case {
        kind: RegisterKind::Midr,
        input: "0x410FD034",
        fields: &[
            ("Implementer", 0x41),
            ("Variant", 0),
            ("Architecture", 0xF),
            ("PartNum", 0xD03),
            ("Revision", 4),
        ],
        summary: &["Arm Limited Cortex-A53 r0p4"],
        warnings: 0,
    },
    Case {
        kind: RegisterKind::Midr,
        input: "611F0221",
        fields: &[("Implementer", 0x61), ("PartNum", 0x022)],
        summary: &["Apple Inc.", "Part: 0x22, Variant: r1, Revision: p1"],
        warnings: 0,
    },
    Case {
        kind: RegisterKind::Smccc,
        input: "0x84000000",
        fields: &[
            ("Call Type", 1),
            ("Call Convention", 0),
            ("Service Call", 0x04),
            ("Function Number", 0),
        ],
        summary: &[
            "Call Type: Fast Call",
            "Calling Convention: SMC32/HVC32 (32-bit)",
            "Service Owner: Standard Service Calls",
        ],
        warnings: 0,
    },
    Case {
        kind: RegisterKind::Smccc,
        input: "0xC4000003",
        fields: &[("Call Convention", 1), ("Function Number", 3)],
        summary: &[
            "Calling Convention: SMC64/HVC64 (64-bit)",
            "Function Number: 0x0003 (3)",
        ],
        warnings: 0,
    },
    Case {
        kind: RegisterKind::Smccc,
        input: "0x84800000",
        fields: &[("MBZ", 1)],
        summary: &[],
        warnings: 1,
    },
];

fn main() {
    let args = Arguments::from_args();

    let trials = CASES
        .iter()
        .map(|case| {
            let name = format!("{}::{}", case.kind.name().to_lowercase(), case.input);
            Trial::test(name.replace(' ', "_"), move || run_case(case))
        })
        .collect();

    libtest_mimic::run(&args, trials).exit();
}

fn run_case(case: &Case) -> Result<(), Failed> {
    let view = case
        .kind
        .parse(case.input, Radix::Auto)
        .map_err(|e| Failed::from(format!("decode: {e}")))?;
    check_view(case, view.as_ref())?;

    // The canonical form decodes to the same breakdown.
    let again = case
        .kind
        .parse(&view.canonical_hex(), Radix::Auto)
        .map_err(|e| Failed::from(format!("re-decode: {e}")))?;
    if again.fields() != view.fields() {
        return Err(format!("{} does not round-trip", view.canonical_hex()).into());
    }
    Ok(())
}

fn check_view(case: &Case, view: &dyn RegisterView) -> Result<(), Failed> {
    let fields = view.fields();
    for &(name, expected) in case.fields {
        let field = fields
            .iter()
            .find(|f| f.name() == name)
            .ok_or_else(|| Failed::from(format!("missing field {name}")))?;
        if field.value != expected {
            return Err(format!("{name}: expected {expected:#x}, got {:#x}", field.value).into());
        }
    }

    let summary = view.summary();
    for line in case.summary {
        if !summary.iter().any(|l| l == line) {
            return Err(format!("summary lacks {line:?}: {summary:#?}").into());
        }
    }

    let warnings = view.warnings();
    if warnings.len() != case.warnings {
        return Err(format!("expected {} warnings, got {warnings:?}", case.warnings).into());
    }
    Ok(())
}
