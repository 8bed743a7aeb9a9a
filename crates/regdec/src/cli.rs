//! CLI definitions and argument types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use regdec::{Radix, RegisterKind, TableId};

/// Exit code for success.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code when at least one input could not be decoded.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Parser)]
#[command(name = "regdec")]
#[command(about = "AArch64 register decoder - ESR, MIDR and SMCCC function IDs")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (sets RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output (only show errors)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub silent: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default tracing directive for the chosen verbosity.
    pub const fn log_directive(&self) -> &'static str {
        if self.verbose {
            "regdec=debug"
        } else if self.silent {
            "regdec=error"
        } else {
            "regdec=warn"
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode Exception Syndrome Register values (ESR_ELx)
    Esr(DecodeArgs),
    /// Decode Main ID Register values (MIDR_EL1)
    Midr(DecodeArgs),
    /// Decode SMC Calling Convention function identifiers
    Smccc(DecodeArgs),
    /// List one of the lookup tables
    Tables {
        /// Table to list
        #[arg(value_enum)]
        table: TableArg,
    },
}

impl Commands {
    /// Register kind and arguments for the decode subcommands.
    pub const fn decode(&self) -> Option<(RegisterKind, &DecodeArgs)> {
        match self {
            Self::Esr(args) => Some((RegisterKind::Esr, args)),
            Self::Midr(args) => Some((RegisterKind::Midr, args)),
            Self::Smccc(args) => Some((RegisterKind::Smccc, args)),
            Self::Tables { .. } => None,
        }
    }
}

/// Arguments shared by the decode subcommands.
#[derive(Args)]
pub struct DecodeArgs {
    /// Register values (hex preferred, `0x` prefix optional)
    #[arg(value_name = "VALUE", required_unless_present = "file")]
    pub values: Vec<String>,

    /// Read additional values from a file, one per line
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Treat values without a `0x` prefix as decimal
    #[arg(long)]
    pub decimal: bool,

    /// Show the bit grid (text format only)
    #[arg(long)]
    pub bits: bool,
}

impl DecodeArgs {
    pub const fn radix(&self) -> Radix {
        if self.decimal {
            Radix::Decimal
        } else {
            Radix::Auto
        }
    }
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Text,
    /// Raw key-value output (for scripting)
    Raw,
    /// JSON output
    Json,
}

/// Lookup table selector.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum TableArg {
    /// ESR exception classes
    Ec,
    /// Data/instruction fault status codes
    Fsc,
    /// MIDR implementers
    Implementer,
    /// MIDR architecture codes
    Architecture,
    /// Arm Limited part numbers
    Part,
    /// SMCCC service owners
    Owner,
    /// SMCCC call types
    CallType,
    /// Syndrome access sizes
    Sas,
    /// Synchronous error types
    Set,
    /// Granule protection access types
    Access,
}

impl From<TableArg> for TableId {
    fn from(arg: TableArg) -> Self {
        match arg {
            TableArg::Ec => Self::ExceptionClass,
            TableArg::Fsc => Self::FaultStatus,
            TableArg::Implementer => Self::Implementer,
            TableArg::Architecture => Self::Architecture,
            TableArg::Part => Self::Part,
            TableArg::Owner => Self::ServiceOwner,
            TableArg::CallType => Self::CallType,
            TableArg::Sas => Self::AccessSize,
            TableArg::Set => Self::SyncErrorType,
            TableArg::Access => Self::AccessType,
        }
    }
}
