//! Command implementations.

mod decode;
mod tables;

use crate::cli::{Cli, Commands};

/// Dispatch CLI command to the appropriate handler.
pub fn run_command(cli: &Cli) -> i32 {
    match &cli.command {
        Commands::Tables { table } => tables::cmd_tables(*table),
        command => match command.decode() {
            Some((kind, args)) => decode::cmd_decode(kind, args, cli.silent),
            None => unreachable!("decode command variant mismatch"),
        },
    }
}
