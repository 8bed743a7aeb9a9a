//! `tables` command.

use regdec::render;

use crate::cli::{EXIT_SUCCESS, TableArg};

pub fn cmd_tables(table: TableArg) -> i32 {
    print!("{}", render::render_table(table.into()));
    EXIT_SUCCESS
}
