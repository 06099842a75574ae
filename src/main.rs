use anyhow::Result;
use std::env;

use ledger_row::data::{self, RecordArgs};
use ledger_row::ledger::record::TransactionRecord;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 5 {
        eprintln!("Usage: cargo run -- <timestamp> <amount> <description> <category>");
        std::process::exit(1);
    }

    let record = TransactionRecord::try_from(RecordArgs::from_args(args.into_iter().skip(1))?)?;
    data::export_lines(&[record], std::io::stdout())?;

    Ok(())
}
