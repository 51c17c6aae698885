use clap::Parser;
use std::io;

use sinetable_rs::utils::consts::{MAX_TABLE_SIZE, TABLE_SIZE};
use sinetable_rs::utils::logging::init_logging;
use sinetable_rs::{format_and_print, generate_table};

/// Print a one-period sine lookup table as a packed C array.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of samples in the table
    #[arg(
        short,
        long,
        default_value_t = TABLE_SIZE as u64,
        value_parser = clap::value_parser!(u64).range(1..=MAX_TABLE_SIZE as u64)
    )]
    size: u64,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let size = usize::try_from(cli.size)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    let table = generate_table(size);
    tracing::info!("Generated sine table: {} samples", table.len());

    format_and_print(&table)
}
