pub(crate) use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "exchange-engine",
    author,
    version,
    about = "A currency exchange engine with exact decimal arithmetic",
    long_about = None,
    after_help = "OUTPUT:\n    Final balances are printed to stdout in CSV format.\n    Use shell redirection to save to a file:\n\n    exchange-engine instructions.csv > balances.csv"
)]
pub struct Args {
    /// Path to the input instructions CSV file
    #[arg(
        index = 1,
        value_name = "FILE",
        help = "Input CSV file with columns: type, currency, counter, limit, amount"
    )]
    pub input_file: PathBuf,
}
