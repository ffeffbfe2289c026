//! Tamil Amount Words CLI
//!
//! Converts the amounts of a deed or loan schedule into Tamil words.
//!
//! Input is a CSV with an `id,amount` header. Output on stdout is a CSV with
//! `id,amount,words` columns, one row per input row, amounts normalized to two
//! decimal places. A negative or unparsable amount aborts the run before any
//! output is written, with the offending row number on stderr.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- deed_amounts.csv > deed_words.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;
use tamil_amount_words::{BatchConverter, Result, WordsError};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(WordsError::MissingArgument);
    }

    let input_path = &args[1];
    let file = File::open(input_path)?;
    let reader = BufReader::new(file);

    let mut converter = BatchConverter::new();
    converter.process_csv(reader)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    converter.write_output(handle)?;

    Ok(())
}
