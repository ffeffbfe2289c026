//! Streaming CSV batch conversion.
//!
//! Reads `id,amount` rows and writes `id,amount,words` rows in input order.
//! Any malformed row stops the batch, since a document cannot be issued with
//! an amount that failed to convert.

use crate::amount::Amount;
use crate::error::{Result, WordsError};
use crate::words::amount_words;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// Raw input record as read from CSV.
#[derive(Debug, Deserialize)]
pub struct AmountRecord {
    /// Caller-defined identifier (document number, field name, ...)
    pub id: String,

    /// Amount, validated while the row is read
    pub amount: Amount,
}

/// A converted row ready for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertedRow {
    pub id: String,
    pub amount: Amount,
    pub words: String,
}

/// Converts every amount of a CSV input into Tamil words.
#[derive(Debug, Default)]
pub struct BatchConverter {
    rows: Vec<ConvertedRow>,
}

impl BatchConverter {
    /// Creates an empty converter.
    pub fn new() -> Self {
        BatchConverter { rows: Vec::new() }
    }

    /// Reads and converts all rows from a CSV reader.
    ///
    /// Fails on the first row that cannot be read or converted. Rows from a
    /// failed call are discarded.
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
        let mut converted = Vec::new();

        for (row_idx, result) in csv_reader.deserialize::<AmountRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            // Amount validation happens in `Amount`'s Deserialize impl, so a bad
            // amount surfaces here as a per-row CSV error.
            let record = result.map_err(|e| {
                warn!("Row {}: {}", row_num, e);
                WordsError::InvalidRecord {
                    row: row_num,
                    message: e.to_string(),
                }
            })?;

            let amount = record.amount;
            let words = amount_words(amount);
            debug!("Row {}: {} -> {}", row_num, amount, words);
            converted.push(ConvertedRow {
                id: record.id,
                amount,
                words,
            });
        }

        self.rows.extend(converted);
        Ok(())
    }

    /// Converted rows in input order.
    pub fn rows(&self) -> &[ConvertedRow] {
        &self.rows
    }

    /// Writes converted rows as CSV with an `id,amount,words` header.
    pub fn write_output<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);
        csv_writer.write_record(["id", "amount", "words"])?;

        for row in &self.rows {
            csv_writer.serialize(row)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
