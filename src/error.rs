//! Error type for the feature pipeline.
//!
//! Every error is fatal for a run: the batch aborts at the first one and any
//! partially written output file is left in place.

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Input could not be opened or output could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The CSV layer failed to parse a record or write a row.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A data row did not have exactly the (identifier, description) pair.
    #[error("Malformed record at line {line}: expected 2 fields, found {fields}")]
    MalformedRecord { line: u64, fields: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
