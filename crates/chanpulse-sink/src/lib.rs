//! Append-only CSV sinks for normalized import output.

use thiserror::Error;

pub mod schema;
pub mod writer;

pub use writer::CsvSink;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}
