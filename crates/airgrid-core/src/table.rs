//! CSV persistence for [`FlightRecord`] rows.
//!
//! Both directions open, fully consume, and close the file within one call.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use thiserror::Error;

use crate::FlightRecord;

/// Column headers, in on-disk order.
pub const TABLE_HEADER: [&str; 7] = [
    "From",
    "To",
    "Date",
    "Airline",
    "Price (INR)",
    "Duration",
    "Aircraft",
];

#[derive(Debug, Error)]
pub enum TableError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error on {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
}

impl TableError {
    fn csv(path: &Path, source: csv::Error) -> Self {
        TableError::Csv {
            path: path.display().to_string(),
            source,
        }
    }

    fn io(path: &Path, source: std::io::Error) -> Self {
        TableError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Writes `records` to `path`, replacing any existing file.
///
/// The header row is always written, even for an empty slice.
///
/// # Errors
///
/// Returns [`TableError::Io`] if the file cannot be created or flushed, or
/// [`TableError::Csv`] if a row fails to serialize.
pub fn write_records(path: &Path, records: &[FlightRecord]) -> Result<(), TableError> {
    let file = File::create(path).map_err(|e| TableError::io(path, e))?;
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

    writer
        .write_record(TABLE_HEADER)
        .map_err(|e| TableError::csv(path, e))?;
    for record in records {
        writer
            .serialize(record)
            .map_err(|e| TableError::csv(path, e))?;
    }
    writer.flush().map_err(|e| TableError::io(path, e))?;

    Ok(())
}

/// Reads every row of the table at `path`.
///
/// Columns are matched by header name, so extra columns or a different
/// column order are tolerated.
///
/// # Errors
///
/// Returns [`TableError::Io`] if the file cannot be opened, or
/// [`TableError::Csv`] if a row is missing a column or holds a value of the
/// wrong shape.
pub fn read_records(path: &Path) -> Result<Vec<FlightRecord>, TableError> {
    let file = File::open(path).map_err(|e| TableError::io(path, e))?;
    let mut reader = ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(file);

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: FlightRecord = row.map_err(|e| TableError::csv(path, e))?;
        records.push(record);
    }

    Ok(records)
}
