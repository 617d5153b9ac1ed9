use std::path::Path;

use log::{debug, warn};

use crate::{
    error::Error,
    parser::{parse, reader_builder, Parsed, SkippedRow},
    writer::write_json_lines_to_path,
};

#[derive(Debug, PartialEq)]
pub struct Summary {
    pub written: usize,
    pub skipped: Vec<SkippedRow>,
}

/// Read and parse the whole CSV file at `path`, logging every skipped row.
pub fn read_records(path: &Path) -> Result<Parsed, Error> {
    let rdr = reader_builder()
        .from_path(path)
        .map_err(|source| Error::OpenInput {
            path: path.to_path_buf(),
            source,
        })?;

    let parsed = parse(rdr)?;
    for row in &parsed.skipped {
        warn!("Skipping invalid row: {}", row);
    }
    Ok(parsed)
}

/// Convert the CSV file at `input` into a JSON Lines file at `output`.
///
/// Nothing is written when the input cannot be opened or read.
pub fn convert(input: &Path, output: &Path) -> Result<Summary, Error> {
    let Parsed { records, skipped } = read_records(input)?;
    debug!(
        "parsed {} records, skipped {} rows",
        records.len(),
        skipped.len()
    );

    write_json_lines_to_path(output, &records)?;
    Ok(Summary {
        written: records.len(),
        skipped,
    })
}
