use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{error::Error, record::Record};

/// Serialize records as JSON Lines: one object per line, in the given order.
/// The output is flushed before returning.
pub fn write_json_lines<'a, W, I>(output: W, records: I) -> Result<(), Error>
where
    W: Write,
    I: IntoIterator<Item = &'a Record>,
{
    let mut writer = BufWriter::new(output);
    for record in records {
        serde_json::to_writer(&mut writer, record).map_err(|e| {
            if e.is_io() {
                Error::Write(e.into())
            } else {
                Error::Serialize(e)
            }
        })?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write the records to it.
pub fn write_json_lines_to_path<'a, I>(path: &Path, records: I) -> Result<(), Error>
where
    I: IntoIterator<Item = &'a Record>,
{
    let file = File::create(path).map_err(|source| Error::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    write_json_lines(file, records)
}
