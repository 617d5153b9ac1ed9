use itertools::{Either, Itertools};
use log::debug;

use crate::{
    error::{Error, RowError},
    record::{Column, Record},
};

/// A row the parser rejected, with the input line it came from.
#[derive(thiserror::Error, Debug, PartialEq)]
#[error("line {line}: {error}")]
pub struct SkippedRow {
    pub line: u64,
    pub error: RowError,
}

/// Outcome of parsing a whole input, in input order.
#[derive(Debug, Default, PartialEq)]
pub struct Parsed {
    pub records: Vec<Record>,
    pub skipped: Vec<SkippedRow>,
}

/// Reader settings shared by every input: the first row is a header,
/// rows may vary in width and fields are trimmed.
pub fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All);
    builder
}

fn parse_real(column: Column, raw: &str) -> Result<f64, RowError> {
    let parsed = raw
        .parse::<f64>()
        .map_err(|_| RowError::InvalidNumber {
            column,
            value: raw.to_string(),
        })?;
    if !parsed.is_finite() {
        return Err(RowError::NonFinite {
            column,
            value: raw.to_string(),
        });
    }
    Ok(parsed)
}

fn parse_integer(column: Column, raw: &str) -> Result<i64, RowError> {
    let truncated = parse_real(column, raw)?.trunc();
    // i64::MAX is not representable, its f64 neighbour is 2^63
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(RowError::OutOfRange {
            column,
            value: raw.to_string(),
        });
    }
    Ok(truncated as i64)
}

/// Parse one row of fields into a [Record].
///
/// Fields past the seventh are ignored.
pub fn parse_row<'a, I>(fields: I) -> Result<Record, RowError>
where
    I: IntoIterator<Item = &'a str>,
{
    let fields: Vec<&str> = fields.into_iter().collect();
    if fields.len() < Column::ALL.len() {
        return Err(RowError::ShortRow {
            found: fields.len(),
        });
    }

    Ok(Record {
        value: parse_integer(Column::Value, fields[0])?,
        income: parse_real(Column::Income, fields[1])?,
        age: parse_real(Column::Age, fields[2])?,
        rooms: parse_integer(Column::Rooms, fields[3])?,
        bedrooms: parse_integer(Column::Bedrooms, fields[4])?,
        pop: parse_integer(Column::Pop, fields[5])?,
        hh: parse_integer(Column::Hh, fields[6])?,
    })
}

/// Decode the schema columns of a raw row and parse them.
/// Bytes past the seventh field are never decoded.
fn parse_byte_row(row: &csv::ByteRecord) -> Result<Record, RowError> {
    if row.len() < Column::ALL.len() {
        return Err(RowError::ShortRow { found: row.len() });
    }
    let fields = Column::ALL
        .iter()
        .zip(row.iter())
        .map(|(&column, raw)| {
            std::str::from_utf8(raw).map_err(|_| RowError::InvalidUtf8 { column })
        })
        .collect::<Result<Vec<&str>, _>>()?;
    parse_row(fields)
}

/// Read every data row and parse it.
///
/// An I/O failure while reading aborts the whole parse, a row that
/// cannot be converted into a [Record] ends up in [Parsed::skipped].
pub fn parse<R>(rdr: csv::Reader<R>) -> Result<Parsed, Error>
where
    R: std::io::Read,
{
    let rows = rdr
        .into_byte_records()
        .collect::<Result<Vec<_>, _>>()
        .map_err(Error::Read)?;
    debug!("read {} data rows", rows.len());

    let (records, skipped): (Vec<Record>, Vec<SkippedRow>) =
        rows.iter().partition_map(|row| match parse_byte_row(row) {
            Ok(record) => Either::Left(record),
            Err(error) => Either::Right(SkippedRow {
                line: row.position().map_or(0, |p| p.line()),
                error,
            }),
        });

    Ok(Parsed { records, skipped })
}
