use std::path::PathBuf;

use thiserror::Error;

use crate::record::Column;

/// Reasons a single input row is rejected. Never fatal to a run.
#[derive(Error, Debug, PartialEq)]
pub enum RowError {
    #[error("row has {found} fields, expected at least 7")]
    ShortRow { found: usize },
    #[error("field `{column}` is not valid UTF-8")]
    InvalidUtf8 { column: Column },
    #[error("field `{column}` is not a number: `{value}`")]
    InvalidNumber { column: Column, value: String },
    #[error("field `{column}` is not a finite number: `{value}`")]
    NonFinite { column: Column, value: String },
    #[error("field `{column}` value `{value}` does not fit an integer")]
    OutOfRange { column: Column, value: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to open input `{}`, reason: `{}`", .path.display(), .source)]
    OpenInput { path: PathBuf, source: csv::Error },
    #[error("failed to read input, reason: `{0}`")]
    Read(#[source] csv::Error),
    #[error("failed to create output `{}`, reason: `{}`", .path.display(), .source)]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write output, reason: `{0}`")]
    Write(#[from] std::io::Error),
    #[error("failed to serialize record, reason: `{0}`")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to prompt for file paths, reason: `{0}`")]
    Prompt(#[source] std::io::Error),
    #[error("no {0} path given")]
    MissingPath(&'static str),
}
