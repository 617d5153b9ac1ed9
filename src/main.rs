use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process,
};

use clap::Parser;
use housing_jsonl::{converter::convert, error::Error};
use log::info;

/// Convert housing records from CSV to JSON Lines
#[derive(Parser)]
#[clap(version)]
struct Cli {
    /// CSV file to read; its first row is treated as a header
    input: Option<PathBuf>,
    /// JSON Lines file to create or overwrite
    output: Option<PathBuf>,
}

/// Ask for a path on `out` and read one line of answer from `input`.
fn prompt(
    input: &mut impl BufRead,
    out: &mut impl Write,
    what: &'static str,
) -> Result<PathBuf, Error> {
    writeln!(out, "Please enter the {} file path:", what).map_err(Error::Prompt)?;
    out.flush().map_err(Error::Prompt)?;

    let mut answer = String::new();
    input.read_line(&mut answer).map_err(Error::Prompt)?;
    match answer.trim() {
        "" => Err(Error::MissingPath(what)),
        path => Ok(PathBuf::from(path)),
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let (input, output) = match (cli.input, cli.output) {
        (Some(input), Some(output)) => (input, output),
        (input, output) => {
            let stdin = io::stdin();
            let mut stdin = stdin.lock();
            let mut stdout = io::stdout();
            writeln!(stdout, "No input arguments detected.").map_err(Error::Prompt)?;
            let input = match input {
                Some(input) => input,
                None => prompt(&mut stdin, &mut stdout, "input CSV")?,
            };
            let output = match output {
                Some(output) => output,
                None => prompt(&mut stdin, &mut stdout, "output JSON Lines")?,
            };
            (input, output)
        }
    };

    let summary = convert(&input, &output)?;
    info!(
        "Conversion complete. Output saved to {} ({} records written, {} rows skipped)",
        output.display(),
        summary.written,
        summary.skipped.len()
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use housing_jsonl::error::Error;

    use crate::prompt;

    #[test]
    fn prompt_reads_trimmed_line() {
        let mut input = "  data/housing.csv \nignored\n".as_bytes();
        let mut out = Vec::new();
        assert_eq!(
            prompt(&mut input, &mut out, "input CSV").unwrap(),
            PathBuf::from("data/housing.csv")
        );
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Please enter the input CSV file path:\n"
        );
    }

    #[test]
    fn prompt_rejects_empty_answer() {
        let mut out = Vec::new();
        assert!(matches!(
            prompt(&mut "\n".as_bytes(), &mut out, "output JSON Lines"),
            Err(Error::MissingPath("output JSON Lines"))
        ));
        // closed stdin
        assert!(matches!(
            prompt(&mut "".as_bytes(), &mut out, "input CSV"),
            Err(Error::MissingPath("input CSV"))
        ));
    }
}
