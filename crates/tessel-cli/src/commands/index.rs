//! Index command - project catalog tables into search documents.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;

use tessel_search::{SearchIndex, Table, TableIndex};

/// Arguments for the index command.
#[derive(Debug, Args)]
pub struct IndexArgs {
    /// File holding a table, a JSON array of tables, or one table per line.
    #[arg(long, short)]
    pub input: PathBuf,

    /// Where to write documents, one per line (defaults to stdout).
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Stop at the first table that cannot be projected.
    #[arg(long)]
    pub fail_fast: bool,
}

/// Outcome of an index run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexSummary {
    /// Documents written.
    pub indexed: usize,
    /// Tables skipped because projection failed.
    pub skipped: usize,
}

/// Execute the index command.
///
/// # Errors
///
/// Returns an error if input cannot be read or parsed, output cannot be
/// written, or `--fail-fast` is set and a table fails to project.
pub fn execute(args: &IndexArgs) -> Result<IndexSummary> {
    let contents = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let tables = parse_tables(&contents)
        .with_context(|| format!("failed to parse tables from {}", args.input.display()))?;

    let summary = match &args.output {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            let summary = write_documents(&tables, &mut out, args.fail_fast)?;
            out.flush()?;
            summary
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_documents(&tables, &mut out, args.fail_fast)?
        }
    };

    tracing::info!(
        indexed = summary.indexed,
        skipped = summary.skipped,
        "index run complete"
    );
    Ok(summary)
}

/// Parses a single table, a JSON array of tables, or a stream of tables.
///
/// # Errors
///
/// Returns an error if any table is malformed.
pub fn parse_tables(contents: &str) -> Result<Vec<Table>> {
    if contents.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(contents)?);
    }
    serde_json::Deserializer::from_str(contents)
        .into_iter::<Table>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(Into::into)
}

/// Projects each table and writes its document as one JSON line.
///
/// Tables that fail to project are logged and skipped unless `fail_fast`.
///
/// # Errors
///
/// Returns an error if writing fails, or on the first projection failure
/// when `fail_fast` is set.
pub fn write_documents<W: Write>(
    tables: &[Table],
    out: &mut W,
    fail_fast: bool,
) -> Result<IndexSummary> {
    let mut summary = IndexSummary::default();

    for table in tables {
        match TableIndex::new(table).build_document() {
            Ok(doc) => {
                writeln!(out, "{}", doc.to_json_line()?)?;
                summary.indexed += 1;
            }
            Err(err) if fail_fast => {
                bail!("failed to index {}: {err}", table.fully_qualified_name);
            }
            Err(err) => {
                tracing::warn!(
                    table = %table.fully_qualified_name,
                    error = %err,
                    "skipping table"
                );
                summary.skipped += 1;
            }
        }
    }

    Ok(summary)
}
