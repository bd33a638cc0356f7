//! CSV record source.
//!
//! Reads `ID,NODE,PARENT` tables (the label column may also be called
//! `NAME`). Fields are trimmed, extra columns are ignored and blank lines
//! are skipped. Shape problems are reported as
//! [`TreeError::MalformedShape`] with the 1-based line number; open/read
//! failures as [`TreeError::SourceUnavailable`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::builder::build;
use crate::error::{Result, TreeError};
use crate::types::{Node, Record};

/// Accepted names for the label column.
const LABEL_HEADERS: &[&str] = &["NODE", "NAME"];

/// Read records from any CSV reader.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    check_headers(reader.headers()?)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        match (row.get(0), row.get(1), row.get(2)) {
            (Some(id), Some(label), Some(parent_id)) => {
                records.push(Record::new(id, label, parent_id));
            }
            _ => {
                return Err(TreeError::MalformedShape {
                    line,
                    message: format!("expected 3 fields, found {}", row.len()),
                });
            }
        }
    }

    tracing::debug!(records = records.len(), "Read records");
    Ok(records)
}

/// Read records from a CSV file.
pub fn read_records_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| TreeError::SourceUnavailable {
        path: path.display().to_string(),
        source,
    })?;

    read_records(file).map_err(|err| match err {
        TreeError::SourceUnavailable { source, .. } => TreeError::SourceUnavailable {
            path: path.display().to_string(),
            source,
        },
        other => other,
    })
}

/// Read a CSV file and build its tree.
pub fn load_tree<P: AsRef<Path>>(path: P) -> Result<Node> {
    let records = read_records_from_path(path)?;
    build(&records)
}

fn check_headers(headers: &csv::StringRecord) -> Result<()> {
    let valid = headers.len() >= 3
        && headers.get(0) == Some("ID")
        && headers.get(1).is_some_and(|h| LABEL_HEADERS.contains(&h))
        && headers.get(2) == Some("PARENT");

    if valid {
        Ok(())
    } else {
        Err(TreeError::MalformedShape {
            line: 1,
            message: format!(
                "expected header ID,NODE,PARENT, found {}",
                headers.iter().collect::<Vec<_>>().join(",")
            ),
        })
    }
}
