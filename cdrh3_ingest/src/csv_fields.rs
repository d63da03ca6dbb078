// Copyright (c) 2022 10X Genomics, Inc. All rights reserved.
//
// CSV input.  Observed Antibody Space files start with one line of sample metadata (a JSON
// object stuffed into a single quoted CSV cell), followed by the real header.  Older plain CSV
// files have only a header, with different column names.

use crate::decompress::open_maybe_gzipped;
use crate::dump::append_text;
use crate::fields::{read_table_fields, FieldsTable};
use cdrh3_core::errors::{Cdrh3Error, Result};
use itertools::Itertools;
use std::io::{BufRead, Cursor, Read};
use std::path::Path;

pub const OAS_ID_COLUMN: &str = "sequence_id";
pub const OAS_CDR3_COLUMN: &str = "cdr3_aa";
pub const PLAIN_ID_COLUMN: &str = "Name";
pub const PLAIN_CDR3_COLUMN: &str = "CDRH3";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CsvInput {
    pub metadata: Option<String>,
    pub table: FieldsTable,
}

fn split_csv_line(line: &str) -> Vec<String> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());
    match rdr.records().next() {
        Some(Ok(rec)) => rec.iter().map(|s| s.trim().to_string()).collect(),
        _ => Vec::new(),
    }
}

// Which pair of columns does a header line name, if any?

fn columns_of(header: &str) -> Option<(&'static str, &'static str)> {
    let fields = split_csv_line(header);
    let has = |c: &str| fields.iter().any(|f| f == c);
    if has(OAS_ID_COLUMN) && has(OAS_CDR3_COLUMN) {
        Some((OAS_ID_COLUMN, OAS_CDR3_COLUMN))
    } else if has(PLAIN_ID_COLUMN) && has(PLAIN_CDR3_COLUMN) {
        Some((PLAIN_ID_COLUMN, PLAIN_CDR3_COLUMN))
    } else {
        None
    }
}

// Render a metadata line.  If its cells join up to a JSON object, pretty print it.

pub fn render_metadata(line: &str) -> String {
    let joined = split_csv_line(line).iter().join(",");
    match serde_json::from_str::<serde_json::Value>(&joined) {
        Ok(v) if v.is_object() => serde_json::to_string_pretty(&v).unwrap_or(joined),
        _ => joined,
    }
}

pub fn read_csv_input(path: &Path) -> Result<CsvInput> {
    let mut reader = open_maybe_gzipped(path)?;
    let mut first = String::new();
    reader
        .read_line(&mut first)
        .map_err(|e| Cdrh3Error::io(path, e))?;
    if let Some((id, cdr3)) = columns_of(first.trim_end()) {
        let table = read_table_fields(Cursor::new(first).chain(reader), b',', path, id, cdr3)?;
        return Ok(CsvInput {
            metadata: None,
            table,
        });
    }

    // The first line is metadata; the next must be the header.

    let mut header = String::new();
    reader
        .read_line(&mut header)
        .map_err(|e| Cdrh3Error::io(path, e))?;
    let (id, cdr3) = match columns_of(header.trim_end()) {
        Some(cols) => cols,
        None => (OAS_ID_COLUMN, OAS_CDR3_COLUMN),
    };
    let table = read_table_fields(Cursor::new(header).chain(reader), b',', path, id, cdr3)?;
    Ok(CsvInput {
        metadata: Some(render_metadata(first.trim_end())),
        table,
    })
}

pub fn write_csv_metadata(
    out: &Path,
    file_ref: usize,
    source: &Path,
    metadata: &str,
) -> Result<()> {
    append_text(
        out,
        &format!(
            "File_ref_#{} Patient metadata:\n{}\n\n{}\n-------------\n\n\
             end_metadata_file_#{}\n\n-------------\n",
            file_ref,
            source.display(),
            metadata,
            file_ref
        ),
    )
}
