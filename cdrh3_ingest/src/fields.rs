// Copyright (c) 2022 10X Genomics, Inc. All rights reserved.
//
// The fields table: the identifier and CDR-H3 columns of a sequence table, rendered as text
// with a leading row index, one row per line.  Missing values are shown as NaN.  Rows are
// later recovered from this text by the row regex in extract.rs, so the rendering must keep
// each row on one line with whitespace between columns.

use cdrh3_core::errors::{Cdrh3Error, Result};
use std::fs::OpenOptions;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

pub const MISSING: &str = "NaN";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldsTable {
    pub id_column: String,
    pub cdr3_column: String,
    pub rows: Vec<(String, String)>,
}

impl FieldsTable {
    pub fn new(id_column: &str, cdr3_column: &str) -> FieldsTable {
        FieldsTable {
            id_column: id_column.to_string(),
            cdr3_column: cdr3_column.to_string(),
            rows: Vec::new(),
        }
    }

    pub fn render(&self) -> String {
        let show = |s: &str| -> String {
            let s = s.trim();
            if s.is_empty() {
                MISSING.to_string()
            } else {
                s.replace(char::is_whitespace, "_")
            }
        };
        let iw = format!("{}", self.rows.len().saturating_sub(1)).len();
        let mut idw = self.id_column.len();
        for r in self.rows.iter() {
            idw = idw.max(show(&r.0).len());
        }
        let mut s = format!(
            "{:iw$}  {:>idw$}  {}\n",
            "",
            self.id_column,
            self.cdr3_column,
            iw = iw,
            idw = idw
        );
        for (i, r) in self.rows.iter().enumerate() {
            s += &format!(
                "{:<iw$}  {:>idw$}  {}\n",
                i,
                show(&r.0),
                show(&r.1),
                iw = iw,
                idw = idw
            );
        }
        s
    }
}

// Read the two named columns from a delimited table.  The header must contain both.

pub fn read_table_fields<R: Read>(
    reader: R,
    delimiter: u8,
    path: &Path,
    id_column: &str,
    cdr3_column: &str,
) -> Result<FieldsTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = rdr.headers().map_err(|e| Cdrh3Error::csv(path, e))?.clone();
    let find = |col: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h.trim() == col)
            .ok_or_else(|| Cdrh3Error::missing_column(path, col))
    };
    let (id_pos, cdr3_pos) = (find(id_column)?, find(cdr3_column)?);
    let mut table = FieldsTable::new(id_column, cdr3_column);
    for record in rdr.records() {
        let record = record.map_err(|e| Cdrh3Error::csv(path, e))?;
        table.rows.push((
            record.get(id_pos).unwrap_or("").to_string(),
            record.get(cdr3_pos).unwrap_or("").to_string(),
        ));
    }
    Ok(table)
}

// Write the fields file for one input file, returning the rendered table.

pub fn write_fields_file(
    out: &Path,
    file_ref: usize,
    source: &Path,
    description: &str,
    table: &FieldsTable,
) -> Result<String> {
    let rendered = table.render();
    let f = OpenOptions::new()
        .create(true)
        .append(true)
        .open(out)
        .map_err(|e| Cdrh3Error::io(out, e))?;
    let mut f = BufWriter::new(f);
    write!(
        f,
        "File_ref_#{} selected columns:\n{}\n{}\n\n{}------------\nend_file_#{}\n-------------\n",
        file_ref,
        description,
        source.display(),
        rendered,
        file_ref
    )
    .and_then(|_| f.flush())
    .map_err(|e| Cdrh3Error::io(out, e))?;
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_and_render() {
        let text = "Name,CDRH3,Isotype\nab_1,CARDYW,IGHG\nab 2,,IGHM\nab_3,CAR*W,IGHA\n";
        let t = read_table_fields(text.as_bytes(), b',', Path::new("x.csv"), "Name", "CDRH3")
            .unwrap();
        assert_eq!(t.rows.len(), 3);
        assert_eq!(t.rows[1], ("ab 2".to_string(), "".to_string()));
        let r = t.render();
        let lines = r.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "0  ab_1  CARDYW");
        assert_eq!(lines[2], "1  ab_2  NaN");
        assert_eq!(lines[3], "2  ab_3  CAR*W");
    }

    #[test]
    fn test_missing_column() {
        let text = "sequence_id\tv_call\ns1\tIGHV1-2\n";
        let path = Path::new("a.tsv");
        let e = read_table_fields(text.as_bytes(), b'\t', path, "sequence_id", "junction_aa");
        match e {
            Err(Cdrh3Error::MissingColumn { column, .. }) => assert_eq!(column, "junction_aa"),
            _ => panic!("expected a missing column error"),
        }
    }
}
