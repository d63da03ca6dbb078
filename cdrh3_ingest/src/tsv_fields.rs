// Copyright (c) 2022 10X Genomics, Inc. All rights reserved.
//
// AIRR rearrangement tables, as found in iReceptor Gateway archives.  The CDR-H3 is taken
// from the junction_aa column (see extract::junction_to_cdr3).

use crate::decompress::open_maybe_gzipped;
use crate::fields::{read_table_fields, FieldsTable};
use cdrh3_core::errors::{Cdrh3Error, Result};
use std::path::{Path, PathBuf};

pub const TSV_ID_COLUMN: &str = "sequence_id";
pub const TSV_JUNCTION_COLUMN: &str = "junction_aa";

pub fn read_tsv_fields(path: &Path) -> Result<FieldsTable> {
    let reader = open_maybe_gzipped(path)?;
    read_table_fields(reader, b'\t', path, TSV_ID_COLUMN, TSV_JUNCTION_COLUMN)
}

// Write a comma separated copy of a tab separated table, next to it, and return its path.
// Quoting is handled by the csv writer, so fields holding commas survive.

pub fn convert_tsv_to_csv(tsv: &Path) -> Result<PathBuf> {
    let csv_path = tsv.with_extension("csv");
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(open_maybe_gzipped(tsv)?);
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(&csv_path)
        .map_err(|e| Cdrh3Error::csv(&csv_path, e))?;
    for record in rdr.records() {
        let record = record.map_err(|e| Cdrh3Error::csv(tsv, e))?;
        wtr.write_record(&record)
            .map_err(|e| Cdrh3Error::csv(&csv_path, e))?;
    }
    wtr.flush().map_err(|e| Cdrh3Error::io(&csv_path, e))?;
    Ok(csv_path)
}
