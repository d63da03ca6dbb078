// Copyright (c) 2022 10X Genomics, Inc. All rights reserved.
//
// Machine readable account of a run, written as summary.json in the output directory.

use cdrh3_core::errors::{Cdrh3Error, Result};
use serde_derive::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    Submitted,
    Subsampled,
    #[default]
    TooFew,
    Skipped, // not of the format being processed
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FileSummary {
    pub file_ref: usize,
    pub path: String,
    pub status: FileStatus,
    pub pairs: usize,      // extracted by the row regex
    pub qualifying: usize, // long enough
    pub keyed: usize,      // distinct sample ids among qualifying
    pub submitted: usize,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub bad_lines: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fasta: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl FileSummary {
    pub fn new(file_ref: usize, path: &Path) -> FileSummary {
        FileSummary {
            file_ref,
            path: path.display().to_string(),
            ..Default::default()
        }
    }

    pub fn failed(mut self, error: String) -> FileSummary {
        self.status = FileStatus::Failed;
        self.error = Some(error);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub version: String,
    pub started: String,
    pub format: String,
    pub in_dir: String,
    pub out_dir: String,
    pub files: Vec<FileSummary>,
}

impl RunSummary {
    pub fn count(&self, status: FileStatus) -> usize {
        self.files.iter().filter(|f| f.status == status).count()
    }

    pub fn sequences_submitted(&self) -> usize {
        self.files.iter().map(|f| f.submitted).sum()
    }

    pub fn write(&self, out: &Path) -> Result<()> {
        let f = File::create(out).map_err(|e| Cdrh3Error::io(out, e))?;
        let mut f = BufWriter::new(f);
        serde_json::to_writer_pretty(&mut f, self).map_err(|e| Cdrh3Error::io(out, e.into()))?;
        writeln!(f).and_then(|_| f.flush()).map_err(|e| Cdrh3Error::io(out, e))
    }

    pub fn read(path: &Path) -> Result<RunSummary> {
        let text = std::fs::read_to_string(path).map_err(|e| Cdrh3Error::io(path, e))?;
        serde_json::from_str(&text).map_err(|e| Cdrh3Error::Json {
            path: path.display().to_string(),
            line: e.line(),
            source: e,
        })
    }
}
