// Copyright (c) 2022 10X Genomics, Inc. All rights reserved.

use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Cdrh3Error {
    #[error("could not access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse csv in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("could not parse json in {path} at line {line}: {source}")]
    Json {
        path: String,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not read zip archive {path}: {source}")]
    Zip {
        path: String,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("could not traverse {path}: {source}")]
    Walk {
        path: String,
        #[source]
        source: walkdir::Error,
    },

    #[error("{path} has no column named \"{column}\"")]
    MissingColumn { path: String, column: String },
}

pub type Result<T> = std::result::Result<T, Cdrh3Error>;

impl Cdrh3Error {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Cdrh3Error {
        Cdrh3Error::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    pub fn csv(path: impl AsRef<Path>, source: csv::Error) -> Cdrh3Error {
        Cdrh3Error::Csv {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    pub fn zip(path: impl AsRef<Path>, source: zip::result::ZipError) -> Cdrh3Error {
        Cdrh3Error::Zip {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    pub fn missing_column(path: impl AsRef<Path>, column: &str) -> Cdrh3Error {
        Cdrh3Error::MissingColumn {
            path: path.as_ref().display().to_string(),
            column: column.to_string(),
        }
    }
}
