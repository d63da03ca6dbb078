// Copyright (c) 2022 10X Genomics, Inc. All rights reserved.

use std::path::Path;

// MEME will not look for motifs shorter than eight residues, so shorter CDR-H3s are useless.

pub const MEME_MIN_LEN: usize = 8;

// Samples with fewer sequences than this are not worth submitting.

pub const MEME_MIN_SEQS: usize = 5;

// The MEME server caps the size of a submission.

pub const MEME_MAX_SEQS: usize = 40_000;

pub const DEFAULT_SEED: u64 = 123456789;

// ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓

// The three families of downloads we know how to read.
//
// Csv:  Observed Antibody Space, .csv.gz (metadata line, then header) or plain .csv.
// Json: Observed Antibody Space JSON lines, .json.gz or .json.
// Tsv:  iReceptor Gateway .zip archives holding a .tsv AIRR table plus metadata.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputFormat {
    #[default]
    Csv,
    Json,
    Tsv,
}

impl InputFormat {
    pub fn from_name(s: &str) -> Option<InputFormat> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Some(InputFormat::Csv),
            "json" => Some(InputFormat::Json),
            "tsv" | "zip" => Some(InputFormat::Tsv),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            InputFormat::Csv => "csv",
            InputFormat::Json => "json",
            InputFormat::Tsv => "tsv",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InputFormat::Csv => "CSV",
            InputFormat::Json => "JSON",
            InputFormat::Tsv => "TSV",
        }
    }

    /// Does a discovered file belong to this format?
    pub fn accepts(&self, path: &Path) -> bool {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        match self {
            InputFormat::Csv => name.ends_with(".csv") || name.ends_with(".csv.gz"),
            InputFormat::Json => name.ends_with(".json") || name.ends_with(".json.gz"),
            InputFormat::Tsv => name.ends_with(".zip"),
        }
    }

    pub fn default_data_dir(&self) -> &'static str {
        match self {
            InputFormat::Csv => "/d/projects/u/tg001/CSV/data",
            InputFormat::Json => "/d/projects/u/tg001/JSON/data",
            InputFormat::Tsv => "/d/projects/u/tg001/TSV/data",
        }
    }

    pub fn default_results_dir(&self) -> &'static str {
        match self {
            InputFormat::Csv => "/d/projects/u/tg001/CSV/programs/5_Results",
            InputFormat::Json => "/d/projects/u/tg001/JSON/programs/5_Results",
            InputFormat::Tsv => "/d/projects/u/tg001/TSV/programs",
        }
    }
}

pub fn is_gzipped(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}

// ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓

// A sequence (or sample) identifier and its CDR-H3 amino acid sequence.

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pair {
    pub sample_id: String,
    pub cdr3: String,
}

impl Pair {
    pub fn new(sample_id: &str, cdr3: &str) -> Pair {
        Pair {
            sample_id: sample_id.to_string(),
            cdr3: cdr3.to_string(),
        }
    }
}

// ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓

// General options.

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeneralOpt {
    pub in_dir: String,
    pub out_dir: String,
    pub format: InputFormat,
    pub config_file: String,
    pub print_fasta: bool, // echo the submitted FASTA records to stdout
}

// Selection options: which sequences go to MEME.

#[derive(Clone, Debug, PartialEq)]
pub struct SelectionOpt {
    pub min_len: usize,
    pub min_seqs: usize,
    pub max_seqs: usize,
    pub seed: u64,
}

impl Default for SelectionOpt {
    fn default() -> Self {
        SelectionOpt {
            min_len: MEME_MIN_LEN,
            min_seqs: MEME_MIN_SEQS,
            max_seqs: MEME_MAX_SEQS,
            seed: DEFAULT_SEED,
        }
    }
}

// Set up control datastructure (Cdrh3Control).  This is stuff that is constant for a given
// run of find_cdrs.

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cdrh3Control {
    pub gen_opt: GeneralOpt,
    pub sel_opt: SelectionOpt,
}

impl Cdrh3Control {
    pub fn new(format: InputFormat) -> Cdrh3Control {
        let mut ctl = Cdrh3Control::default();
        ctl.gen_opt.format = format;
        ctl.gen_opt.in_dir = format.default_data_dir().to_string();
        ctl.gen_opt.out_dir = format.default_results_dir().to_string();
        ctl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts() {
        let csv = InputFormat::Csv;
        assert!(csv.accepts(Path::new("/data/SRR123_Heavy_IGHG.csv.gz")));
        assert!(csv.accepts(Path::new("/data/plain.CSV")));
        assert!(!csv.accepts(Path::new("/data/x.json.gz")));
        assert!(InputFormat::Json.accepts(Path::new("a/b/c.json")));
        assert!(InputFormat::Tsv.accepts(Path::new("airr-covid-19.zip")));
        assert!(!InputFormat::Tsv.accepts(Path::new("airr-covid-19.tsv")));
    }

    #[test]
    fn test_is_gzipped() {
        assert!(is_gzipped(Path::new("/data/a.csv.gz")));
        assert!(is_gzipped(Path::new("/data/X.CSV.GZ")));
        assert!(InputFormat::Csv.accepts(Path::new("/data/X.CSV.GZ")));
        assert!(!is_gzipped(Path::new("/data/a.csv")));
        assert!(!is_gzipped(Path::new("/data/agz")));
    }

    #[test]
    fn test_new_uses_format_defaults() {
        let ctl = Cdrh3Control::new(InputFormat::Tsv);
        assert_eq!(ctl.gen_opt.in_dir, "/d/projects/u/tg001/TSV/data");
        assert_eq!(ctl.gen_opt.out_dir, "/d/projects/u/tg001/TSV/programs");
        assert_eq!(ctl.sel_opt.max_seqs, 40_000);
        assert_eq!(InputFormat::from_name("ZIP"), Some(InputFormat::Tsv));
        assert_eq!(InputFormat::from_name("fasta"), None);
    }
}
