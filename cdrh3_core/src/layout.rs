// Copyright (c) 2022 10X Genomics, Inc. All rights reserved.
//
// Names of everything a run writes.  The directory names are those the downstream MEME
// submission scripts already expect, so they differ between the three input formats.

use crate::defs::InputFormat;
use crate::errors::{Cdrh3Error, Result};
use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

// Where a member of an iReceptor archive is filed after extraction.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemberKind {
    Summary,  // .txt: brief sample and study metadata
    Metadata, // .json: full sample and study metadata
    Sequence, // .tsv: the AIRR sequence table
    Misc,
}

impl MemberKind {
    pub fn of(member_name: &str) -> MemberKind {
        let name = member_name.to_ascii_lowercase();
        if name.ends_with(".txt") {
            MemberKind::Summary
        } else if name.ends_with(".json") {
            MemberKind::Metadata
        } else if name.ends_with(".tsv") {
            MemberKind::Sequence
        } else {
            MemberKind::Misc
        }
    }

    fn dirs(&self) -> (&'static str, &'static str) {
        match self {
            MemberKind::Summary => ("summ_files", "summ_file"),
            MemberKind::Metadata => ("meta_files", "meta_file"),
            MemberKind::Sequence => ("seq_files", "seq_file"),
            MemberKind::Misc => ("misc_files", "unkwn_file"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ResultsLayout {
    pub root: PathBuf,
    pub format: InputFormat,
}

impl ResultsLayout {
    pub fn new(root: impl AsRef<Path>, format: InputFormat) -> ResultsLayout {
        ResultsLayout {
            root: root.as_ref().to_path_buf(),
            format,
        }
    }

    fn at(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    pub fn path_list(&self) -> PathBuf {
        match self.format {
            InputFormat::Csv => self.at("Paths/path_file.txt"),
            InputFormat::Json => self.at("Paths/paths.txt"),
            InputFormat::Tsv => self.at("1_archpaths/path_arch.txt"),
        }
    }

    pub fn contents(&self, n: usize) -> PathBuf {
        self.at(&format!("Files/file_#{}.txt", n))
    }

    pub fn metadata(&self) -> PathBuf {
        match self.format {
            InputFormat::Json => self.at("Meta/meta.txt"),
            _ => self.at("Meta/meta_file.txt"),
        }
    }

    pub fn parsed(&self, n: usize) -> PathBuf {
        self.at(&format!("Parsed/parsed_#{}.txt", n))
    }

    pub fn fields(&self, n: usize) -> PathBuf {
        match self.format {
            InputFormat::Tsv => self.at(&format!("4_regexes/fields_file_#{}.txt", n)),
            _ => self.at(&format!("Fields/fields_file_#{}.txt", n)),
        }
    }

    pub fn cdrh3_report(&self, n: usize) -> PathBuf {
        self.at(&format!("CDRH3s/cdrh3_#{}.txt", n))
    }

    pub fn fasta(&self, n: usize) -> PathBuf {
        self.at(&format!("FASTA/fasta_{}#{}.fa", self.format.name(), n))
    }

    pub fn archive_listing(&self, n: usize) -> PathBuf {
        self.at(&format!("2_archfiles/arch_files_#{}.txt", n))
    }

    pub fn member_dir(&self, kind: MemberKind, n: usize) -> PathBuf {
        let (dir, stem) = kind.dirs();
        self.at(&format!("3_filesort/{}/{}_#{}", dir, stem, n))
    }

    pub fn meme_seqs(&self, n: usize) -> PathBuf {
        self.at(&format!("4_regexes/meme_seqs_#{}.txt", n))
    }

    pub fn sample_list(&self, n: usize) -> PathBuf {
        self.at(&format!("4_regexes/samp_list_#{}.txt", n))
    }

    pub fn summary(&self) -> PathBuf {
        self.at("summary.json")
    }

    pub fn logfile(&self) -> PathBuf {
        self.at("cdrh3.log")
    }

    /// Create the fixed directories of the layout.  Per-file member directories are made
    /// when the archive is unpacked.
    pub fn create_dirs(&self) -> Result<()> {
        let mut dirs = vec![
            self.root.clone(),
            parent_of(&self.path_list()),
            parent_of(&self.fields(0)),
            parent_of(&self.cdrh3_report(0)),
            parent_of(&self.fasta(0)),
        ];
        match self.format {
            InputFormat::Csv => {
                dirs.push(parent_of(&self.contents(0)));
                dirs.push(parent_of(&self.metadata()));
            }
            InputFormat::Json => {
                dirs.push(parent_of(&self.contents(0)));
                dirs.push(parent_of(&self.metadata()));
                dirs.push(parent_of(&self.parsed(0)));
            }
            InputFormat::Tsv => {
                dirs.push(parent_of(&self.archive_listing(0)));
                dirs.push(self.at("3_filesort"));
            }
        }
        for d in dirs.iter() {
            create_dir_all(d).map_err(|e| Cdrh3Error::io(d, e))?;
        }
        Ok(())
    }
}

fn parent_of(p: &Path) -> PathBuf {
    p.parent().map(|x| x.to_path_buf()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_names() {
        let csv = ResultsLayout::new("/r", InputFormat::Csv);
        assert_eq!(csv.path_list(), PathBuf::from("/r/Paths/path_file.txt"));
        assert_eq!(csv.fasta(3), PathBuf::from("/r/FASTA/fasta_csv#3.fa"));
        assert_eq!(csv.fields(3), PathBuf::from("/r/Fields/fields_file_#3.txt"));
        let json = ResultsLayout::new("/r", InputFormat::Json);
        assert_eq!(json.metadata(), PathBuf::from("/r/Meta/meta.txt"));
        let tsv = ResultsLayout::new("/r", InputFormat::Tsv);
        assert_eq!(tsv.fields(2), PathBuf::from("/r/4_regexes/fields_file_#2.txt"));
        assert_eq!(
            tsv.member_dir(MemberKind::of("x/airr-covid-19-1.tsv"), 2),
            PathBuf::from("/r/3_filesort/seq_files/seq_file_#2")
        );
        assert_eq!(MemberKind::of("README"), MemberKind::Misc);
    }

    #[test]
    fn test_create_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let tsv = ResultsLayout::new(dir.path().join("out"), InputFormat::Tsv);
        tsv.create_dirs().unwrap();
        assert!(dir.path().join("out/1_archpaths").is_dir());
        assert!(dir.path().join("out/2_archfiles").is_dir());
        assert!(dir.path().join("out/4_regexes").is_dir());
        assert!(dir.path().join("out/FASTA").is_dir());
    }
}
