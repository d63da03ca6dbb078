// Copyright (c) 2022 10X Genomics, Inc. All rights reserved.

use cdrh3_core::errors::{Cdrh3Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// List the absolute paths of all files under a directory, recursively.  Entries within a
// directory are visited in file name order so that file reference numbers are stable from run
// to run.

pub fn list_filepaths(directory: &Path) -> Result<Vec<PathBuf>> {
    let root = directory
        .canonicalize()
        .map_err(|e| Cdrh3Error::io(directory, e))?;
    let mut paths = Vec::<PathBuf>::new();
    for entry in WalkDir::new(&root).sort_by_file_name() {
        let entry = entry.map_err(|e| Cdrh3Error::Walk {
            path: root.display().to_string(),
            source: e,
        })?;
        if entry.file_type().is_file() {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_filepaths() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("b/inner")).unwrap();
        std::fs::write(dir.path().join("c.csv"), "").unwrap();
        std::fs::write(dir.path().join("a.csv.gz"), "").unwrap();
        std::fs::write(dir.path().join("b/inner/z.csv"), "").unwrap();
        let paths = list_filepaths(dir.path()).unwrap();
        let names = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["a.csv.gz", "z.csv", "c.csv"]);
        assert!(paths.iter().all(|p| p.is_absolute()));
    }

    #[test]
    fn test_missing_directory() {
        assert!(list_filepaths(Path::new("/nonexistent/cdrh3/data")).is_err());
    }
}
