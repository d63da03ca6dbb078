// Copyright (c) 2022 10X Genomics, Inc. All rights reserved.
//
// The content dump: every line of the (decompressed) input, each followed by a separator,
// between a header naming the file and an end marker.

use cdrh3_core::defs::is_gzipped;
use cdrh3_core::errors::{Cdrh3Error, Result};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

// Lines no longer than this are not dumped.  For JSON lines input this drops blank lines and
// stray brackets.

pub const JSON_MIN_DUMP_LEN: usize = 3;

pub fn dump_contents(
    out: &Path,
    file_ref: usize,
    source: &Path,
    label: &str,
    lines: &[String],
    min_len: usize,
) -> Result<usize> {
    let f = OpenOptions::new()
        .create(true)
        .append(true)
        .open(out)
        .map_err(|e| Cdrh3Error::io(out, e))?;
    let mut f = BufWriter::new(f);
    let what = if is_gzipped(source) {
        format!("ungzipped {} file contents:", label)
    } else {
        format!("{} file contents:", label)
    };
    let mut dumped = 0;
    let mut write_dump = || -> std::io::Result<()> {
        writeln!(f, "\nFile_ref_#{} {}\n{}", file_ref, what, source.display())?;
        for line in lines.iter() {
            // Count the newline, as it was counted when these files were first processed.
            if line.len() + 1 > min_len {
                writeln!(f, "\n{}\n------------", line)?;
                dumped += 1;
            }
        }
        writeln!(f, "\nend_file_#{}\n\n-------------", file_ref)?;
        f.flush()
    };
    write_dump().map_err(|e| Cdrh3Error::io(out, e))?;
    Ok(dumped)
}

// Append text to a report file, creating it if need be.

pub fn append_text(out: &Path, text: &str) -> Result<()> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(out)
        .and_then(|mut f| f.write_all(text.as_bytes()))
        .map_err(|e| Cdrh3Error::io(out, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dump_contents() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("file_#2.txt");
        let lines = vec!["{\"a\": 1}".to_string(), "".to_string(), "]".to_string()];
        let n = dump_contents(&out, 2, Path::new("/d/x.json.gz"), "JSON", &lines, JSON_MIN_DUMP_LEN)
            .unwrap();
        assert_eq!(n, 1);
        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.starts_with("\nFile_ref_#2 ungzipped JSON file contents:\n/d/x.json.gz\n"));
        assert!(text.contains("\n{\"a\": 1}\n------------\n"));
        assert!(text.ends_with("\nend_file_#2\n\n-------------\n"));
        let n = dump_contents(&out, 3, Path::new("/d/y.csv"), "CSV", &lines, 0).unwrap();
        assert_eq!(n, 3);
    }
}
