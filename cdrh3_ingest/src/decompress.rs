// Copyright (c) 2022 10X Genomics, Inc. All rights reserved.

use cdrh3_core::defs::is_gzipped;
use cdrh3_core::errors::{Cdrh3Error, Result};
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

// Open a file for reading, gunzipping it on the fly if its name ends in .gz.  OAS downloads
// are sometimes concatenations of gzip members, hence MultiGzDecoder.

pub fn open_maybe_gzipped(path: &Path) -> Result<Box<dyn BufRead>> {
    let f = File::open(path).map_err(|e| Cdrh3Error::io(path, e))?;
    if is_gzipped(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(f))))
    } else {
        Ok(Box::new(BufReader::new(f)))
    }
}

// Read all lines.  A corrupt gzip stream surfaces here as an io error.  Invalid UTF-8 is
// replaced rather than rejected.

pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let mut bytes = Vec::<u8>::new();
    open_maybe_gzipped(path)?
        .read_to_end(&mut bytes)
        .map_err(|e| Cdrh3Error::io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes)
        .lines()
        .map(|s| s.to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn test_read_lines_gz_and_plain() {
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("a.csv");
        std::fs::write(&plain, "x,y\r\n1,2\n").unwrap();
        assert_eq!(read_lines(&plain).unwrap(), vec!["x,y", "1,2"]);
        let gz = dir.path().join("a.csv.gz");
        let mut e = GzEncoder::new(File::create(&gz).unwrap(), Compression::default());
        e.write_all(b"x,y\n3,4\n").unwrap();
        e.finish().unwrap();
        assert_eq!(read_lines(&gz).unwrap(), vec!["x,y", "3,4"]);
    }

    #[test]
    fn test_corrupt_gzip_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let gz = dir.path().join("bad.json.gz");
        std::fs::write(&gz, b"this is not gzip").unwrap();
        assert!(matches!(read_lines(&gz), Err(Cdrh3Error::Io { .. })));
    }
}
