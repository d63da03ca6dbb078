// Copyright (c) 2022 10X Genomics, Inc. All rights reserved.

use cdrh3_core::defs::Pair;
use cdrh3_core::errors::{Cdrh3Error, Result};
use io_utils::fwriteln;
use std::io::Write;
use std::path::Path;
use string_utils::strme;

// Generate FASTA text, one record per pair, named by sample id.

pub fn fasta_bytes(records: &[Pair]) -> Vec<u8> {
    let mut logx = Vec::<u8>::new();
    for p in records.iter() {
        fwriteln!(logx, ">{}", p.sample_id);
        fwriteln!(logx, "{}", p.cdr3);
    }
    logx
}

pub fn write_fasta(records: &[Pair], out: &Path) -> Result<()> {
    std::fs::write(out, fasta_bytes(records)).map_err(|e| Cdrh3Error::io(out, e))
}

// The same records as a string, for echoing to the terminal.

pub fn fasta_text(records: &[Pair]) -> String {
    strme(&fasta_bytes(records)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_fasta() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("fasta_csv#1.fa");
        let records = vec![Pair::new("SRR1.1", "CARDYYGMDVW"), Pair::new("SRR1.7", "CTTGGYFDYW")];
        write_fasta(&records, &out).unwrap();
        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            ">SRR1.1\nCARDYYGMDVW\n>SRR1.7\nCTTGGYFDYW\n"
        );
        assert_eq!(fasta_text(&[]), "");
    }
}
