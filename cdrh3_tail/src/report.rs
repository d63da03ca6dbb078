// Copyright (c) 2022 10X Genomics, Inc. All rights reserved.
//
// Text reports written alongside the FASTA files.

use crate::select::Submission;
use cdrh3_core::defs::Pair;
use itertools::Itertools;
use std::path::Path;

fn dictionary(records: &[Pair]) -> String {
    let w = records.iter().map(|p| p.sample_id.len()).max().unwrap_or(0);
    records
        .iter()
        .map(|p| format!("    {:<w$}  {}", p.sample_id, p.cdr3, w = w))
        .join("\n")
}

// The CDR-H3 report for one file: the submitted dictionary, or a note that there were too few
// sequences.

pub fn cdrh3_report(sub: &Submission) -> String {
    match sub {
        Submission::TooFew { .. } => "\nToo few sequences for submission to MEME\n\n".to_string(),
        Submission::All(records) => format!(
            "\nSUBMIT TO MEME:\n\nDictionary (n = {})\n{}\n\nAs FASTA file.\n\n",
            records.len(),
            dictionary(records)
        ),
        Submission::Subsampled { from, kept } => format!(
            "\nSince number of sequences was {}\nthe dictionary is reduced: {} randomly selected \
             sequences\n\nSUBMIT TO MEME:\n\nDictionary (n = {})\n{}\n\nAs FASTA file.\n\n",
            from,
            kept.len(),
            kept.len(),
            dictionary(kept)
        ),
    }
}

// For archives, every qualifying sequence is also listed as it is found.

pub fn meme_seqs(qualifying: &[Pair]) -> String {
    let mut s = String::new();
    for p in qualifying.iter() {
        s += &format!("\n>{}\n{}\n", p.sample_id, p.cdr3);
    }
    s
}

fn bracketed<'a>(x: impl Iterator<Item = &'a String>) -> String {
    format!("[{}]", x.map(|s| format!("'{}'", s)).join(", "))
}

// The sample list for an archive: every extracted pair, then the qualifying ones.

pub fn sample_list(file_ref: usize, source: &Path, all: &[Pair], qualifying: &[Pair]) -> String {
    format!(
        "seq_file_#{}\n{}\n\nALL SAMPLE OUTPUTS:\n\nSample_id list:\n{}\n\nCDR-H3 sequence list:\n\
         {}\n\nSUBMITTED TO MEME:\n\nMEME sample list:\n{}\n\nMEME CDR-H3 list:\n{}\n\n",
        file_ref,
        source.display(),
        bracketed(all.iter().map(|p| &p.sample_id)),
        bracketed(all.iter().map(|p| &p.cdr3)),
        bracketed(qualifying.iter().map(|p| &p.sample_id)),
        bracketed(qualifying.iter().map(|p| &p.cdr3)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cdrh3_report() {
        assert_eq!(
            cdrh3_report(&Submission::TooFew { n: 2 }),
            "\nToo few sequences for submission to MEME\n\n"
        );
        let r = cdrh3_report(&Submission::All(vec![
            Pair::new("a", "CARDYYGMDVW"),
            Pair::new("bb", "CTTGGYFDYW"),
        ]));
        assert!(r.starts_with("\nSUBMIT TO MEME:\n\nDictionary (n = 2)\n    a   CARDYYGMDVW\n"));
        assert!(r.contains("    bb  CTTGGYFDYW\n\nAs FASTA file."));
        let r = cdrh3_report(&Submission::Subsampled {
            from: 50_000,
            kept: vec![Pair::new("a", "CARDYYGMDVW")],
        });
        assert!(r.contains("Since number of sequences was 50000"));
    }

    #[test]
    fn test_sample_list() {
        let all = vec![Pair::new("IR-1", "CARDW"), Pair::new("IR-2", "CARDYYGMDV")];
        let s = sample_list(3, Path::new("/d/a.zip"), &all, &all[1..]);
        assert!(s.starts_with("seq_file_#3\n/d/a.zip\n"));
        assert!(s.contains("Sample_id list:\n['IR-1', 'IR-2']"));
        assert!(s.contains("MEME CDR-H3 list:\n['CARDYYGMDV']"));
        assert_eq!(meme_seqs(&all[1..]), "\n>IR-2\nCARDYYGMDV\n");
    }
}
