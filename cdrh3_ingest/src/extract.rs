// Copyright (c) 2022 10X Genomics, Inc. All rights reserved.
//
// Recover (sample id, CDR-H3) pairs from a rendered fields table.  A row qualifies if it is
// an index, an identifier without whitespace, and a sequence made only of uppercase letters.
// Anything else (headers, separators, NaN, lowercase, stop codons shown as *) is skipped
// silently.

use crate::fields::MISSING;
use cdrh3_core::defs::Pair;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CDR_ROW: Regex = Regex::new(r"^(\d+)\s+(\S+)\s+([A-Z]+)\s*$").unwrap();
}

pub fn extract_pairs(fields_text: &str) -> Vec<Pair> {
    let mut pairs = Vec::<Pair>::new();
    for line in fields_text.lines() {
        if let Some(cap) = CDR_ROW.captures(line) {
            if &cap[2] != MISSING {
                pairs.push(Pair::new(&cap[2], &cap[3]));
            }
        }
    }
    pairs
}

// An AIRR junction is the CDR3 plus the conserved flanking residues.  We cut the last two
// residues off the junction; the leading cysteine is kept.

pub fn junction_to_cdr3(junction: &str) -> Option<String> {
    if junction.len() <= 2 {
        return None;
    }
    Some(junction[..junction.len() - 2].to_string())
}

pub fn junctions_to_cdr3s(pairs: Vec<Pair>) -> Vec<Pair> {
    pairs
        .into_iter()
        .filter_map(|p| {
            junction_to_cdr3(&p.cdr3).map(|cdr3| Pair {
                sample_id: p.sample_id,
                cdr3,
            })
        })
        .collect()
}
