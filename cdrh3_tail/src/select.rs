// Copyright (c) 2022 10X Genomics, Inc. All rights reserved.
//
// Choose the sequences submitted to MEME.

use cdrh3_core::defs::{Pair, SelectionOpt};
use rand::Rng;
use std::collections::HashMap;

// Keep pairs whose CDR-H3 is long enough to hold a motif.

pub fn qualify(pairs: &[Pair], min_len: usize) -> Vec<Pair> {
    pairs
        .iter()
        .filter(|p| p.cdr3.len() >= min_len)
        .cloned()
        .collect()
}

// Key pairs by sample id.  A repeated sample id keeps the position at which it was first seen,
// but takes the sequence seen last.

pub fn key_by_sample(pairs: Vec<Pair>) -> Vec<Pair> {
    let mut keyed = Vec::<Pair>::new();
    let mut index = HashMap::<String, usize>::new();
    for p in pairs {
        match index.get(&p.sample_id) {
            Some(&i) => keyed[i].cdr3 = p.cdr3,
            None => {
                index.insert(p.sample_id.clone(), keyed.len());
                keyed.push(p);
            }
        }
    }
    keyed
}

// ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓

#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    TooFew { n: usize },
    All(Vec<Pair>),
    Subsampled { from: usize, kept: Vec<Pair> },
}

impl Submission {
    /// The records to submit, empty if there are too few.
    pub fn records(&self) -> &[Pair] {
        match self {
            Submission::TooFew { .. } => &[],
            Submission::All(x) => x,
            Submission::Subsampled { kept, .. } => kept,
        }
    }

    pub fn is_submitted(&self) -> bool {
        !matches!(self, Submission::TooFew { .. })
    }
}

// Apply the size policy to keyed pairs.  Too small a set is not submitted, a set within the
// cap goes in whole, and a larger one is cut to a uniform random sample of exactly the cap.

pub fn choose_submission<R: Rng>(keyed: Vec<Pair>, sel: &SelectionOpt, rng: &mut R) -> Submission {
    let n = keyed.len();
    if n < sel.min_seqs {
        Submission::TooFew { n }
    } else if n <= sel.max_seqs {
        Submission::All(keyed)
    } else {
        let chosen = sample_indices(n, sel.max_seqs, rng);
        let mut kept = Vec::<Pair>::with_capacity(chosen.len());
        let mut keyed = keyed.into_iter().map(Some).collect::<Vec<_>>();
        for i in chosen {
            if let Some(p) = keyed[i].take() {
                kept.push(p);
            }
        }
        Submission::Subsampled { from: n, kept }
    }
}

// Reservoir sampling: k distinct indices from 0..n, returned in increasing order.

fn sample_indices<R: Rng>(n: usize, k: usize, rng: &mut R) -> Vec<usize> {
    let mut reservoir = (0..k.min(n)).collect::<Vec<usize>>();
    for i in k..n {
        let j = rng.gen_range(0..=i);
        if j < k {
            reservoir[j] = i;
        }
    }
    reservoir.sort_unstable();
    reservoir
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_trace::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn pairs(n: usize) -> Vec<Pair> {
        (0..n)
            .map(|i| Pair::new(&format!("s{}", i), "CARDYYGMDVW"))
            .collect()
    }

    #[test]
    fn test_qualify() {
        let p = vec![
            Pair::new("a", "CARDYYW"),
            Pair::new("b", "CARDYYGW"),
            Pair::new("c", "CARDYYGMDVW"),
        ];
        let q = qualify(&p, 8);
        assert_eq!(q, vec![p[1].clone(), p[2].clone()]);
    }

    #[test]
    fn test_key_by_sample() {
        let p = vec![
            Pair::new("a", "CARDYYGMW"),
            Pair::new("b", "CTTGGYFDW"),
            Pair::new("a", "CAKDRGWFDW"),
        ];
        assert_eq!(
            key_by_sample(p),
            vec![Pair::new("a", "CAKDRGWFDW"), Pair::new("b", "CTTGGYFDW")]
        );
    }

    #[test]
    fn test_size_policy() {
        let sel = SelectionOpt::default();
        let mut rng = ChaCha8Rng::seed_from_u64(sel.seed);
        assert_eq!(
            choose_submission(pairs(4), &sel, &mut rng),
            Submission::TooFew { n: 4 }
        );
        let s = choose_submission(pairs(5), &sel, &mut rng);
        assert_eq!(s, Submission::All(pairs(5)));
        assert!(s.is_submitted());
    }

    #[test]
    fn test_subsample() {
        PrettyTrace::new().on();
        let sel = SelectionOpt {
            max_seqs: 40_000,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(sel.seed);
        let s = choose_submission(pairs(40_001), &sel, &mut rng);
        match &s {
            Submission::Subsampled { from, kept } => {
                assert_eq!(*from, 40_001);
                assert_eq!(kept.len(), 40_000);
                let ids = kept.iter().map(|p| p.sample_id.clone()).collect::<HashSet<_>>();
                assert_eq!(ids.len(), 40_000);
            }
            _ => panic!("expected a subsample"),
        }

        // Same seed, same sample, in input order.

        let sel = SelectionOpt {
            max_seqs: 10,
            ..Default::default()
        };
        let mut r1 = ChaCha8Rng::seed_from_u64(7);
        let mut r2 = ChaCha8Rng::seed_from_u64(7);
        let s1 = choose_submission(pairs(100), &sel, &mut r1);
        let s2 = choose_submission(pairs(100), &sel, &mut r2);
        assert_eq!(s1, s2);
        let pos = s1
            .records()
            .iter()
            .map(|p| p.sample_id[1..].parse::<usize>().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(pos.len(), 10);
        assert!(pos.windows(2).all(|w| w[0] < w[1]));
    }
}
