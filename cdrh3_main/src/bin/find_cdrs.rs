// Copyright (c) 2022 10X Genomics, Inc. All rights reserved.
//
// Find CDR-H3s for MEME in downloads of any supported format, chosen by FORMAT=csv|json|tsv.

use cdrh3_main::run_main;

fn main() {
    run_main(None);
}
