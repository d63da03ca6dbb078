// Copyright (c) 2022 10X Genomics, Inc. All rights reserved.
//
// Everything after the pairs are extracted: choosing what goes to MEME, and writing it out.

pub mod fasta;
pub mod report;
pub mod select;
pub mod summary;
