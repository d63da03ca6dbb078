// Copyright (c) 2022 10X Genomics, Inc. All rights reserved.
//
// Getting (sample id, CDR-H3) pairs out of downloaded files.

pub mod csv_fields;
pub mod decompress;
pub mod discover;
pub mod dump;
pub mod extract;
pub mod fields;
pub mod json_fields;
pub mod tsv_fields;
pub mod unzip;
