// Copyright (c) 2022 10X Genomics, Inc. All rights reserved.

use cdrh3_core::defs::InputFormat;
use cdrh3_main::run_main;

fn main() {
    run_main(Some(InputFormat::Csv));
}
