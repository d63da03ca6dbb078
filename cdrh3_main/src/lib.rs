// Copyright (c) 2022 10X Genomics, Inc. All rights reserved.

pub mod main_cdrs;
pub mod process_file;

use cdrh3_core::defs::InputFormat;
use cdrh3_core::version_string;
use pretty_trace::*;
use std::env;

// Shared entry point of the binaries.  The format is fixed by all but find_cdrs.

pub fn run_main(fixed: Option<InputFormat>) {
    PrettyTrace::new().on();
    let args: Vec<String> = env::args().collect();
    if args.len() == 2 && (args[1] == "version" || args[1] == "--version") {
        println!("{} : {}", env!("CARGO_PKG_VERSION"), version_string());
        std::process::exit(0);
    }
    let res = main_cdrs::main_cdrs(&args, fixed);
    if let Err(e) = res {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
