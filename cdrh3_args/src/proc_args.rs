// Copyright (c) 2022 10X Genomics, Inc. All rights reserved.

use crate::proc_args2::{is_simple_arg, is_string_arg, is_u64_arg, is_usize_arg, test_writeable};
use cdrh3_core::defs::{Cdrh3Control, InputFormat};
use cdrh3_core::get_config;
use io_utils::path_exists;
use std::env;
use string_utils::TextUtils;

// Form the combined set of arguments: those from a config file, then those implied by
// CDRH3_* environment variables, then the real command line.  Later ones win.

pub fn combined_args(args: &[String]) -> Vec<String> {
    let mut envs = Vec::<String>::new();
    for (key, value) in env::vars() {
        if key.starts_with("CDRH3_") {
            envs.push(format!("{}={}", key.after("CDRH3_"), value));
        }
    }
    envs.sort();
    let mut config_file = String::new();
    for arg in envs.iter().chain(args.iter().skip(1)) {
        if arg.starts_with("CONFIG=") {
            config_file = arg.after("CONFIG=").to_string();
        }
    }
    let mut all = Vec::<String>::new();
    all.push(args.first().cloned().unwrap_or_default());
    let mut config = Vec::<(String, String)>::new();
    if get_config(&config_file, &mut config) {
        for (key, value) in config.iter() {
            all.push(format!("{}={}", key, value));
        }
    }
    all.append(&mut envs);
    all.extend(args.iter().skip(1).cloned());
    all
}

// Process arguments.  If the format is fixed (by the binary), a FORMAT argument that disagrees
// with it is an error.

pub fn proc_args(
    ctl: &mut Cdrh3Control,
    args: &[String],
    fixed: Option<InputFormat>,
) -> Result<(), String> {
    let args = combined_args(args);

    // Determine the format first, since it sets the default directories.

    let mut format = fixed.unwrap_or(ctl.gen_opt.format);
    for arg in args.iter().skip(1) {
        if is_string_arg(arg, "FORMAT")? {
            let name = arg.after("FORMAT=");
            let f = InputFormat::from_name(name).ok_or_else(|| {
                format!(
                    "\nUnrecognized format \"{}\".  The format must be csv, json or tsv.\n",
                    name
                )
            })?;
            if let Some(fixed) = fixed {
                if f != fixed {
                    return Err(format!(
                        "\nThis program only reads {} input, but you've specified {}.\n\
                         Please use find_cdrs instead.\n",
                        fixed.label(),
                        arg
                    ));
                }
            }
            format = f;
        }
    }
    *ctl = Cdrh3Control {
        sel_opt: ctl.sel_opt.clone(),
        ..Cdrh3Control::new(format)
    };

    // Traverse arguments.

    for arg in args.iter().skip(1) {
        if arg.starts_with("FORMAT=") {
        } else if is_string_arg(arg, "IN")? {
            ctl.gen_opt.in_dir = arg.after("IN=").to_string();
        } else if is_string_arg(arg, "OUT")? {
            ctl.gen_opt.out_dir = arg.after("OUT=").to_string();
        } else if is_string_arg(arg, "CONFIG")? {
            ctl.gen_opt.config_file = arg.after("CONFIG=").to_string();
        } else if is_usize_arg(arg, "MIN_LEN")? {
            ctl.sel_opt.min_len = arg.after("MIN_LEN=").force_usize();
        } else if is_usize_arg(arg, "MIN_SEQS")? {
            ctl.sel_opt.min_seqs = arg.after("MIN_SEQS=").force_usize();
        } else if is_usize_arg(arg, "MAX_SEQS")? {
            ctl.sel_opt.max_seqs = arg.after("MAX_SEQS=").force_usize();
        } else if is_u64_arg(arg, "SEED")? {
            ctl.sel_opt.seed = arg.after("SEED=").parse::<u64>().unwrap_or_default();
        } else if is_simple_arg(arg, "PRINT_FASTA")? {
            ctl.gen_opt.print_fasta = true;
        } else {
            return Err(format!(
                "\nUnrecognized argument {}.  The arguments are\n\
                 IN=dir OUT=dir FORMAT=csv|json|tsv MIN_LEN=n MIN_SEQS=n MAX_SEQS=n SEED=n \
                 PRINT_FASTA CONFIG=file\n",
                arg
            ));
        }
    }
    check_args(ctl)
}

// Check for consistency.

fn check_args(ctl: &Cdrh3Control) -> Result<(), String> {
    let sel = &ctl.sel_opt;
    if sel.max_seqs == 0 {
        return Err("\nMAX_SEQS must be positive.\n".to_string());
    }
    if sel.min_seqs > sel.max_seqs {
        return Err(format!(
            "\nMIN_SEQS={} exceeds MAX_SEQS={}, so nothing could ever be submitted.\n",
            sel.min_seqs, sel.max_seqs
        ));
    }
    if !ctl.gen_opt.config_file.is_empty() && !path_exists(&ctl.gen_opt.config_file) {
        return Err(format!(
            "\nThe config file {} does not exist.\n",
            ctl.gen_opt.config_file
        ));
    }
    let in_dir = &ctl.gen_opt.in_dir;
    if !path_exists(in_dir) || !std::path::Path::new(in_dir).is_dir() {
        return Err(format!(
            "\nThe input directory {} does not exist or is not a directory.\n",
            in_dir
        ));
    }
    test_writeable(&ctl.gen_opt.out_dir)?;
    log::debug!("{:?}", ctl);
    Ok(())
}
