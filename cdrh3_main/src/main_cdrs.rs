// Copyright (c) 2022 10X Genomics, Inc. All rights reserved.
//
// A run: parse arguments, lay out the results directory, then process every file under the
// input directory in turn.  A file that cannot be processed is recorded as failed and the run
// goes on.

use crate::process_file::process_file;
use cdrh3_args::proc_args::proc_args;
use cdrh3_core::defs::{Cdrh3Control, InputFormat};
use cdrh3_core::layout::ResultsLayout;
use cdrh3_core::logging::{clear_logfile, init_logging, logme, set_logfile};
use cdrh3_core::version_string;
use cdrh3_ingest::discover::list_filepaths;
use cdrh3_tail::summary::{FileStatus, FileSummary, RunSummary};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::Path;

pub fn main_cdrs(args: &[String], fixed: Option<InputFormat>) -> Result<RunSummary, String> {
    init_logging();
    let mut ctl = Cdrh3Control::default();
    proc_args(&mut ctl, args, fixed)?;
    let layout = ResultsLayout::new(&ctl.gen_opt.out_dir, ctl.gen_opt.format);
    layout.create_dirs().map_err(|e| format!("\n{}\n", e))?;
    set_logfile(&layout.logfile());
    let res = run(&ctl, &layout);
    clear_logfile();
    res
}

fn run(ctl: &Cdrh3Control, layout: &ResultsLayout) -> Result<RunSummary, String> {
    let started = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    logme(&format!(
        "\n{} run started {}, version {} : {}",
        ctl.gen_opt.format.label(),
        started,
        env!("CARGO_PKG_VERSION"),
        version_string()
    ));
    logme(&format!("reading {}", ctl.gen_opt.in_dir));
    logme(&format!("writing {}", layout.root.display()));
    let paths = list_filepaths(Path::new(&ctl.gen_opt.in_dir)).map_err(|e| format!("\n{}\n", e))?;
    let mut run = RunSummary {
        version: version_string(),
        started,
        format: ctl.gen_opt.format.name().to_string(),
        in_dir: ctl.gen_opt.in_dir.clone(),
        out_dir: ctl.gen_opt.out_dir.clone(),
        files: Vec::new(),
    };

    // One generator for the whole run, so a given seed and input give the same FASTA files.

    let mut rng = ChaCha8Rng::seed_from_u64(ctl.sel_opt.seed);
    for (i, path) in paths.iter().enumerate() {
        let file_ref = i + 1;
        let summary = match process_file(ctl, layout, file_ref, path, &mut rng) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("failed to process file #{}: {}", file_ref, e);
                FileSummary::new(file_ref, path).failed(e.to_string())
            }
        };
        run.files.push(summary);
    }
    run.write(&layout.summary())
        .map_err(|e| format!("\n{}\n", e))?;
    logme(&format!(
        "{} files: {} submitted, {} subsampled, {} with too few sequences, {} skipped, {} failed",
        run.files.len(),
        run.count(FileStatus::Submitted),
        run.count(FileStatus::Subsampled),
        run.count(FileStatus::TooFew),
        run.count(FileStatus::Skipped),
        run.count(FileStatus::Failed)
    ));
    logme(&format!(
        "{} sequences submitted to MEME",
        run.sequences_submitted()
    ));
    Ok(run)
}
