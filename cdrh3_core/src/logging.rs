// Copyright (c) 2022 10X Genomics, Inc. All rights reserved.
//
// Progress messages go through the log facade.  Those that belong in the permanent record of a
// run are also appended to the run log file, once one has been set.

use lazy_static::lazy_static;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

lazy_static! {
    pub static ref RUN_LOGFILE: Mutex<Option<PathBuf>> = Mutex::new(None);
}

// Initialize env_logger.  The level defaults to info and is controlled by RUST_LOG.  Calling
// this more than once (as tests do) is harmless.

pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}

pub fn set_logfile(path: &Path) {
    if let Ok(mut f) = RUN_LOGFILE.lock() {
        *f = Some(path.to_path_buf());
    }
}

pub fn clear_logfile() {
    if let Ok(mut f) = RUN_LOGFILE.lock() {
        *f = None;
    }
}

pub fn logme(s: &str) {
    log::info!("{}", s);
    let path = match RUN_LOGFILE.lock() {
        Ok(f) => f.clone(),
        Err(_) => None,
    };
    if let Some(path) = path {
        let appended = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .and_then(|mut file| writeln!(file, "{}", s));
        if let Err(e) = appended {
            log::warn!("could not append to {}: {}", path.display(), e);
        }
    }
}
