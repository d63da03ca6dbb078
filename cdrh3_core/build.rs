// Copyright (c) 2022 10X Genomics, Inc. All rights reserved.

// Make version information available so that it can be printed by the binaries and recorded in
// the run summary.  Outside a git checkout the branch and commit are reported as "unknown".

use chrono::prelude::*;
use std::env::consts::{ARCH, OS};
use std::process::Command;
use string_utils::*;

#[cfg(debug_assertions)]
const BUILD_TYPE: &str = "debug";
#[cfg(not(debug_assertions))]
const BUILD_TYPE: &str = "release";

fn main() {
    let version_string = format!(
        "{} : {}{} : {} : {} : {} : {}",
        get_branch_name(),
        get_commit_hash(),
        if is_working_tree_clean() { "" } else { "+" },
        get_commit_date(),
        BUILD_TYPE,
        OS,
        ARCH
    );
    println!("cargo:rustc-env=VERSION_STRING={}", version_string);
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
}

fn get_commit_hash() -> String {
    if let Ok(v) = std::env::var("GITHUB_SHA") {
        if v.len() >= 7 {
            return v[0..7].to_string();
        }
    }
    git(&["log", "-1", "--pretty=format:%h"]).unwrap_or_else(|| "unknown".to_string())
}

// The build date stands in for the commit date.

fn get_commit_date() -> String {
    Local::now().to_string().before(" ").to_string()
}

fn get_branch_name() -> String {
    if let Ok(v) = std::env::var("GITHUB_REF") {
        return v;
    }
    git(&["rev-parse", "--abbrev-ref", "HEAD"]).unwrap_or_else(|| "unknown".to_string())
}

fn is_working_tree_clean() -> bool {
    if std::env::var("GITHUB_SHA").is_ok() || git(&["rev-parse", "--git-dir"]).is_none() {
        return true;
    }
    match Command::new("git")
        .args(["diff", "--quiet", "--exit-code"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .status()
    {
        Ok(status) => status.code() == Some(0),
        Err(_) => true,
    }
}
