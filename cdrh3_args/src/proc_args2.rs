// Copyright (c) 2022 10X Genomics, Inc. All rights reserved.

use io_utils::path_exists;
use std::fs::{create_dir_all, remove_file, File};
use std::path::Path;
use std::str::FromStr;
use string_utils::TextUtils;

// ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓

// Test a directory for writeability by creating it if need be, then writing and deleting a
// file in it.

pub fn test_writeable(dir: &str) -> Result<(), String> {
    if create_dir_all(dir).is_err() {
        let mut msg = format!(
            "\nYou've specified an output directory\n{}\nthat cannot be created.\n",
            dir
        );
        if let Some(parent) = Path::new(dir).parent() {
            let parent = parent.to_string_lossy();
            let state = if path_exists(&*parent) {
                "exists"
            } else {
                "does not exist"
            };
            msg += &format!("Note that the path {} {}.\n", parent, state);
        }
        return Err(msg);
    }
    let probe = Path::new(dir).join(".cdrh3_write_test");
    if File::create(&probe).is_err() {
        return Err(format!(
            "\nYou've specified an output directory\n{}\nthat cannot be written.\n",
            dir
        ));
    }
    remove_file(&probe).map_err(|e| format!("\nCould not remove {}: {}\n", probe.display(), e))
}

// ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓

// Simple arguments.  We test for e.g. PRINT_FASTA or PRINT_FASTA=, the latter to allow for the
// case where the argument has been set by an environment variable.

pub fn is_simple_arg(arg: &str, x: &str) -> Result<bool, String> {
    if arg == x || arg == format!("{}=", x) {
        return Ok(true);
    } else if arg.starts_with(&format!("{}=", x)) {
        return Err(format!(
            "\nYour command line includes \"{}\", which is not a valid argument.\n\
             Perhaps you meant \"{}\".\n",
            arg, x
        ));
    }
    Ok(false)
}

// Numeric arguments.  We require that these are nonnegative integers that fit the type.

fn is_parsed_arg<T: FromStr>(arg: &str, x: &str, what: &str) -> Result<bool, String> {
    let bad = || {
        format!(
            "\nYour command line includes \"{}\", which is not a valid argument.\n\
             Perhaps you meant \"{}=n\", where n is {}.\n",
            arg, x, what
        )
    };
    if arg == x {
        return Err(bad());
    } else if arg.starts_with(&format!("{}=", x)) {
        if arg.after(&format!("{}=", x)).parse::<T>().is_ok() {
            return Ok(true);
        }
        return Err(bad());
    }
    Ok(false)
}

pub fn is_usize_arg(arg: &str, x: &str) -> Result<bool, String> {
    is_parsed_arg::<usize>(arg, x, "an integer >= 0")
}

pub fn is_u64_arg(arg: &str, x: &str) -> Result<bool, String> {
    is_parsed_arg::<u64>(arg, x, "a 64-bit unsigned integer")
}

pub fn is_string_arg(arg: &str, x: &str) -> Result<bool, String> {
    if arg == x {
        return Err(format!(
            "\nYour command line includes \"{}\", which is not a valid argument.\n\
             Perhaps you meant \"{}=s\" for some string s.\n",
            arg, x
        ));
    } else if arg.starts_with(&format!("{}=", x)) {
        if arg.after(&format!("{}=", x)).is_empty() {
            return Err(format!(
                "\nYour command line includes \"{}\", which is not a valid argument.\n\
                 The value after the equals sign is empty.\n",
                arg
            ));
        }
        return Ok(true);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arg_validators() {
        assert_eq!(is_simple_arg("PRINT_FASTA", "PRINT_FASTA"), Ok(true));
        assert_eq!(is_simple_arg("PRINT_FASTA=", "PRINT_FASTA"), Ok(true));
        assert!(is_simple_arg("PRINT_FASTA=yes", "PRINT_FASTA").is_err());
        assert_eq!(is_simple_arg("SEED=3", "PRINT_FASTA"), Ok(false));
        assert_eq!(is_usize_arg("MAX_SEQS=100", "MAX_SEQS"), Ok(true));
        assert!(is_usize_arg("MAX_SEQS=-1", "MAX_SEQS").is_err());
        assert!(is_usize_arg("MAX_SEQS", "MAX_SEQS").is_err());
        assert_eq!(is_u64_arg("SEED=18446744073709551615", "SEED"), Ok(true));
        assert!(is_u64_arg("SEED=x", "SEED").is_err());
        assert_eq!(is_string_arg("IN=/data", "IN"), Ok(true));
        assert!(is_string_arg("IN=", "IN").is_err());
        assert_eq!(is_string_arg("INPUT=/data", "IN"), Ok(false));
    }

    #[test]
    fn test_writeable() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("results/5_Results");
        assert!(super::test_writeable(out.to_str().unwrap()).is_ok());
        assert!(out.is_dir());
        assert!(!out.join(".cdrh3_write_test").exists());
    }
}
