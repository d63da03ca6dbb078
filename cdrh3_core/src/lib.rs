// Copyright (c) 2022 10X Genomics, Inc. All rights reserved.

pub mod defs;
pub mod errors;
pub mod layout;
pub mod logging;

use io_utils::path_exists;
use string_utils::TextUtils;

const VERSION_STRING: &str = env!("VERSION_STRING");

pub fn version_string() -> String {
    VERSION_STRING.to_string()
}

// Parse a KEY=value config file.  Blank lines and lines starting with # are ignored.  Return
// false if there is no such file.

pub fn get_config(config_file: &str, config: &mut Vec<(String, String)>) -> bool {
    if config_file.is_empty() || !path_exists(config_file) {
        return false;
    }
    let text = match std::fs::read_to_string(config_file) {
        Ok(t) => t,
        Err(_) => return false,
    };
    for line in text.lines() {
        let s = line.trim();
        if s.is_empty() || s.starts_with('#') || !s.contains('=') {
            continue;
        }
        config.push((s.before("=").trim().to_string(), s.after("=").trim().to_string()));
    }
    true
}
