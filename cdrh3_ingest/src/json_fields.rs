// Copyright (c) 2022 10X Genomics, Inc. All rights reserved.
//
// JSON lines input.  The first substantive line is the sample metadata; every later one is a
// sequence record.  Lines of three characters or fewer (blank lines, lone brackets) are ignored.

use crate::dump::{append_text, JSON_MIN_DUMP_LEN};
use crate::fields::FieldsTable;
use cdrh3_core::errors::Result;
use serde_json::Value;
use std::path::Path;

pub const JSON_ID_FIELD: &str = "original_name";
pub const JSON_CDR3_FIELD: &str = "cdr3";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct JsonInput {
    pub metadata: Option<Value>,
    pub records: Vec<Value>,
    pub bad_lines: Vec<usize>, // one-based line numbers that were not valid JSON
}

pub fn parse_json_lines(lines: &[String]) -> JsonInput {
    let mut input = JsonInput::default();
    let mut have_meta = false;
    for (i, line) in lines.iter().enumerate() {
        if line.len() + 1 <= JSON_MIN_DUMP_LEN {
            continue;
        }
        match serde_json::from_str::<Value>(line) {
            Ok(v) => {
                if !have_meta {
                    input.metadata = Some(v);
                    have_meta = true;
                } else {
                    input.records.push(v);
                }
            }
            Err(e) => {
                log::warn!("skipping line {}, which is not valid JSON: {}", i + 1, e);
                input.bad_lines.push(i + 1);
            }
        }
    }
    input
}

fn string_field(v: &Value, key: &str) -> String {
    match v.get(key) {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

// Records without a name cannot be told apart, so they are left out of the table.

pub fn json_fields(input: &JsonInput) -> FieldsTable {
    let mut table = FieldsTable::new(JSON_ID_FIELD, JSON_CDR3_FIELD);
    for r in input.records.iter() {
        let id = string_field(r, JSON_ID_FIELD);
        if id.trim().is_empty() {
            log::debug!("skipping record without {}", JSON_ID_FIELD);
            continue;
        }
        table.rows.push((id, string_field(r, JSON_CDR3_FIELD)));
    }
    table
}

fn pretty(v: &Value) -> String {
    serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string())
}

pub fn write_json_metadata(
    out: &Path,
    file_ref: usize,
    source: &Path,
    input: &JsonInput,
) -> Result<()> {
    let mut text = format!("\nFile_#{} Sample metadata: \n{}\n", file_ref, source.display());
    if let Some(m) = input.metadata.as_ref() {
        text += &format!("\nMetadata = \n{}\n", pretty(m));
    }
    text += &format!("\nend_file_#{}\n\n-------------\n", file_ref);
    append_text(out, &text)
}

pub fn write_parsed(out: &Path, file_ref: usize, source: &Path, input: &JsonInput) -> Result<()> {
    let mut text = format!("File_#{} Parsed_data: \n{}\n", file_ref, source.display());
    for r in input.records.iter() {
        text += &format!("\nSequence_data = \n{}\n", pretty(r));
    }
    text += &format!("\nend_file_#{}\n\n-------------\n", file_ref);
    append_text(out, &text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_json_lines() {
        let input = parse_json_lines(&lines(&[
            "{\"Longitudinal\": \"no\", \"Species\": \"human\"}",
            "",
            "{\"seq\": \"ACGT\", \"cdr3\": \"CARDPWGYW\", \"original_name\": \"r1\"}",
            "{not json",
            "{\"cdr3\": \"CAK\", \"original_name\": \"r2\"}",
            "{\"original_name\": \"r3\"}",
            "{\"cdr3\": \"CTTGGYFDYWQQ\"}",
            "{\"cdr3\": \"CAKDRGWFDPWG\", \"original_name\": null}",
            "{\"cdr3\": \"CAKDRGWFDPWG\", \"original_name\": \" \"}",
        ]));
        assert_eq!(input.metadata.as_ref().unwrap()["Species"], "human");
        assert_eq!(input.records.len(), 6);
        assert_eq!(input.bad_lines, vec![4]);
        let t = json_fields(&input);
        assert_eq!(
            t.rows,
            vec![
                ("r1".to_string(), "CARDPWGYW".to_string()),
                ("r2".to_string(), "CAK".to_string()),
                ("r3".to_string(), "".to_string())
            ]
        );
    }

    #[test]
    fn test_write_reports() {
        let dir = tempfile::tempdir().unwrap();
        let input = parse_json_lines(&lines(&["{\"Species\": \"human\"}", "{\"cdr3\": \"CARW\"}"]));
        let meta = dir.path().join("meta.txt");
        write_json_metadata(&meta, 1, Path::new("/d/a.json"), &input).unwrap();
        let text = std::fs::read_to_string(&meta).unwrap();
        assert!(text.contains("Metadata = \n{\n  \"Species\": \"human\"\n}"));
        let parsed = dir.path().join("parsed_#1.txt");
        write_parsed(&parsed, 1, Path::new("/d/a.json"), &input).unwrap();
        assert!(std::fs::read_to_string(&parsed).unwrap().contains("\"cdr3\": \"CARW\""));
    }
}
