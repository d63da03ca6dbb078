// Copyright (c) 2022 10X Genomics, Inc. All rights reserved.
//
// Process one discovered file: dump it, pull out its fields, extract pairs and write what
// goes to MEME.  Every report is numbered by the file reference.

use cdrh3_core::defs::{Cdrh3Control, InputFormat, Pair};
use cdrh3_core::errors::Result;
use cdrh3_core::layout::{MemberKind, ResultsLayout};
use cdrh3_core::logging::logme;
use cdrh3_ingest::csv_fields::{read_csv_input, write_csv_metadata};
use cdrh3_ingest::decompress::read_lines;
use cdrh3_ingest::dump::{append_text, dump_contents, JSON_MIN_DUMP_LEN};
use cdrh3_ingest::extract::{extract_pairs, junctions_to_cdr3s};
use cdrh3_ingest::fields::write_fields_file;
use cdrh3_ingest::json_fields::{json_fields, parse_json_lines, write_json_metadata, write_parsed};
use cdrh3_ingest::tsv_fields::{convert_tsv_to_csv, read_tsv_fields};
use cdrh3_ingest::unzip::{unzip_archive, write_archive_listing};
use cdrh3_tail::fasta::{fasta_text, write_fasta};
use cdrh3_tail::report::{cdrh3_report, meme_seqs, sample_list};
use cdrh3_tail::select::{choose_submission, key_by_sample, qualify, Submission};
use cdrh3_tail::summary::{FileStatus, FileSummary};
use rand::Rng;
use std::path::Path;

const FIELDS_DESCRIPTION: &str = "Sample name & CDR-H3 sequence";
const JUNCTION_DESCRIPTION: &str = "Sequence id & junction sequence";

pub fn process_file<R: Rng>(
    ctl: &Cdrh3Control,
    layout: &ResultsLayout,
    file_ref: usize,
    path: &Path,
    rng: &mut R,
) -> Result<FileSummary> {
    let mut summary = FileSummary::new(file_ref, path);
    let format = ctl.gen_opt.format;
    let entry = match format {
        InputFormat::Csv => "File_ref_#",
        InputFormat::Json => "File_#",
        InputFormat::Tsv => "Archive_#",
    };
    append_text(
        &layout.path_list(),
        &format!("\n{}{}\n{}\n", entry, file_ref, path.display()),
    )?;
    if !format.accepts(path) {
        logme(&format!(
            "skipping file #{}, {}, which is not {} input",
            file_ref,
            path.display(),
            format.label()
        ));
        summary.status = FileStatus::Skipped;
        return Ok(summary);
    }
    logme(&format!("file #{}: {}", file_ref, path.display()));

    // Get the pairs.  For archives, the length filter comes first, as every qualifying
    // junction is listed as it is found.

    let qualifying = match format {
        InputFormat::Csv => {
            let pairs = csv_pairs(layout, file_ref, path)?;
            summary.pairs = pairs.len();
            qualify(&pairs, ctl.sel_opt.min_len)
        }
        InputFormat::Json => {
            let (pairs, bad_lines) = json_pairs(layout, file_ref, path)?;
            summary.pairs = pairs.len();
            summary.bad_lines = bad_lines;
            qualify(&pairs, ctl.sel_opt.min_len)
        }
        InputFormat::Tsv => {
            let pairs = tsv_pairs(layout, file_ref, path)?;
            summary.pairs = pairs.len();
            let qualifying = qualify(&pairs, ctl.sel_opt.min_len);
            if !qualifying.is_empty() {
                append_text(&layout.meme_seqs(file_ref), &meme_seqs(&qualifying))?;
            }
            append_text(
                &layout.sample_list(file_ref),
                &sample_list(file_ref, path, &pairs, &qualifying),
            )?;
            qualifying
        }
    };
    summary.qualifying = qualifying.len();
    submit(ctl, layout, file_ref, qualifying, rng, &mut summary)?;
    Ok(summary)
}

// ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓

fn csv_pairs(layout: &ResultsLayout, file_ref: usize, path: &Path) -> Result<Vec<Pair>> {
    let lines = read_lines(path)?;
    dump_contents(&layout.contents(file_ref), file_ref, path, "CSV", &lines, 0)?;
    let input = read_csv_input(path)?;
    if let Some(meta) = input.metadata.as_ref() {
        write_csv_metadata(&layout.metadata(), file_ref, path, meta)?;
    }
    let rendered = write_fields_file(
        &layout.fields(file_ref),
        file_ref,
        path,
        FIELDS_DESCRIPTION,
        &input.table,
    )?;
    Ok(extract_pairs(&rendered))
}

fn json_pairs(
    layout: &ResultsLayout,
    file_ref: usize,
    path: &Path,
) -> Result<(Vec<Pair>, Vec<usize>)> {
    let lines = read_lines(path)?;
    dump_contents(
        &layout.contents(file_ref),
        file_ref,
        path,
        "JSON",
        &lines,
        JSON_MIN_DUMP_LEN,
    )?;
    let input = parse_json_lines(&lines);
    if !input.bad_lines.is_empty() {
        logme(&format!(
            "file #{} has {} lines that are not valid JSON",
            file_ref,
            input.bad_lines.len()
        ));
    }
    write_json_metadata(&layout.metadata(), file_ref, path, &input)?;
    write_parsed(&layout.parsed(file_ref), file_ref, path, &input)?;
    let rendered = write_fields_file(
        &layout.fields(file_ref),
        file_ref,
        path,
        FIELDS_DESCRIPTION,
        &json_fields(&input),
    )?;
    Ok((extract_pairs(&rendered), input.bad_lines))
}

// Unpack an archive and read every sequence table in it.

fn tsv_pairs(layout: &ResultsLayout, file_ref: usize, path: &Path) -> Result<Vec<Pair>> {
    let members = unzip_archive(path, layout, file_ref)?;
    write_archive_listing(&layout.archive_listing(file_ref), &members)?;
    let mut junctions = Vec::<Pair>::new();
    let mut tables = 0;
    for m in members.iter().filter(|m| m.kind == MemberKind::Sequence) {
        tables += 1;
        let csv_copy = convert_tsv_to_csv(&m.extracted)?;
        log::info!("wrote {}", csv_copy.display());
        let table = read_tsv_fields(&m.extracted)?;
        let rendered = write_fields_file(
            &layout.fields(file_ref),
            file_ref,
            &m.extracted,
            JUNCTION_DESCRIPTION,
            &table,
        )?;
        junctions.append(&mut extract_pairs(&rendered));
    }
    if tables == 0 {
        log::warn!("archive {} holds no sequence table", path.display());
    }
    Ok(junctions_to_cdr3s(junctions))
}

// ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓

// Key the qualifying pairs, apply the size policy and write the report and FASTA file.

fn submit<R: Rng>(
    ctl: &Cdrh3Control,
    layout: &ResultsLayout,
    file_ref: usize,
    qualifying: Vec<Pair>,
    rng: &mut R,
    summary: &mut FileSummary,
) -> Result<()> {
    let keyed = key_by_sample(qualifying);
    summary.keyed = keyed.len();
    let sub = choose_submission(keyed, &ctl.sel_opt, rng);
    append_text(&layout.cdrh3_report(file_ref), &cdrh3_report(&sub))?;
    summary.status = match &sub {
        Submission::TooFew { n } => {
            logme(&format!(
                "file #{}: too few sequences for submission to MEME ({})",
                file_ref, n
            ));
            FileStatus::TooFew
        }
        Submission::All(x) => {
            logme(&format!("file #{}: number of sequences = {}", file_ref, x.len()));
            FileStatus::Submitted
        }
        Submission::Subsampled { from, kept } => {
            logme(&format!(
                "file #{}: since number of sequences was {}, {} were randomly selected",
                file_ref,
                from,
                kept.len()
            ));
            FileStatus::Subsampled
        }
    };
    if sub.is_submitted() {
        let fasta = layout.fasta(file_ref);
        write_fasta(sub.records(), &fasta)?;
        if ctl.gen_opt.print_fasta {
            print!("{}", fasta_text(sub.records()));
        }
        summary.submitted = sub.records().len();
        summary.fasta = Some(fasta.display().to_string());
    }
    Ok(())
}
