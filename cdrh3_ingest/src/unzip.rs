// Copyright (c) 2022 10X Genomics, Inc. All rights reserved.
//
// Unpack an iReceptor Gateway archive.  Each member is filed by kind under the results
// directory, in a directory numbered by the file reference of the archive.

use cdrh3_core::errors::{Cdrh3Error, Result};
use cdrh3_core::layout::{MemberKind, ResultsLayout};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use zip::ZipArchive;

#[derive(Clone, Debug, PartialEq)]
pub struct ArchiveMember {
    pub name: String,
    pub kind: MemberKind,
    pub extracted: PathBuf,
}

pub fn unzip_archive(
    archive: &Path,
    layout: &ResultsLayout,
    file_ref: usize,
) -> Result<Vec<ArchiveMember>> {
    let f = File::open(archive).map_err(|e| Cdrh3Error::io(archive, e))?;
    let mut zip = ZipArchive::new(f).map_err(|e| Cdrh3Error::zip(archive, e))?;
    let mut members = Vec::<ArchiveMember>::new();
    for i in 0..zip.len() {
        let mut member = zip.by_index(i).map_err(|e| Cdrh3Error::zip(archive, e))?;
        if member.is_dir() {
            continue;
        }

        // Refuse names that would escape the target directory.

        let rel = match member.enclosed_name() {
            Some(p) => p,
            None => {
                log::warn!(
                    "skipping unsafe member name {} in {}",
                    member.name(),
                    archive.display()
                );
                continue;
            }
        };
        let name = member.name().to_string();
        let kind = MemberKind::of(&name);
        let dir = layout.member_dir(kind, file_ref);
        let target = dir.join(&rel);
        if let Some(parent) = target.parent() {
            create_dir_all(parent).map_err(|e| Cdrh3Error::io(parent, e))?;
        }
        let mut out = File::create(&target).map_err(|e| Cdrh3Error::io(&target, e))?;
        std::io::copy(&mut member, &mut out).map_err(|e| Cdrh3Error::io(&target, e))?;
        log::info!("extracted {} to {}", name, target.display());
        members.push(ArchiveMember {
            name,
            kind,
            extracted: target,
        });
    }
    Ok(members)
}

// List the members of an archive, one name per line.

pub fn write_archive_listing(out: &Path, members: &[ArchiveMember]) -> Result<()> {
    let f = File::create(out).map_err(|e| Cdrh3Error::io(out, e))?;
    let mut f = BufWriter::new(f);
    let mut write_listing = || -> std::io::Result<()> {
        for m in members.iter() {
            writeln!(f, "{}", m.name)?;
        }
        f.flush()
    };
    write_listing().map_err(|e| Cdrh3Error::io(out, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdrh3_core::defs::InputFormat;
    use pretty_trace::*;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn make_archive(path: &Path, members: &[(&str, &str)]) {
        let mut w = ZipWriter::new(File::create(path).unwrap());
        for (name, text) in members.iter() {
            w.start_file(*name, SimpleFileOptions::default()).unwrap();
            w.write_all(text.as_bytes()).unwrap();
        }
        w.finish().unwrap();
    }

    #[test]
    fn test_unzip_archive() {
        PrettyTrace::new().on();
        let dir = tempfile::tempdir().unwrap();
        let zip_path = dir.path().join("ireceptor.zip");
        make_archive(
            &zip_path,
            &[
                ("info.txt", "Repository: covid19-1.ireceptor.org\n"),
                ("airr-covid-19-1-metadata.json", "{\"Repertoire\": []}\n"),
                ("airr-covid-19-1.tsv", "sequence_id\tjunction_aa\ns1\tCARDYW\n"),
            ],
        );
        let layout = ResultsLayout::new(dir.path().join("out"), InputFormat::Tsv);
        layout.create_dirs().unwrap();
        let members = unzip_archive(&zip_path, &layout, 1).unwrap();
        assert_eq!(members.len(), 3);
        assert_eq!(members[2].kind, MemberKind::Sequence);
        assert_eq!(
            members[2].extracted,
            dir.path().join("out/3_filesort/seq_files/seq_file_#1/airr-covid-19-1.tsv")
        );
        assert!(members[0].extracted.exists());
        let listing = layout.archive_listing(1);
        write_archive_listing(&listing, &members).unwrap();
        let text = std::fs::read_to_string(&listing).unwrap();
        assert_eq!(
            text,
            "info.txt\nairr-covid-19-1-metadata.json\nairr-covid-19-1.tsv\n"
        );
    }

    #[test]
    fn test_not_a_zip() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("broken.zip");
        std::fs::write(&p, "this is not an archive").unwrap();
        let layout = ResultsLayout::new(dir.path().join("out"), InputFormat::Tsv);
        assert!(matches!(unzip_archive(&p, &layout, 1), Err(Cdrh3Error::Zip { .. })));
    }
}
