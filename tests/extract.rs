//! Extraction integration tests over synthetic archives.
//!
//! These tests verify:
//! - Parsing of the header and both tables of an unsplit archive
//! - Extraction of stored and imploded files, with mtime and read-only bit
//! - Reassembly of files spanning two and three part files
//! - Entry selection depending on the part that was opened

mod common;

use common::*;
use filetime::FileTime;
use std::path::Path;
use tempfile::tempdir;

use runshield::archive::DosDateTime;
use runshield::{ArchiveContainer, Error, FileEntry};

const README: &[u8] = b"stored verbatim\r\n";

async fn open(path: &Path) -> ArchiveContainer {
    ArchiveContainer::open(path, "windows-1252").await.unwrap()
}

fn find<'a>(archive: &'a ArchiveContainer, name: &str) -> &'a FileEntry {
    archive
        .files()
        .iter()
        .find(|f| f.name == name)
        .unwrap_or_else(|| panic!("no entry {name}"))
}

fn unsplit_archive() -> PartBuilder {
    let readme_at = HEADER_END;
    let aiai_at = readme_at + README.len();
    let hello_at = aiai_at + RAW_AIAI.len();

    let mut aiai = FileSpec::new("AIAI.TXT", 1).imploded(aiai_at, RAW_AIAI, AIAI);
    aiai.attribs |= ATTR_READ_ONLY;

    PartBuilder::unsplit()
        .data_at(readme_at, README)
        .data_at(aiai_at, RAW_AIAI)
        .data_at(hello_at, HELLO_IMPLODED)
        .dir("")
        .dir("SUB\\DIR")
        .file(FileSpec::new("README.TXT", 0).stored(readme_at, README))
        .file(aiai)
        .file(FileSpec::new("HELLO.TXT", 1).imploded(hello_at, HELLO_IMPLODED, HELLO))
}

/// Two parts: ALPHA.TXT lives in part 1, HELLO.TXT starts in part 1 and
/// ends in part 2, OMEGA.TXT lives in part 2.
fn split_family(dir: &Path, with_second_part: bool) {
    const OMEGA: &[u8] = b"last file, second part";
    const IN_FIRST: usize = 20;

    let alpha = b"first part only";
    let alpha_at = HEADER_END;
    let hello_at = alpha_at + alpha.len();
    let omega_at = 255 + HELLO_IMPLODED.len() - IN_FIRST;

    let files = [
        FileSpec::new("ALPHA.TXT", 0).stored(alpha_at, alpha),
        FileSpec::new("HELLO.TXT", 0)
            .imploded(hello_at, HELLO_IMPLODED, HELLO)
            .parts(1, 2),
        FileSpec::new("OMEGA.TXT", 0)
            .stored(omega_at, OMEGA)
            .parts(2, 2),
    ];

    let mut first = PartBuilder::split(1, 2)
        .data_at(alpha_at, alpha)
        .data_at(hello_at, &HELLO_IMPLODED[..IN_FIRST])
        .dir("DATA");
    let mut second = PartBuilder::split(2, 2)
        .data_at(255, &HELLO_IMPLODED[IN_FIRST..])
        .start_integral_data(omega_at)
        .data_at(omega_at, OMEGA)
        .dir("DATA");
    for f in files {
        first = first.file(f.clone());
        second = second.file(f);
    }

    first.write(&dir.join("setup.1"));
    if with_second_part {
        second.write(&dir.join("setup.2"));
    }
}

#[tokio::test]
async fn parses_unsplit_archive() {
    let dir = tempdir().unwrap();
    let path = unsplit_archive().write(&dir.path().join("data.z"));
    let archive = open(&path).await;

    let header = archive.header();
    assert!(!header.is_split());
    assert_eq!(header.num_files, 3);
    assert_eq!(header.num_dirs, 2);
    assert_eq!(archive.directories()[1].path(), "SUB/DIR");

    let sizes: u64 = archive.files().iter().map(|f| f.entry_size as u64).sum();
    assert_eq!(sizes, header.files_list_size as u64);

    let aiai = find(&archive, "AIAI.TXT");
    assert_eq!(archive.entry_path(aiai), "SUB/DIR/AIAI.TXT");
    assert_eq!(aiai.attributes(), "A_R_");
    assert_eq!(archive.entry_path(find(&archive, "README.TXT")), "README.TXT");
    assert!(archive.files().iter().all(|f| f.is_in_part(header)));
}

#[tokio::test]
async fn extracts_stored_and_imploded_files() {
    let dir = tempdir().unwrap();
    let path = unsplit_archive().write(&dir.path().join("data.z"));
    let archive = open(&path).await;
    let out = dir.path().join("out");

    for entry in archive.files() {
        let written = archive.extract(entry, &out).await.unwrap();
        assert!(written.starts_with(&out));
    }

    assert_eq!(std::fs::read(out.join("README.TXT")).unwrap(), README);
    assert_eq!(std::fs::read(out.join("SUB/DIR/AIAI.TXT")).unwrap(), AIAI);
    assert_eq!(std::fs::read(out.join("SUB/DIR/HELLO.TXT")).unwrap(), HELLO);

    let meta = std::fs::metadata(out.join("SUB/DIR/AIAI.TXT")).unwrap();
    assert!(meta.permissions().readonly());
    assert!(!std::fs::metadata(out.join("README.TXT")).unwrap().permissions().readonly());

    let expected = DosDateTime(dos_datetime(2001, 6, 30, 12, 34, 56))
        .to_unix_local()
        .unwrap();
    assert_eq!(
        FileTime::from_last_modification_time(&meta).unix_seconds(),
        expected
    );

    // No temporary files are left behind
    let leftovers: Vec<_> = std::fs::read_dir(out.join("SUB/DIR"))
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .filter(|n| n.to_string_lossy().ends_with("runshield-tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[tokio::test]
async fn extraction_into_existing_directory() {
    let dir = tempdir().unwrap();
    let path = unsplit_archive().write(&dir.path().join("data.z"));
    let archive = open(&path).await;
    let out = dir.path().join("out");
    std::fs::create_dir_all(out.join("SUB/DIR")).unwrap();

    let entry = find(&archive, "HELLO.TXT");
    archive.extract(entry, &out).await.unwrap();
    assert_eq!(std::fs::read(out.join("SUB/DIR/HELLO.TXT")).unwrap(), HELLO);
}

#[tokio::test]
async fn decodes_names_with_archive_encoding() {
    let dir = tempdir().unwrap();
    let path = PartBuilder::unsplit()
        .data_at(HEADER_END, README)
        .dir_raw(b"CAF\xC9")
        .file(FileSpec::new("MENU.TXT", 0).stored(HEADER_END, README))
        .write(&dir.path().join("data.z"));
    let archive = open(&path).await;
    assert_eq!(archive.entry_path(&archive.files()[0]), "CAFÉ/MENU.TXT");
}

#[tokio::test]
async fn reassembles_file_spanning_parts() {
    let dir = tempdir().unwrap();
    split_family(dir.path(), true);
    let out = dir.path().join("out");

    let second = open(&dir.path().join("setup.2")).await;
    assert_eq!(second.header().part_id, 2);
    assert_eq!(second.part_path(1), dir.path().join("setup.1"));

    let main = second.get_part(1).await.unwrap();
    assert_eq!(main.header().part_id, 1);

    let selected = second.select(main.files(), false);
    let names: Vec<_> = selected.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["HELLO.TXT", "OMEGA.TXT"]);

    for entry in selected {
        main.extract(entry, &out).await.unwrap();
    }
    assert_eq!(std::fs::read(out.join("DATA/HELLO.TXT")).unwrap(), HELLO);
    assert_eq!(
        std::fs::read(out.join("DATA/OMEGA.TXT")).unwrap(),
        b"last file, second part"
    );
}

#[tokio::test]
async fn selection_depends_on_loaded_part() {
    let dir = tempdir().unwrap();
    split_family(dir.path(), true);

    let first = open(&dir.path().join("setup.1")).await;
    assert!(matches!(first.get_part(1).await.unwrap(), runshield::Part::Current(_)));

    let names: Vec<_> = first
        .select(first.files(), false)
        .into_iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(names, ["ALPHA.TXT"]);
    assert_eq!(first.select(first.files(), true).len(), 3);

    let hello = find(&first, "HELLO.TXT");
    assert!(hello.is_split());
    assert!(hello.is_in_part(first.header()));
    assert!(!find(&first, "OMEGA.TXT").is_in_part(first.header()));
}

#[tokio::test]
async fn missing_part_fails_without_output() {
    let dir = tempdir().unwrap();
    split_family(dir.path(), false);
    let out = dir.path().join("out");

    let first = open(&dir.path().join("setup.1")).await;
    let err = first
        .extract(find(&first, "HELLO.TXT"), &out)
        .await
        .unwrap_err();
    match err {
        Error::MissingPart { part_id, ref path, .. } => {
            assert_eq!(part_id, 2);
            assert_eq!(path, &dir.path().join("setup.2"));
        }
        ref other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("setup.2"));

    let remaining: Vec<_> = std::fs::read_dir(out.join("DATA")).unwrap().collect();
    assert!(remaining.is_empty());

    // Files held entirely by part 1 are unaffected
    first.extract(find(&first, "ALPHA.TXT"), &out).await.unwrap();
    assert_eq!(std::fs::read(out.join("DATA/ALPHA.TXT")).unwrap(), b"first part only");
}

#[tokio::test]
async fn middle_part_entries_are_not_extractable() {
    let dir = tempdir().unwrap();
    let path = PartBuilder::split(2, 3)
        .dir("")
        .file(FileSpec::new("BIG.BIN", 0).stored(255, b"").parts(1, 3))
        .write(&dir.path().join("setup.2"));
    let middle = open(&path).await;
    let entry = &middle.files()[0];
    assert!(!entry.is_valid_for_extraction(middle.header()));

    let err = middle.extract(entry, dir.path()).await.unwrap_err();
    assert!(matches!(err, Error::NotExtractable { part_id: 2, .. }));
    assert!(err.to_string().contains("open part 1 first"));
}

#[tokio::test]
async fn extracts_empty_imploded_entry() {
    let dir = tempdir().unwrap();
    let path = PartBuilder::unsplit()
        .dir("")
        .file(FileSpec::new("EMPTY.TXT", 0).imploded(HEADER_END, b"", b""))
        .write(&dir.path().join("data.z"));
    let archive = open(&path).await;
    let out = dir.path().join("out");

    let written = archive.extract(&archive.files()[0], &out).await.unwrap();
    assert_eq!(written, out.join("EMPTY.TXT"));
    assert!(std::fs::read(&written).unwrap().is_empty());
}

#[tokio::test]
async fn reassembles_file_across_middle_part() {
    let dir = tempdir().unwrap();
    let (head, rest) = HELLO_IMPLODED.split_at(15);
    let (middle, tail) = rest.split_at(20);
    let spec = FileSpec::new("HELLO.TXT", 0)
        .imploded(HEADER_END, HELLO_IMPLODED, HELLO)
        .parts(1, 3);

    PartBuilder::split(1, 3)
        .data_at(HEADER_END, head)
        .dir("")
        .file(spec.clone())
        .write(&dir.path().join("setup.1"));
    // The middle part is all continuation data up to its directory table
    PartBuilder::split(2, 3)
        .data_at(255, middle)
        .dir("")
        .file(spec.clone())
        .write(&dir.path().join("setup.2"));
    PartBuilder::split(3, 3)
        .data_at(255, tail)
        .start_integral_data(255 + tail.len())
        .dir("")
        .file(spec)
        .write(&dir.path().join("setup.3"));

    let last = open(&dir.path().join("setup.3")).await;
    let main = last.get_part(1).await.unwrap();
    let selected = last.select(main.files(), false);
    assert_eq!(selected.len(), 1);

    let out = dir.path().join("out");
    let written = main.extract(selected[0], &out).await.unwrap();
    assert_eq!(std::fs::read(written).unwrap(), HELLO);
}
