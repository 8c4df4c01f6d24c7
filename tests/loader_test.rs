//! Loader and end-to-end report tests.

use std::io::Write;

use pagesim::{run_simulation, Error, PageId, PolicyKind, ReferenceString, TraceRenderer};
use tempfile::{tempdir, NamedTempFile};

fn write_refs(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_from_file() {
    let file = write_refs("1 2 3\n4 -1\n");
    let refs = ReferenceString::from_file(file.path()).unwrap();

    assert_eq!(refs.len(), 5);
    assert_eq!(refs[4], PageId::new(-1));
}

#[test]
fn test_load_skips_malformed() {
    let file = write_refs("1 two 3 4x 5");
    let refs = ReferenceString::from_file(file.path()).unwrap();
    assert_eq!(refs, ReferenceString::from(vec![1, 3, 5]));
}

/// A stray non-UTF-8 byte costs one token, not the whole file.
#[test]
fn test_load_skips_invalid_utf8() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"1 2 \xff 3\n4 \xc3\x28 5\n").unwrap();
    file.flush().unwrap();

    let refs = ReferenceString::from_file(file.path()).unwrap();
    assert_eq!(refs, ReferenceString::from(vec![1, 2, 3, 4, 5]));
}

#[test]
fn test_missing_file_is_source_unavailable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.txt");

    match ReferenceString::from_file(&path) {
        Err(Error::SourceUnavailable { path: p, .. }) => assert_eq!(p, path),
        other => panic!("Expected SourceUnavailable, got {:?}", other),
    }
}

#[test]
fn test_directory_is_source_unavailable() {
    let dir = tempdir().unwrap();
    assert!(matches!(
        ReferenceString::from_file(dir.path()),
        Err(Error::SourceUnavailable { .. })
    ));
}

/// File in, report out.
#[test]
fn test_file_to_report() {
    let file = write_refs("1 2 3 4 1 2 5");
    let refs = ReferenceString::from_file(file.path()).unwrap();
    let (trace, faults) = run_simulation(&refs, 3, PolicyKind::Fifo).unwrap();

    let mut renderer = TraceRenderer::for_refs(Vec::new(), &refs);
    for record in &trace {
        renderer.write_record(record).unwrap();
    }
    renderer.write_total(faults).unwrap();
    let output = String::from_utf8(renderer.into_inner()).unwrap();

    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines[0], "1 -> | 1 |   |   | FAULT");
    assert_eq!(lines[3], "4 -> | 4 | 2 | 3 | FAULT");
    assert_eq!(lines[6], "5 -> | 5 | 1 | 2 | FAULT");
    assert_eq!(lines[7], "");
    assert_eq!(lines[8], "page faults: 7");
}
