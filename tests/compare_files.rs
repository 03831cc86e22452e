use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use eolcmp::{
    compare, run_eolcmp, CompareOptions, ComparisonResult, LineSource, OpenError, Options, Outcome,
};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, bytes).unwrap();
    path
}

fn run(a: &Path, b: &Path, compare: CompareOptions) -> (ComparisonResult, String) {
    let opts = Options {
        file_a: a.to_path_buf(),
        file_b: b.to_path_buf(),
        compare,
    };
    let mut out = Vec::new();
    let result = run_eolcmp(&opts, &mut out).unwrap();
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn identical_files_report_a_match() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.txt", b"x\ny\nz\n");
    let b = write(&dir, "b.txt", b"x\ny\nz\n");

    let (result, text) = run(&a, &b, CompareOptions::default());
    assert_eq!(result.outcome, Outcome::IdenticalContent);
    assert_eq!(result.lines_compared, 3);
    assert!(text.contains("The files match and have the same line count."));
    assert!(text.contains("3 lines were compared."));
    assert!(text.contains("Total time taken: "));
}

#[test]
fn line_count_gate_skips_content() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.txt", b"x\ny\n");
    let b = write(&dir, "b.txt", b"x\ny\nz\n");

    let (result, text) = run(&a, &b, CompareOptions::default());
    assert_eq!(result.outcome, Outcome::LineCountMismatch { a: 2, b: 3 });
    assert!(result.differences.is_empty());
    assert!(text.contains("File a: 2 lines."));
    assert!(text.contains("File b: 3 lines."));
    assert!(!text.contains("@@"));
}

#[test]
fn naive_mode_stops_at_shorter_file() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.txt", b"x\ny\n");
    let b = write(&dir, "b.txt", b"x\ny\nz\n");

    let opts = CompareOptions {
        naive: true,
        ..Default::default()
    };
    let (result, text) = run(&a, &b, opts);
    assert_eq!(result.outcome, Outcome::IdenticalContent);
    assert_eq!(result.lines_compared, 2);
    assert!(text.contains("up to line 2"));
}

#[test]
fn differing_endings_are_flagged_per_line() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "dos.txt", b"x\r\ny\r\n");
    let b = write(&dir, "unix.txt", b"x\ny\n");

    let (result, text) = run(&a, &b, CompareOptions::default());
    assert_eq!(result.outcome, Outcome::ContentDiffers { count: 2 });
    assert!(text.contains("File a [dos |crlf]:"));
    assert!(text.contains("File b [unix|  lf]:"));
    assert!(text.contains("The files use different line endings."));
    assert!(text.contains("File a: x\\r\\n"));
    assert!(text.contains("File b: x\\n"));
    assert!(text.contains("2 of 2 lines were different."));
}

#[test]
fn ignored_endings_compare_content_only() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "dos.txt", b"x\r\ny\r\n");
    let b = write(&dir, "unix.txt", b"x\ny\n");

    let opts = CompareOptions {
        ignore_line_endings: true,
        ..Default::default()
    };
    let (result, text) = run(&a, &b, opts);
    assert_eq!(result.outcome, Outcome::IdenticalContentDifferentEndings);
    assert!(text.contains("Ignoring line ending differences."));
    assert!(text.contains("The file contents match, but they have different line endings."));
}

#[test]
fn quiet_mode_hides_differences() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.txt", b"one\ntwo\n");
    let b = write(&dir, "b.txt", b"one\nTWO\n");

    let opts = CompareOptions {
        quiet: true,
        ..Default::default()
    };
    let (result, text) = run(&a, &b, opts);
    assert_eq!(result.differences.len(), 1);
    assert!(!text.contains("@@"));
    assert!(text.contains("1 of 2 lines were different."));
}

#[test]
fn missing_file_fails_naming_path() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.txt", b"x\n");
    let missing = dir.path().join("missing.txt");

    let opts = Options {
        file_a: a,
        file_b: missing.clone(),
        compare: CompareOptions::default(),
    };
    let err = run_eolcmp(&opts, &mut Vec::new()).unwrap_err();
    let open = err.downcast_ref::<OpenError>().unwrap();
    assert!(matches!(open, OpenError::Io { .. }));
    assert_eq!(open.path(), missing.as_path());
    assert_eq!(err.to_string(), "File b cannot be compared");
    assert!(format!("{err:#}").contains("missing.txt"));
}

#[test]
fn file_without_terminator_cannot_be_compared() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "flat.txt", b"no newline here");
    let b = write(&dir, "b.txt", b"x\n");

    let opts = Options {
        file_a: a,
        file_b: b,
        compare: CompareOptions::default(),
    };
    let err = run_eolcmp(&opts, &mut Vec::new()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<OpenError>(),
        Some(OpenError::UnknownLineEnding { .. })
    ));
}

#[test]
fn file_shrinking_after_open_aborts_comparison() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.txt", b"x\ny\nz\n");
    let b = write(&dir, "b.txt", b"x\ny\nz\n");

    let mut source_a = LineSource::open(&a).unwrap();
    let mut source_b = LineSource::open(&b).unwrap();
    assert_eq!(source_b.line_count(), 3);
    fs::write(&b, b"x\n").unwrap();

    let err = compare(&mut source_a, &mut source_b, &CompareOptions::default()).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    assert!(err.to_string().contains(&b.display().to_string()));
}
