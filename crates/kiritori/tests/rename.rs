use std::fs;
use std::path::{Path, PathBuf};

use kiritori::{RenameError, RenameOutcome, RenameReport, Renamer, load_path_list};
use kiritori_core::TitleNormalizer;
use tempfile::tempdir;

const TEST_FILE_CONTENT: &str = "episode bytes";

fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, TEST_FILE_CONTENT).unwrap();
    path
}

fn run(paths: &[PathBuf], dry_run: bool) -> (RenameReport, Vec<String>) {
    let normalizer = TitleNormalizer::new().unwrap();
    let mut lines = Vec::new();
    let report = Renamer::new(&normalizer)
        .with_dry_run(dry_run)
        .run(paths, |outcome| lines.push(outcome.to_string()));
    (report, lines)
}

#[test]
fn test_renames_in_place() {
    let temp_dir = tempdir().unwrap();
    let source = touch(temp_dir.path(), "The.Show.Name.S02E05.1080p.WEB-DL.x264-GROUP.mkv");

    let (report, lines) = run(&[source.clone()], false);

    let target = temp_dir.path().join("The Show Name - S02E05.mkv");
    assert!(!source.exists());
    assert_eq!(fs::read_to_string(&target).unwrap(), TEST_FILE_CONTENT);
    assert_eq!(report.renamed, 1);
    assert_eq!(
        lines,
        vec!["Renaming: The.Show.Name.S02E05.1080p.WEB-DL.x264-GROUP.mkv -> The Show Name - S02E05.mkv"]
    );
}

#[test]
fn test_canonical_name_is_left_alone() {
    let temp_dir = tempdir().unwrap();
    let source = touch(temp_dir.path(), "My Show - S03E07.mp4");

    let (report, lines) = run(&[source.clone()], false);

    assert!(source.exists());
    assert_eq!(report.unchanged, 1);
    assert_eq!(lines, vec!["No change: My Show - S03E07.mp4"]);
}

#[test]
fn test_collision_skips_second_file() {
    let temp_dir = tempdir().unwrap();
    let first = touch(temp_dir.path(), "Show.S01E01.720p.mkv");
    let second = touch(temp_dir.path(), "Show.S01E01.1080p.mkv");
    fs::write(&second, "second").unwrap();

    let (report, lines) = run(&[first.clone(), second.clone()], false);

    let target = temp_dir.path().join("Show - S01E01.mkv");
    assert!(!first.exists());
    assert!(second.exists());
    assert_eq!(fs::read_to_string(&target).unwrap(), TEST_FILE_CONTENT);
    assert_eq!(report.renamed, 1);
    assert_eq!(report.skipped, 1);
    assert!(lines[1].starts_with("Target exists, skipping to avoid overwrite:"));
}

#[test]
fn test_missing_file_does_not_stop_batch() {
    let temp_dir = tempdir().unwrap();
    let missing = temp_dir.path().join("Gone.S01E01.mkv");
    let present = touch(temp_dir.path(), "Here.S01E02.mkv");

    let (report, lines) = run(&[missing, present], false);

    assert!(temp_dir.path().join("Here - S01E02.mkv").exists());
    assert_eq!(report.skipped, 1);
    assert_eq!(report.renamed, 1);
    assert!(lines[0].starts_with("File not found:"));
}

#[test]
fn test_path_under_a_file_does_not_stop_batch() {
    let temp_dir = tempdir().unwrap();
    let blocker = touch(temp_dir.path(), "blocker");
    let broken = blocker.join("Show.S01E01.mkv");
    let present = touch(temp_dir.path(), "Other.S01E03.mkv");

    let (report, lines) = run(&[broken, present], false);

    assert_eq!(report.renamed, 1);
    assert_eq!(report.skipped + report.failed, 1);
    assert_eq!(lines.len(), 2);
    assert!(temp_dir.path().join("Other - S01E03.mkv").exists());
}

#[test]
fn test_dry_run_touches_nothing() {
    let temp_dir = tempdir().unwrap();
    let source = touch(temp_dir.path(), "[Tag] Some Show - 2x10 [Extra].avi");

    let (report, lines) = run(&[source.clone()], true);

    assert!(source.exists());
    assert!(!temp_dir.path().join("Some Show - S02E10.avi").exists());
    assert_eq!(report.renamed, 1);
    assert_eq!(
        lines,
        vec!["Would rename: [Tag] Some Show - 2x10 [Extra].avi -> Some Show - S02E10.avi"]
    );
}

#[test]
fn test_dry_run_still_reports_conflicts() {
    let temp_dir = tempdir().unwrap();
    let source = touch(temp_dir.path(), "Show.S01E01.mkv");
    touch(temp_dir.path(), "Show - S01E01.mkv");

    let normalizer = TitleNormalizer::new().unwrap();
    let outcome = Renamer::new(&normalizer)
        .with_dry_run(true)
        .rename_one(&source);

    assert!(matches!(
        outcome,
        RenameOutcome::Failed(RenameError::TargetExists { .. })
    ));
}

#[test]
fn test_case_only_difference_does_not_overwrite() {
    let temp_dir = tempdir().unwrap();
    let existing = temp_dir.path().join("Show - S01E01.mkv");
    let source = temp_dir.path().join("Show - S01E01.MKV");
    fs::write(&existing, "existing").unwrap();
    fs::write(&source, "source").unwrap();
    if fs::read_to_string(&existing).unwrap() != "existing" {
        // Case-insensitive filesystem: both names are one file.
        return;
    }

    let normalizer = TitleNormalizer::new().unwrap();
    let outcome = Renamer::new(&normalizer).rename_one(&source);

    assert!(matches!(
        outcome,
        RenameOutcome::Failed(RenameError::TargetExists { .. })
    ));
    assert_eq!(fs::read_to_string(&existing).unwrap(), "existing");
    assert_eq!(fs::read_to_string(&source).unwrap(), "source");
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_name_is_left_alone() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp_dir = tempdir().unwrap();
    let source = temp_dir.path().join(OsStr::from_bytes(b"Caf\xE9.S01E01.mkv"));
    fs::write(&source, TEST_FILE_CONTENT).unwrap();
    let other = touch(temp_dir.path(), "Other.S01E02.mkv");

    let (report, lines) = run(&[source.clone(), other], false);

    assert!(source.exists());
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 2);
    assert!(temp_dir.path().join("Other - S01E02.mkv").exists());
    assert_eq!(report.failed, 1);
    assert_eq!(report.renamed, 1);
    assert!(lines[0].starts_with("Error processing"));
}

#[test]
fn test_list_file_drives_batch() {
    let temp_dir = tempdir().unwrap();
    let a = touch(temp_dir.path(), "Alpha.S01E01.mkv");
    let b = touch(temp_dir.path(), "Beta_-_04.mkv");

    let list = temp_dir.path().join("file_list.txt");
    fs::write(
        &list,
        format!("\"{}\"\n\n'{}'\n", a.display(), b.display()),
    )
    .unwrap();

    let paths = load_path_list(&list).unwrap();
    assert_eq!(paths, vec![a, b]);

    let (report, _) = run(&paths, false);
    assert_eq!(report.renamed, 2);
    assert!(temp_dir.path().join("Alpha - S01E01.mkv").exists());
    assert!(temp_dir.path().join("Beta - S01E04.mkv").exists());
}
