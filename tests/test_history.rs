use std::fs;

use fruit_dodge::history::*;

const HISTORY_FILE: &str = "playerTimeFile.txt";

// ── scan_times ────────────────────────────────────────────────────────────────

#[test]
fn scan_reads_one_value_per_line() {
    let times: Vec<f32> = scan_times("1\n2.5\n0.3\n").collect();
    assert_eq!(times, vec![1.0, 2.5, 0.3]);
}

#[test]
fn scan_stops_at_first_malformed_token() {
    let times: Vec<f32> = scan_times("1.5\n4.0\noops\n9.0\n").collect();
    assert_eq!(times, vec![1.5, 4.0]);
}

// ── FileHistory ───────────────────────────────────────────────────────────────

#[test]
fn missing_file_is_empty_history() {
    let dir = tempfile::tempdir().unwrap();
    let h = FileHistory::new(dir.path().join(HISTORY_FILE));
    assert_eq!(h.high_score(), 0.0);
    assert_eq!(h.count(), 0);
}

#[test]
fn empty_file_is_empty_history() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(HISTORY_FILE);
    fs::write(&path, "").unwrap();
    let h = FileHistory::new(&path);
    assert_eq!(h.high_score(), 0.0);
    assert_eq!(h.count(), 0);
}

#[test]
fn high_score_and_count_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(HISTORY_FILE);
    fs::write(&path, "1.0\n2.5\n0.3\n").unwrap();
    let h = FileHistory::new(&path);
    assert_eq!(h.high_score(), 2.5);
    assert_eq!(h.count(), 3);
}

#[test]
fn append_creates_then_appends_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(HISTORY_FILE);
    let mut h = FileHistory::new(&path);
    h.append(1.25);
    h.append(0.5);

    assert_eq!(fs::read_to_string(&path).unwrap(), "1.25\n0.5\n");
    assert_eq!(h.count(), 2);
    assert_eq!(h.high_score(), 1.25);
}

#[test]
fn malformed_line_truncates_the_scan() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(HISTORY_FILE);
    fs::write(&path, "3.0\nbad\n7.0\n").unwrap();
    let h = FileHistory::new(&path);
    assert_eq!(h.count(), 1);
    assert_eq!(h.high_score(), 3.0);
}

#[test]
fn append_to_unwritable_path_is_silent() {
    let dir = tempfile::tempdir().unwrap();
    // appending to a directory fails; the store just carries on
    let mut h = FileHistory::new(dir.path());
    h.append(4.0);
    assert_eq!(h.count(), 0);
}

#[test]
fn appended_history_is_gone_with_its_dir() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().to_path_buf();
    let path = root.join(HISTORY_FILE);
    let mut h = FileHistory::new(&path);
    h.append(2.0);
    assert!(path.exists());

    dir.close().unwrap();
    assert!(!path.exists());
    assert!(!root.exists());
}

// ── MemoryHistory ─────────────────────────────────────────────────────────────

#[test]
fn memory_history_matches_file_semantics() {
    let mut h = MemoryHistory::new();
    assert_eq!(h.high_score(), 0.0);
    assert_eq!(h.count(), 0);

    let mut h2 = MemoryHistory::with_times(vec![1.0, 2.5, 0.3]);
    assert_eq!(h2.high_score(), 2.5);
    assert_eq!(h2.count(), 3);

    h.append(0.75);
    h2.append(9.0);
    assert_eq!(h.high_score(), 0.75);
    assert_eq!(h2.high_score(), 9.0);
    assert_eq!(h2.count(), 4);
}
