use std::fs;
use std::path::Path;

use apriori::cli::{normalize_legacy_flags, run, Cli};
use apriori::{AprioriError, HeaderStyle, StopReason};
use clap::Parser;
use tempfile::TempDir;

fn cli_for(db: &Path, out: &Path, minsupp: &str, extra: &[&str]) -> Cli {
    let mut args = vec![
        "apriori".to_string(),
        "-database_file".to_string(),
        db.display().to_string(),
        "-minsupp".to_string(),
        minsupp.to_string(),
        "-output_file".to_string(),
        out.display().to_string(),
    ];
    args.extend(extra.iter().map(|s| s.to_string()));
    Cli::try_parse_from(normalize_legacy_flags(args)).unwrap()
}

fn write_db(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("db.txt");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_legacy_flags_are_normalized() {
    let args = normalize_legacy_flags(["apriori", "-minsupp", "0.5", "-minsupp=0.2", "-v", "--header", "none"]);
    let args: Vec<String> = args.into_iter().map(|a| a.into_string().unwrap()).collect();
    assert_eq!(args, vec!["apriori", "--minsupp", "0.5", "--minsupp=0.2", "-v", "--header", "none"]);
}

#[test]
fn test_run_scenario_a_summary_header() {
    let dir = TempDir::new().unwrap();
    let db = write_db(&dir, "4 3\n0 1\n1 2\n0 1 2\n1\n");
    let out = dir.path().join("out.txt");

    let cli = cli_for(&db, &out, "0.5", &[]);
    assert_eq!(cli.header, HeaderStyle::Summary);
    let summary = run(&cli).unwrap();
    assert_eq!(summary.levels, 2);
    assert_eq!(summary.itemsets, 5);
    assert_eq!(summary.min_count, 2);
    assert_eq!(summary.stop_reason, StopReason::Exhausted);

    let report = fs::read_to_string(&out).unwrap();
    assert_eq!(report, "2 5\n0\n1\n2\n\n0 1\n1 2\n\n");
}

#[test]
fn test_run_legacy_and_bare_headers() {
    let dir = TempDir::new().unwrap();
    let db = write_db(&dir, "4 3\n0 1\n1 2\n0 1 2\n1\n");
    let out = dir.path().join("out.txt");

    run(&cli_for(&db, &out, "0.5", &["--header", "legacy", "--candidates", "union", "--counting", "scan"])).unwrap();
    assert_eq!(fs::read_to_string(&out).unwrap(), "5 3\n0\n1\n2\n\n0 1\n1 2\n\n");

    run(&cli_for(&db, &out, "0.5", &["--header", "none", "--parallel"])).unwrap();
    assert_eq!(fs::read_to_string(&out).unwrap(), "0\n1\n2\n\n0 1\n1 2\n\n");
}

#[test]
fn test_run_empty_database() {
    let dir = TempDir::new().unwrap();
    let db = write_db(&dir, "0 3\n");
    let out = dir.path().join("out.txt");

    let summary = run(&cli_for(&db, &out, "0.5", &[])).unwrap();
    assert_eq!(summary.itemsets, 0);
    assert_eq!(fs::read_to_string(&out).unwrap(), "0 0\n");

    run(&cli_for(&db, &out, "0.5", &["--header", "legacy"])).unwrap();
    assert_eq!(fs::read_to_string(&out).unwrap(), "0 0\n");
}

#[test]
fn test_run_max_size() {
    let dir = TempDir::new().unwrap();
    let db = write_db(&dir, "1 3\n0 1 2\n");
    let out = dir.path().join("out.txt");

    let summary = run(&cli_for(&db, &out, "1.0", &["--max-size", "1"])).unwrap();
    assert_eq!(summary.stop_reason, StopReason::MaxItemsetSize);
    assert_eq!(fs::read_to_string(&out).unwrap(), "1 3\n0\n1\n2\n\n");
}

#[test]
fn test_run_max_size_zero() {
    let dir = TempDir::new().unwrap();
    let db = write_db(&dir, "1 3\n0 1 2\n");
    let out = dir.path().join("out.txt");

    let summary = run(&cli_for(&db, &out, "1.0", &["--max-size", "0"])).unwrap();
    assert_eq!(summary.levels, 0);
    assert_eq!(summary.itemsets, 0);
    assert_eq!(summary.stop_reason, StopReason::MaxItemsetSize);
    assert_eq!(fs::read_to_string(&out).unwrap(), "0 0\n");
}

#[test]
fn test_unknown_option_is_rejected() {
    let args = ["apriori", "-database_file", "db.txt", "-minsupp", "0.5", "-output_file", "out.txt", "--frobnicate"];
    let err = Cli::try_parse_from(normalize_legacy_flags(args)).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
}

#[test]
fn test_load_errors_leave_no_output() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.txt");

    let missing = dir.path().join("missing.txt");
    let err = run(&cli_for(&missing, &out, "0.5", &[])).unwrap_err();
    assert!(matches!(err, AprioriError::DatabaseRead { .. }));
    assert!(!out.exists());

    let db = write_db(&dir, "3 3\n0 1\n1 2\n");
    let err = run(&cli_for(&db, &out, "0.5", &[])).unwrap_err();
    assert!(matches!(err, AprioriError::TransactionCountMismatch { declared: 3, actual: 2 }));
    assert!(!out.exists());

    let db = write_db(&dir, "1 3\n0 one\n");
    let err = run(&cli_for(&db, &out, "0.5", &[])).unwrap_err();
    assert!(matches!(err, AprioriError::InvalidItem { line: 2, .. }));
    assert!(!out.exists());
}

#[test]
fn test_invalid_min_support() {
    let dir = TempDir::new().unwrap();
    let db = write_db(&dir, "1 1\n0\n");
    let out = dir.path().join("out.txt");
    let err = run(&cli_for(&db, &out, "1.5", &[])).unwrap_err();
    assert!(matches!(err, AprioriError::InvalidMinSupport(_)));
    assert!(!out.exists());
}

#[test]
fn test_candidate_guard_from_cli() {
    let dir = TempDir::new().unwrap();
    let db = write_db(&dir, "1 6\n0 1 2 3 4 5\n");
    let out = dir.path().join("out.txt");

    let err = run(&cli_for(&db, &out, "1.0", &["--max-candidates", "10"])).unwrap_err();
    assert!(matches!(err, AprioriError::CandidateLimitExceeded { level: 2, .. }));

    // 0 disables the guard
    let summary = run(&cli_for(&db, &out, "1.0", &["--max-candidates", "0"])).unwrap();
    assert_eq!(summary.itemsets, 63);
}

#[test]
fn test_unwritable_output() {
    let dir = TempDir::new().unwrap();
    let db = write_db(&dir, "1 1\n0\n");
    let out = dir.path().join("no-such-dir").join("out.txt");
    let err = run(&cli_for(&db, &out, "0.5", &[])).unwrap_err();
    assert!(matches!(err, AprioriError::ReportWrite { .. }));
}
