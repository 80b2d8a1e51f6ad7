//! End-to-end tests of the `rusty-ratio` binary in headless mode.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn analyzer() -> Command {
    let mut cmd = Command::cargo_bin("rusty-ratio").unwrap();
    cmd.arg("--headless");
    cmd
}

fn write_fixtures(dir: &Path) {
    fs::write(dir.join("test3_1.csv"), "n,T1,T2\n1,2e-6,1e-6\n101,4e-4,2e-5\n201,1.6e-3,4e-5\n").unwrap();
    fs::write(dir.join("test3_2.csv"), "k,T1,T2\n1,1e-4,1e-5\n11,1e-3,5e-5\n").unwrap();
    fs::write(
        dir.join("test3_4.csv"),
        "r,T1,T2\n0.0005,2.0,0.5\n0.002,4.0,0.4\n0.007,3.0,1.0\n",
    )
    .unwrap();
}

/// **What is tested:** Default run over the fixed file names with one file absent
/// **Expectations:** Missing file is reported and skipped; every other section still runs
#[test]
fn default_files_with_one_missing() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());

    analyzer()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: file test3_3.csv not found, skipping."))
        .stdout(predicate::str::contains("Analyzing file: test3_1.csv (Experiment 1 (n))"))
        .stdout(predicate::str::contains("COMPARATIVE ANALYSIS OF ALL FILES"))
        .stdout(predicate::str::contains("SUMMARY STATISTICS"))
        .stdout(predicate::str::contains("DETAILED ANALYSIS test3_4.csv (parameter r)"))
        .stdout(predicate::str::contains("Correlation r-T1:"));
}

/// **What is tested:** A single explicitly named file
/// **Expectations:** No comparison section and no deep-dive
#[test]
fn single_file_has_no_comparison() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());

    analyzer()
        .current_dir(dir.path())
        .arg("test3_1.csv=Only")
        .assert()
        .success()
        .stdout(predicate::str::contains("Analyzing file: test3_1.csv (Only)"))
        .stdout(predicate::str::contains("COMPARATIVE ANALYSIS").not())
        .stdout(predicate::str::contains("DETAILED ANALYSIS").not());
}

/// **What is tested:** Malformed input next to a valid file
/// **Expectations:** The malformed file is reported, the run still succeeds
#[test]
fn malformed_file_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    fs::write(dir.path().join("broken.csv"), "n,T1\n1,2\n").unwrap();

    analyzer()
        .current_dir(dir.path())
        .args(["broken.csv", "test3_2.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error while processing broken.csv"))
        .stdout(predicate::str::contains("Parameter: k"));
}

/// **What is tested:** Deep-dive on a renamed file with a shorter top listing
/// **Expectations:** Buckets and a two-row listing, largest ratio first
#[test]
fn deep_dive_options() {
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    fs::rename(dir.path().join("test3_4.csv"), dir.path().join("sweep_r.csv")).unwrap();

    analyzer()
        .current_dir(dir.path())
        .args(["sweep_r.csv", "--deep-dive", "sweep_r.csv", "--top", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Range r: 0.005 - 0.01"))
        .stdout(predicate::str::contains("Top 2 largest speedups"))
        .stdout(predicate::str::is_match(r"r = 0\.002: 10\.0x speedup\n  r = 0\.0005: 4\.0x speedup\n$").unwrap());
}

/// **What is tested:** No input file exists at all
/// **Expectations:** Only warnings, successful exit
#[test]
fn nothing_to_analyze() {
    let dir = tempfile::tempdir().unwrap();

    analyzer()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("not found, skipping"))
        .stdout(predicate::str::contains("SUMMARY STATISTICS").not());
}
