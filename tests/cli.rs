use assert_cmd::Command;
use predicates::prelude::*;

use std::{fs, path::PathBuf};

fn testdata(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join(name)
}

fn sales_cost() -> Command {
    Command::cargo_bin("sales-cost").unwrap()
}

#[test]
fn prints_total_and_writes_results_file() {
    let dir = tempfile::tempdir().unwrap();
    sales_cost()
        .current_dir(dir.path())
        .arg(testdata("catalogue.json"))
        .arg(testdata("sales.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Errors found during processing ---"))
        .stdout(predicate::str::contains("product not found: Ghost"))
        .stdout(predicate::str::contains("invalid sale data: "))
        .stdout(predicate::str::contains("Total Sales Cost: $1,301.50"));
    let saved = fs::read_to_string(dir.path().join("SalesResults.txt")).unwrap();
    assert!(saved.contains("Total Sales Cost: $1,301.50"), "{saved}");
    assert!(saved.contains(" seconds\n"), "{saved}");
    assert!(!saved.contains("Ghost"), "{saved}");
}

#[test]
fn lists_errors_in_sales_order() {
    let dir = tempfile::tempdir().unwrap();
    let output = sales_cost()
        .current_dir(dir.path())
        .arg(testdata("catalogue.json"))
        .arg(testdata("sales.json"))
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let ghost = stdout.find("product not found: Ghost").unwrap();
    let keyboard = stdout.find("invalid sale data: ").unwrap();
    assert!(ghost < keyboard, "{stdout}");
}

#[test]
fn output_flag_changes_results_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("totals.txt");
    sales_cost()
        .current_dir(dir.path())
        .arg(testdata("catalogue.json"))
        .arg(testdata("sales.json"))
        .arg("--output")
        .arg(&path)
        .assert()
        .success();
    assert!(path.exists());
    assert!(!dir.path().join("SalesResults.txt").exists());
}

#[test]
fn wrong_argument_count_prints_usage_and_exits_1() {
    sales_cost()
        .arg(testdata("catalogue.json"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
    sales_cost().assert().code(1);
    sales_cost()
        .args(["a.json", "b.json", "c.json"])
        .assert()
        .code(1);
}

#[test]
fn missing_catalogue_exits_1_without_writing_results() {
    let dir = tempfile::tempdir().unwrap();
    sales_cost()
        .current_dir(dir.path())
        .arg(testdata("bogus.json"))
        .arg(testdata("sales.json"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("does not exist"))
        .stdout(predicate::str::contains("bogus.json"));
    assert!(!dir.path().join("SalesResults.txt").exists());
}

#[test]
fn reports_both_load_failures() {
    let dir = tempfile::tempdir().unwrap();
    sales_cost()
        .current_dir(dir.path())
        .arg(testdata("bogus.json"))
        .arg(testdata("invalid.json"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("does not exist"))
        .stdout(predicate::str::contains("is not in a valid format"));
}

#[test]
fn unwritable_results_file_does_not_change_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    sales_cost()
        .current_dir(dir.path())
        .arg(testdata("catalogue.json"))
        .arg(testdata("sales.json"))
        .arg("--output")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Sales Cost: $1,301.50"))
        .stdout(predicate::str::contains("Error writing results file"));
}

#[test]
fn empty_sales_gives_zero_total() {
    let dir = tempfile::tempdir().unwrap();
    let sales = dir.path().join("empty.json");
    fs::write(&sales, "[]").unwrap();
    sales_cost()
        .current_dir(dir.path())
        .arg(testdata("catalogue.json"))
        .arg(&sales)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Sales Cost: $0.00"))
        .stdout(predicate::str::contains("Errors found").not());
}
