//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `courseval` command isolated from any config on the host.
fn courseval(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("courseval").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("COURSEVAL_MAX_COURSES")
        .env_remove("COURSEVAL_MAX_EVALUATIONS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();
    courseval(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Course evaluation register"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();
    courseval(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("courseval"));
}

#[test]
fn quit_immediately() {
    let dir = TempDir::new().unwrap();
    courseval(&dir)
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Course Evaluator"))
        .stdout(predicate::str::contains("Exiting program..."));
}

#[test]
fn end_of_input_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    courseval(&dir).write_stdin("").assert().success();
}

#[test]
fn register_evaluate_and_summarise() {
    let dir = TempDir::new().unwrap();
    let script = "\
1
a0001a
Algebra
2
A0001A
5
5
5
2
a0001a
1
1
1
2
A0001A
3
3
3
3
A0001A
q
";

    courseval(&dir)
        .arg("run")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Course A0001A: Algebra was added!"))
        .stdout(predicate::str::contains("Number of evaluations: 3"))
        .stdout(predicate::str::contains("Teacher: 3.00"))
        .stdout(predicate::str::contains("Total average: 3.00"));
}

#[test]
fn listing_by_score_is_descending() {
    let dir = TempDir::new().unwrap();
    let script = "\
1
A0001A
Low
1
A0002A
High
1
A0003A
Middle
2
A0001A
2
2
2
2
A0002A
5
4
5
2
A0003A
3
3
3
5
q
";

    let output = courseval(&dir)
        .write_stdin(script)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    let listing = &stdout[stdout.rfind("Average").unwrap()..];
    let high = listing.find("High").unwrap();
    let middle = listing.find("Middle").unwrap();
    let low = listing.find("Low").unwrap();
    assert!(high < middle && middle < low, "unexpected order:\n{listing}");
    assert!(listing.contains("4.67"));
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    courseval(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created courseval.toml"));

    assert!(dir.path().join("courseval.toml").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    courseval(&dir).arg("init").assert().success();

    courseval(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn config_limits_apply() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("courseval.toml"),
        "[limits]\nmax_courses = 1\n",
    )
    .unwrap();

    courseval(&dir)
        .write_stdin("1\nA0001A\nAlgebra\n1\nA0002A\nBiology\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Course A0001A: Algebra was added!"))
        .stdout(predicate::str::contains("at most 1 courses"));
}

#[test]
fn env_limit_overrides_config() {
    let dir = TempDir::new().unwrap();

    courseval(&dir)
        .env("COURSEVAL_MAX_EVALUATIONS", "1")
        .write_stdin("1\nA0001A\nAlgebra\n2\nA0001A\n4\n4\n4\n2\nA0001A\n5\n5\n5\n3\nA0001A\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Evaluation was not registered"))
        .stdout(predicate::str::contains("Number of evaluations: 1"));
}

#[test]
fn missing_config_file_fails() {
    let dir = TempDir::new().unwrap();

    courseval(&dir)
        .arg("--config")
        .arg("no_such_file.toml")
        .write_stdin("q\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn bad_env_limit_fails() {
    let dir = TempDir::new().unwrap();

    courseval(&dir)
        .env("COURSEVAL_MAX_COURSES", "zero")
        .write_stdin("q\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("COURSEVAL_MAX_COURSES"));
}
