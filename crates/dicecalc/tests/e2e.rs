//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn dicecalc() -> Command {
    let mut cmd = Command::cargo_bin("dicecalc").expect("binary not found");
    for var in [
        "NUMBER_OF_DICE",
        "TOTAL_NUMBER_OF_TRIES",
        "DECIMALS",
        "NUMBER_OF_RUNS",
        "DICECALC_SEED",
        "DICECALC_GUARD_DIGITS",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn help_flag() {
    dicecalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dice"));
}

#[test]
fn version_flag() {
    dicecalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dicecalc"));
}

#[test]
fn exact_only_default_pool() {
    dicecalc()
        .args(["--exact-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Calculated number of rounds needed for 50 dice: 25.1773086926526",
        ));
}

#[test]
fn exact_only_quiet_single_die() {
    dicecalc()
        .args(["-n", "1", "-d", "5", "--exact-only", "-q"])
        .assert()
        .success()
        .stdout("6.00000\n");
}

#[test]
fn exact_two_dice() {
    dicecalc()
        .args(["-n", "2", "-d", "10", "--exact-only", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8.7272727273"));
}

#[test]
fn zero_dice_fails_fast() {
    dicecalc()
        .args(["-n", "0"])
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("number of dice must be at least 1"));
}

#[test]
fn negative_dice_fails_fast() {
    dicecalc()
        .args(["--dice=-1"])
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty());
}

#[test]
fn zero_trials_fails_before_exact_value() {
    dicecalc()
        .args(["-n", "3", "--trials", "0"])
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty());
}

#[test]
fn absurd_trial_count_fails_fast() {
    dicecalc()
        .args(["-n", "50", "-t", "9223372036854775807"])
        .env("NO_COLOR", "1")
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("[ERROR]"))
        .stderr(predicate::str::contains("number of trials must be at most"));
}

#[test]
fn failed_cross_check_is_a_warning() {
    // A mean of k/100 trials can never equal 96/11 exactly.
    dicecalc()
        .args(["-n", "2", "-t", "100", "-r", "1", "--seed", "5", "--tolerance", "0"])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("run time: "))
        .stderr(predicate::str::contains("[WARN] simulated mean"));
}

#[test]
fn simulation_runs_are_reported() {
    dicecalc()
        .args(["-n", "2", "-t", "20000", "-r", "3", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("start time 0"))
        .stdout(predicate::str::contains("start time 2"))
        .stdout(predicate::str::contains("run time thread 1:"))
        .stdout(predicate::str::contains("Average number of rounds needed: 8."))
        .stdout(predicate::str::contains("run time: "));
}

#[test]
fn sequential_runs() {
    dicecalc()
        .args(["-n", "1", "-t", "5000", "-r", "2", "--seed", "1", "--sequential"])
        .assert()
        .success()
        .stdout(predicate::str::contains("run time thread 1:"));
}

#[test]
fn seeded_quiet_runs_are_reproducible() {
    let args = ["-n", "4", "-t", "3000", "-r", "2", "--seed", "7", "-q", "--sequential"];
    let first = dicecalc().args(args).output().unwrap();
    let second = dicecalc().args(args).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn env_var_number_of_dice() {
    dicecalc()
        .env("NUMBER_OF_DICE", "2")
        .env("DECIMALS", "4")
        .args(["--exact-only", "-q"])
        .assert()
        .success()
        .stdout("8.7273\n");
}

#[test]
fn table_mode() {
    dicecalc()
        .args(["-n", "3", "-d", "4", "--guard-digits", "6", "--table", "--exact-only", "-q"])
        .assert()
        .success()
        .stdout("   1  6.0000\n   2  8.7273\n   3  10.5554\n");
}

#[test]
fn low_precision_without_guard_digits_drifts_in_last_place() {
    // E(3) = 10.55544..., but the memoised E(2) = 8.7273 is already rounded.
    dicecalc()
        .args(["-n", "3", "-d", "4", "--exact-only", "-q"])
        .assert()
        .success()
        .stdout("10.5555\n");
}

#[test]
fn output_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("result.txt");
    dicecalc()
        .args([
            "-n",
            "2",
            "-d",
            "6",
            "--exact-only",
            "-q",
            "-o",
            path.to_str().unwrap(),
        ])
        .assert()
        .success();
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "8.727273\n");
}

#[test]
fn verbose_mode() {
    dicecalc()
        .args(["-n", "5", "-t", "1000", "-r", "2", "-v", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exact calculation took"));
}

#[test]
fn shell_completion_bash() {
    dicecalc()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dicecalc"));
}

#[test]
fn shell_completion_zsh() {
    dicecalc()
        .args(["--completion", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dicecalc"));
}
