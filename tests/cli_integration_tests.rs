use assert_cmd::Command;
use predicates::prelude::*;

fn fated() -> Command {
    Command::cargo_bin("fated").unwrap()
}

// ============================================================================
// One-shot commands
// ============================================================================

#[test]
fn test_roll_prints_dice_line() {
    fated()
        .arg("roll")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[+-][0-4]: [-+o] [-+o] [-+o] [-+o]\n$").unwrap());
}

#[test]
fn test_roll_sum_matches_faces() {
    let output = fated().arg("roll").output().unwrap();
    assert!(output.status.success());

    let line = String::from_utf8(output.stdout).unwrap();
    let (total, faces) = line.trim_end().split_once(": ").unwrap();
    let expected: i32 = faces
        .split(' ')
        .map(|face| match face {
            "+" => 1,
            "-" => -1,
            _ => 0,
        })
        .sum();
    assert_eq!(total.parse::<i32>().unwrap(), expected);
}

#[test]
fn test_draw_prints_card() {
    let output = fated().arg("draw").output().unwrap();
    assert!(output.status.success());

    let card = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = card.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "+-----------+");
    assert_eq!(lines[9], "+-----------+");
    assert!(lines.iter().all(|line| line.len() == 13));

    // The corner sums agree.
    let top_sum = lines[1][9..11].to_string();
    let bottom_sum = lines[8][2..4].to_string();
    assert_eq!(top_sum, bottom_sum);
}

#[test]
fn test_debug_flag_is_global() {
    fated()
        .env("XDG_CACHE_HOME", std::env::temp_dir())
        .args(["roll", "--debug"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

// ============================================================================
// Interactive mode without a terminal
// ============================================================================

#[test]
fn test_interactive_without_tty_fails_cleanly() {
    fated()
        .args(["-i", "roll"])
        .write_stdin("")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "error: cannot allocate terminal for fated",
        ));
}

#[test]
fn test_interactive_draw_without_tty_reports_cause_in_debug() {
    fated()
        .env("XDG_CACHE_HOME", std::env::temp_dir())
        .args(["--debug", "--interactive", "draw"])
        .write_stdin("")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("caused by: stdout is not a terminal"));
}

// ============================================================================
// Version and usage
// ============================================================================

#[test]
fn test_version_command() {
    fated()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "fated {}",
            env!("CARGO_PKG_VERSION")
        )))
        .stdout(predicate::str::contains("commit "))
        .stdout(predicate::str::contains("built "));
}

#[test]
fn test_version_flag() {
    fated()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_command_is_usage_error() {
    fated()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_unknown_command_fails() {
    fated().arg("shuffle").assert().failure();
}
