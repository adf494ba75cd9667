//! Tests for CLI argument parsing and the compiled binary

mod common;

use assert_cmd::Command;
use basics::cli::{Cli, Commands};
use basics::menu::MenuKind;
use clap::Parser;
use predicates::prelude::*;

fn basics_cmd() -> Command {
    let mut cmd = Command::cargo_bin("basics").unwrap();
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_default_values() {
    let cli = Cli::parse_from(["basics"]);

    assert!(cli.command.is_none());
    assert_eq!(cli.precision, 2, "Default precision should be 2");
    assert!(!cli.no_color, "Default no_color should be false");
    assert_eq!(cli.menu_kind(), Some(MenuKind::Weight));
}

#[test]
fn test_cli_display_config() {
    let cli = Cli::parse_from(["basics", "--precision", "4"]);
    let display = cli.display_config(true);
    assert_eq!(display.precision, 4);
    assert!(display.color);

    let cli = Cli::parse_from(["basics", "--no-color"]);
    assert!(!cli.display_config(true).color);
    assert!(!Cli::parse_from(["basics"]).display_config(false).color);
}

#[test]
fn test_cli_precision_upper_bound() {
    assert!(Cli::try_parse_from(["basics", "--precision", "10"]).is_ok());
    assert!(Cli::try_parse_from(["basics", "--precision", "11"]).is_err());
    assert!(Cli::try_parse_from(["basics", "--precision", "two"]).is_err());
}

#[test]
fn test_cli_circle_menu_vs_report() {
    let cli = Cli::parse_from(["basics", "circle"]);
    assert_eq!(cli.menu_kind(), Some(MenuKind::Circle));

    let cli = Cli::parse_from(["basics", "circle", "--radius", "3"]);
    assert_eq!(cli.menu_kind(), None);
    assert!(matches!(
        cli.command,
        Some(Commands::Circle { radius: Some(r) }) if r == 3.0
    ));
}

#[test]
fn test_cli_interest_args() {
    let cli = Cli::parse_from([
        "basics", "interest", "-p", "1000", "-r", "5", "-n", "12", "-t", "10",
    ]);
    match cli.command {
        Some(Commands::Interest(args)) => {
            assert_eq!(args.principal, Some(1000.0));
            assert_eq!(args.rate, Some(5.0));
            assert_eq!(args.compounds, Some(12));
            assert_eq!(args.years, Some(10));
        }
        other => panic!("unexpected command {:?}", other),
    }
}

#[test]
fn test_cli_interest_rejects_zero_compounding() {
    assert!(Cli::try_parse_from(["basics", "interest", "--compounds", "0"]).is_err());
}

#[test]
fn test_cli_rejects_non_finite_radius() {
    assert!(Cli::try_parse_from(["basics", "circle", "--radius", "inf"]).is_err());
}

#[test]
fn test_cli_arithmetic_negative_operands() {
    let cli = Cli::parse_from(["basics", "arithmetic", "-a", "-3", "-b", "-1.5"]);
    assert!(matches!(
        cli.command,
        Some(Commands::Arithmetic { a: -3, b }) if b == -1.5
    ));
}

#[test]
fn test_cli_global_flags_after_subcommand() {
    let cli = Cli::parse_from(["basics", "weight", "--precision", "1", "--no-color"]);
    assert_eq!(cli.precision, 1);
    assert!(cli.no_color);
}

#[test]
fn test_binary_weight_session() {
    basics_cmd()
        .write_stdin(common::input_of(&["1", "10", "0"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("10.00 pounds = 4.54 kilograms"))
        .stdout(predicate::str::ends_with("[0] Exiting...\n"));
}

#[test]
fn test_binary_empty_stdin_exits_cleanly() {
    basics_cmd()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("[+] Weight Converter"))
        .stdout(predicate::str::ends_with("[0] Exiting...\n"));
}

#[test]
fn test_binary_invalid_input_is_not_fatal() {
    basics_cmd()
        .arg("circle")
        .write_stdin(common::input_of(&["9", "1", "oops", "0"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("[!] Invalid choice '9'"))
        .stdout(predicate::str::contains("[!] Invalid value 'oops'"));
}

#[test]
fn test_binary_circle_report() {
    basics_cmd()
        .args(["circle", "--radius", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[+] Radius: 2.00"))
        .stdout(predicate::str::contains("50.27"));
}

#[test]
fn test_binary_interest() {
    basics_cmd()
        .args(["interest", "-p", "1000", "-r", "10", "-n", "1", "-t", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The compound interest is: $210.00"))
        .stdout(predicate::str::contains(
            "The total amount after 2 years is: $1210.00",
        ));
}

#[test]
fn test_binary_greet_and_arithmetic() {
    basics_cmd()
        .args(["greet", "--name", "Faisal", "--location", "Saudi Arabia, Riyadh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[+] Hi Faisal"))
        .stdout(predicate::str::contains(
            "[+] Your Location is: Saudi Arabia, Riyadh",
        ));

    basics_cmd()
        .arg("arithmetic")
        .assert()
        .success()
        .stdout(predicate::str::contains("The sum of 5 and 2.5 is: 7.5"));
}

#[test]
fn test_binary_profile() {
    basics_cmd()
        .args(["profile", "--name", "Sara", "--age", "20", "--grade", "A", "--gpa", "3.9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[+] GPA: 3.90"))
        .stdout(predicate::str::contains("[+] User input completed."));
}

#[test]
fn test_binary_non_utf8_choice_is_not_fatal() {
    basics_cmd()
        .write_stdin(b"\xff\n0\n".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::contains("[!] Invalid choice"))
        .stdout(predicate::str::ends_with("[0] Exiting...\n"));
}

#[test]
fn test_binary_non_utf8_value_is_not_fatal() {
    basics_cmd()
        .write_stdin(b"1\n\xff\xfe\n2\n10\n0\n".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::contains("[!] Invalid value"))
        .stdout(predicate::str::contains("10.00 kilograms = 22.05 pounds"));
}

#[test]
fn test_binary_greet_reads_missing_name_from_stdin() {
    basics_cmd()
        .args(["greet", "--location", "X"])
        .write_stdin("Sara\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[#] Enter your name: "))
        .stdout(predicate::str::contains("[+] Hi Sara"))
        .stdout(predicate::str::contains("[+] Your Location is: X"));
}

#[test]
fn test_binary_interest_reads_all_terms_from_stdin() {
    basics_cmd()
        .arg("interest")
        .write_stdin(common::input_of(&["1000", "10", "1", "2"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("The compound interest is: $210.00"));
}

#[test]
fn test_binary_profile_reads_from_stdin() {
    basics_cmd()
        .arg("profile")
        .write_stdin(common::input_of(&["Sara Ali", "21", "A", "3.856"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("[+] Name: Sara Ali"))
        .stdout(predicate::str::contains("[+] GPA: 3.86"));
}

#[test]
fn test_binary_piped_bad_number_fails_with_message() {
    basics_cmd()
        .args(["profile", "--name", "Sara", "--grade", "A", "--gpa", "3.0"])
        .write_stdin("twenty\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value 'twenty' for: Enter your age"));
}

#[test]
fn test_binary_piped_input_ends_early() {
    basics_cmd()
        .arg("greet")
        .write_stdin("Sara\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No input left for: Enter your location"));
}
