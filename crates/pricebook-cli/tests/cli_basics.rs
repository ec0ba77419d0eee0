//! CLI Basics Tests
//!
//! Guidance output, help, and exit codes.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use pricebook_testing::TestWorld;

#[test]
fn test_no_subcommand_prints_guidance() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&[])?;

    assert!(result.success());
    assert!(result.stdout().contains("pricebook tui"));
    assert!(result.stdout().contains("pricebook add <name> <price>"));

    Ok(())
}

#[test]
fn test_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("pricebook").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("update"))
        .stdout(predicate::str::contains("remove"))
        .stdout(predicate::str::contains("clear"))
        .stdout(predicate::str::contains("total"));
}

#[test]
fn test_failure_exits_nonzero_with_error_prefix() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["remove", "0"])?;

    assert!(!result.success());
    assert!(result.stderr().starts_with("Error:"));

    Ok(())
}
