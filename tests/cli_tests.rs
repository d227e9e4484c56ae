//! Integration tests for the folio CLI.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to create a folio Command with a clean mail/database environment.
fn folio() -> Command {
    let mut cmd = cargo_bin_cmd!("folio");
    for var in [
        "DATABASE_PATH",
        "ADMIN_PASSWORD_HASH",
        "JWT_SECRET",
        "MAIL_API_URL",
        "MAIL_API_KEY",
        "MAIL_FROM",
        "CONTACT_EMAIL",
        "FRONTEND_ORIGIN",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_help() {
    folio()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Portfolio content API"));
}

#[test]
fn test_version() {
    folio().arg("--version").assert().success();
}

#[test]
fn test_hash_password_prints_known_digest() {
    folio()
        .args(["hash-password", "correct-horse-battery-staple"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ADMIN_PASSWORD_HASH=87cbebfeebc05f7c54ac9336c4b4bbec831227a641951a4bde7edd56020f8590",
        ));
}

#[test]
fn test_seed_creates_database_with_content() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("portfolio.db");

    folio()
        .env("DATABASE_PATH", &db_path)
        .arg("seed")
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded"));

    assert!(db_path.exists());

    // Seeding again replaces the dataset rather than failing on the
    // unique platform constraint.
    folio()
        .env("DATABASE_PATH", &db_path)
        .arg("seed")
        .assert()
        .success();
}

#[test]
fn test_mail_test_succeeds_with_noop_transport() {
    folio()
        .arg("mail-test")
        .assert()
        .success()
        .stdout(predicate::str::contains("accepted by the transport"));
}
