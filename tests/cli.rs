use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "moneytrack";
const PASSWORD: &str = "secret";

fn moneytrack(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("MONEYTRACK_DATA_DIR", data_dir)
        .env_remove("MONEYTRACK_LOGIN")
        .env_remove("MONEYTRACK_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

fn as_user(data_dir: &Path, login: &str) -> Command {
    let mut cmd = moneytrack(data_dir);
    cmd.args(["--login", login, "--password", PASSWORD]);
    cmd
}

fn register(data_dir: &Path, login: &str) {
    moneytrack(data_dir)
        .args(["register", login, "--password", PASSWORD])
        .assert()
        .success()
        .stdout(contains(format!("User '{}' registered.", login)));
}

#[test]
fn cli_help_lists_commands() {
    let temp = TempDir::new().unwrap();
    moneytrack(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("register").and(contains("transfer")).and(contains("summary")));
}

#[test]
fn cli_income_then_summary() {
    let temp = TempDir::new().unwrap();
    register(temp.path(), "alice");

    as_user(temp.path(), "alice")
        .args(["income", "1000", "-d", "salary"])
        .assert()
        .success()
        .stdout(contains("Income of $1000 recorded."));

    as_user(temp.path(), "alice")
        .args(["income", "200", "-c", "Bonus"])
        .assert()
        .success();

    as_user(temp.path(), "alice")
        .arg("summary")
        .assert()
        .success()
        .stdout(
            contains("Total income: $1200")
                .and(contains("Uncategorized: $1000"))
                .and(contains("Bonus: $200"))
                .and(contains("Balance: $1200")),
        );

    assert!(temp.path().join("data").join("data_alice.json").exists());
}

#[test]
fn cli_register_duplicate_fails() {
    let temp = TempDir::new().unwrap();
    register(temp.path(), "alice");

    moneytrack(temp.path())
        .args(["register", "alice", "--password", "other"])
        .assert()
        .failure()
        .stderr(contains("User already exists: alice"));
}

#[test]
fn cli_wrong_password_fails() {
    let temp = TempDir::new().unwrap();
    register(temp.path(), "alice");

    moneytrack(temp.path())
        .args(["--login", "alice", "--password", "wrong", "summary"])
        .assert()
        .failure()
        .stderr(contains("Authentication failed"));
}

#[test]
fn cli_missing_login_fails() {
    let temp = TempDir::new().unwrap();
    moneytrack(temp.path())
        .args(["--password", PASSWORD, "summary"])
        .assert()
        .failure()
        .stderr(contains("A login is required"));
}

#[test]
fn cli_budget_warning_and_status() {
    let temp = TempDir::new().unwrap();
    register(temp.path(), "alice");

    as_user(temp.path(), "alice")
        .args(["budget", "status"])
        .assert()
        .success()
        .stdout(contains("No budgets set."));

    as_user(temp.path(), "alice").args(["income", "2000"]).assert().success();
    as_user(temp.path(), "alice")
        .args(["budget", "set", "Food", "500"])
        .assert()
        .success()
        .stdout(contains("Budget for 'Food' set to $500."));

    as_user(temp.path(), "alice")
        .args(["expense", "300", "Food"])
        .assert()
        .success()
        .stdout(contains("Warning").not());

    as_user(temp.path(), "alice")
        .args(["expense", "250", "Food"])
        .assert()
        .success()
        .stdout(contains("Warning: Budget limit exceeded for category: Food"));

    as_user(temp.path(), "alice")
        .args(["budget", "status"])
        .assert()
        .success()
        .stdout(contains("Food").and(contains("-$50")).and(contains("OVER")));
}

#[test]
fn cli_overdraft_warning() {
    let temp = TempDir::new().unwrap();
    register(temp.path(), "alice");

    as_user(temp.path(), "alice").args(["income", "100"]).assert().success();
    as_user(temp.path(), "alice")
        .args(["expense", "150", "Rent"])
        .assert()
        .success()
        .stdout(contains("Warning: Wallet balance is negative"));
}

#[test]
fn cli_transfer_between_users() {
    let temp = TempDir::new().unwrap();
    register(temp.path(), "alice");
    register(temp.path(), "bob");

    as_user(temp.path(), "alice").args(["income", "500"]).assert().success();
    as_user(temp.path(), "alice")
        .args(["transfer", "bob", "120.50"])
        .assert()
        .success()
        .stdout(contains("Transferred $120.50 to 'bob'."));

    as_user(temp.path(), "bob")
        .arg("history")
        .assert()
        .success()
        .stdout(contains("Transfer").and(contains("Balance: $120.50")));

    as_user(temp.path(), "alice")
        .arg("history")
        .assert()
        .success()
        .stdout(contains("Balance: $379.50"));
}

#[test]
fn cli_transfer_hides_recipient_warnings() {
    let temp = TempDir::new().unwrap();
    register(temp.path(), "alice");
    register(temp.path(), "bob");

    as_user(temp.path(), "alice").args(["income", "100"]).assert().success();
    as_user(temp.path(), "bob")
        .args(["expense", "50", "Food"])
        .assert()
        .success()
        .stdout(contains("Warning: Wallet balance is negative"));

    as_user(temp.path(), "alice")
        .args(["transfer", "bob", "10"])
        .assert()
        .success()
        .stdout(contains("Transferred $10 to 'bob'.").and(contains("Warning").not()));

    as_user(temp.path(), "bob")
        .arg("history")
        .assert()
        .success()
        .stdout(contains("Balance: -$40"));
}

#[test]
fn cli_audit_shows_incoming_transfers() {
    let temp = TempDir::new().unwrap();
    register(temp.path(), "alice");
    register(temp.path(), "bob");

    as_user(temp.path(), "alice").args(["income", "30"]).assert().success();
    as_user(temp.path(), "alice")
        .args(["transfer", "bob", "10"])
        .assert()
        .success();

    as_user(temp.path(), "bob")
        .arg("audit")
        .assert()
        .success()
        .stdout(contains("CREATE Transfer").and(contains("(alice)")));
}

#[test]
fn cli_income_too_large_is_rejected() {
    let temp = TempDir::new().unwrap();
    register(temp.path(), "alice");
    let max = "79228162514264337593543950335";

    as_user(temp.path(), "alice").args(["income", max]).assert().success();
    as_user(temp.path(), "alice")
        .args(["income", max])
        .assert()
        .failure()
        .stderr(contains("Amount is too large"));

    as_user(temp.path(), "alice")
        .arg("summary")
        .assert()
        .success()
        .stdout(contains(format!("Total income: ${}", max)));
}

#[test]
fn cli_transfer_to_unknown_user_fails() {
    let temp = TempDir::new().unwrap();
    register(temp.path(), "alice");

    as_user(temp.path(), "alice")
        .args(["transfer", "nobody", "10"])
        .assert()
        .failure()
        .stderr(contains("User not found: nobody"));
}

#[test]
fn cli_expenses_report_flags_unknown_category() {
    let temp = TempDir::new().unwrap();
    register(temp.path(), "alice");

    as_user(temp.path(), "alice").args(["expense", "40", "Taxi"]).assert().success();
    as_user(temp.path(), "alice")
        .args(["expenses", "Taxi", "Nonexistent"])
        .assert()
        .success()
        .stdout(
            contains(" - Taxi: $40")
                .and(contains("Category 'Nonexistent' not found or no expenses."))
                .and(contains("Total for selected categories: $40")),
        );
}

#[test]
fn cli_summary_to_file() {
    let temp = TempDir::new().unwrap();
    register(temp.path(), "alice");

    as_user(temp.path(), "alice")
        .args(["summary", "-o", "summary.txt"])
        .assert()
        .success()
        .stdout(contains("Report written to"));

    let report = std::fs::read_to_string(temp.path().join("reports").join("summary.txt")).unwrap();
    assert!(report.contains("Total income: $0"));
}

#[test]
fn cli_invalid_amount_fails() {
    let temp = TempDir::new().unwrap();
    register(temp.path(), "alice");

    as_user(temp.path(), "alice")
        .args(["income", "abc"])
        .assert()
        .failure()
        .stderr(contains("Invalid amount format"));

    as_user(temp.path(), "alice")
        .args(["expense", "-5", "Food"])
        .assert()
        .failure()
        .stderr(contains("Amount cannot be negative"));
}

#[test]
fn cli_audit_lists_recent_entries() {
    let temp = TempDir::new().unwrap();
    register(temp.path(), "alice");
    as_user(temp.path(), "alice").args(["income", "10"]).assert().success();

    as_user(temp.path(), "alice")
        .args(["audit", "-n", "5"])
        .assert()
        .success()
        .stdout(contains("CREATE User alice").and(contains("CREATE Transaction")));
}

#[test]
fn cli_config_shows_paths() {
    let temp = TempDir::new().unwrap();
    moneytrack(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(
            contains("Data directory:")
                .and(contains("(0 entries)"))
                .and(contains("Currency symbol: $")),
        );
}
