use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fitcoach_on(data_dir: &TempDir, date: &str) -> Command {
    let mut cmd = Command::cargo_bin("fitcoach").unwrap();
    cmd.env("FITCOACH_DATA_DIR", data_dir.path())
        .env_remove("FITCOACH_USER")
        .env_remove("FITCOACH_LOG")
        .args(["--offline", "--date", date]);
    cmd
}

fn fitcoach(data_dir: &TempDir) -> Command {
    fitcoach_on(data_dir, "2025-03-01")
}

#[test]
fn test_dashboard_for_new_user() {
    let dir = TempDir::new().unwrap();

    fitcoach(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("guest · 2025-03-01"))
        .stdout(predicate::str::contains("1674 kcal"))
        .stdout(predicate::str::contains("Nothing logged yet."));
}

#[test]
fn test_log_then_list() {
    let dir = TempDir::new().unwrap();

    fitcoach(&dir)
        .args(["log", "add", "грудка", "150"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Куриная грудка, варёная"))
        .stdout(predicate::str::contains("Remaining today: 1427 kcal"));

    fitcoach(&dir)
        .args(["log", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 248 kcal"));

    // Another day is untouched
    fitcoach_on(&dir, "2025-03-02")
        .args(["log", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing logged yet."));
}

#[test]
fn test_unknown_food_fails() {
    let dir = TempDir::new().unwrap();

    fitcoach(&dir)
        .args(["log", "add", "пицца", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("пицца"));
}

#[test]
fn test_profile_set_changes_target() {
    let dir = TempDir::new().unwrap();

    fitcoach(&dir)
        .args(["profile", "set", "--goal", "lose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Daily target: 1674 -> 1423 kcal"));

    fitcoach(&dir)
        .args(["profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Goal:      lose"));

    fitcoach(&dir)
        .args(["profile", "set", "--weight", "0"])
        .assert()
        .failure();
}

#[test]
fn test_fit_with_budget() {
    let dir = TempDir::new().unwrap();

    fitcoach(&dir)
        .args(["fit", "грудка", "--budget", "500"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("303 g of Куриная грудка"));
}

#[test]
fn test_users_are_isolated() {
    let dir = TempDir::new().unwrap();

    fitcoach(&dir)
        .args(["--user", "anna", "log", "add", "Банан", "100"])
        .assert()
        .success();

    fitcoach(&dir)
        .args(["log", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing logged yet."));

    assert!(dir.path().join("data/users/fitcoach_anna.json").exists());
}

#[test]
fn test_workout_override() {
    let dir = TempDir::new().unwrap();

    fitcoach(&dir)
        .args(["workout", "--location", "gym", "--goal", "gain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Гипертрофия"));
}

#[test]
fn test_export_csv_to_stdout() {
    let dir = TempDir::new().unwrap();

    fitcoach(&dir).args(["log", "add", "Яблоко", "200"]).assert().success();

    fitcoach(&dir)
        .args(["export", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-03-01,"))
        .stdout(predicate::str::contains("Яблоко,200.0,104.0"));
}

#[test]
fn test_init_seeds_food_table() {
    let dir = TempDir::new().unwrap();

    fitcoach(&dir).arg("init").assert().success();

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data/foods.json").exists());

    fitcoach(&dir)
        .args(["food", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("foods.json"));
}

#[test]
fn test_stats_rejects_oversized_period() {
    let dir = TempDir::new().unwrap();

    fitcoach(&dir)
        .args(["stats", "--days", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Last 7 days"));

    fitcoach(&dir)
        .args(["stats", "--days", "200000000"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("at most 3660 days"));
}
