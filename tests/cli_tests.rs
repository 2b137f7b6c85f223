use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use stockform::db::pool::DbPool;

mod common;
use common::{seed, setup_test_db, sf};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("cli_init");

    sf().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized").and(contains("schema v1")));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let exists: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='items'",
            [],
            |row| row.get(0),
        )
        .expect("query sqlite_master");
    assert_eq!(exists, 1);
}

#[test]
fn test_init_twice_is_harmless() {
    let db_path = setup_test_db("cli_init_twice");

    sf().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let pool = DbPool::new(&db_path);
    seed(&pool, "Widget", 5, "Small metal widget");

    sf().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    sf().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("('Widget', 5, 'Small metal widget')"));
}

#[test]
fn test_list_empty_database() {
    let db_path = setup_test_db("cli_list_empty");

    sf().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    sf().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("[]"));
}

#[test]
fn test_list_json() {
    let db_path = setup_test_db("cli_list_json");
    let pool = DbPool::open(&db_path).expect("open db");
    seed(&pool, "Widget", 5, "Small metal widget");
    seed(&pool, "Bolt", 40, "M4 x 20");

    let output = sf()
        .args(["--db", &db_path, "list", "--json"])
        .output()
        .expect("run list --json");
    assert!(output.status.success());

    let items: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    let arr = items.as_array().expect("JSON array");
    assert_eq!(arr.len(), 2);
    assert!(arr.iter().any(|i| i["name"] == "Bolt" && i["quantity"] == 40));
    assert!(arr.iter().all(|i| i["date_added"].is_string()));
}

#[test]
fn test_serve_without_secret_key_fails() {
    let db_path = setup_test_db("cli_serve_no_secret");

    sf().env_remove("APP_SECRET_KEY")
        .args(["--db", &db_path, "serve", "--port", "0"])
        .assert()
        .failure()
        .stderr(contains("APP_SECRET_KEY"));
}

#[test]
fn test_serve_with_blank_secret_key_fails() {
    let db_path = setup_test_db("cli_serve_blank_secret");

    sf().env("APP_SECRET_KEY", "   ")
        .args(["--db", &db_path, "serve", "--port", "0"])
        .assert()
        .failure()
        .stderr(contains("APP_SECRET_KEY"));
}

#[test]
fn test_config_print_shows_override() {
    let db_path = setup_test_db("cli_config_print");

    sf().args(["--db", &db_path, "config", "--print"])
        .assert()
        .success()
        .stdout(contains(db_path.as_str()).and(contains("port:")));
}

#[test]
fn test_relative_db_path_is_shared_by_init_and_list() {
    let base = std::env::temp_dir().join("cli_relative_db");
    let home = base.join("home");
    let cwd = base.join("cwd");
    std::fs::remove_dir_all(&base).ok();
    std::fs::create_dir_all(&home).unwrap();
    std::fs::create_dir_all(&cwd).unwrap();

    sf().env("HOME", &home)
        .current_dir(&cwd)
        .args(["--db", "rel.sqlite", "--test", "init"])
        .assert()
        .success();

    let expected = home.join(".stockform").join("rel.sqlite");
    assert!(expected.exists(), "database created under the config dir");
    assert!(!cwd.join("rel.sqlite").exists());

    let pool = DbPool::new(&expected);
    seed(&pool, "Widget", 5, "Small metal widget");

    sf().env("HOME", &home)
        .current_dir(&cwd)
        .args(["--db", "rel.sqlite", "list"])
        .assert()
        .success()
        .stdout(contains("('Widget', 5, 'Small metal widget')"));

    assert!(!cwd.join("rel.sqlite").exists());
}
