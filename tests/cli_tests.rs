use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn notion_graphql_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("notion-graphql"));
    cmd.env_remove("NOTION_TOKEN").env_remove("RUST_LOG");
    cmd
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    notion_graphql_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GraphQL"));
}

#[test]
fn test_version() {
    notion_graphql_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("notion-graphql"));
}

// =============================================================================
// Schema
// =============================================================================

#[test]
fn test_schema_prints_sdl() {
    let temp_dir = TempDir::new().unwrap();

    notion_graphql_cmd()
        .arg("schema")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("type NotionDatabase")
                .and(predicate::str::contains("getPage("))
                .and(predicate::str::contains("scalar NotionProperties")),
        );
}

// =============================================================================
// Query
// =============================================================================

#[test]
fn test_query_without_token_fails() {
    let temp_dir = TempDir::new().unwrap();

    notion_graphql_cmd()
        .arg("query")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No Notion token configured"));
}

#[test]
fn test_query_rejects_bad_variables() {
    let temp_dir = TempDir::new().unwrap();

    notion_graphql_cmd()
        .args(["query", "--token", "secret_test", "--variables", "not json"])
        .current_dir(temp_dir.path())
        .assert()
        .failure();
}

// =============================================================================
// Config
// =============================================================================

#[test]
fn test_missing_explicit_config_fails() {
    let temp_dir = TempDir::new().unwrap();

    notion_graphql_cmd()
        .args(["schema", "--config", "nope.yml"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn test_discovered_config_with_bad_base_url_fails() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(".notion-graphql.yml"),
        "notion:\n  base_url: \"not a url\"\n",
    )
    .unwrap();
    let nested = temp_dir.path().join("sub");
    std::fs::create_dir_all(&nested).unwrap();

    notion_graphql_cmd()
        .arg("schema")
        .current_dir(&nested)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to set up the Notion client"));
}
