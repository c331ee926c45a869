use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn empty_input_keeps_every_default() {
    let ctx = TestContext::new();

    ctx.configure().write_stdin("\n\n\n\n\n\n\n\n\n\n").assert().success();

    assert_eq!(ctx.env_value("backend/.env", "PORT").as_deref(), Some("8888"));
    assert_eq!(ctx.env_value("backend/.env", "DB_HOST").as_deref(), Some("mapme-db"));
    assert_eq!(ctx.env_value("backend/.env", "DB_NAME").as_deref(), Some("music_map_db"));
    assert_eq!(ctx.env_value("backend/.env", "SPOTIFY_CLIENT_ID").as_deref(), Some(""));
    assert_eq!(ctx.env_value("backend/.env", "SPOTIFY_REDIRECT_URI").as_deref(), Some("exp://:8081"));
    assert_eq!(ctx.env_value("database/.env", "POSTGRES_HOST_AUTH_METHOD").as_deref(), Some("md5"));
}

#[test]
fn whitespace_answers_are_trimmed_or_ignored() {
    let ctx = TestContext::new();

    ctx.configure().write_stdin("  my-client  \n   \n").assert().success();

    assert_eq!(
        ctx.env_value("frontend/.env", "EXPO_PUBLIC_SPOTIFY_CLIENT_ID").as_deref(),
        Some("my-client")
    );
    assert_eq!(ctx.env_value("backend/.env", "SPOTIFY_CLIENT_SECRET").as_deref(), Some(""));
}

#[test]
fn prompts_show_defaults_in_schema_order() {
    let ctx = TestContext::new();

    let assert = ctx.configure().write_stdin("").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let client_id = stdout.find("Enter value for SPOTIFY_CLIENT_ID (no default): ").unwrap();
    let port = stdout.find("Enter value for BACKEND_PORT [8888]: ").unwrap();
    let auth = stdout.find("Enter value for POSTGRES_HOST_AUTH_METHOD [md5]: ").unwrap();
    assert!(client_id < port && port < auth);

    ctx.configure()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Press Enter to accept the default value"));
}
