use crate::harness::TestContext;

#[test]
fn postgres_db_takes_the_database_port_value() {
    let ctx = TestContext::new();

    // Keys 8 and 9 are DB_NAME and DB_PORT.
    ctx.configure().write_stdin("\n\n\n\n\n\n\nmusic\n6543\n").assert().success();

    assert_eq!(ctx.env_value("database/.env", "POSTGRES_DB").as_deref(), Some("6543"));
    assert_eq!(ctx.env_value("backend/.env", "DB_NAME").as_deref(), Some("music"));
}
