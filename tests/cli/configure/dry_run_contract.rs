use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn dry_run_prints_files_without_writing() {
    let ctx = TestContext::new();

    ctx.configure()
        .arg("--dry-run")
        .write_stdin("\n\n\n7000\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("# backend/.env"))
        .stdout(predicate::str::contains("PORT=7000"))
        .stdout(predicate::str::contains("# database/.env"))
        .stdout(predicate::str::contains("no files were written"));

    ctx.assert_no_env_files();
}
