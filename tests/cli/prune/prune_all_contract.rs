use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn zero_deadline_removes_every_workspace() {
    let ctx = TestContext::new();
    let today = TestContext::today();
    let old = TestContext::days_ago(400);
    ctx.make_dir(&today);
    ctx.make_dir(&old);

    ctx.cli()
        .args(["--remove", "--deadline", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 2 folders"));

    ctx.assert_not_exists(&today);
    ctx.assert_not_exists(&old);
}
