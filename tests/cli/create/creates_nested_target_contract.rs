use crate::harness::TestContext;
use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn create_builds_missing_parents_of_target() {
    let ctx = TestContext::new();
    let target = assert_fs::TempDir::new().unwrap();
    let nested = target.child("projects/daily");

    ctx.cli().arg("--path").arg(nested.path()).assert().success();

    nested.child(TestContext::today()).assert(predicate::path::is_dir());
}

#[test]
fn create_resolves_relative_path_against_cwd() {
    let ctx = TestContext::new();

    ctx.cli().args(["--path", "sub/ws"]).assert().success();

    ctx.assert_dir_exists(&format!("sub/ws/{}", TestContext::today()));
}
