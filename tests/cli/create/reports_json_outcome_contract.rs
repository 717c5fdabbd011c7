use crate::harness::TestContext;
use serde_json::Value;

#[test]
fn create_json_reports_name_path_and_existed() {
    let ctx = TestContext::new();
    let today = TestContext::today();

    let first = ctx.cli().arg("--json").output().unwrap();
    assert!(first.status.success());
    let first: Value = serde_json::from_slice(&first.stdout).unwrap();
    assert_eq!(first["name"], today.as_str());
    assert_eq!(first["existed"], false);
    let path = first["path"].as_str().unwrap();
    assert!(path.ends_with(&today));

    let second = ctx.cli().arg("--json").output().unwrap();
    let second: Value = serde_json::from_slice(&second.stdout).unwrap();
    assert_eq!(second["existed"], true);
}
