mod common;
use common::{TestProject, fake};
use predicates::prelude::*;

fn swag_kdl(url: &str) -> String {
    format!(
        r#"
project "up-test"

variables {{
    HOOK "{url}"
}}

webhook {{
    url "{{{{ HOOK }}}}"
}}

swag "my-shirt" {{
    name "Jane Doe"
    email "jane@example.com"
    address "1 Main St"
    size "M"
}}
"#
    )
}

/// plan は何も送信しない
#[tokio::test(flavor = "multi_thread")]
async fn test_plan_sends_nothing() {
    let (url, bodies) = fake::webhook(r#"{"success": true}"#).await;
    let project = TestProject::new();
    project.write_swag_kdl(&swag_kdl(&url));

    project
        .swag()
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("create swag:my-shirt"))
        .stdout(predicate::str::contains("1 to create"));

    assert!(bodies.lock().unwrap().is_empty());
}

/// --yes なしでは送信しない
#[tokio::test(flavor = "multi_thread")]
async fn test_up_requires_yes() {
    let (url, bodies) = fake::webhook(r#"{"success": true}"#).await;
    let project = TestProject::new();
    project.write_swag_kdl(&swag_kdl(&url));

    project
        .swag()
        .arg("up")
        .assert()
        .success()
        .stdout(predicate::str::contains("--yes"));

    assert!(bodies.lock().unwrap().is_empty());
    assert!(!project.path().join(".swagstack/lock.json").exists());
}

/// up は一度だけ注文を送信し、以降は何もしない
#[tokio::test(flavor = "multi_thread")]
async fn test_up_creates_once() {
    let (url, bodies) = fake::webhook(r#"{"success": true}"#).await;
    let project = TestProject::new();
    project.write_swag_kdl(&swag_kdl(&url));

    project.swag().args(["up", "--yes"]).assert().success();

    {
        let bodies = bodies.lock().unwrap();
        assert_eq!(bodies.len(), 1);
        let body: serde_json::Value = serde_json::from_str(&bodies[0]).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "address": "1 Main St",
                "size": "M"
            })
        );
    }

    let state = std::fs::read_to_string(project.path().join(".swagstack/state.json")).unwrap();
    let state: serde_json::Value = serde_json::from_str(&state).unwrap();
    assert_eq!(state["resources"]["swag:my-shirt"]["id"], "jane@example.com");
    assert_eq!(state["resources"]["swag:my-shirt"]["outputs"]["size"], "M");

    project
        .swag()
        .args(["up", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("変更はありません"));
    assert_eq!(bodies.lock().unwrap().len(), 1);

    project
        .swag()
        .arg("state")
        .assert()
        .success()
        .stdout(predicate::str::contains("swag:my-shirt"))
        .stdout(predicate::str::contains("jane@example.com"));
}

/// サイズを変えても create-only のため再送信しない
#[tokio::test(flavor = "multi_thread")]
async fn test_changed_inputs_are_ignored() {
    let (url, bodies) = fake::webhook(r#"{"success": true}"#).await;
    let project = TestProject::new();
    project.write_swag_kdl(&swag_kdl(&url));
    project.swag().args(["up", "--yes"]).assert().success();

    project.write_swag_kdl(&swag_kdl(&url).replace(r#"size "M""#, r#"size "XL""#));
    project
        .swag()
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("input changes ignored"))
        .stdout(predicate::str::contains("0 to create, 0 to update"));

    project.swag().args(["up", "--yes"]).assert().success();
    assert_eq!(bodies.lock().unwrap().len(), 1);
}

/// webhook に接続できなければ失敗し、state には記録しない
#[tokio::test(flavor = "multi_thread")]
async fn test_up_fails_when_webhook_is_down() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let project = TestProject::new();
    project.write_swag_kdl(&swag_kdl(&format!("http://127.0.0.1:{}/hook", port)));

    project
        .swag()
        .args(["up", "--yes"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗"));

    let state = std::fs::read_to_string(project.path().join(".swagstack/state.json")).unwrap();
    let state: serde_json::Value = serde_json::from_str(&state).unwrap();
    assert!(state["resources"].as_object().unwrap().is_empty());
}

/// success: false でも作成済みとして記録する
#[tokio::test(flavor = "multi_thread")]
async fn test_unsuccessful_webhook_still_records() {
    let (url, bodies) = fake::webhook(r#"{"success": false}"#).await;
    let project = TestProject::new();
    project.write_swag_kdl(&swag_kdl(&url));

    project.swag().args(["up", "--yes"]).assert().success();
    assert_eq!(bodies.lock().unwrap().len(), 1);

    project
        .swag()
        .arg("state")
        .assert()
        .success()
        .stdout(predicate::str::contains("jane@example.com"));
}

/// swag と webhook を削除しても記録は残り、plan/up は動作する
#[tokio::test(flavor = "multi_thread")]
async fn test_removed_order_is_retained_without_webhook() {
    let (url, bodies) = fake::webhook(r#"{"success": true}"#).await;
    let project = TestProject::new();
    project.write_swag_kdl(&swag_kdl(&url));
    project.swag().args(["up", "--yes"]).assert().success();

    project.write_swag_kdl(r#"project "after""#);
    project
        .swag()
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("swag:my-shirt is no longer declared but is retained"))
        .stdout(predicate::str::contains("0 to delete, 1 unchanged"));

    project
        .swag()
        .args(["up", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("変更はありません"));

    project
        .swag()
        .arg("state")
        .assert()
        .success()
        .stdout(predicate::str::contains("swag:my-shirt"));
    assert_eq!(bodies.lock().unwrap().len(), 1);
}

/// state の保存に失敗しても送信済みの注文は表示される
#[tokio::test(flavor = "multi_thread")]
async fn test_save_failure_still_reports_sent_orders() {
    let (url, bodies) = fake::webhook(r#"{"success": true}"#).await;
    let project = TestProject::new();
    project.write_swag_kdl(&swag_kdl(&url));
    project.write_file(
        ".swagstack/state.json",
        r#"{"version": 1, "updated_at": "2026-01-01T00:00:00Z", "resources": {}}"#,
    );
    // バックアップ先がディレクトリだと保存できない
    std::fs::create_dir_all(project.path().join(".swagstack/state.json.backup")).unwrap();

    project
        .swag()
        .args(["up", "--yes"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("created swag:my-shirt (id: jane@example.com)"))
        .stderr(predicate::str::contains("state の保存に失敗しました"));

    assert_eq!(bodies.lock().unwrap().len(), 1);
}
