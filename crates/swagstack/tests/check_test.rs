mod common;
use common::{TestProject, fake};
use predicates::prelude::*;

const SCRIPT: &str = r#"const { expect, test } = require('@playwright/test')

test('website is up', async ({ page }) => {
  const response = await page.goto('{{SITE_URL}}')
  expect(response.status()).toBeLessThan(400)
  await expect(page.locator('h1')).toHaveText(`Hello from ${'{{SITE_URL}}'}`)
})
"#;

fn project_with_check(alias: Option<&str>) -> TestProject {
    let project = TestProject::new();
    let cdn = alias
        .map(|a| format!(r#"cdn {{ alias "{a}" }}"#))
        .unwrap_or_default();
    project.write_swag_kdl(&format!(
        r#"
site "website" {{
    bucket "check-site"
    {cdn}
}}

check "website-up" {{
    script "checks/website.spec.js"
    frequency 5
    locations "eu-west-1"
}}
"#
    ));
    project.write_file("checks/website.spec.js", SCRIPT);
    project
}

/// --url で指定したURLがスクリプトに埋め込まれる
#[test]
fn test_render_with_url() {
    let project = project_with_check(None);

    let output = project
        .swag()
        .args(["check", "render", "website-up", "--url", "https://d111.cloudfront.net"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let definition: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(definition["name"], "website-up");
    assert_eq!(definition["checkType"], "BROWSER");
    assert_eq!(definition["frequency"], 5);
    assert_eq!(
        definition["script"],
        SCRIPT.replace("{{SITE_URL}}", "https://d111.cloudfront.net")
    );
}

/// --url がなければ cdn alias を使い、ファイルに書き出す
#[test]
fn test_render_with_alias_to_file() {
    let project = project_with_check(Some("swag.example.com"));
    let out = project.path().join("check.json");

    project
        .swag()
        .args(["check", "render", "website-up", "--output"])
        .arg(&out)
        .assert()
        .success();

    let definition: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
    let script = definition["script"].as_str().unwrap();
    assert!(script.contains("page.goto('https://swag.example.com')"));
    assert!(!script.contains("{{SITE_URL}}"));
}

/// URLが決まらなければエラー
#[test]
fn test_render_without_url() {
    let project = project_with_check(None);
    project
        .swag()
        .args(["check", "render", "website-up"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--url"));
}

/// 存在しないチェック
#[test]
fn test_render_unknown_check() {
    let project = project_with_check(None);
    project
        .swag()
        .args(["check", "render", "nope", "--url", "https://x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope"));
}

/// スモークチェックの成功と失敗
#[tokio::test(flavor = "multi_thread")]
async fn test_smoke() {
    let url = fake::site("<html><body><h1>Hello, World!</h1></body></html>").await;
    let project = TestProject::new();

    project
        .swag()
        .args(["smoke", &url, "--expect", "Hello, World!"])
        .assert()
        .success();

    project
        .swag()
        .args(["smoke", &url, "--expect", "Goodbye"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Hello, World!"));
}
