//! KDLパーサー
//!
//! swag.kdl をパースして [`Project`] を生成します。
//! 各ノードタイプのパース処理はモジュールに分離されています。

mod check;
mod site;
mod swag;


use check::parse_check;
use site::parse_site;
use swag::parse_swag;

use crate::error::{FlowError, Result};
use crate::model::{Project, WebhookSettings};
use kdl::{KdlDocument, KdlNode};

/// KDL文字列をパース
pub fn parse_kdl_string(content: &str, default_name: String) -> Result<Project> {
    let doc: KdlDocument = content.parse()?;

    let mut project = Project {
        name: default_name,
        ..Default::default()
    };

    for node in doc.nodes() {
        match node.name().value() {
            "project" => {
                if let Some(project_name) = first_string(node) {
                    project.name = project_name;
                }
            }
            "site" => {
                if project.site.is_some() {
                    return Err(FlowError::InvalidConfig(
                        "site は1つだけ定義できます".to_string(),
                    ));
                }
                project.site = Some(parse_site(node)?);
            }
            "webhook" => {
                project.webhook = Some(parse_webhook(node)?);
            }
            "swag" => {
                let (name, order) = parse_swag(node)?;
                if project.swag.insert(name.clone(), order).is_some() {
                    return Err(FlowError::InvalidConfig(format!(
                        "swag '{}' が重複しています",
                        name
                    )));
                }
            }
            "check" => {
                let (name, check) = parse_check(node)?;
                project.checks.insert(name, check);
            }
            // テンプレート展開前に処理済み
            "variables" => {}
            other => {
                tracing::warn!(node = %other, "Unknown top-level node ignored");
            }
        }
    }

    Ok(project)
}

/// webhook ノードをパース
fn parse_webhook(node: &KdlNode) -> Result<WebhookSettings> {
    let url = node
        .children()
        .and_then(|children| children.get("url"))
        .and_then(first_string)
        .or_else(|| first_string(node))
        .ok_or_else(|| FlowError::InvalidConfig("webhook requires a url".to_string()))?;

    Ok(WebhookSettings { url })
}

/// ノードの最初の引数を文字列として取得
pub(crate) fn first_string(node: &KdlNode) -> Option<String> {
    node.entries()
        .first()
        .and_then(|e| e.value().as_string())
        .map(|s| s.to_string())
}

/// ノードの最初の引数を整数として取得
pub(crate) fn first_u32(node: &KdlNode) -> Option<u32> {
    node.entries()
        .first()
        .and_then(|e| e.value().as_integer())
        .and_then(|v| u32::try_from(v).ok())
}

/// ノードの最初の引数を真偽値として取得
pub(crate) fn first_bool(node: &KdlNode) -> Option<bool> {
    node.entries().first().and_then(|e| e.value().as_bool())
}

/// ノードの全ての文字列引数を取得
pub(crate) fn all_strings(node: &KdlNode) -> Vec<String> {
    node.entries()
        .iter()
        .filter_map(|e| e.value().as_string().map(|s| s.to_string()))
        .collect()
}
