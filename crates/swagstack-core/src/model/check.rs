//! 監視チェックモデル

use crate::template::{SITE_URL_PLACEHOLDER, render_placeholders};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 定期実行されるブラウザチェックの宣言
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowserCheck {
    pub name: String,

    /// 実行間隔（分）
    pub frequency_minutes: u32,

    pub locations: Vec<String>,

    pub activated: bool,

    /// チェックスクリプトのパス（プロジェクトルートからの相対パス）
    pub script: String,
}

impl BrowserCheck {
    pub fn new(name: impl Into<String>, script: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frequency_minutes: 10,
            locations: vec!["us-east-1".to_string()],
            activated: true,
            script: script.into(),
        }
    }

    /// スクリプトテンプレートにサイトURLを埋め込んでアップロード用の定義を作る
    ///
    /// ファイルの読み込みは呼び出し側で行う。
    pub fn render(&self, script_template: &str, site_url: &str) -> CheckDefinition {
        let vars = HashMap::from([(SITE_URL_PLACEHOLDER.to_string(), site_url.to_string())]);
        CheckDefinition {
            name: self.name.clone(),
            check_type: "BROWSER".to_string(),
            frequency: self.frequency_minutes,
            locations: self.locations.clone(),
            activated: self.activated,
            script: render_placeholders(script_template, &vars),
        }
    }
}

/// 監視サービスにアップロードするチェック定義
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckDefinition {
    pub name: String,
    pub check_type: String,
    pub frequency: u32,
    pub locations: Vec<String>,
    pub activated: bool,
    pub script: String,
}
