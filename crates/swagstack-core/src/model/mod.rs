//! プロジェクトモデル

mod check;
mod site;
mod swag;

pub use check::{BrowserCheck, CheckDefinition};
pub use site::{
    Bucket, BucketAcl, DEFAULT_REGION, Distribution, SiteResource, StaticSite,
    ViewerProtocolPolicy,
};
pub use swag::{ShirtSize, SwagOrder};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// プロジェクト全体の宣言（swag.kdl の内容）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// プロジェクト名
    pub name: String,

    /// 静的サイトコンポーネント
    pub site: Option<StaticSite>,

    /// webhook プロバイダー設定
    pub webhook: Option<WebhookSettings>,

    /// swag 注文（論理名 → 注文）
    pub swag: BTreeMap<String, SwagOrder>,

    /// 監視チェック（名前 → 定義）
    pub checks: BTreeMap<String, BrowserCheck>,
}

impl Project {
    pub fn check(&self, name: &str) -> crate::Result<&BrowserCheck> {
        self.checks
            .get(name)
            .ok_or_else(|| crate::FlowError::CheckNotFound(name.to_string()))
    }

    /// 同じ email を持つ swag 宣言を列挙
    ///
    /// email は識別子として使われるが一意性は強制しない。検出のみ行う。
    pub fn duplicate_swag_emails(&self) -> Vec<(String, Vec<String>)> {
        let mut by_email: BTreeMap<&str, Vec<String>> = BTreeMap::new();
        for (name, order) in &self.swag {
            by_email.entry(order.email.as_str()).or_default().push(name.clone());
        }
        by_email
            .into_iter()
            .filter(|(_, names)| names.len() > 1)
            .map(|(email, names)| (email.to_string(), names))
            .collect()
    }
}

/// webhook プロバイダー設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookSettings {
    /// 送信先URL（固定）
    pub url: String,
}
