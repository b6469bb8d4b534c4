//! 静的サイトモデル
//!
//! ストレージバケット、ACL、CDN ディストリビューションの宣言。
//! 実際のプロビジョニングはクラウドSDK側の責務で、ここでは宣言と
//! 導出値（エンドポイント、URL）のみを扱う。

use serde::{Deserialize, Serialize};

/// デフォルトのリージョン
pub const DEFAULT_REGION: &str = "us-east-1";

/// 静的サイト（バケット + ACL + CDN をまとめるコンポーネント）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticSite {
    /// コンポーネント名
    pub name: String,

    /// リージョン
    pub region: String,

    pub bucket: Bucket,

    pub acl: BucketAcl,

    pub cdn: Distribution,
}

impl StaticSite {
    pub fn new(name: impl Into<String>, bucket: Bucket) -> Self {
        Self {
            name: name.into(),
            region: DEFAULT_REGION.to_string(),
            bucket,
            acl: BucketAcl::PublicRead,
            cdn: Distribution::default(),
        }
    }

    /// バケットのウェブサイトエンドポイント（CDN のオリジン）
    pub fn website_endpoint(&self) -> String {
        format!(
            "{}.s3-website-{}.amazonaws.com",
            self.bucket.name, self.region
        )
    }

    /// 公開URL（エイリアスが宣言されている場合のみ確定する）
    pub fn url(&self) -> Option<String> {
        self.cdn.alias.as_ref().map(|alias| format!("https://{}", alias))
    }

    /// コンポーネントに含まれるリソースの一覧
    pub fn resources(&self) -> Vec<SiteResource> {
        vec![
            SiteResource {
                kind: "bucket",
                name: self.bucket.name.clone(),
                properties: serde_json::json!({
                    "region": self.region,
                    "index_document": self.bucket.index_document,
                    "error_document": self.bucket.error_document,
                    "content_dir": self.bucket.content_dir,
                }),
            },
            SiteResource {
                kind: "bucket-acl",
                name: format!("{}-acl", self.bucket.name),
                properties: serde_json::json!({
                    "bucket": self.bucket.name,
                    "acl": self.acl.as_str(),
                }),
            },
            SiteResource {
                kind: "cdn-distribution",
                name: format!("{}-cdn", self.name),
                properties: serde_json::json!({
                    "origin": self.website_endpoint(),
                    "default_root_object": self.bucket.index_document,
                    "viewer_protocol_policy": self.cdn.viewer_protocol_policy.as_str(),
                    "price_class": self.cdn.price_class,
                    "default_ttl": self.cdn.default_ttl,
                    "max_ttl": self.cdn.max_ttl,
                    "alias": self.cdn.alias,
                }),
            },
        ]
    }
}

/// コンポーネント内の個々のリソース
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteResource {
    pub kind: &'static str,
    pub name: String,
    pub properties: serde_json::Value,
}

/// ストレージバケット
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub name: String,

    /// インデックスドキュメント（CDN のデフォルトルートオブジェクトにもなる）
    pub index_document: String,

    pub error_document: Option<String>,

    /// アップロードするコンテンツのディレクトリ
    pub content_dir: Option<String>,
}

impl Bucket {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            index_document: "index.html".to_string(),
            error_document: None,
            content_dir: None,
        }
    }
}

/// バケットの canned ACL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BucketAcl {
    Private,
    PublicRead,
}

impl BucketAcl {
    pub fn as_str(&self) -> &'static str {
        match self {
            BucketAcl::Private => "private",
            BucketAcl::PublicRead => "public-read",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "private" => Some(BucketAcl::Private),
            "public-read" | "public_read" => Some(BucketAcl::PublicRead),
            _ => None,
        }
    }
}

/// CDN ディストリビューション
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    pub viewer_protocol_policy: ViewerProtocolPolicy,
    pub price_class: String,
    pub default_ttl: u32,
    pub max_ttl: u32,

    /// カスタムドメイン
    pub alias: Option<String>,
}

impl Default for Distribution {
    fn default() -> Self {
        Self {
            viewer_protocol_policy: ViewerProtocolPolicy::RedirectToHttps,
            price_class: "PriceClass_100".to_string(),
            default_ttl: 3600,
            max_ttl: 86400,
            alias: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewerProtocolPolicy {
    AllowAll,
    RedirectToHttps,
    HttpsOnly,
}

impl ViewerProtocolPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewerProtocolPolicy::AllowAll => "allow-all",
            ViewerProtocolPolicy::RedirectToHttps => "redirect-to-https",
            ViewerProtocolPolicy::HttpsOnly => "https-only",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "allow-all" => Some(ViewerProtocolPolicy::AllowAll),
            "redirect-to-https" => Some(ViewerProtocolPolicy::RedirectToHttps),
            "https-only" => Some(ViewerProtocolPolicy::HttpsOnly),
            _ => None,
        }
    }
}
