//! swag 注文モデル
//!
//! webhook プロバイダーに送信される注文レコードの定義

use crate::error::FlowError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// swag 注文（プロバイダーへの入力）
///
/// JSON では `name`, `email`, `address`, `size` のフラットなオブジェクトになる。
/// email がリソースの識別子として使われる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SwagOrder {
    pub name: String,
    pub email: String,
    pub address: String,
    pub size: ShirtSize,
}

impl SwagOrder {
    /// リソース識別子（email をそのまま使う）
    pub fn identifier(&self) -> &str {
        &self.email
    }
}

/// シャツのサイズ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShirtSize {
    #[serde(rename = "XS")]
    ExtraSmall,
    #[serde(rename = "S")]
    Small,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Large,
    #[serde(rename = "XL")]
    ExtraLarge,
    #[serde(rename = "XXL")]
    DoubleExtraLarge,
    #[serde(rename = "XXXL")]
    TripleExtraLarge,
}

impl ShirtSize {
    pub const ALL: [ShirtSize; 7] = [
        ShirtSize::ExtraSmall,
        ShirtSize::Small,
        ShirtSize::Medium,
        ShirtSize::Large,
        ShirtSize::ExtraLarge,
        ShirtSize::DoubleExtraLarge,
        ShirtSize::TripleExtraLarge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShirtSize::ExtraSmall => "XS",
            ShirtSize::Small => "S",
            ShirtSize::Medium => "M",
            ShirtSize::Large => "L",
            ShirtSize::ExtraLarge => "XL",
            ShirtSize::DoubleExtraLarge => "XXL",
            ShirtSize::TripleExtraLarge => "XXXL",
        }
    }
}

impl fmt::Display for ShirtSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShirtSize {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShirtSize::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FlowError::UnknownSize(s.to_string()))
    }
}
