//! テンプレート展開機能
//!
//! 2種類のテンプレートを扱う:
//! - swag.kdl 自体の展開（Tera、`{{ VAR }}` 構文）
//! - 監視チェックスクリプトのプレースホルダー置換（Tera を使わない単純置換）

use crate::error::{FlowError, Result};
use kdl::KdlDocument;
use std::collections::HashMap;
use tera::{Context, Tera};
use tracing::{debug, info};

/// チェックスクリプト内でサイトURLに置換されるトークン
pub const SITE_URL_PLACEHOLDER: &str = "{{SITE_URL}}";

/// 変数コンテキスト
pub type Variables = HashMap<String, serde_json::Value>;

/// テンプレートプロセッサ
pub struct TemplateProcessor {
    tera: Tera,
    context: Context,
}

impl TemplateProcessor {
    pub fn new() -> Self {
        Self {
            tera: Tera::default(),
            context: Context::new(),
        }
    }

    /// 変数を追加
    pub fn add_variable(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.context.insert(key.into(), &value);
    }

    /// 複数の変数を追加
    pub fn add_variables(&mut self, variables: Variables) {
        for (key, value) in variables {
            self.context.insert(key, &value);
        }
    }

    /// 環境変数を追加（安全なもののみ）
    ///
    /// 以下のプレフィックスを持つ環境変数のみを許可:
    /// - SWAG_*: swagstack専用の環境変数
    /// - CI_*: CI/CD環境の変数
    /// - APP_*: アプリケーション設定
    #[tracing::instrument(skip(self))]
    pub fn add_env_variables(&mut self) {
        const ALLOWED_PREFIXES: &[&str] = &["SWAG_", "CI_", "APP_"];
        let mut count = 0;

        for (key, value) in std::env::vars() {
            if ALLOWED_PREFIXES
                .iter()
                .any(|prefix| key.starts_with(prefix))
            {
                debug!(key = %key, "Adding environment variable");
                self.context.insert(key, &serde_json::Value::String(value));
                count += 1;
            }
        }

        info!(
            env_var_count = count,
            "Added filtered environment variables"
        );
    }

    /// 文字列をテンプレートとして展開
    pub fn render_str(&mut self, template: &str) -> Result<String> {
        self.tera
            .render_str(template, &self.context)
            .map_err(|e| FlowError::TemplateRenderError(extract_tera_error_detail(&e)))
    }
}

impl Default for TemplateProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Teraのエラーチェーンから原因を連結
fn extract_tera_error_detail(error: &tera::Error) -> String {
    use std::error::Error;

    let mut detail = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        detail.push_str(": ");
        detail.push_str(&cause.to_string());
        source = cause.source();
    }
    detail
}

/// プレースホルダーを置換する
///
/// `vars` の各キーをトークンとして、テンプレート中の全ての出現箇所を値で置き換える。
/// 走査は先頭から1回だけ行い、置換後の文字列は再走査しない。
/// 同じ位置で複数のトークンが一致する場合は長いものが優先される。
/// トークン以外の文字は一切変更しない。
pub fn render_placeholders(template: &str, vars: &HashMap<String, String>) -> String {
    let mut tokens: Vec<(&str, &str)> = vars
        .iter()
        .filter(|(k, _)| !k.is_empty())
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    tokens.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then(a.0.cmp(b.0)));

    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    'scan: while let Some(ch) = rest.chars().next() {
        for (token, value) in &tokens {
            if rest.starts_with(token) {
                rendered.push_str(value);
                rest = &rest[token.len()..];
                continue 'scan;
            }
        }
        rendered.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    rendered
}

/// KDLファイルからトップレベルの variables ブロックを抽出
///
/// ブロック外に `{{ ... }}` が含まれていてもパースできるよう、
/// 波括弧の対応を取ってブロックだけを切り出してからパースする。
pub fn extract_variables(kdl_content: &str) -> Result<Variables> {
    use regex::Regex;

    let re = Regex::new(r"(?m)^\s*variables\s*\{")
        .map_err(|e| FlowError::InvalidConfig(format!("正規表現のコンパイルエラー: {}", e)))?;

    let mut vars = Variables::new();
    for mat in re.find_iter(kdl_content) {
        let open = mat.end() - 1;
        let Some(close) = find_matching_brace(kdl_content, open) else {
            return Err(FlowError::InvalidConfig(
                "variables ブロックが閉じられていません".to_string(),
            ));
        };

        let doc: KdlDocument = kdl_content[open + 1..close].parse()?;
        for node in doc.nodes() {
            let Some(value) = node.entries().first().map(|e| e.value()) else {
                continue;
            };
            let json = if let Some(s) = value.as_string() {
                serde_json::Value::String(s.to_string())
            } else if let Some(i) = value.as_integer() {
                i64::try_from(i)
                    .map(serde_json::Value::from)
                    .unwrap_or_else(|_| serde_json::Value::String(i.to_string()))
            } else if let Some(b) = value.as_bool() {
                serde_json::Value::Bool(b)
            } else {
                serde_json::Value::String(value.to_string())
            };
            vars.insert(node.name().value().to_string(), json);
        }
    }

    Ok(vars)
}

/// 開き波括弧に対応する閉じ波括弧の位置を探す（文字列リテラル内は無視）
fn find_matching_brace(content: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in content[open..].char_indices() {
        if in_string {
            match ch {
                '\\' if !escaped => escaped = true,
                '"' if !escaped => in_string = false,
                _ => escaped = false,
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + offset);
                }
            }
            _ => {}
        }
    }
    None
}
