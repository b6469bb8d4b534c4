//! スモークチェック
//!
//! ページを取得し、指定タグの最初の要素のテキストを期待値と比較する。
//! リトライは行わない。

use regex::Regex;

/// スモークチェックの結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmokeOutcome {
    /// 実際に見つかったテキスト（要素がなければ None）
    pub actual: Option<String>,
    pub expected: String,
}

impl SmokeOutcome {
    pub fn passed(&self) -> bool {
        self.actual.as_deref() == Some(self.expected.as_str())
    }
}

/// URLを読み込んでチェックを実行
pub async fn run(url: &str, tag: &str, expected: &str) -> anyhow::Result<SmokeOutcome> {
    tracing::debug!(url = %url, tag = %tag, "Running smoke check");

    let html = reqwest::get(url).await?.error_for_status()?.text().await?;
    let actual = extract_text(&html, tag)?;

    Ok(SmokeOutcome {
        actual,
        expected: expected.to_string(),
    })
}

/// 最初の `<tag>` 要素のテキストを取り出す
///
/// 子要素のタグは取り除き、基本的な実体参照を戻し、空白を1つにまとめる。
pub fn extract_text(html: &str, tag: &str) -> anyhow::Result<Option<String>> {
    let tag_re = Regex::new(r"^[A-Za-z][A-Za-z0-9-]*$")?;
    if !tag_re.is_match(tag) {
        anyhow::bail!("タグ名として不正です: {}", tag);
    }

    let element_re = Regex::new(&format!(r"(?is)<{tag}(?:\s[^>]*)?>(.*?)</{tag}\s*>"))?;
    let Some(caps) = element_re.captures(html) else {
        return Ok(None);
    };

    let markup_re = Regex::new(r"(?s)<[^>]*>")?;
    let text = markup_re.replace_all(&caps[1], "");
    let text = decode_entities(&text);

    Ok(Some(text.split_whitespace().collect::<Vec<_>>().join(" ")))
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
