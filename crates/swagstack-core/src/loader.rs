//! 統合ローダー
//!
//! 変数の収集、テンプレート展開、パースを統合

use crate::error::{FlowError, Result};
use crate::model::Project;
use crate::parser::parse_kdl_string;
use crate::template::{TemplateProcessor, extract_variables};
use std::path::Path;
use tracing::{debug, info, instrument};

/// プロジェクトファイルをロードしてProjectを生成
///
/// 以下の処理を実行:
/// 1. variables ブロックの収集
/// 2. テンプレート展開（variables → 環境変数 → PROJECT_ROOT の順で上書き）
/// 3. KDLパース
#[instrument(skip(path), fields(path = %path.display()))]
pub fn load_project(path: &Path) -> Result<Project> {
    let content = std::fs::read_to_string(path).map_err(|e| FlowError::IoError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let project_root = path.parent().unwrap_or_else(|| Path::new("."));
    let default_name = project_root
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().and_then(|n| n.to_str()).map(str::to_string))
        .unwrap_or_else(|| "unnamed".to_string());

    // 1. 変数収集
    debug!("Step 1: Collecting variables");
    let mut processor = TemplateProcessor::new();
    processor.add_variables(extract_variables(&content)?);
    processor.add_env_variables();
    processor.add_variable(
        "PROJECT_ROOT",
        serde_json::Value::String(project_root.to_string_lossy().to_string()),
    );

    // 2. テンプレート展開
    debug!("Step 2: Expanding template");
    let expanded = processor.render_str(&content).map_err(|e| match e {
        FlowError::TemplateRenderError(message) => FlowError::TemplateError {
            file: path.to_path_buf(),
            message,
        },
        other => other,
    })?;

    // 3. KDLパース
    debug!("Step 3: Parsing KDL");
    let project = parse_kdl_string(&expanded, default_name)?;
    info!(
        swag = project.swag.len(),
        checks = project.checks.len(),
        has_site = project.site.is_some(),
        "Project loaded successfully"
    );

    Ok(project)
}
