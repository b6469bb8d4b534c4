use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("KDLパースエラー: {0}")]
    KdlParse(#[from] kdl::KdlError),

    #[error("ファイル読み込みエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("IO エラー: {path}\n理由: {message}")]
    IoError { path: PathBuf, message: String },

    #[error("無効な設定: {0}")]
    InvalidConfig(String),

    #[error("テンプレートエラー: {file}\n理由: {message}")]
    TemplateError { file: PathBuf, message: String },

    #[error("テンプレート展開エラー: {0}")]
    TemplateRenderError(String),

    #[error("swag '{name}' に {field} が指定されていません")]
    MissingSwagField { name: String, field: &'static str },

    #[error("不明なサイズ: {0} (XS, S, M, L, XL, XXL, XXXL のいずれか)")]
    UnknownSize(String),

    #[error("チェックが見つかりません: {0}")]
    CheckNotFound(String),
}

pub type Result<T> = std::result::Result<T, FlowError>;
