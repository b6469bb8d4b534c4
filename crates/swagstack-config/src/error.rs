use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "設定ファイルが見つかりません。以下の場所を確認してください:\n\
        - カレントディレクトリ: swag.local.kdl, .swag.local.kdl, swag.kdl, .swag.kdl\n\
        - ./.swagstack/ ディレクトリ\n\
        - ~/.config/swagstack/swag.kdl\n\
        または SWAG_CONFIG_PATH 環境変数で直接指定できます"
    )]
    ProjectFileNotFound,

    #[error("IO エラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
