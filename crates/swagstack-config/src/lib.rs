pub mod error;

pub use error::*;

use std::path::{Path, PathBuf};

/// 設定ファイルのパスを直接指定する環境変数
pub const CONFIG_PATH_ENV: &str = "SWAG_CONFIG_PATH";

/// 優先順に並べたプロジェクトファイル名
const CANDIDATES: [&str; 4] = ["swag.local.kdl", ".swag.local.kdl", "swag.kdl", ".swag.kdl"];

/// カレントディレクトリを起点にプロジェクトファイルを探す
pub fn find_project_file() -> Result<PathBuf> {
    let current_dir = std::env::current_dir()?;
    find_project_file_from(&current_dir)
}

/// 指定ディレクトリを起点にプロジェクトファイルを探す
///
/// 以下の優先順位で検索:
/// 1. 環境変数 SWAG_CONFIG_PATH (直接パス指定)
/// 2. 起点ディレクトリ: swag.local.kdl, .swag.local.kdl, swag.kdl, .swag.kdl
/// 3. ./.swagstack/ ディレクトリ内: 同様の順序
/// 4. ~/.config/swagstack/swag.kdl (グローバル設定)
pub fn find_project_file_from(start: &Path) -> Result<PathBuf> {
    // 1. 環境変数で直接指定
    if let Ok(config_path) = std::env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(config_path);
        if path.exists() {
            return Ok(path);
        }
    }

    // 2. 起点ディレクトリで検索
    if let Some(path) = first_existing(start) {
        return Ok(path);
    }

    // 3. ./.swagstack/ ディレクトリで検索
    let stack_dir = start.join(".swagstack");
    if stack_dir.is_dir() {
        if let Some(path) = first_existing(&stack_dir) {
            return Ok(path);
        }
    }

    // 4. グローバル設定ファイル
    if let Some(config_dir) = dirs::config_dir() {
        let global_config = config_dir.join("swagstack").join("swag.kdl");
        if global_config.exists() {
            return Ok(global_config);
        }
    }

    Err(ConfigError::ProjectFileNotFound)
}

/// プロジェクトファイルからプロジェクトルートを決定
///
/// `.swagstack/` 内のファイルの場合はその親ディレクトリがルートになる。
pub fn project_root_of(project_file: &Path) -> PathBuf {
    let dir = project_file.parent().unwrap_or_else(|| Path::new("."));
    if dir.file_name().is_some_and(|name| name == ".swagstack") {
        dir.parent().unwrap_or(dir).to_path_buf()
    } else {
        dir.to_path_buf()
    }
}

fn first_existing(dir: &Path) -> Option<PathBuf> {
    CANDIDATES
        .iter()
        .map(|filename| dir.join(filename))
        .find(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    #[test]
    #[serial]
    fn test_find_in_start_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("swag.kdl"), "// test").unwrap();

        temp_env::with_var_unset(CONFIG_PATH_ENV, || {
            let found = find_project_file_from(temp_dir.path()).unwrap();
            assert!(found.ends_with("swag.kdl"));
        });
    }

    #[test]
    #[serial]
    fn test_local_file_has_priority() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("swag.kdl"), "// shared").unwrap();
        fs::write(temp_dir.path().join("swag.local.kdl"), "// local").unwrap();

        temp_env::with_var_unset(CONFIG_PATH_ENV, || {
            let found = find_project_file_from(temp_dir.path()).unwrap();
            assert!(found.ends_with("swag.local.kdl"));
        });
    }

    #[test]
    #[serial]
    fn test_hidden_local_beats_visible() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(".swag.local.kdl"), "// hidden local").unwrap();
        fs::write(temp_dir.path().join("swag.kdl"), "// visible").unwrap();

        temp_env::with_var_unset(CONFIG_PATH_ENV, || {
            let found = find_project_file_from(temp_dir.path()).unwrap();
            assert!(found.ends_with(".swag.local.kdl"));
        });
    }

    #[test]
    #[serial]
    fn test_find_in_stack_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let stack_dir = temp_dir.path().join(".swagstack");
        fs::create_dir(&stack_dir).unwrap();
        fs::write(stack_dir.join("swag.kdl"), "// in stack dir").unwrap();

        temp_env::with_var_unset(CONFIG_PATH_ENV, || {
            let found = find_project_file_from(temp_dir.path()).unwrap();
            assert!(found.ends_with(".swagstack/swag.kdl"));
            assert_eq!(project_root_of(&found), temp_dir.path());
        });
    }

    #[test]
    #[serial]
    fn test_env_var_wins() {
        let temp_dir = tempfile::tempdir().unwrap();
        let custom = temp_dir.path().join("custom.kdl");
        fs::write(&custom, "// custom").unwrap();
        fs::write(temp_dir.path().join("swag.kdl"), "// default").unwrap();

        temp_env::with_var(CONFIG_PATH_ENV, Some(custom.to_str().unwrap()), || {
            assert_eq!(find_project_file_from(temp_dir.path()).unwrap(), custom);
        });
    }

    #[test]
    #[serial]
    fn test_not_found() {
        let temp_dir = tempfile::tempdir().unwrap();
        let global = dirs::config_dir().map(|d| d.join("swagstack").join("swag.kdl"));
        if global.as_ref().is_some_and(|p| p.exists()) {
            // グローバル設定がある環境では検証できない
            return;
        }

        temp_env::with_var_unset(CONFIG_PATH_ENV, || {
            let result = find_project_file_from(temp_dir.path());
            assert!(matches!(result, Err(ConfigError::ProjectFileNotFound)));
        });
    }

    #[test]
    fn test_project_root_of_plain_file() {
        assert_eq!(
            project_root_of(Path::new("/work/site/swag.kdl")),
            PathBuf::from("/work/site")
        );
    }
}
