use anyhow::Context as _;
use colored::Colorize;
use std::path::PathBuf;
use swagstack_cloud::{Engine, StateManager};
use swagstack_core::Project;
use swagstack_webhook::{SwagProvider, WebhookClient};

/// ロード済みプロジェクト
pub struct ProjectContext {
    pub project_file: PathBuf,
    pub project_root: PathBuf,
    pub project: Project,
}

impl ProjectContext {
    /// カレントディレクトリからプロジェクトを探してロード
    pub fn load() -> anyhow::Result<Self> {
        let project_file = swagstack_config::find_project_file()?;
        let project_root = swagstack_config::project_root_of(&project_file);
        let project = swagstack_core::load_project(&project_file)?;

        Ok(Self {
            project_file,
            project_root,
            project,
        })
    }

    pub fn state_manager(&self) -> StateManager {
        StateManager::new(&self.project_root)
    }

    /// swag プロバイダーを登録したエンジンを作成
    pub fn engine(&self) -> anyhow::Result<Engine> {
        let mut engine = Engine::new();
        match WebhookClient::from_settings(self.project.webhook.as_ref()) {
            Ok(client) => SwagProvider::register(&mut engine, client),
            // swag を宣言していなければ webhook は不要
            Err(e) if self.project.swag.is_empty() => {
                tracing::debug!(error = %e, "Webhook provider not registered");
            }
            Err(e) => return Err(e).context("webhook の設定を確認してください"),
        }
        Ok(engine)
    }

    /// 読み込んだ設定ファイル情報を表示
    pub fn print_loaded_file(&self) {
        println!(
            "📄 設定ファイル: {}",
            self.project_file.display().to_string().cyan()
        );
    }
}
