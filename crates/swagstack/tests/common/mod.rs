use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestProject {
    pub root: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        Self { root }
    }

    pub fn write_swag_kdl(&self, content: &str) {
        fs::write(self.root.path().join("swag.kdl"), content).unwrap();
    }

    #[allow(dead_code)]
    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.root.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    pub fn path(&self) -> PathBuf {
        self.root.path().to_path_buf()
    }

    /// プロジェクトディレクトリで実行する swag コマンド
    #[allow(deprecated)]
    pub fn swag(&self) -> Command {
        let mut cmd = Command::cargo_bin("swag").unwrap();
        cmd.current_dir(self.path())
            .env_remove("SWAG_CONFIG_PATH")
            .env_remove("SWAG_WEBHOOK_URL")
            .env_remove("SWAG_SITE_URL");
        cmd
    }
}

/// 受け取ったリクエストボディを記録するダミーサーバー
#[allow(dead_code)]
pub mod fake {
    use axum::Router;
    use axum::extract::State;
    use axum::routing::{get, post};
    use std::sync::{Arc, Mutex};

    pub type Bodies = Arc<Mutex<Vec<String>>>;

    async fn record(State((bodies, reply)): State<(Bodies, String)>, body: String) -> String {
        bodies.lock().unwrap().push(body);
        reply
    }

    /// POST /hook に `reply` を返す webhook を起動
    pub async fn webhook(reply: &str) -> (String, Bodies) {
        let bodies = Bodies::default();
        let app = Router::new()
            .route("/hook", post(record))
            .with_state((bodies.clone(), reply.to_string()));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}/hook", addr), bodies)
    }

    /// GET / に `html` を返すサイトを起動
    pub async fn site(html: &'static str) -> String {
        let app = Router::new().route("/", get(move || async move { axum::response::Html(html) }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}/", addr)
    }
}
