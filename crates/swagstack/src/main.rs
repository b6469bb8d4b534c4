mod commands;
mod smoke;
mod utils;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "swag")]
#[command(about = "静的サイト、swag、監視チェックをコードで宣言する", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 設定を検証
    Validate,
    /// 適用される変更を表示
    Plan,
    /// 変更を適用（swag の注文を送信）
    Up {
        /// 確認なしで実行
        #[arg(short, long)]
        yes: bool,
    },
    /// 作成済みリソースの一覧を表示
    State,
    /// 静的サイトコンポーネントのリソースを表示
    Site {
        /// JSONで出力
        #[arg(long)]
        json: bool,
    },
    /// 監視チェックを管理
    #[command(subcommand)]
    Check(CheckCommands),
    /// ページを読み込んで要素のテキストを検証
    Smoke {
        /// 対象URL
        url: String,
        /// テキストを読む要素のタグ名
        #[arg(short, long, default_value = "h1")]
        selector: String,
        /// 期待するテキスト
        #[arg(short, long)]
        expect: String,
    },
    /// バージョン情報を表示
    Version,
}

/// 監視チェックのサブコマンド
#[derive(Subcommand)]
enum CheckCommands {
    /// チェック定義を一覧表示
    List,
    /// スクリプトにサイトURLを埋め込んだチェック定義を出力
    Render {
        /// チェック名
        name: String,
        /// サイトURL（省略時は site の alias から決定）
        #[arg(long, env = "SWAG_SITE_URL")]
        url: Option<String>,
        /// 出力先ファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // ログはstderrに出力（RUST_LOG で制御）
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    // 設定ファイル不要なコマンド
    match &cli.command {
        Commands::Version => {
            println!("swagstack {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Commands::Smoke {
            url,
            selector,
            expect,
        } => {
            return commands::smoke::handle(url, selector, expect).await;
        }
        _ => {}
    }

    let ctx = utils::ProjectContext::load()?;

    // コマンドディスパッチ
    match cli.command {
        Commands::Validate => commands::validate::handle(&ctx),
        Commands::Plan => commands::plan::handle(&ctx).await,
        Commands::Up { yes } => commands::up::handle(&ctx, yes).await,
        Commands::State => commands::state::handle(&ctx).await,
        Commands::Site { json } => commands::site::handle(&ctx, json),
        Commands::Check(CheckCommands::List) => commands::check::handle_list(&ctx),
        Commands::Check(CheckCommands::Render { name, url, output }) => {
            commands::check::handle_render(&ctx, &name, url, output.as_deref())
        }
        Commands::Version | Commands::Smoke { .. } => {
            unreachable!("handled before project loading")
        }
    }
}
