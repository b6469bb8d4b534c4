use crate::commands::plan::{build_plan, print_plan};
use crate::utils::ProjectContext;
use anyhow::Context as _;
use colored::Colorize;

pub async fn handle(ctx: &ProjectContext, yes: bool) -> anyhow::Result<()> {
    ctx.print_loaded_file();

    let engine = ctx.engine()?;
    let manager = ctx.state_manager();
    let lock = manager.acquire_lock().await?;
    let mut state = manager.load().await?;

    let plan = build_plan(ctx, &engine, &state).await?;
    print_plan(&plan);

    if !plan.has_changes {
        lock.release().await?;
        println!();
        println!("{}", "✓ 変更はありません".green());
        return Ok(());
    }

    if !yes {
        lock.release().await?;
        println!();
        println!(
            "{}",
            "警告: swag の注文は一度送信すると取り消せません。".yellow()
        );
        println!("実行するには --yes オプションを指定してください");
        return Ok(());
    }

    println!();
    println!("{}", "適用中...".blue());
    let result = engine.apply(&plan, &mut state).await;

    for ok in &result.succeeded {
        println!("  {} {}", "✓".green(), ok.message);
    }
    for failed in &result.failed {
        println!(
            "  {} {}: {}",
            "✗".red(),
            failed.action_id,
            failed.error.as_deref().unwrap_or("unknown error")
        );
    }

    // 結果の表示は保存より先
    manager.save(&state).await.with_context(|| {
        format!(
            "state の保存に失敗しました（上記の ✓ は送信済みです）: {}",
            manager.state_path().display()
        )
    })?;
    lock.release().await?;

    println!();
    println!("完了 ({}ms)", result.duration_ms);

    if !result.is_success() {
        anyhow::bail!("{}個のアクションが失敗しました", result.failed.len());
    }

    Ok(())
}
