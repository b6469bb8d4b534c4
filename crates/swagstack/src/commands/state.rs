use crate::utils::ProjectContext;
use colored::Colorize;

pub async fn handle(ctx: &ProjectContext) -> anyhow::Result<()> {
    let manager = ctx.state_manager();
    let state = manager.load().await?;

    if state.resources.is_empty() {
        println!("作成済みのリソースはありません");
        return Ok(());
    }

    println!(
        "{} ({})",
        "作成済みリソース:".bold(),
        manager.state_path().display()
    );
    for (key, resource) in &state.resources {
        println!(
            "  {} id={} provider={} created={}",
            key.cyan(),
            resource.id,
            resource.provider,
            resource.created_at.to_rfc3339()
        );
    }

    Ok(())
}
