use crate::utils::ProjectContext;
use colored::Colorize;

pub fn handle(ctx: &ProjectContext) -> anyhow::Result<()> {
    println!("{}", "設定を検証中...".blue());
    ctx.print_loaded_file();

    let project = &ctx.project;
    println!("{}", "✓ 設定ファイルは正常です！".green().bold());
    println!();
    println!("サマリー: {}", project.name.cyan());

    match &project.site {
        Some(site) => println!(
            "  サイト: {} (bucket: {}, region: {})",
            site.name.cyan(),
            site.bucket.name,
            site.region
        ),
        None => println!("  サイト: (未設定)"),
    }

    match &project.webhook {
        Some(webhook) => println!("  webhook: {}", webhook.url),
        None => println!("  webhook: (未設定)"),
    }

    println!("  swag: {}個", project.swag.len());
    for (name, order) in &project.swag {
        println!("    - {} ({}, {})", name.cyan(), order.email, order.size);
    }

    println!("  チェック: {}個", project.checks.len());
    for (name, check) in &project.checks {
        println!(
            "    - {} ({}分ごと, {})",
            name.cyan(),
            check.frequency_minutes,
            check.script
        );
    }

    // email は識別子だが一意性は強制されない
    let duplicates = project.duplicate_swag_emails();
    if !duplicates.is_empty() {
        println!();
        for (email, names) in duplicates {
            println!(
                "{} email {} が複数の swag で使われています: {}",
                "⚠".yellow(),
                email.yellow(),
                names.join(", ")
            );
        }
    }

    Ok(())
}
