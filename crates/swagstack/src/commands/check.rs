use crate::utils::ProjectContext;
use colored::Colorize;
use std::path::Path;

pub fn handle_list(ctx: &ProjectContext) -> anyhow::Result<()> {
    if ctx.project.checks.is_empty() {
        println!("チェックが定義されていません");
        return Ok(());
    }

    for (name, check) in &ctx.project.checks {
        let status = if check.activated {
            "active".green()
        } else {
            "inactive".yellow()
        };
        println!(
            "  {} [{}] {}分ごと {} ({})",
            name.cyan(),
            status,
            check.frequency_minutes,
            check.locations.join(","),
            check.script
        );
    }

    Ok(())
}

pub fn handle_render(
    ctx: &ProjectContext,
    name: &str,
    url: Option<String>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let check = ctx.project.check(name)?;

    let site_url = url
        .or_else(|| ctx.project.site.as_ref().and_then(|site| site.url()))
        .ok_or_else(|| {
            anyhow::anyhow!("サイトURLが決まりません: --url か site の cdn alias を指定してください")
        })?;

    let script_path = ctx.project_root.join(&check.script);
    let template = std::fs::read_to_string(&script_path).map_err(|e| {
        anyhow::anyhow!(
            "スクリプトを読み込めません: {}: {}",
            script_path.display(),
            e
        )
    })?;

    let definition = check.render(&template, &site_url);
    let rendered = serde_json::to_string_pretty(&definition)?;

    match output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            eprintln!(
                "{} {}",
                "✓ チェック定義を書き出しました:".green(),
                path.display()
            );
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
