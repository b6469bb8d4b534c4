use crate::utils::ProjectContext;
use colored::Colorize;

pub fn handle(ctx: &ProjectContext, json: bool) -> anyhow::Result<()> {
    let site = ctx
        .project
        .site
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("site が定義されていません"))?;

    if json {
        let value = serde_json::json!({
            "component": site.name,
            "website_endpoint": site.website_endpoint(),
            "url": site.url(),
            "resources": site.resources(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{} {}", "site".bold(), site.name.cyan());
    for resource in site.resources() {
        println!("  • {} {}", resource.kind, resource.name.cyan());
    }
    println!();
    println!("  endpoint: {}", site.website_endpoint());
    println!(
        "  url:      {}",
        site.url().unwrap_or_else(|| "(CDN 作成後に確定)".to_string())
    );

    Ok(())
}
