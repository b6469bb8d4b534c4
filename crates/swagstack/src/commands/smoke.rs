use colored::Colorize;

pub async fn handle(url: &str, selector: &str, expect: &str) -> anyhow::Result<()> {
    println!("{} {}", "スモークチェック:".blue(), url);

    let outcome = crate::smoke::run(url, selector, expect).await?;
    if outcome.passed() {
        println!("{} <{}> = {:?}", "✓".green(), selector, expect);
        return Ok(());
    }

    eprintln!("{}", "✗ スモークチェック失敗".red().bold());
    eprintln!("  期待値: {:?}", outcome.expected);
    match &outcome.actual {
        Some(actual) => eprintln!("  実際:   {:?}", actual),
        None => eprintln!("  <{}> 要素が見つかりません", selector),
    }
    std::process::exit(1);
}
