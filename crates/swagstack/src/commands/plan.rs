use crate::utils::ProjectContext;
use colored::Colorize;
use swagstack_cloud::{ActionType, Engine, GlobalState, Plan};

pub async fn handle(ctx: &ProjectContext) -> anyhow::Result<()> {
    let engine = ctx.engine()?;
    let state = ctx.state_manager().load().await?;

    let plan = build_plan(ctx, &engine, &state).await?;
    print_plan(&plan);
    Ok(())
}

/// 宣言と state から plan を作成
pub async fn build_plan(
    ctx: &ProjectContext,
    engine: &Engine,
    state: &GlobalState,
) -> anyhow::Result<Plan> {
    let desired = swagstack_webhook::swag_resources(&ctx.project)?;
    Ok(engine.plan(&desired, state).await?)
}

pub fn print_plan(plan: &Plan) {
    println!("{}", "実行計画:".bold());

    if plan.actions.is_empty() {
        println!("  (リソースがありません)");
    }

    for action in &plan.actions {
        let marker = match action.action_type {
            ActionType::Create => "+".green(),
            ActionType::Update => "~".yellow(),
            ActionType::Delete => "-".red(),
            ActionType::NoOp => " ".normal(),
        };
        println!("  {} {}", marker, action.description);

        if let Some(ignored) = action.details.get("ignored_changes") {
            println!("      {} 無視される変更: {}", "⚠".yellow(), ignored);
        }
    }

    println!();
    println!("{}", plan.summary());
}
