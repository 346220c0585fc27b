use serde::Serialize;

use crumb_core::entities::Project;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::commands::shared::{apply_limit, ensure_loaded};
use crate::context::AppContext;
use crate::output::output;

/// Handle `crumb project <subcommand>`.
pub async fn handle(
    action: &ProjectCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProjectCommands::List { mine } => list(*mine, ctx, flags).await,
    }
}

#[derive(Serialize)]
struct ProjectRow {
    id: String,
    name: String,
    status: &'static str,
}

async fn list(mine: bool, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if mine {
        ctx.store.projects.fetch_mine().await;
    } else {
        ctx.store.projects.fetch_all().await;
    }
    let projects = ensure_loaded(&ctx.store.projects.projects)?;
    let rows = apply_limit(projects, flags.limit, ctx.config.general.default_limit)
        .iter()
        .map(|p: &Project| ProjectRow {
            id: p.id.clone(),
            name: p.name.clone(),
            status: p.status.as_str(),
        })
        .collect::<Vec<_>>();
    output(&rows, flags.format)
}
