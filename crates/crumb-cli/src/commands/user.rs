use serde::Serialize;

use crumb_core::entities::User;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::commands::shared::{apply_limit, ensure_loaded};
use crate::context::AppContext;
use crate::output::output;

/// Handle `crumb user <subcommand>`.
pub async fn handle(
    action: &UserCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        UserCommands::List => list(ctx, flags).await,
        UserCommands::Get { id } => get(id, ctx, flags).await,
        UserCommands::Rewards => rewards(ctx, flags).await,
    }
}

#[derive(Serialize)]
struct UserRow {
    id: String,
    name: String,
    email: String,
    role: &'static str,
    points: i64,
}

impl UserRow {
    fn from_user(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.label(),
            points: user.reward_points,
        }
    }
}

async fn list(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.store.users.fetch_all().await;
    let users = ensure_loaded(&ctx.store.users.users)?;
    let rows = apply_limit(users, flags.limit, ctx.config.general.default_limit)
        .iter()
        .map(UserRow::from_user)
        .collect::<Vec<_>>();
    output(&rows, flags.format)
}

async fn get(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.store.users.fetch_by_id(id).await;
    let user = ensure_loaded(&ctx.store.users.current)?;
    output(&UserRow::from_user(user), flags.format)
}

async fn rewards(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.store.users.fetch_rewards().await;
    let rewards = ensure_loaded(&ctx.store.users.rewards)?;
    output(rewards, flags.format)
}
