use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `crumb dashboard`: refresh every slice once and print the snapshot.
///
/// Individual slice failures do not abort the snapshot; the affected counts
/// come from whatever data the slice last held.
pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.store.tasks.fetch_mine().await;
    ctx.store.projects.fetch_mine().await;
    ctx.store.users.fetch_rewards().await;
    ctx.store.notifications.fetch_all().await;

    output(&ctx.store.dashboard(), flags.format)
}
