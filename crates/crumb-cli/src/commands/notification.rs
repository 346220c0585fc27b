use serde::Serialize;

use crumb_core::entities::Notification;
use crumb_store::lifecycle::Phase;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::NotificationCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `crumb notification <subcommand>`.
pub async fn handle(
    action: &NotificationCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        NotificationCommands::List => list(ctx, flags).await,
        NotificationCommands::Read { id } => read_one(id, ctx, flags).await,
        NotificationCommands::ReadAll => read_all(ctx, flags).await,
    }
}

#[derive(Serialize)]
struct NotificationRow {
    id: String,
    kind: &'static str,
    message: String,
    read: bool,
}

#[derive(Serialize)]
struct NotificationList {
    unread: usize,
    items: Vec<NotificationRow>,
}

fn row(notification: &Notification) -> NotificationRow {
    NotificationRow {
        id: notification.id.clone(),
        kind: notification.kind.as_str(),
        message: notification.message.clone(),
        read: notification.read,
    }
}

async fn list(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.store.notifications.fetch_all().await;
    if ctx.store.notifications.state().phase() == Phase::Failed {
        anyhow::bail!(
            "{}",
            ctx.store
                .notifications
                .state()
                .error()
                .unwrap_or("Unknown error occurred")
        );
    }
    let listing = NotificationList {
        unread: ctx.store.notifications.unread_count(),
        items: ctx.store.notifications.items().iter().map(row).collect(),
    };
    output(&listing, flags.format)
}

#[derive(Serialize)]
struct ReadResult {
    unread: usize,
}

async fn read_one(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.store.notifications.fetch_all().await;
    ctx.store.notifications.mark_read(id).await?;
    output(
        &ReadResult {
            unread: ctx.store.notifications.unread_count(),
        },
        flags.format,
    )
}

async fn read_all(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.store.notifications.fetch_all().await;
    ctx.store.notifications.mark_all_read().await?;
    output(
        &ReadResult {
            unread: ctx.store.notifications.unread_count(),
        },
        flags.format,
    )
}
