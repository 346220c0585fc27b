use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
///
/// The current route is recorded on the gateway before the handler runs, so
/// the 401 login redirect fires (or is suppressed) the same way it would in
/// the dashboard UI.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.gateway.set_route(route_for(&command));

    match command {
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags).await,
        Commands::Task { action } => commands::task::handle(&action, ctx, flags).await,
        Commands::Project { action } => commands::project::handle(&action, ctx, flags).await,
        Commands::User { action } => commands::user::handle(&action, ctx, flags).await,
        Commands::Notification { action } => {
            commands::notification::handle(&action, ctx, flags).await
        }
        Commands::Dashboard => commands::dashboard::handle(ctx, flags).await,
        Commands::Watch(args) => commands::watch::handle(&args, ctx, flags).await,
    }
}

fn route_for(command: &Commands) -> &'static str {
    match command {
        Commands::Auth { .. } => crumb_client::LOGIN_ROUTE,
        Commands::Task { .. } => "/tasks",
        Commands::Project { .. } => "/projects",
        Commands::User { .. } => "/users",
        Commands::Notification { .. } => "/notifications",
        Commands::Dashboard | Commands::Watch(_) => "/dashboard",
    }
}
