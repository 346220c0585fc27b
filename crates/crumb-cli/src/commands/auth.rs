use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{AuthCommands, AuthLoginArgs};
use crate::context::AppContext;
use crate::output::output;

/// Handle `crumb auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login(args, ctx, flags).await,
        AuthCommands::Logout => logout(ctx, flags),
        AuthCommands::Status => status(ctx, flags),
    }
}

#[derive(Serialize)]
struct LoginResult {
    user: String,
    email: String,
    role: &'static str,
}

async fn login(args: &AuthLoginArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = ctx.gateway.login(&args.email, &args.password).await?;
    output(
        &LoginResult {
            user: response.user.name,
            email: response.user.email,
            role: response.user.role.label(),
        },
        flags.format,
    )
}

#[derive(Serialize)]
struct LogoutResult {
    logged_out: bool,
}

fn logout(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.gateway.logout()?;
    ctx.store.clear_session_data();
    output(&LogoutResult { logged_out: true }, flags.format)
}

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    token_source: Option<&'static str>,
}

fn status(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let source = ctx.gateway.session().token_source();
    output(
        &AuthStatusResponse {
            authenticated: source.is_some(),
            token_source: source.map(crumb_session::TokenSource::as_str),
        },
        flags.format,
    )
}
