use clap::Subcommand;

/// User commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// List users.
    List,
    /// Show one user.
    Get { id: String },
    /// Show the authenticated user's reward standing.
    Rewards,
}
