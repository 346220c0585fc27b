use clap::Subcommand;

/// Project commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// List projects.
    List {
        /// Only projects the authenticated user participates in.
        #[arg(long)]
        mine: bool,
    },
}
