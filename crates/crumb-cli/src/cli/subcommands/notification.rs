use clap::Subcommand;

/// Notification commands.
#[derive(Clone, Debug, Subcommand)]
pub enum NotificationCommands {
    /// List notifications with the unread count.
    List,
    /// Mark one notification read.
    Read { id: String },
    /// Mark every notification read.
    ReadAll,
}
