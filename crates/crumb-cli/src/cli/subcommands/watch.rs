use clap::Args;

#[derive(Clone, Debug, Args)]
pub struct WatchArgs {
    /// Override both poll intervals, in seconds.
    #[arg(long)]
    pub interval: Option<u64>,
}
