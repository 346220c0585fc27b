//! Live dashboard: background pollers keep rewards and notifications fresh
//! while the foreground loop re-renders the snapshot.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crumb_store::{Poller, Store};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::WatchArgs;
use crate::context::AppContext;
use crate::output::render;

pub async fn handle(
    args: &WatchArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let reward_secs = args
        .interval
        .unwrap_or(ctx.config.polling.reward_refresh_secs);
    let notification_secs = args
        .interval
        .unwrap_or(ctx.config.polling.notification_refresh_secs);

    let store = Arc::new(Mutex::new(Store::new(&ctx.gateway)));

    {
        let mut store = store.lock().await;
        store.tasks.fetch_mine().await;
        store.projects.fetch_mine().await;
        store.users.fetch_rewards().await;
        store.notifications.fetch_all().await;
        println!("{}", render(&store.dashboard(), flags.format)?);
    }

    let _rewards = {
        let store = Arc::clone(&store);
        Poller::spawn("rewards", Duration::from_secs(reward_secs), move || {
            let store = Arc::clone(&store);
            async move {
                let mut store = store.lock().await;
                store.users.fetch_rewards().await;
                match store.users.rewards.error() {
                    Some(error) => Err(error.to_string()),
                    None => Ok(()),
                }
            }
        })
    };
    let _notifications = {
        let store = Arc::clone(&store);
        Poller::spawn(
            "notifications",
            Duration::from_secs(notification_secs),
            move || {
                let store = Arc::clone(&store);
                async move {
                    let mut store = store.lock().await;
                    store.notifications.fetch_all().await;
                    match store.notifications.state().error() {
                        Some(error) => Err(error.to_string()),
                        None => Ok(()),
                    }
                }
            },
        )
    };

    let render_period = Duration::from_secs(reward_secs.min(notification_secs));
    let mut ticker = tokio::time::interval(render_period);
    ticker.tick().await;

    if !flags.quiet {
        eprintln!("watching (Ctrl-C to stop)");
    }

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            _ = ticker.tick() => {
                let store = store.lock().await;
                println!("{}", render(&store.dashboard(), flags.format)?);
            }
        }
    }

    Ok(())
}
