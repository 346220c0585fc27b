pub mod parse;

use anyhow::Context;

use crumb_store::lifecycle::{Phase, RequestState};

/// Turn a resolved request slot into data or a command error. A failed fetch
/// surfaces the normalized backend message verbatim.
pub fn ensure_loaded<T>(state: &RequestState<T>) -> anyhow::Result<&T> {
    if state.phase() == Phase::Failed {
        anyhow::bail!("{}", state.error().unwrap_or("Unknown error occurred"));
    }
    state.data().context("no data loaded")
}

/// Clamp a list to the effective row limit (flag wins over config).
#[must_use]
pub fn apply_limit<T>(items: &[T], flag: Option<u32>, config_default: u32) -> &[T] {
    let limit = flag.unwrap_or(config_default) as usize;
    &items[..items.len().min(limit)]
}
