//! The request-lifecycle state machine.
//!
//! ```text
//! Idle -> Loading -> Succeeded
//!                 -> Failed
//! ```
//!
//! Not one-shot: any state re-enters `Loading` on the next fetch. Each slot
//! hands out monotonic tickets; resolutions carrying a ticket older than the
//! newest issued one are discarded, which turns the reference deployment's
//! last-writer-wins race into a defined rule.

use std::fmt;

use serde::Serialize;

/// Visible status of one async operation slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl Phase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One request-lifecycle slot: phase, cached data, last error, and the ticket
/// counters that define resolution ordering.
///
/// Invariants, checked in debug builds after every transition:
/// - `Failed` implies `error.is_some()`
/// - `Succeeded` implies `error.is_none()`
/// - a failed fetch leaves previously cached data untouched
///   (stale-but-available, never cleared)
#[derive(Debug, Clone)]
pub struct RequestState<T> {
    phase: Phase,
    data: Option<T>,
    error: Option<String>,
    issued: u64,
    applied: u64,
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            data: None,
            error: None,
            issued: 0,
            applied: 0,
        }
    }
}

impl<T> RequestState<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    #[must_use]
    pub fn data_mut(&mut self) -> Option<&mut T> {
        self.data.as_mut()
    }

    /// Cached data, inserting a default value if none was ever fetched.
    pub fn data_mut_or_default(&mut self) -> &mut T
    where
        T: Default,
    {
        self.data.get_or_insert_with(T::default)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start a fetch: transition to `Loading` and take a ticket for its
    /// eventual resolution.
    pub const fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.phase = Phase::Loading;
        self.issued
    }

    /// Apply a successful resolution. Returns `false` (leaving state
    /// untouched) when the ticket is stale.
    pub fn succeed(&mut self, ticket: u64, value: T) -> bool {
        if self.is_stale(ticket) {
            return false;
        }
        self.applied = ticket;
        self.phase = Phase::Succeeded;
        self.data = Some(value);
        self.error = None;
        self.check_invariants();
        true
    }

    /// Apply a failed resolution. Cached data is left untouched. Returns
    /// `false` when the ticket is stale.
    pub fn fail(&mut self, ticket: u64, message: impl Into<String>) -> bool {
        if self.is_stale(ticket) {
            return false;
        }
        self.applied = ticket;
        self.phase = Phase::Failed;
        self.error = Some(message.into());
        self.check_invariants();
        true
    }

    /// Apply a resolution from a `Result`.
    pub fn resolve(&mut self, ticket: u64, outcome: Result<T, String>) -> bool {
        match outcome {
            Ok(value) => self.succeed(ticket, value),
            Err(message) => self.fail(ticket, message),
        }
    }

    /// Merge data outside the fetch lifecycle (mutation results). Does not
    /// touch phase or error: a mutation confirming mid-fetch must not mask the
    /// in-flight fetch's resolution.
    pub fn set(&mut self, value: T) {
        self.data = Some(value);
        self.check_invariants();
    }

    /// Drop cached data and return to `Idle` (e.g. after the entity was
    /// deleted).
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.data = None;
        self.error = None;
    }

    /// A ticket is stale when a newer fetch was issued after it, or when it
    /// already resolved.
    const fn is_stale(&self, ticket: u64) -> bool {
        ticket < self.issued || ticket <= self.applied
    }

    fn check_invariants(&self) {
        debug_assert!(
            self.phase != Phase::Failed || self.error.is_some(),
            "Failed phase requires an error"
        );
        debug_assert!(
            self.phase != Phase::Succeeded || self.error.is_none(),
            "Succeeded phase forbids an error"
        );
    }
}
