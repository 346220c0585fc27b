//! Notification slice.
//!
//! Maintains the derived unread counter incrementally on every mutating path
//! (insert, mark-one-read, mark-all-read, clear) and recomputes it on fetch.
//! Invariant, checked in debug builds after every transition:
//! `unread_count == items.filter(!read).count()`.
//!
//! Optimistic inserts (e.g. a local "task completed" entry before the backend
//! confirms) carry a `tmp-` id; when the confirmed notification arrives it is
//! reconciled by content match (kind + message) so the list never holds both.

use chrono::{DateTime, Utc};

use crumb_client::ApiError;
use crumb_core::entities::Notification;
use crumb_core::enums::NotificationKind;

use crate::api::NotificationsApi;
use crate::lifecycle::RequestState;

#[derive(Debug)]
pub struct NotificationSlice<G> {
    gateway: G,
    state: RequestState<Vec<Notification>>,
    unread_count: usize,
    next_local_id: u64,
}

impl<G> NotificationSlice<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: RequestState::new(),
            unread_count: 0,
            next_local_id: 1,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &RequestState<Vec<Notification>> {
        &self.state
    }

    #[must_use]
    pub fn items(&self) -> &[Notification] {
        self.state.data().map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub const fn unread_count(&self) -> usize {
        self.unread_count
    }

    /// Insert a locally generated notification ahead of backend confirmation.
    /// Returns the temporary id.
    pub fn insert_local(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
        now: DateTime<Utc>,
    ) -> String {
        let id = format!("{}{}", Notification::LOCAL_ID_PREFIX, self.next_local_id);
        self.next_local_id += 1;
        self.insert(Notification {
            id: id.clone(),
            kind,
            message: message.into(),
            read: false,
            created_at: now,
        });
        id
    }

    /// Insert a notification at the head of the list.
    ///
    /// A confirmed (non-local) notification first tries to reconcile with a
    /// pending local entry of the same kind and message, replacing it in place
    /// instead of duplicating.
    pub fn insert(&mut self, notification: Notification) {
        let items = self.state.data_mut_or_default();

        if !notification.is_local() {
            if let Some(pos) = items.iter().position(|n| {
                n.is_local() && n.kind == notification.kind && n.message == notification.message
            }) {
                let was_unread = !items[pos].read;
                let now_unread = !notification.read;
                items[pos] = notification;
                match (was_unread, now_unread) {
                    (true, false) => self.unread_count -= 1,
                    (false, true) => self.unread_count += 1,
                    _ => {}
                }
                self.check_invariant();
                return;
            }
        }

        if !notification.read {
            self.unread_count += 1;
        }
        items.insert(0, notification);
        self.check_invariant();
    }

    /// Drop all notifications (e.g. on logout).
    pub fn clear(&mut self) {
        self.state.reset();
        self.unread_count = 0;
        self.check_invariant();
    }

    fn recount(&mut self) {
        self.unread_count = self.items().iter().filter(|n| !n.read).count();
    }

    fn check_invariant(&self) {
        debug_assert_eq!(
            self.unread_count,
            self.items().iter().filter(|n| !n.read).count(),
            "unread counter drifted from the collection"
        );
    }
}

impl<G: NotificationsApi> NotificationSlice<G> {
    /// Fetch the notification list, replacing the collection verbatim and
    /// recomputing the unread counter from it.
    pub async fn fetch_all(&mut self) {
        let ticket = self.state.begin();
        let outcome = self.gateway.list_notifications().await;
        if self
            .state
            .resolve(ticket, outcome.map_err(|e| e.message().to_string()))
            && self.state.error().is_none()
        {
            self.recount();
        }
        self.check_invariant();
    }

    /// Mark one notification read on the backend, then locally.
    ///
    /// # Errors
    ///
    /// Mutation failures are returned to the caller; local state is untouched.
    pub async fn mark_read(&mut self, id: &str) -> Result<(), ApiError> {
        let confirmed = self.gateway.mark_notification_read(id).await?;
        if let Some(items) = self.state.data_mut() {
            if let Some(item) = items.iter_mut().find(|n| n.id == confirmed.id) {
                if !item.read {
                    item.read = true;
                    self.unread_count = self.unread_count.saturating_sub(1);
                }
            }
        }
        self.check_invariant();
        Ok(())
    }

    /// Mark every notification read. Idempotent: a second call is a no-op that
    /// leaves `unread_count == 0`.
    ///
    /// # Errors
    ///
    /// Mutation failures are returned to the caller; local state is untouched.
    pub async fn mark_all_read(&mut self) -> Result<(), ApiError> {
        self.gateway.mark_all_notifications_read().await?;
        if let Some(items) = self.state.data_mut() {
            for item in items.iter_mut() {
                item.read = true;
            }
        }
        self.unread_count = 0;
        self.check_invariant();
        Ok(())
    }
}
