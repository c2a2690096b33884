use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;

use borrowhub_core::{NewNotification, Notification};

use crate::error::ApiError;
use crate::gateway::NotificationGateway;

/// Client-side snapshot of the notification state.
///
/// `unread_count` is an independently adjusted counter, not derived from
/// `notifications`: mutations patch it locally for responsiveness, and the
/// next successful fetch replaces it with the server's value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StoreState {
    pub notifications: Vec<Notification>,
    pub unread_count: u32,
    pub is_loading: bool,
    pub is_error: bool,
}

/// Session-scoped holder of the notification snapshot.
///
/// One instance per authenticated session, shared with presentation
/// surfaces as `Arc<NotificationStore>`. Surfaces read via [`snapshot`]
/// or follow changes via [`subscribe`]; all mutation goes through the
/// four operations below, which never panic across the store boundary —
/// failures resolve to the `is_error` flag plus an unchanged snapshot.
///
/// Operations are deliberately not serialized against each other. A
/// `fetch` response that lands after a concurrent `mark_read` response
/// replaces the snapshot wholesale, which can momentarily resurrect
/// server state from before the mark-read. With the polling cadence this
/// window is accepted; the next fetch converges.
///
/// [`snapshot`]: NotificationStore::snapshot
/// [`subscribe`]: NotificationStore::subscribe
pub struct NotificationStore {
    gateway: Arc<dyn NotificationGateway>,
    state: watch::Sender<StoreState>,
}

impl NotificationStore {
    /// Create an empty store backed by the given gateway.
    pub fn new(gateway: Arc<dyn NotificationGateway>) -> Self {
        let (state, _) = watch::channel(StoreState::default());
        Self { gateway, state }
    }

    /// Current state, cloned out of the store.
    pub fn snapshot(&self) -> StoreState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every state change.
    ///
    /// Only the latest state is retained; a slow surface skips
    /// intermediate snapshots rather than queueing them.
    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.state.subscribe()
    }

    fn apply(&self, mutate: impl FnOnce(&mut StoreState)) {
        self.state.send_modify(mutate);
    }

    /// Replace the snapshot wholesale from the server.
    ///
    /// The server is the source of truth for both the list and the unread
    /// count after every fetch. On failure the last-known-good values are
    /// preserved and only the error flag changes. Repeated successful
    /// calls with no intervening mutation converge to identical state.
    pub async fn fetch(&self) -> Result<(), ApiError> {
        self.apply(|s| s.is_loading = true);

        match self.gateway.list().await {
            Ok(page) => {
                self.apply(|s| {
                    s.notifications = page.data;
                    s.unread_count = page.unread_count;
                    s.is_loading = false;
                    s.is_error = false;
                });
                Ok(())
            }
            Err(e) => {
                self.apply(|s| {
                    s.is_loading = false;
                    s.is_error = true;
                });
                Err(e)
            }
        }
    }

    /// Mark one notification read and patch the local snapshot.
    ///
    /// The remote call is issued even when `id` is not in the local list
    /// (the client does not guess); in that case the success path leaves
    /// the list and counter untouched. The counter only moves when the
    /// record actually transitions unread -> read, so a repeated call for
    /// an already-read notification cannot decrement twice.
    pub async fn mark_read(&self, id: &str) -> Result<Notification, ApiError> {
        match self.gateway.mark_read(id).await {
            Ok(envelope) => {
                let updated = envelope.data;
                self.apply(|s| {
                    if let Some(slot) = s.notifications.iter_mut().find(|n| n.id == id) {
                        if !slot.is_read && updated.is_read {
                            s.unread_count = s.unread_count.saturating_sub(1);
                        }
                        *slot = updated.clone();
                    }
                    s.is_error = false;
                });
                Ok(updated)
            }
            Err(e) => {
                self.apply(|s| s.is_error = true);
                Err(e)
            }
        }
    }

    /// Create a notification and append the server-returned record.
    pub async fn create(&self, new: &NewNotification) -> Result<Notification, ApiError> {
        match self.gateway.create(new).await {
            Ok(envelope) => {
                let created = envelope.data;
                self.apply(|s| {
                    if !created.is_read {
                        s.unread_count += 1;
                    }
                    s.notifications.push(created.clone());
                    s.is_error = false;
                });
                Ok(created)
            }
            Err(e) => {
                self.apply(|s| s.is_error = true);
                Err(e)
            }
        }
    }

    /// Delete a notification and drop it from the local snapshot.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        match self.gateway.delete(id).await {
            Ok(_) => {
                self.apply(|s| {
                    if let Some(pos) = s.notifications.iter().position(|n| n.id == id) {
                        let removed = s.notifications.remove(pos);
                        if !removed.is_read {
                            s.unread_count = s.unread_count.saturating_sub(1);
                        }
                    }
                    s.is_error = false;
                });
                Ok(())
            }
            Err(e) => {
                self.apply(|s| s.is_error = true);
                Err(e)
            }
        }
    }
}
