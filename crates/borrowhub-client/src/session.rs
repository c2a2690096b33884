use std::sync::Arc;

use crate::gateway::NotificationGateway;
use crate::http::HttpGateway;
use crate::store::NotificationStore;

/// An authenticated session against the Borrowing Hub backend.
///
/// Owns the notification store for its lifetime: constructed at login,
/// dropped at logout, which tears the store down with it. Surfaces
/// receive `Arc` references from [`store`](Session::store) instead of
/// reaching for ambient global state.
pub struct Session {
    base_url: String,
    store: Arc<NotificationStore>,
}

impl Session {
    /// Open a session with a bearer token against the given base URL.
    pub fn new(base_url: &str, token: impl Into<String>) -> Self {
        let gateway = Arc::new(HttpGateway::new(base_url, token));
        Self::with_gateway(base_url, gateway)
    }

    /// Open a session over a custom gateway implementation.
    pub fn with_gateway(base_url: &str, gateway: Arc<dyn NotificationGateway>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            store: Arc::new(NotificationStore::new(gateway)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Shared reference to the session's notification store.
    pub fn store(&self) -> Arc<NotificationStore> {
        self.store.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_normalizes_base_url() {
        let session = Session::new("http://hub.example.edu/", "tok");
        assert_eq!(session.base_url(), "http://hub.example.edu");
    }

    #[test]
    fn test_store_starts_empty() {
        let session = Session::new("http://hub.example.edu", "tok");
        let state = session.store().snapshot();
        assert!(state.notifications.is_empty());
        assert_eq!(state.unread_count, 0);
    }

    #[test]
    fn test_surfaces_share_one_store() {
        let session = Session::new("http://hub.example.edu", "tok");
        let sidebar = session.store();
        let header = session.store();
        assert!(Arc::ptr_eq(&sidebar, &header));
    }

    #[test]
    fn test_logout_tears_down_store() {
        let session = Session::new("http://hub.example.edu", "tok");
        let weak = Arc::downgrade(&session.store());
        drop(session);
        assert!(weak.upgrade().is_none());
    }
}
