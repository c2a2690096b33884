use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{info, warn};

use crate::store::NotificationStore;

/// Cadence used when a surface does not configure its own.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Periodic refresh driver for a [`NotificationStore`].
///
/// Fetches once immediately on start, then on every tick. A failed fetch
/// is logged and the loop keeps running; the store already carries the
/// error flag for surfaces to render. Several pollers may drive the same
/// store — fetch is idempotent, so overlapping refreshes are wasteful but
/// harmless.
///
/// The task is cancelled by [`stop`](Poller::stop) or by dropping the
/// handle, so a surface that is torn down cannot leak its refresh loop.
/// A fetch in flight at cancellation is dropped at its await point and
/// never touches the store.
pub struct Poller {
    handle: JoinHandle<()>,
}

impl Poller {
    /// Spawn the refresh loop on the current tokio runtime.
    pub fn start(store: Arc<NotificationStore>, period: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            info!(period_secs = period.as_secs(), "notification poller started");

            loop {
                // First tick completes immediately
                ticker.tick().await;

                if let Err(e) = store.fetch().await {
                    warn!(error = %e, "notification refresh failed");
                }
            }
        });

        Self { handle }
    }

    /// Cancel the refresh loop. No further fetches are issued.
    pub fn stop(self) {
        self.handle.abort();
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
