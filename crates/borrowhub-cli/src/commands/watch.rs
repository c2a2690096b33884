use std::time::Duration;

use anyhow::Result;

use borrowhub_client::{Poller, Session};

use crate::cli::OutputFormat;
use crate::output::{print_state, print_success};

/// Keep the store fresh and re-render on every settled state change
/// until Ctrl-C.
pub async fn watch(session: &Session, interval_secs: u64, format: OutputFormat) -> Result<()> {
    let store = session.store();
    let mut rx = store.subscribe();
    let poller = Poller::start(store.clone(), Duration::from_secs(interval_secs));

    println!(
        "Watching {} every {interval_secs}s — Ctrl-C to stop",
        session.base_url()
    );

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = rx.borrow_and_update().clone();
                // Skip the transient loading flip, render settled states
                if state.is_loading {
                    continue;
                }
                print_state(&state, format);
            }
        }
    }

    poller.stop();
    print_success("Stopped watching");
    Ok(())
}
