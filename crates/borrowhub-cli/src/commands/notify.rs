use anyhow::Result;
use colored::Colorize;

use borrowhub_client::Session;
use borrowhub_core::NewNotification;

use crate::cli::{CreateArgs, OutputFormat};
use crate::output::{print_state, print_success};

pub async fn list(session: &Session, format: OutputFormat) -> Result<()> {
    let store = session.store();
    store.fetch().await?;
    print_state(&store.snapshot(), format);
    Ok(())
}

pub async fn read(session: &Session, id: &str) -> Result<()> {
    let store = session.store();
    // Seed the local list first so the unread counter moves with the patch
    store.fetch().await?;
    store.mark_read(id).await?;
    print_success(&format!(
        "Marked {} read ({} unread left)",
        id.cyan(),
        store.snapshot().unread_count
    ));
    Ok(())
}

pub async fn create(session: &Session, args: &CreateArgs) -> Result<()> {
    let store = session.store();
    let new = NewNotification::new(args.title.clone(), args.message.clone(), args.kind);
    let created = store.create(&new).await?;
    print_success(&format!("Created {} ({})", created.id.cyan(), created.kind));
    Ok(())
}

pub async fn delete(session: &Session, id: &str) -> Result<()> {
    let store = session.store();
    store.fetch().await?;
    store.delete(id).await?;
    print_success(&format!(
        "Deleted {} ({} unread left)",
        id.cyan(),
        store.snapshot().unread_count
    ));
    Ok(())
}
