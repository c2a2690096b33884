use colored::Colorize;
use tabled::builder::Builder;
use tabled::settings::Style;
use time::format_description::well_known::Rfc3339;

use borrowhub_client::StoreState;
use borrowhub_core::{Notification, NotificationKind};

use crate::cli::OutputFormat;

pub fn print_success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

pub fn print_state(state: &StoreState, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(state).unwrap());
        }
        OutputFormat::Table => {
            print_badge(state);
            print_table(&state.notifications);
        }
    }
}

fn print_badge(state: &StoreState) {
    if state.unread_count > 0 {
        println!("{} {} unread", "●".yellow(), state.unread_count);
    } else {
        println!("{} all read", "○".green());
    }
    if state.is_error {
        print_error("last refresh failed; showing last known state");
    }
}

fn print_table(notifications: &[Notification]) {
    if notifications.is_empty() {
        println!("No notifications.");
        return;
    }
    let mut builder = Builder::default();
    builder.push_record(["", "ID", "Title", "Created", "Read"]);
    for n in notifications {
        let created = n.created_at.format(&Rfc3339).unwrap_or_else(|_| "-".to_string());
        builder.push_record([
            kind_cell(n.kind),
            n.id.clone(),
            n.title.clone(),
            created,
            if n.is_read { String::new() } else { "unread".to_string() },
        ]);
    }
    let table = builder.build().with(Style::rounded()).to_string();
    println!("{table}");
}

fn kind_cell(kind: NotificationKind) -> String {
    let glyph = kind.glyph();
    match kind {
        NotificationKind::Info => glyph.blue().to_string(),
        NotificationKind::Success => glyph.green().to_string(),
        NotificationKind::Warning => glyph.yellow().to_string(),
        NotificationKind::Error => glyph.red().to_string(),
    }
}
