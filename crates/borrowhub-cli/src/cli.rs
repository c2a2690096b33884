use clap::{Parser, Subcommand, ValueEnum};

use borrowhub_client::DEFAULT_POLL_INTERVAL;
use borrowhub_core::NotificationKind;

#[derive(Parser)]
#[command(name = "borrowhub")]
#[command(about = "Borrowing Hub CLI — follow your notifications from the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server base URL (overrides config and BORROWHUB_URL env var)
    #[arg(short, long, global = true, env = "BORROWHUB_URL")]
    pub server: Option<String>,

    /// Config profile name
    #[arg(short, long, global = true, env = "BORROWHUB_PROFILE", default_value = "default")]
    pub profile: String,

    /// Output format
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in to a Borrowing Hub server
    Login(LoginArgs),
    /// Log out (remove stored credentials)
    Logout,
    /// Show current auth info
    Whoami,
    /// Fetch notifications once and show them
    List,
    /// Poll for notifications until interrupted
    Watch(WatchArgs),
    /// Mark a notification read
    Read(ReadArgs),
    /// Create a notification (admin flows)
    Create(CreateArgs),
    /// Delete a notification
    Delete(DeleteArgs),
    /// Manage CLI configuration
    Config(ConfigArgs),
}

#[derive(clap::Args)]
pub struct LoginArgs {
    /// Bearer token issued by the Borrowing Hub backend
    #[arg(long)]
    pub token: String,
}

#[derive(clap::Args)]
pub struct WatchArgs {
    /// Refresh interval in seconds
    #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL.as_secs())]
    pub interval: u64,
}

#[derive(clap::Args)]
pub struct ReadArgs {
    /// Notification id
    pub id: String,
}

#[derive(clap::Args)]
pub struct CreateArgs {
    /// Short heading
    #[arg(long)]
    pub title: String,
    /// Body text
    #[arg(long)]
    pub message: String,
    /// Classification: info, success, warning or error
    #[arg(long, default_value = "info")]
    pub kind: NotificationKind,
}

#[derive(clap::Args)]
pub struct DeleteArgs {
    /// Notification id
    pub id: String,
}

#[derive(clap::Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current config
    Show,
    /// Set config value
    Set(ConfigSetArgs),
}

#[derive(clap::Args)]
pub struct ConfigSetArgs {
    /// Key to set (server, format)
    pub key: String,
    /// Value
    pub value: String,
}
