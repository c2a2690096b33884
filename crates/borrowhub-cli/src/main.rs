mod auth;
mod cli;
mod commands;
mod config;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use borrowhub_client::Session;

use cli::{Cli, Commands};
use output::print_error;

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(e) = run().await {
        print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let profile = &cli.profile;
    let format = cli.format.unwrap_or_default();

    match &cli.command {
        Commands::Login(args) => {
            let server = config::resolve_server(&cli.server, profile)?;
            commands::auth::login(&server, args, profile)?;
        }
        Commands::Logout => {
            commands::auth::logout(profile)?;
        }
        Commands::Whoami => {
            commands::auth::whoami(profile)?;
        }
        Commands::Config(args) => match &args.command {
            cli::ConfigCommands::Show => {
                let cfg = config::load_profile(profile)?;
                println!("{}: {}", "Profile".cyan(), profile);
                println!(
                    "{}: {}",
                    "Server".cyan(),
                    cfg.server.as_deref().unwrap_or("(not set)")
                );
                println!(
                    "{}: {}",
                    "Format".cyan(),
                    cfg.format.as_deref().unwrap_or("table")
                );
            }
            cli::ConfigCommands::Set(set_args) => {
                let mut cfg = config::load_profile(profile)?;
                match set_args.key.as_str() {
                    "server" => cfg.server = Some(set_args.value.clone()),
                    "format" => cfg.format = Some(set_args.value.clone()),
                    other => {
                        anyhow::bail!("Unknown config key: {other}. Valid keys: server, format")
                    }
                }
                config::save_profile(profile, &cfg)?;
                output::print_success(&format!("Set {} = {}", set_args.key, set_args.value));
            }
        },
        Commands::List => {
            let session = make_session(&cli.server, profile)?;
            commands::notify::list(&session, format).await?;
        }
        Commands::Watch(args) => {
            let session = make_session(&cli.server, profile)?;
            commands::watch::watch(&session, args.interval, format).await?;
        }
        Commands::Read(args) => {
            let session = make_session(&cli.server, profile)?;
            commands::notify::read(&session, &args.id).await?;
        }
        Commands::Create(args) => {
            let session = make_session(&cli.server, profile)?;
            commands::notify::create(&session, args).await?;
        }
        Commands::Delete(args) => {
            let session = make_session(&cli.server, profile)?;
            commands::notify::delete(&session, &args.id).await?;
        }
    }

    Ok(())
}

fn make_session(cli_server: &Option<String>, profile: &str) -> Result<Session> {
    let server = config::resolve_server(cli_server, profile)?;
    let creds = auth::load_credentials(profile)?.with_context(|| {
        format!("Not logged in (profile: \"{profile}\"). Run: borrowhub login --server <url> --token <token>")
    })?;
    Ok(Session::new(&server, creds.access_token))
}
