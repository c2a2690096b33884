use anyhow::Result;
use colored::Colorize;

use crate::auth::{self, StoredCredentials};
use crate::cli::LoginArgs;
use crate::output::{print_error, print_success};

pub fn login(server: &str, args: &LoginArgs, profile: &str) -> Result<()> {
    let creds = StoredCredentials {
        server: server.to_string(),
        access_token: args.token.clone(),
    };
    auth::save_credentials(profile, &creds)?;
    print_success(&format!("Saved bearer token for {}", server.cyan()));
    Ok(())
}

pub fn logout(profile: &str) -> Result<()> {
    if auth::remove_credentials(profile)? {
        print_success("Logged out (credentials removed)");
    } else {
        println!("No credentials found for profile \"{profile}\"");
    }
    Ok(())
}

pub fn whoami(profile: &str) -> Result<()> {
    match auth::load_credentials(profile)? {
        Some(creds) => {
            println!("{}: {}", "Profile".cyan(), profile);
            println!("{}: {}", "Server".cyan(), creds.server.cyan());
            println!("{}: Bearer (token: {})", "Auth".cyan(), creds.token_preview());
        }
        None => {
            print_error(&format!("Not logged in (profile: \"{profile}\")"));
        }
    }
    Ok(())
}
