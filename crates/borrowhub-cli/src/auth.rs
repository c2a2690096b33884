use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Stored session credentials — the backend issues bearer tokens only.
#[derive(Debug, Serialize, Deserialize)]
pub struct StoredCredentials {
    pub server: String,
    pub access_token: String,
}

impl StoredCredentials {
    /// Shortened token for display, so `whoami` never prints the secret.
    pub fn token_preview(&self) -> String {
        if self.access_token.len() > 20 {
            format!(
                "{}...{}",
                &self.access_token[..8],
                &self.access_token[self.access_token.len() - 8..]
            )
        } else {
            self.access_token.clone()
        }
    }
}

fn creds_path(profile: &str) -> Result<PathBuf> {
    let dir = dirs::home_dir()
        .context("Cannot determine home directory")?
        .join(".borrowhub");
    fs::create_dir_all(&dir)?;
    Ok(dir.join(format!("credentials.{profile}.json")))
}

pub fn load_credentials(profile: &str) -> Result<Option<StoredCredentials>> {
    let path = creds_path(profile)?;
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path)?;
    let creds: StoredCredentials = serde_json::from_str(&content)?;
    Ok(Some(creds))
}

pub fn save_credentials(profile: &str, creds: &StoredCredentials) -> Result<()> {
    let path = creds_path(profile)?;
    let content = serde_json::to_string_pretty(creds)?;
    fs::write(path, content)?;
    Ok(())
}

pub fn remove_credentials(profile: &str) -> Result<bool> {
    let path = creds_path(profile)?;
    if path.exists() {
        fs::remove_file(path)?;
        Ok(true)
    } else {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_preview_masks_long_tokens() {
        let creds = StoredCredentials {
            server: "http://hub.example.edu".to_string(),
            access_token: "abcdefgh-0123456789-ijklmnop".to_string(),
        };
        let preview = creds.token_preview();
        assert_eq!(preview, "abcdefgh...ijklmnop");
        assert!(!preview.contains("0123456789"));
    }

    #[test]
    fn test_token_preview_keeps_short_tokens() {
        let creds = StoredCredentials {
            server: "http://hub.example.edu".to_string(),
            access_token: "short".to_string(),
        };
        assert_eq!(creds.token_preview(), "short");
    }
}
