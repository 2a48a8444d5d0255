use std::path::{Path, PathBuf};

use url::Url;

use crate::error::{AppError, Result};

const DEFAULT_OUTPUT_DIR: &str = "playlists";
const LOG_FILE_NAME: &str = "spotify_playlist_export.log";

#[derive(Debug, Clone)]
pub struct Config {
    pub spotify_client_id: String,
    pub spotify_client_secret: String,
    pub spotify_redirect_uri: String,
    pub output_dir: PathBuf,
    pub output_prefix_split: String,
    pub output_prefix_single: String,
    pub log_dir: PathBuf,
    pub log_level: String,
    pub token_cache_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup, trimming values and treating blank ones as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |key: &str| {
            get(key).ok_or_else(|| AppError::Config(format!("{} not set", key)))
        };

        let spotify_client_id = required("SPOTIFY_CLIENT_ID")?;
        let spotify_client_secret = required("SPOTIFY_CLIENT_SECRET")?;
        let spotify_redirect_uri = required("SPOTIFY_REDIRECT_URI")?;

        Url::parse(&spotify_redirect_uri).map_err(|e| {
            AppError::Config(format!("SPOTIFY_REDIRECT_URI is not a valid URL: {}", e))
        })?;

        let output_dir = get("OUTPUT_DIR")
            .map(|v| expand_home(&v))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let log_dir = get("LOG_DIR")
            .map(|v| expand_home(&v))
            .unwrap_or_else(|| PathBuf::from("."));

        let token_cache_path = get("SPOTIFY_TOKEN_CACHE")
            .map(|v| expand_home(&v))
            .unwrap_or_else(default_token_cache);

        Ok(Self {
            spotify_client_id,
            spotify_client_secret,
            spotify_redirect_uri,
            output_dir,
            output_prefix_split: get("OUTPUT_PREFIX_SPLIT").unwrap_or_default(),
            output_prefix_single: get("OUTPUT_PREFIX_SINGLE").unwrap_or_default(),
            log_dir,
            log_level: get("LOG_LEVEL")
                .map(|v| v.to_lowercase())
                .unwrap_or_else(|| "info".to_string()),
            token_cache_path,
        })
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }
}

fn default_token_cache() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("spotify-playlist-export")
        .join("token.json")
}

/// Expands a leading `~` to the user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            let rest = rest.trim_start_matches(['/', '\\']);
            return if rest.is_empty() { home } else { home.join(rest) };
        }
    }
    Path::new(path).to_path_buf()
}
