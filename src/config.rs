//! Configuration management for spotjson.
//!
//! Credentials are read from a JSON file (`api-config.json` by default) in
//! the working directory. Endpoint URLs come from environment variables or a
//! `.env` file and fall back to the public Spotify endpoints.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Command line flags (config path, output directory)
//! 2. Environment variables and `.env` (endpoint URLs)
//! 3. Application defaults

use std::{
    env,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{errors::RunError, types::Credentials};

pub const DEFAULT_CONFIG_FILE: &str = "api-config.json";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const TOKEN_URL_VAR: &str = "SPOTIFY_API_TOKEN_URL";
pub const API_URL_VAR: &str = "SPOTIFY_API_URL";

/// Loads environment variables from a `.env` file in the working directory.
///
/// Parent directories are not searched. A missing `.env` is not an error.
/// Variables already present in the environment take precedence over the
/// file.
///
/// # Errors
///
/// Returns an error string if the file exists but cannot be read or parsed.
pub fn load_env() -> Result<(), String> {
    load_env_from(Path::new("."))
}

/// Loads `dir/.env`, with the same rules as [`load_env`].
pub fn load_env_from(dir: &Path) -> Result<(), String> {
    match dotenv::from_path(dir.join(".env")) {
        Ok(_) => Ok(()),
        Err(dotenv::Error::Io(e)) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

/// Remote endpoints used during a run.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub token_url: String,
    pub api_url: String,
}

impl Endpoints {
    pub fn new(token_url: impl Into<String>, api_url: impl Into<String>) -> Self {
        Endpoints {
            token_url: token_url.into(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Reads `SPOTIFY_API_TOKEN_URL` and `SPOTIFY_API_URL`, falling back to
    /// the public Spotify endpoints.
    pub fn from_env() -> Self {
        Endpoints::from_vars(|key| env::var(key).ok())
    }

    /// Resolves the endpoints through `lookup` instead of the process
    /// environment. Unset or empty values fall back to the defaults.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        Endpoints::new(
            var(TOKEN_URL_VAR, DEFAULT_TOKEN_URL),
            var(API_URL_VAR, DEFAULT_API_URL),
        )
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints::new(DEFAULT_TOKEN_URL, DEFAULT_API_URL)
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_FILE)
}

/// Reads the client credentials from `path`.
///
/// The file is read in a single call, so no handle outlives this function
/// whichever way it returns.
///
/// # Errors
///
/// Returns [`RunError::Config`] if the file cannot be read, is not valid
/// JSON, or if either `SpotifyClientID` or `SpotifyClientSecret` is empty.
pub async fn load_credentials(path: &Path) -> Result<Credentials, RunError> {
    let content = async_fs::read_to_string(path).await.map_err(|e| {
        RunError::Config(format!(
            "There was an error opening {path} ({e})\n\
             Please make sure your {path} file exists with your Spotify API key\n\
             If your file has a different name, pass it with --config",
            path = path.display()
        ))
    })?;

    let credentials: Credentials = serde_json::from_str(&content).map_err(|e| {
        RunError::Config(format!(
            "Could not parse {path}: {e}",
            path = path.display()
        ))
    })?;

    validate_credentials(credentials)
}

fn validate_credentials(credentials: Credentials) -> Result<Credentials, RunError> {
    if credentials.client_id.is_empty() {
        return Err(RunError::Config(
            "No Client ID read. Check the SpotifyClientID key".to_string(),
        ));
    }
    if credentials.client_secret.is_empty() {
        return Err(RunError::Config(
            "No Client Secret read. Check the SpotifyClientSecret key".to_string(),
        ));
    }
    Ok(credentials)
}
