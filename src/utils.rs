use std::sync::LazyLock;

use regex::Regex;

use crate::errors::RunError;

static PLAYLIST_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"playlist/[A-Za-z0-9]+").unwrap());
static PLAYLIST_URI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"playlist:[A-Za-z0-9]+").unwrap());
static PLAYLIST_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9][A-Za-z0-9]+").unwrap());

pub fn is_valid_url(input: &str) -> bool {
    PLAYLIST_URL.is_match(input)
}

pub fn is_valid_uri(input: &str) -> bool {
    PLAYLIST_URI.is_match(input)
}

/// Returns the first run of alphanumerics that starts with a digit, or an
/// empty string when there is none.
///
/// IDs that start with a letter are not recognized.
pub fn extract_playlist_id(input: &str) -> String {
    PLAYLIST_ID
        .find(input)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Reduces a playlist ID, URL or URI to the bare playlist ID.
///
/// Input without any `/` or `:` is taken to be an ID already and is
/// returned unchanged. Anything else must look like a playlist URL
/// (`.../playlist/<id>`) or URI (`spotify:playlist:<id>`).
///
/// # Errors
///
/// Returns [`RunError::Input`] when the input contains `/` or `:` but has
/// neither shape.
///
/// # Example
///
/// ```
/// let id = normalize_playlist_input("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M")?;
/// assert_eq!(id, "37i9dQZF1DXcBWIGoYBM5M");
/// ```
pub fn normalize_playlist_input(input: &str) -> Result<String, RunError> {
    if !input.contains('/') && !input.contains(':') {
        return Ok(input.to_string());
    }

    if is_valid_url(input) || is_valid_uri(input) {
        Ok(extract_playlist_id(input))
    } else {
        Err(RunError::Input(format!("Invalid URL / URI: {}", input)))
    }
}
