use crate::{error, errors::RunError, success, utils};

/// Prints the playlist ID an input resolves to. No network access.
pub fn resolve(input: &str) {
    match resolve_playlist_id(input) {
        Ok(id) => success!("Playlist ID: {}", id),
        Err(e) => error!(code = e.exit_code(); "{}", e),
    }
}

/// Trims `input` and normalizes it to a playlist ID.
///
/// # Errors
///
/// Returns [`RunError::Input`] for an unrecognized URL/URI shape, and also
/// when the input yields no ID at all (empty input, or a URL whose ID does
/// not start with a digit).
pub fn resolve_playlist_id(input: &str) -> Result<String, RunError> {
    let input = input.trim();
    let playlist_id = utils::normalize_playlist_input(input)?;
    if playlist_id.is_empty() {
        return Err(RunError::Input(format!(
            "Could not find a playlist ID in {:?}",
            input
        )));
    }
    Ok(playlist_id)
}
