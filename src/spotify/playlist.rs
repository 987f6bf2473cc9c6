use reqwest::{
    Client,
    header::{CONTENT_TYPE, HeaderValue},
};

use crate::{config::Endpoints, errors::RunError, types::PlaylistEnvelope};

/// Market sent with every playlist request.
pub const MARKET: &str = "ES";

pub fn playlist_url(endpoints: &Endpoints, playlist_id: &str) -> String {
    format!(
        "{uri}/playlists/{id}?market={market}",
        uri = endpoints.api_url,
        id = playlist_id,
        market = MARKET
    )
}

/// Fetches the playlist document for `playlist_id`.
///
/// The body is returned as received, whatever the response status. Spotify
/// error responses are JSON too and are told apart by [`playlist_name`].
///
/// # Errors
///
/// Returns the underlying [`reqwest::Error`] on transport failures (DNS,
/// refused connection, timeout) or when the body cannot be read.
pub async fn get_playlist(
    client: &Client,
    endpoints: &Endpoints,
    playlist_id: &str,
    access_token: &str,
) -> Result<Vec<u8>, reqwest::Error> {
    let response = client
        .get(playlist_url(endpoints, playlist_id))
        .bearer_auth(access_token)
        .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
        .send()
        .await?;

    Ok(response.bytes().await?.to_vec())
}

/// Reads the top-level `name` out of a fetched playlist document.
///
/// # Errors
///
/// Returns [`RunError::Fetch`] when the body is not a JSON object or has no
/// usable name. A Spotify error object in the body is quoted in the
/// message.
pub fn playlist_name(body: &[u8]) -> Result<String, RunError> {
    let envelope: PlaylistEnvelope = serde_json::from_slice(body)
        .map_err(|e| RunError::Fetch(format!("Error. Could not unmarshal data: {}", e)))?;

    match envelope.name {
        Some(name) if !name.is_empty() => Ok(name),
        _ => {
            let mut msg = "Could not find playlist data of URL/URI/ID entered".to_string();
            if let Some(err) = envelope.error {
                msg.push_str(&format!(" (Spotify responded {})", err));
            }
            Err(RunError::Fetch(msg))
        }
    }
}
