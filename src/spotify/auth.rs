use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{
    Client,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue},
};

use crate::{
    config::Endpoints,
    types::{Credentials, Token},
    warning,
};

/// Builds the HTTP Basic authorization value for the client credentials.
///
/// # Example
///
/// ```
/// let creds = Credentials { client_id: "id".into(), client_secret: "secret".into() };
/// assert_eq!(basic_authorization(&creds), "Basic aWQ6c2VjcmV0");
/// ```
pub fn basic_authorization(credentials: &Credentials) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!(
            "{}:{}",
            credentials.client_id, credentials.client_secret
        ))
    )
}

/// Requests an access token using the OAuth 2.0 client credentials grant.
///
/// Posts `grant_type=client_credentials` to the token endpoint with the
/// client ID and secret as Basic authorization. Nothing is printed, so the
/// caller decides when to report the failure.
///
/// # Errors
///
/// Returns a description of the failure: network error, non-2xx status,
/// a body that is not a token, or a token without an access token.
///
/// # API Documentation
///
/// Uses Spotify's token endpoint with the "client_credentials" grant type
/// as specified in the OAuth 2.0 specification.
pub async fn fetch_token(
    client: &Client,
    endpoints: &Endpoints,
    credentials: &Credentials,
) -> Result<Token, String> {
    let authorization = HeaderValue::from_str(&basic_authorization(credentials))
        .map_err(|e| format!("Client credentials cannot be sent as a header: {}", e))?;

    let response = client
        .post(&endpoints.token_url)
        .header(AUTHORIZATION, authorization)
        .header(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        )
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| format!("Error making token request: {}", e))? // network or reqwest error
        .error_for_status()
        .map_err(|e| format!("Token request was rejected: {}", e))?;

    let token = response
        .json::<Token>()
        .await
        .map_err(|e| format!("Error reading token response body: {}", e))?;

    if token.is_empty() {
        return Err("Token response carried no access token".to_string());
    }
    Ok(token)
}

/// Like [`fetch_token`], but never fails.
///
/// # Returns
///
/// The parsed [`Token`]. Any failure is logged as a warning and yields
/// [`Token::empty`]. Callers must check [`Token::is_empty`] before using the
/// token.
pub async fn request_token(
    client: &Client,
    endpoints: &Endpoints,
    credentials: &Credentials,
) -> Token {
    fetch_token(client, endpoints, credentials)
        .await
        .unwrap_or_else(|e| {
            warning!("{}", e);
            Token::empty()
        })
}
