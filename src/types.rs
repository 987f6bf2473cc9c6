use std::fmt;

use serde::Deserialize;

/// Contents of `api-config.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    #[serde(rename = "SpotifyClientID", default)]
    pub client_id: String,
    #[serde(rename = "SpotifyClientSecret", default)]
    pub client_secret: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Token {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default = "missing_expiry")]
    pub expires_in: i64,
}

fn missing_expiry() -> i64 {
    -1
}

impl Token {
    /// The "no token" result returned when the token request fails.
    pub fn empty() -> Self {
        Token {
            access_token: String::new(),
            token_type: String::new(),
            expires_in: missing_expiry(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.access_token.is_empty()
    }
}

/// The few fields of a playlist document this tool reads. The document
/// itself is written out untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistEnvelope {
    pub name: Option<String>,
    pub error: Option<ApiError>,
}

/// The `error` member of a Spotify response.
///
/// The Web API sends an object with `status` and `message`, the accounts
/// service a bare code such as `"invalid_token"`. Any other shape is kept
/// as is so it never breaks reading the envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ApiError {
    Detailed {
        #[serde(default)]
        status: u16,
        #[serde(default)]
        message: String,
    },
    Code(String),
    Other(serde_json::Value),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Detailed { status: 0, message } => write!(f, "{}", message),
            ApiError::Detailed { status, message } => write!(f, "{}: {}", status, message),
            ApiError::Code(code) => write!(f, "{}", code),
            ApiError::Other(value) => write!(f, "{}", value),
        }
    }
}
