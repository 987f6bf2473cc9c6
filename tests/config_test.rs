use std::{collections::HashMap, fs, path::PathBuf};

use spotjson::config::{
    API_URL_VAR, DEFAULT_API_URL, DEFAULT_TOKEN_URL, Endpoints, TOKEN_URL_VAR, load_credentials,
};
use spotjson::errors::{EXIT_CONFIG, RunError};
use tempfile::{TempDir, tempdir};

// Helper function to write a config file into a fresh temp dir
fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("api-config.json");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

fn assert_config_error(result: Result<spotjson::types::Credentials, RunError>, needle: &str) {
    let err = result.unwrap_err();
    assert!(matches!(err, RunError::Config(_)), "{err:?}");
    assert_eq!(err.exit_code(), EXIT_CONFIG);
    assert!(err.to_string().contains(needle), "{err}");
}

#[tokio::test]
async fn test_load_credentials() {
    let (_dir, path) = write_config(
        r#"{"SpotifyClientID": "my-client-id", "SpotifyClientSecret": "my-client-secret"}"#,
    );

    let creds = load_credentials(&path).await.unwrap();

    assert_eq!(creds.client_id, "my-client-id");
    assert_eq!(creds.client_secret, "my-client-secret");
}

#[tokio::test]
async fn test_extra_keys_are_ignored() {
    let (_dir, path) = write_config(
        r#"{"SpotifyClientID": "id", "SpotifyClientSecret": "secret", "Comment": "dev app"}"#,
    );

    assert!(load_credentials(&path).await.is_ok());
}

#[tokio::test]
async fn test_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("api-config.json");

    assert_config_error(load_credentials(&path).await, "There was an error opening");
}

#[tokio::test]
async fn test_unparsable_file() {
    let (_dir, path) = write_config("SpotifyClientID=abc");

    assert_config_error(load_credentials(&path).await, "Could not parse");
}

#[tokio::test]
async fn test_empty_client_id() {
    let (_dir, path) =
        write_config(r#"{"SpotifyClientID": "", "SpotifyClientSecret": "secret"}"#);

    assert_config_error(load_credentials(&path).await, "No Client ID read");
}

#[tokio::test]
async fn test_empty_client_secret() {
    let (_dir, path) = write_config(r#"{"SpotifyClientID": "id", "SpotifyClientSecret": ""}"#);

    assert_config_error(load_credentials(&path).await, "No Client Secret read");
}

#[tokio::test]
async fn test_misnamed_key_reads_as_empty() {
    let (_dir, path) =
        write_config(r#"{"SpotifyClientId": "id", "SpotifyClientSecret": "secret"}"#);

    assert_config_error(load_credentials(&path).await, "No Client ID read");
}

#[test]
fn test_endpoints() {
    let defaults = Endpoints::default();
    assert_eq!(defaults.token_url, DEFAULT_TOKEN_URL);
    assert_eq!(defaults.api_url, DEFAULT_API_URL);

    // Trailing slash on the API base is dropped
    let custom = Endpoints::new("http://localhost:1234/api/token", "http://localhost:1234/v1/");
    assert_eq!(custom.api_url, "http://localhost:1234/v1");
}

// Helper function to build an environment lookup from key/value pairs
fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_endpoints_from_vars_overrides_both() {
    let env = vars(&[
        (TOKEN_URL_VAR, "http://localhost:8080/api/token"),
        (API_URL_VAR, "http://localhost:8080/v1/"),
    ]);

    let endpoints = Endpoints::from_vars(|key| env.get(key).cloned());

    assert_eq!(endpoints.token_url, "http://localhost:8080/api/token");
    assert_eq!(endpoints.api_url, "http://localhost:8080/v1");
}

#[test]
fn test_endpoints_from_vars_defaults() {
    let unset = vars(&[]);
    let endpoints = Endpoints::from_vars(|key| unset.get(key).cloned());
    assert_eq!(endpoints.token_url, DEFAULT_TOKEN_URL);
    assert_eq!(endpoints.api_url, DEFAULT_API_URL);

    // Empty values count as unset
    let empty = vars(&[(TOKEN_URL_VAR, ""), (API_URL_VAR, "")]);
    let endpoints = Endpoints::from_vars(|key| empty.get(key).cloned());
    assert_eq!(endpoints.token_url, DEFAULT_TOKEN_URL);
    assert_eq!(endpoints.api_url, DEFAULT_API_URL);
}

#[test]
fn test_endpoints_from_vars_single_override() {
    let env = vars(&[(API_URL_VAR, "http://localhost:8080/v1")]);

    let endpoints = Endpoints::from_vars(|key| env.get(key).cloned());

    assert_eq!(endpoints.token_url, DEFAULT_TOKEN_URL);
    assert_eq!(endpoints.api_url, "http://localhost:8080/v1");
}
