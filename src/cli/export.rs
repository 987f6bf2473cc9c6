use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    time::Duration,
};

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;

use super::resolve::resolve_playlist_id;
use crate::{
    config::{self, Endpoints},
    error,
    errors::RunError,
    info, output, spotify, success,
};

/// Everything one export run needs, resolved up front.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub config_path: PathBuf,
    /// Playlist ID, URL or URI. Prompted for when `None`.
    pub input: Option<String>,
    pub output_dir: PathBuf,
    pub endpoints: Endpoints,
}

pub async fn export(config_path: Option<PathBuf>, input: Option<String>, output_dir: PathBuf) {
    info!("Spotify public playlist to JSON");

    let request = ExportRequest {
        config_path: config_path.unwrap_or_else(config::default_config_path),
        input,
        output_dir,
        endpoints: Endpoints::from_env(),
    };

    match run(&request).await {
        Ok(path) => {
            success!("Playlist written to {}", path.display());
            success!("Successful run!");
        }
        Err(e) => error!(code = e.exit_code(); "{}", e),
    }
}

/// Runs config, input, token, fetch and write in order and stops at the
/// first failure.
///
/// The input is validated before the token request, so a malformed
/// playlist reference never causes a network call.
pub async fn run(request: &ExportRequest) -> Result<PathBuf, RunError> {
    let credentials = config::load_credentials(&request.config_path).await?;

    let raw_input = match &request.input {
        Some(input) => input.trim().to_string(),
        None => prompt_playlist_input(&mut io::stdin().lock())?,
    };
    let playlist_id = resolve_playlist_id(&raw_input)?;
    info!("Resolved playlist ID {}", playlist_id);

    let client = Client::new();

    let pb = spinner("Requesting access token...");
    let token = spotify::auth::fetch_token(&client, &request.endpoints, &credentials).await;
    pb.finish_and_clear();
    let token = token.map_err(|cause| {
        RunError::Auth(format!(
            "There was an error obtaining access token: {}",
            cause
        ))
    })?;

    let pb = spinner("Fetching playlist...");
    let body = spotify::playlist::get_playlist(
        &client,
        &request.endpoints,
        &playlist_id,
        &token.access_token,
    )
    .await;
    pb.finish_and_clear();
    let body = body?;

    let name = spotify::playlist::playlist_name(&body)?;
    info!("Found playlist \"{}\"", name);

    output::write_playlist(&request.output_dir, &output::output_filename(&name), &body).await
}

/// Asks for the playlist and reads it from `reader`.
fn prompt_playlist_input(reader: &mut impl BufRead) -> Result<String, RunError> {
    print!("Enter Spotify Playlist URL/ID/URI: ");
    io::stdout()
        .flush()
        .map_err(|e| RunError::Input(format!("Failed to write prompt: {}", e)))?;

    read_playlist_input(reader)
}

/// Reads one whole line from `reader` and trims the surrounding whitespace.
///
/// Inner whitespace is kept, so the line is never cut at the first space.
pub fn read_playlist_input(reader: &mut impl BufRead) -> Result<String, RunError> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|e| RunError::Input(format!("Failed to read playlist input: {}", e)))?;

    Ok(line.trim().to_string())
}

fn spinner(msg: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
