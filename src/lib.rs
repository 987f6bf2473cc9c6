//! Spotify Playlist to JSON Library
//!
//! This library provides the building blocks for exporting the metadata of a
//! Spotify playlist to a local JSON file. It authenticates with the client
//! credentials grant, resolves playlist identifiers from free-form input,
//! fetches the playlist document and persists it verbatim.
//!
//! # Modules
//!
//! - `cli` - Command implementations used by the binary
//! - `config` - Credentials file, `.env` loading and endpoint configuration
//! - `errors` - The run error taxonomy and its exit codes
//! - `output` - Output filename derivation and file persistence
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Input normalization helpers
//!
//! # Example
//!
//! ```
//! use spotjson::{cli, config};
//!
//! #[tokio::main]
//! async fn main() {
//!     let _ = config::load_env();
//!     cli::resolve("spotify:playlist:37i9dQZF1DXcBWIGoYBM5M");
//! }
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod output;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Requesting access token...");
/// info!("Resolved playlist ID {}", id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// The exit code defaults to 1. A specific code can be given with a leading
/// `code = <expr>;` so callers can report distinct failure kinds.
///
/// # Behavior
///
/// This macro will cause the program to exit immediately after printing
/// the error message. It should only be used for fatal errors where
/// recovery is not possible.
///
/// # Example
///
/// ```
/// error!("Failed to build runtime");
/// error!(code = err.exit_code(); "{}", err);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  (code = $code:expr; $($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit($code);
  });
  ($($arg:tt)*) => ({
    $crate::error!(code = 1; $($arg)*)
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues that don't require program termination.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
