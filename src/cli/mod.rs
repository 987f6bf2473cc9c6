//! # CLI Module
//!
//! Command implementations behind the `spotjson` binary.
//!
//! - [`export`] - Fetches a playlist and writes it to `<name>.json`
//! - [`resolve`] - Prints the playlist ID a URL, URI or ID resolves to
//!
//! Commands print their own progress with the crate's logging macros and
//! terminate through [`crate::error!`] with the exit code of the failure
//! kind (see [`crate::errors::RunError::exit_code`]). The fallible core of
//! an export is [`run`], and of `resolve` it is [`resolve_playlist_id`]; both
//! return the error instead of exiting.
//!
//! ## Usage
//!
//! ```bash
//! spotjson                                   # prompt for the playlist
//! spotjson 37i9dQZF1DXcBWIGoYBM5M            # bare ID
//! spotjson spotify:playlist:37i9dQZF1DXcBWIGoYBM5M --output-dir exports
//! spotjson resolve https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M
//! ```

mod export;
mod resolve;

pub use export::ExportRequest;
pub use export::export;
pub use export::read_playlist_input;
pub use export::run;
pub use resolve::resolve;
pub use resolve::resolve_playlist_id;
