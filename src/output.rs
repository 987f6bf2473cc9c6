//! Output filename derivation and persistence of the fetched playlist.

use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;

use crate::{errors::RunError, warning};

pub const DEFAULT_FILE_STEM: &str = "some-playlist";

static NOT_FILENAME_SAFE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\-]").unwrap());

/// Turns a playlist name into a filename stem.
///
/// Spaces become dashes and every other character outside `[A-Za-z0-9-]`
/// is dropped. A name with nothing left falls back to
/// [`DEFAULT_FILE_STEM`].
pub fn format_filename(playlist_name: &str) -> String {
    let dashed = playlist_name.replace(' ', "-");
    let filename = NOT_FILENAME_SAFE.replace_all(&dashed, "").into_owned();

    if filename.is_empty() {
        warning!(
            "There was an error formatting playlist name, your data will be written in {}.json",
            DEFAULT_FILE_STEM
        );
        return DEFAULT_FILE_STEM.to_string();
    }

    filename
}

pub fn output_filename(playlist_name: &str) -> String {
    format!("{}.json", format_filename(playlist_name))
}

/// Writes `body` byte for byte to `dir/filename`, replacing any existing
/// file, and returns the written path.
///
/// On Unix the file ends up with mode 0644.
///
/// # Errors
///
/// Returns [`RunError::Write`] if the file cannot be written or its
/// permissions cannot be set.
pub async fn write_playlist(dir: &Path, filename: &str, body: &[u8]) -> Result<PathBuf, RunError> {
    let path = dir.join(filename);

    async_fs::write(&path, body)
        .await
        .map_err(|e| write_error(&path, e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        async_fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644))
            .await
            .map_err(|e| write_error(&path, e))?;
    }

    Ok(path)
}

fn write_error(path: &Path, err: std::io::Error) -> RunError {
    RunError::Write(format!(
        "Error writing to file {}: {}",
        path.display(),
        err
    ))
}
