mod password;

use std::path::{Path, PathBuf};

pub use password::*;

/// `song.wav` becomes `song_stego.wav` in the same folder
pub(crate) fn stego_file_name(carrier: &Path) -> PathBuf {
    let stem = carrier
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("stego");

    carrier.with_file_name(format!("{stem}_stego.wav"))
}
