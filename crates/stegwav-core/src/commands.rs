use std::path::{Path, PathBuf};

use crate::SteganoError;

pub fn hide(
    media: &Path,
    write_to_file: Option<&Path>,
    message: Option<String>,
    password: Option<String>,
) -> Result<PathBuf, SteganoError> {
    crate::api::hide::prepare()
        .with_audio(media)
        .use_output(write_to_file)
        .use_message(message)
        .using_password(password)
        .execute()
}

pub fn unveil(
    secret_media: &Path,
    output_folder: Option<&Path>,
    password: Option<String>,
) -> Result<String, SteganoError> {
    crate::api::unveil::prepare()
        .from_secret_file(secret_media)
        .use_output_folder(output_folder)
        .using_password(password)
        .execute()
}

/// unveil all raw data, no content format interpretation is happening.
/// Just a raw binary dump of the data gathered by the LSB algorithm.
pub fn unveil_raw(secret_media: &Path, destination_file: &Path) -> Result<(), SteganoError> {
    crate::api::unveil_raw::prepare()
        .from_secret_file(secret_media)
        .into_raw_file(destination_file)
        .execute()
}
