use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{media::WavMedia, Message, SteganoError};

use super::Password;

/// file name the unveiled message is stored as, when an output folder is used
pub const SECRET_MESSAGE_FILE: &str = "secret-message.txt";

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_folder: Option<PathBuf>,
    password: Password,
}

impl UnveilApi {
    /// This is the secret audio that contains the message to be unveiled
    pub fn from_secret_file(mut self, secret_audio: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_audio.as_ref().to_path_buf());
        self
    }

    /// This is the folder where the message will be saved to
    pub fn into_output_folder(mut self, output_folder: impl AsRef<Path>) -> Self {
        self.output_folder = Some(output_folder.as_ref().to_path_buf());
        self
    }

    pub fn use_output_folder<P: AsRef<Path>>(mut self, output_folder: Option<P>) -> Self {
        self.output_folder = output_folder.map(|p| p.as_ref().to_path_buf());
        self
    }

    /// Set the passcode the message was encrypted with
    pub fn using_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<String, SteganoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(SteganoError::CarrierNotSet);
        };
        let password = self.password.require()?;

        let media = WavMedia::from_file(&secret_media)?;
        let msg = Message::from_raw_data(&media.unveil_data()?, password)?;

        if let Some(output_folder) = self.output_folder {
            let target_file = output_folder.join(SECRET_MESSAGE_FILE);
            let mut target_file =
                File::create(target_file).map_err(|source| SteganoError::WriteError { source })?;

            target_file
                .write_all(msg.text.as_bytes())
                .map_err(|source| SteganoError::WriteError { source })?;
        }

        Ok(msg.text)
    }
}
