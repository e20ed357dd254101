use std::path::{Path, PathBuf};

use log::info;

use super::shared::stego_file_name;
use super::Password;
use crate::media::{Persist, WavMedia};
use crate::{Message, SteganoError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    audio: Option<PathBuf>,
    output: Option<PathBuf>,
    password: Password,
}

impl HideApi {
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// The carrier WAV file, it is only read, never modified
    pub fn with_audio<A: AsRef<Path>>(mut self, audio: A) -> Self {
        self.audio = Some(audio.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// If `None` is passed, the output goes next to the carrier as `<name>_stego.wav`
    pub fn use_output<A: AsRef<Path>>(mut self, output: Option<A>) -> Self {
        self.output = output.map(|o| o.as_ref().to_path_buf());
        self
    }

    /// Set the passcode the message gets encrypted with
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.into();
        self
    }

    pub fn using_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// Hides the message and returns the path of the written audio file
    pub fn execute(self) -> Result<PathBuf, SteganoError> {
        self.validate()?;
        let Some(audio) = self.audio else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(message) = self.message else {
            return Err(SteganoError::MissingMessage);
        };
        let output = self.output.unwrap_or_else(|| stego_file_name(&audio));

        let media = WavMedia::from_file(&audio)?;
        let data = Message::new(message).to_raw_data(self.password.require()?)?;
        media.hide_data(&data)?.save_as(&output)?;
        info!("message hidden in {}", output.display());

        Ok(output)
    }

    fn validate(&self) -> Result<(), SteganoError> {
        match &self.message {
            Some(message) if !message.trim().is_empty() => {}
            _ => return Err(SteganoError::MissingMessage),
        }
        self.password.require()?;

        Ok(())
    }
}
