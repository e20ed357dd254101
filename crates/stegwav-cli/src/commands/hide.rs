use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Hides a text message in a WAV audio file
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Passcode used to encrypt the message, prompted for if omitted
    #[arg(short, long, value_name = "passcode")]
    pub password: Option<String>,

    /// WAV audio file carrying the message, used readonly
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Final audio will be stored as file, defaults to `<name>_stego.wav` next to the carrier
    #[arg(short = 'o', long = "out", value_name = "output audio file")]
    pub write_to_file: Option<PathBuf>,

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,
}

impl HideArgs {
    pub fn run(self) -> CliResult<()> {
        let password = self
            .password
            .or_else(|| crate::cli::ask_for_password(true));

        let written = stegwav_core::commands::hide(
            &self.media,
            self.write_to_file.as_deref(),
            Some(self.message),
            password,
        )?;
        println!("{}", written.display());

        Ok(())
    }
}
