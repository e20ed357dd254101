use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Unveils a text message from a WAV audio file
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Passcode the message was encrypted with, prompted for if omitted
    #[arg(short, long, value_name = "passcode")]
    pub password: Option<String>,

    /// Source audio that contains the secret message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Message will be stored in that folder instead of printed
    #[arg(short = 'o', long = "out", value_name = "output folder")]
    pub output_folder: Option<PathBuf>,
}

impl UnveilArgs {
    pub fn run(self) -> CliResult<()> {
        let password = self
            .password
            .or_else(|| crate::cli::ask_for_password(false));

        let message = stegwav_core::commands::unveil(
            &self.media,
            self.output_folder.as_deref(),
            password,
        )?;
        if self.output_folder.is_none() {
            println!("{message}");
        }

        Ok(())
    }
}
