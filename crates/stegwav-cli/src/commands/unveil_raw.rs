use std::path::PathBuf;

use clap::Args;

/// Dumps the least significant bits of a WAV audio file, no decryption involved
#[derive(Args, Debug)]
pub struct UnveilRawArgs {
    /// Source audio that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Raw data will be stored as binary file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,
}

impl UnveilRawArgs {
    pub fn run(self) -> crate::CliResult<()> {
        stegwav_core::commands::unveil_raw(&self.media, &self.output_file)
    }
}
