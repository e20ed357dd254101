use std::path::PathBuf;

use clap::Args;
use stegwav_core::WavMedia;

use crate::CliResult;

/// Shows how long a message a WAV audio file can carry
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// WAV audio file to inspect
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,
}

impl CapacityArgs {
    pub fn run(self) -> CliResult<()> {
        let media = WavMedia::from_file(&self.media)?;
        let spec = media.spec();

        println!(
            "{}: {} channel(s), {} Hz, {} bit",
            self.media.display(),
            spec.channels,
            spec.sample_rate,
            spec.bits_per_sample
        );
        println!("sample bytes:        {}", media.capacity());
        println!("max message length:  {} bytes", media.message_capacity());

        Ok(())
    }
}
