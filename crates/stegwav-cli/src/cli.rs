use clap::{Parser, Subcommand};
use dialoguer::Password;

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    UnveilRaw(unveil_raw::UnveilRawArgs),
    Capacity(capacity::CapacityArgs),
}

/// Prompts for the passcode on the terminal, `None` if there is no terminal to ask on
pub fn ask_for_password(with_confirmation: bool) -> Option<String> {
    let mut prompt = Password::new()
        .with_prompt("Passcode")
        .allow_empty_password(true);
    if with_confirmation {
        prompt = prompt.with_confirmation("Repeat passcode", "Error: the passcodes don't match.");
    }

    prompt.interact().ok()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn should_parse_hide_with_default_output() {
        let args = CliArgs::try_parse_from([
            "stegwav", "hide", "-i", "song.wav", "-m", "STOP AT SIGNAL 12B", "-p", "track-9",
        ])
        .unwrap();

        let Commands::Hide(hide) = args.command else {
            panic!("expected the hide command");
        };
        assert_eq!(hide.media.to_str(), Some("song.wav"));
        assert_eq!(hide.write_to_file, None);
        assert_eq!(hide.message, "STOP AT SIGNAL 12B");
        assert_eq!(hide.password.as_deref(), Some("track-9"));
    }

    #[test]
    fn should_require_a_message_to_hide() {
        assert!(CliArgs::try_parse_from(["stegwav", "hide", "-i", "song.wav"]).is_err());
    }

    #[test]
    fn should_parse_unveil_raw() {
        let args =
            CliArgs::try_parse_from(["stegwav", "unveil-raw", "-i", "secret.wav", "-o", "raw.bin"])
                .unwrap();

        assert!(matches!(args.command, Commands::UnveilRaw(_)));
    }
}
