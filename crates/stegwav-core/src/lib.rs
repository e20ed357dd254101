//! # Stegwav Core API
//!
//! Hides a passcode encrypted text message in the least significant bits of the
//! sample data of an uncompressed PCM WAV file, and unveils it again.
//!
//! The hidden data is a length framed payload of `"STEG" | salt | token`, the token being
//! the XChaCha20Poly1305 sealed message under a PBKDF2-HMAC-SHA256 derived key.
//!
//! # Usage Examples
//!
//! ## Hide a message inside an audio file
//!
//! ```rust,no_run
//! stegwav_core::api::hide::prepare()
//!     .with_message("STOP AT SIGNAL 12B")
//!     .with_password("track-9")
//!     .with_audio("carrier.wav")
//!     .with_output("carrier-with-secret.wav")
//!     .execute()
//!     .expect("Failed to hide message in audio");
//! ```
//!
//! ## Unveil a message from an audio file
//!
//! ```rust,no_run
//! let message = stegwav_core::api::unveil::prepare()
//!     .from_secret_file("carrier-with-secret.wav")
//!     .using_password("track-9")
//!     .execute()
//!     .expect("Failed to unveil message from audio");
//! ```
//!
//! ## Working on bytes
//!
//! [`hide`] and [`unveil`] do the same on in-memory WAV files.

#![warn(clippy::redundant_else)]

pub mod message;
pub use message::*;

pub mod raw_message;
pub use raw_message::*;

pub mod api;
pub mod commands;
pub mod error;
pub mod media;
pub mod result;

pub use crate::error::{FormatProblem, SteganoError};
pub use crate::media::{Persist, WavMedia};
pub use crate::result::Result;

/// Hides `message` in a copy of the given WAV file.
///
/// Only the LSBs of the sample bytes change, header and all other chunks are kept as is.
pub fn hide(carrier: &[u8], message: &str, passcode: &str) -> Result<Vec<u8>> {
    let media = WavMedia::from_bytes(carrier.to_vec())?;
    let data = Message::from(message).to_raw_data(passcode)?;

    Ok(media.hide_data(&data)?.into_bytes())
}

/// Unveils the message hidden in the given WAV file.
///
/// A carrier without a hidden message fails with `FormatError`, a wrong passcode or
/// modified data with `DecryptionError`.
pub fn unveil(secret: &[u8], passcode: &str) -> Result<String> {
    let media = WavMedia::from_bytes(secret.to_vec())?;
    let msg = Message::from_raw_data(&media.unveil_data()?, passcode)?;

    Ok(msg.text)
}
