use std::string::FromUtf8Error;
use thiserror::Error;

pub use stegwav_crypto::CryptoError;

#[derive(Error, Debug)]
pub enum SteganoError {
    /// Represents an unsupported carrier media. For example, a PNG file or float samples
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier audio media. For example, a broken WAV file
    #[error("Audio media is invalid")]
    InvalidAudioMedia,

    /// Represents a WAV container without a `data` chunk
    #[error("Audio media contains no sample data")]
    MissingDataChunk,

    /// Represents a carrier that has fewer sample bytes than hidden bits are needed
    #[error(
        "Capacity Error: The provided audio offers {available} sample bytes, but {required} are required to hide the message"
    )]
    CapacityError { required: usize, available: usize },

    /// Represents the absence of a recognizable hidden payload, or a corrupted one
    #[error("No hidden message found")]
    FormatError(FormatProblem),

    /// Represents a payload whose length cannot be written into the 4 byte length header
    #[error("Payload of {0} bytes is too large to be framed")]
    PayloadTooLarge(usize),

    /// Represents a failed authentication, either the passcode is wrong or the data was altered
    #[error("Decryption error")]
    DecryptionError(CryptoError),

    /// Represents an error when encrypting the data
    #[error("Encryption error")]
    EncryptionError(CryptoError),

    /// Represents the error of invalid UTF-8 text data found inside of a decrypted message
    #[error("Invalid text data found inside a message")]
    InvalidTextData(#[from] FromUtf8Error),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,

    #[error("API Error: Missing passcode")]
    MissingPasscode,
}

impl SteganoError {
    /// Errors that must be reported to a user as one generic "extraction failed", so that
    /// nobody learns whether the passcode was wrong or the carrier is damaged.
    pub fn is_unveil_failure(&self) -> bool {
        matches!(
            self,
            SteganoError::FormatError(_)
                | SteganoError::DecryptionError(_)
                | SteganoError::InvalidTextData(_)
        )
    }
}

/// Which structural check rejected a carrier during unveiling
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatProblem {
    #[error("carrier is too short to hold a length header")]
    CarrierTooShort,

    #[error("declared payload length exceeds the available data")]
    Truncated,

    #[error("payload is shorter than magic and salt")]
    PayloadTooShort,

    #[error("payload does not start with the magic marker")]
    MissingMagic,
}
