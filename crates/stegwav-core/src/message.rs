use crate::media::payload::{encoded_size, frame, open, seal, unframe, Payload};
use crate::result::Result;

/// A text message on its way into or out of a carrier
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
}

impl Message {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self { text: text.into() }
    }

    /// Encrypts the text with the passcode and frames the resulting payload,
    /// the output is what goes bit by bit into the carrier.
    pub fn to_raw_data(&self, passcode: &str) -> Result<Vec<u8>> {
        let payload = seal(self.text.as_bytes(), passcode)?;

        frame(&payload.to_bytes())
    }

    /// Creates a message from a framed stream, the magic marker is checked before
    /// any decryption is attempted.
    pub fn from_raw_data(framed: &[u8], passcode: &str) -> Result<Self> {
        let payload = Payload::parse(unframe(framed)?)?;
        let text = String::from_utf8(open(&payload, passcode)?)?;

        Ok(Self { text })
    }

    /// number of bytes `to_raw_data` is going to produce
    pub fn encoded_size(&self) -> usize {
        encoded_size(self.text.len())
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
