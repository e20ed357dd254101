use std::io::Read;

use crate::media::audio::LsbCodec;
use crate::result::Result;

/// Every LSB byte of a carrier, without interpreting any of it
#[derive(Debug, Default)]
pub struct RawMessage {
    pub content: Vec<u8>,
}

impl RawMessage {
    pub fn of(samples: &[u8]) -> Result<Self> {
        let mut content = Vec::with_capacity(samples.len() / 8);
        LsbCodec::decoder(samples).read_to_end(&mut content)?;

        Ok(Self { content })
    }
}
