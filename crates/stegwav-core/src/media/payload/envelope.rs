use stegwav_crypto::{Salt, SALT_LEN};

use crate::error::FormatProblem;
use crate::result::Result;
use crate::SteganoError;

/// Marks the start of every hidden payload
pub const MAGIC: &[u8; 4] = b"STEG";

/// Magic and salt, the fixed width part in front of the token
pub const PAYLOAD_HEADER_LEN: usize = MAGIC.len() + SALT_LEN;

/// The hidden payload, laid out as `magic | salt | token`.
///
/// The token is opaque here, it is whatever the authenticated cipher produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    salt: Salt,
    token: Vec<u8>,
}

impl Payload {
    pub fn build(salt: Salt, token: Vec<u8>) -> Self {
        Self { salt, token }
    }

    /// Checks the magic marker and splits salt from token.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < PAYLOAD_HEADER_LEN {
            return Err(SteganoError::FormatError(FormatProblem::PayloadTooShort));
        }
        let (magic, rest) = data.split_at(MAGIC.len());
        if magic != MAGIC {
            return Err(SteganoError::FormatError(FormatProblem::MissingMagic));
        }
        let (salt, token) = rest.split_at(SALT_LEN);
        let salt: Salt = salt
            .try_into()
            .map_err(|_| SteganoError::FormatError(FormatProblem::PayloadTooShort))?;

        Ok(Self {
            salt,
            token: token.to_vec(),
        })
    }

    pub fn salt(&self) -> &Salt {
        &self.salt
    }

    pub fn token(&self) -> &[u8] {
        &self.token
    }

    /// number of bytes `to_bytes` produces
    pub fn size(&self) -> usize {
        PAYLOAD_HEADER_LEN + self.token.len()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.size());
        buffer.extend_from_slice(MAGIC);
        buffer.extend_from_slice(&self.salt);
        buffer.extend_from_slice(&self.token);

        buffer
    }
}
