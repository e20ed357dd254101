use stegwav_crypto::{decrypt, derive_key, encrypt, generate_salt};

use super::Payload;
use crate::result::Result;
use crate::SteganoError;

/// Encrypts the message under a key derived from the passcode and a fresh salt.
pub fn seal(message: &[u8], passcode: &str) -> Result<Payload> {
    let salt = generate_salt();
    let key = derive_key(passcode.as_bytes(), &salt);
    let token = encrypt(&key, message).map_err(SteganoError::EncryptionError)?;

    Ok(Payload::build(salt, token))
}

/// Re-derives the key from the payload's salt and decrypts the token.
pub fn open(payload: &Payload, passcode: &str) -> Result<Vec<u8>> {
    let key = derive_key(passcode.as_bytes(), payload.salt());

    decrypt(&key, payload.token()).map_err(SteganoError::DecryptionError)
}
