//! # Passcode Cryptography
//! Key derivation from a human passcode and authenticated encryption of the hidden message.
//!
//! - keys are derived with PBKDF2-HMAC-SHA256 (390 000 rounds) over a 16 byte random salt
//! - messages are sealed with XChaCha20Poly1305, a token is laid out as `nonce | ciphertext | tag`

use std::fmt::{self, Debug, Formatter};

use chacha20poly1305::aead::{Aead, AeadCore};
use chacha20poly1305::{Key, KeyInit, XChaCha20Poly1305, XNonce};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use zeroize::Zeroizing;

pub mod error;

pub use crate::error::{Chacha20Poly1305Error, CryptoError};

pub const SALT_LEN: usize = 16;
pub const KEY_LEN: usize = 32;
pub const NONCE_LEN: usize = 24;
pub const TAG_LEN: usize = 16;
pub const PBKDF2_ROUNDS: u32 = 390_000;

/// Bytes a token carries on top of the plaintext
pub const TOKEN_OVERHEAD: usize = NONCE_LEN + TAG_LEN;

pub type Result<T> = std::result::Result<T, CryptoError>;
pub type Salt = [u8; SALT_LEN];

/// 32 bytes of key material, wiped from memory when dropped
pub struct DerivedKey(Zeroizing<[u8; KEY_LEN]>);

impl DerivedKey {
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl PartialEq for DerivedKey {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for DerivedKey {}

impl Debug for DerivedKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "DerivedKey(***)")
    }
}

/// fresh random salt from the OS random source, one per hidden message
pub fn generate_salt() -> Salt {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    salt
}

/// derives the key for a passcode and salt, the same inputs always give the same key
pub fn derive_key(passcode: &[u8], salt: &Salt) -> DerivedKey {
    derive_key_with_rounds(passcode, salt, PBKDF2_ROUNDS)
}

fn derive_key_with_rounds(passcode: &[u8], salt: &[u8], rounds: u32) -> DerivedKey {
    let mut output_key_material = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2::pbkdf2_hmac::<Sha256>(passcode, salt, rounds, &mut output_key_material[..]);

    DerivedKey(output_key_material)
}

/// encrypt data with the derived key, every call picks a new random nonce
pub fn encrypt(key: &DerivedKey, plaintext: &[u8]) -> Result<Vec<u8>> {
    let nonce = XChaCha20Poly1305::generate_nonce(&mut OsRng);
    let encryptor = XChaCha20Poly1305::new(Key::from_slice(key.as_bytes()));
    let cipher_data = encryptor
        .encrypt(&nonce, plaintext)
        .map_err(CryptoError::EncryptionError)?;

    let mut token = Vec::with_capacity(NONCE_LEN + cipher_data.len());
    token.extend_from_slice(&nonce);
    token.extend_from_slice(&cipher_data);

    Ok(token)
}

/// decrypt a token, the authentication tag is verified before any plaintext is returned
pub fn decrypt(key: &DerivedKey, token: &[u8]) -> Result<Vec<u8>> {
    if token.len() < TOKEN_OVERHEAD {
        return Err(CryptoError::DecryptionError(Chacha20Poly1305Error));
    }
    let (nonce, cipher_data) = token.split_at(NONCE_LEN);

    let decryptor = XChaCha20Poly1305::new(Key::from_slice(key.as_bytes()));
    decryptor
        .decrypt(XNonce::from_slice(nonce), cipher_data)
        .map_err(CryptoError::DecryptionError)
}
