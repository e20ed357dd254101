pub use chacha20poly1305::Error as Chacha20Poly1305Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    /// Covers a wrong key, a tampered token and a token too short to hold nonce and tag.
    /// Callers cannot tell these apart.
    #[error("Decryption error")]
    DecryptionError(Chacha20Poly1305Error),

    #[error("Encryption error")]
    EncryptionError(Chacha20Poly1305Error),
}
