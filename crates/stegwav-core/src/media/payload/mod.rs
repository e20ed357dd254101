mod codec;
mod crypted;
mod envelope;

pub use codec::*;
pub use crypted::*;
pub use envelope::*;

use stegwav_crypto::TOKEN_OVERHEAD;

/// Number of framed bytes a message of `message_len` bytes turns into:
/// length header, magic, salt, nonce, ciphertext and tag
pub const fn encoded_size(message_len: usize) -> usize {
    LENGTH_HEADER_LEN + PAYLOAD_HEADER_LEN + TOKEN_OVERHEAD + message_len
}
