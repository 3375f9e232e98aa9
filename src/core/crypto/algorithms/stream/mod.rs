/*!
Stream cipher implementations.
*/

mod chacha;

pub use chacha::ChaCha20;

use crate::core::crypto::traits::StreamCipher;

/// Create a stream cipher by canonical name
pub fn create_stream_cipher(name: &str) -> Option<Box<dyn StreamCipher>> {
    match name {
        "ChaCha20" => Some(Box::new(ChaCha20::new())),
        _ => None,
    }
}
