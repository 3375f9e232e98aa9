/*!
ChaCha20 stream cipher (IETF variant, 96-bit nonce).
*/

use chacha20::cipher::{KeyIvInit, StreamCipher as _};
use zeroize::{Zeroize, Zeroizing};

use crate::core::constants::sizes::chacha;
use crate::core::crypto::traits::{Algorithm, KeyLength, StreamCipher};
use crate::core::error::{Error, Result};
use crate::{key_length_err, key_not_set_err};

const NAME: &str = "ChaCha20";

/// ChaCha20 stream cipher
#[derive(Default)]
pub struct ChaCha20 {
    key: Option<Zeroizing<[u8; chacha::KEY_SIZE]>>,
    state: Option<chacha20::ChaCha20>,
}

impl ChaCha20 {
    /// Create a new, unkeyed cipher
    pub fn new() -> Self {
        Self::default()
    }

    fn restart(&mut self, iv: &[u8]) -> Result<()> {
        let key = match &self.key {
            Some(key) => key,
            None => return key_not_set_err!(NAME),
        };
        let state = chacha20::ChaCha20::new_from_slices(&key[..], iv).map_err(|_| Error::InvalidIvLength {
            algorithm: NAME.to_string(),
            length: iv.len(),
        })?;
        self.state = Some(state);
        Ok(())
    }
}

impl Algorithm for ChaCha20 {
    fn name(&self) -> String {
        NAME.to_string()
    }

    fn clear(&mut self) {
        self.key.zeroize();
        self.state = None;
    }
}

impl StreamCipher for ChaCha20 {
    fn key_spec(&self) -> KeyLength {
        KeyLength::exact(chacha::KEY_SIZE)
    }

    fn valid_iv_length(&self, length: usize) -> bool {
        length == chacha::NONCE_SIZE
    }

    fn set_key(&mut self, key: &[u8]) -> Result<()> {
        if !self.key_spec().valid(key.len()) {
            return key_length_err!(NAME, key.len());
        }
        let mut stored = Zeroizing::new([0u8; chacha::KEY_SIZE]);
        stored.copy_from_slice(key);
        self.key = Some(stored);
        self.restart(&[0u8; chacha::NONCE_SIZE])
    }

    fn set_iv(&mut self, iv: &[u8]) -> Result<()> {
        if !self.valid_iv_length(iv.len()) {
            return Err(Error::InvalidIvLength { algorithm: NAME.to_string(), length: iv.len() });
        }
        self.restart(iv)
    }

    fn cipher(&mut self, buf: &mut [u8]) -> Result<()> {
        let state = match self.state.as_mut() {
            Some(state) => state,
            None => return key_not_set_err!(NAME),
        };
        state
            .try_apply_keystream(buf)
            .map_err(|_| Error::KeystreamExhausted(NAME.to_string()))
    }

    fn box_clone(&self) -> Box<dyn StreamCipher> {
        Box::new(ChaCha20::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 8439 section 2.4.2
    const KEY: [u8; 32] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
        0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19, 0x1a, 0x1b, 0x1c, 0x1d, 0x1e, 0x1f,
    ];
    const NONCE: [u8; 12] = [0, 0, 0, 0, 0, 0, 0, 0x4a, 0, 0, 0, 0];

    // RFC 8439 appendix A.2, test vector 1
    const ZERO_KEYSTREAM: [u8; 64] = [
        0x76, 0xb8, 0xe0, 0xad, 0xa0, 0xf1, 0x3d, 0x90, 0x40, 0x5d, 0x6a, 0xe5, 0x53, 0x86, 0xbd, 0x28,
        0xbd, 0xd2, 0x19, 0xb8, 0xa0, 0x8d, 0xed, 0x1a, 0xa8, 0x36, 0xef, 0xcc, 0x8b, 0x77, 0x0d, 0xc7,
        0xda, 0x41, 0x59, 0x7c, 0x51, 0x57, 0x48, 0x8d, 0x77, 0x24, 0xe0, 0x3f, 0xb8, 0xd8, 0x4a, 0x37,
        0x6a, 0x43, 0xb8, 0xf4, 0x15, 0x18, 0xa1, 0x1c, 0xc3, 0x87, 0xb6, 0x69, 0xb2, 0xee, 0x65, 0x86,
    ];

    #[test]
    fn test_zero_key_known_answer() {
        let mut cipher = ChaCha20::new();
        cipher.set_key(&[0u8; 32]).unwrap();
        cipher.set_iv(&[0u8; 12]).unwrap();

        let mut buf = [0u8; 64];
        cipher.cipher(&mut buf).unwrap();
        assert_eq!(buf, ZERO_KEYSTREAM);

        // Processing in pieces yields the same key stream
        cipher.set_iv(&[0u8; 12]).unwrap();
        let mut pieces = [0u8; 64];
        let (head, tail) = pieces.split_at_mut(13);
        cipher.cipher(head).unwrap();
        cipher.cipher(tail).unwrap();
        assert_eq!(pieces, ZERO_KEYSTREAM);
    }

    fn wiped_on_drop<T: zeroize::ZeroizeOnDrop>(_: &T) {}

    #[test]
    fn test_key_is_wiped() {
        let mut cipher = ChaCha20::new();
        cipher.set_key(&KEY).unwrap();
        wiped_on_drop(cipher.key.as_ref().unwrap());

        cipher.clear();
        assert!(cipher.key.is_none());
        assert!(cipher.state.is_none());
    }

    #[test]
    fn test_keystream_is_reproducible() {
        let plaintext = b"Ladies and Gentlemen of the class of '99";

        let mut cipher = ChaCha20::new();
        cipher.set_key(&KEY).unwrap();
        cipher.set_iv(&NONCE).unwrap();
        let mut buf = plaintext.to_vec();
        cipher.cipher(&mut buf).unwrap();
        assert_ne!(&buf[..], &plaintext[..]);

        // Restarting from the same IV must undo the encryption
        cipher.set_iv(&NONCE).unwrap();
        cipher.cipher(&mut buf).unwrap();
        assert_eq!(&buf[..], &plaintext[..]);
    }

    #[test]
    fn test_rejects_bad_lengths() {
        let mut cipher = ChaCha20::new();
        assert_eq!(cipher.cipher(&mut [0u8; 4]), Err(Error::KeyNotSet(NAME.into())));
        assert!(matches!(cipher.set_key(&KEY[..16]), Err(Error::InvalidKeyLength { length: 16, .. })));
        assert_eq!(cipher.set_iv(&NONCE), Err(Error::KeyNotSet(NAME.into())));

        cipher.set_key(&KEY).unwrap();
        assert!(matches!(cipher.set_iv(&[0u8; 8]), Err(Error::InvalidIvLength { length: 8, .. })));
    }

    #[test]
    fn test_clear_forgets_key() {
        let mut cipher = ChaCha20::new();
        cipher.set_key(&KEY).unwrap();
        cipher.clear();
        assert!(cipher.cipher(&mut [0u8; 4]).is_err());
    }
}
