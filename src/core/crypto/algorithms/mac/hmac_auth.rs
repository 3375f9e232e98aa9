/*!
HMAC over the SHA-2 family, backed by the `hmac` crate.
*/

use hmac::Mac;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use zeroize::{Zeroize, Zeroizing};

use crate::core::crypto::traits::{Algorithm, KeyLength, MessageAuthenticationCode};
use crate::core::error::{Error, Result};
use crate::key_not_set_err;

/// Longest key accepted by [`Hmac::set_key`]
const MAX_KEY_LENGTH: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HashKind {
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl HashKind {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "SHA-224" => Some(HashKind::Sha224),
            "SHA-256" => Some(HashKind::Sha256),
            "SHA-384" => Some(HashKind::Sha384),
            "SHA-512" => Some(HashKind::Sha512),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            HashKind::Sha224 => "SHA-224",
            HashKind::Sha256 => "SHA-256",
            HashKind::Sha384 => "SHA-384",
            HashKind::Sha512 => "SHA-512",
        }
    }

    fn output_length(&self) -> usize {
        match self {
            HashKind::Sha224 => 28,
            HashKind::Sha256 => 32,
            HashKind::Sha384 => 48,
            HashKind::Sha512 => 64,
        }
    }
}

enum MacState {
    Sha224(hmac::Hmac<Sha224>),
    Sha256(hmac::Hmac<Sha256>),
    Sha384(hmac::Hmac<Sha384>),
    Sha512(hmac::Hmac<Sha512>),
}

impl MacState {
    fn keyed(kind: HashKind, key: &[u8]) -> Option<Self> {
        let state = match kind {
            HashKind::Sha224 => MacState::Sha224(hmac::Hmac::new_from_slice(key).ok()?),
            HashKind::Sha256 => MacState::Sha256(hmac::Hmac::new_from_slice(key).ok()?),
            HashKind::Sha384 => MacState::Sha384(hmac::Hmac::new_from_slice(key).ok()?),
            HashKind::Sha512 => MacState::Sha512(hmac::Hmac::new_from_slice(key).ok()?),
        };
        Some(state)
    }

    fn update(&mut self, data: &[u8]) {
        match self {
            MacState::Sha224(m) => m.update(data),
            MacState::Sha256(m) => m.update(data),
            MacState::Sha384(m) => m.update(data),
            MacState::Sha512(m) => m.update(data),
        }
    }

    fn finalize(self) -> Vec<u8> {
        match self {
            MacState::Sha224(m) => m.finalize().into_bytes().to_vec(),
            MacState::Sha256(m) => m.finalize().into_bytes().to_vec(),
            MacState::Sha384(m) => m.finalize().into_bytes().to_vec(),
            MacState::Sha512(m) => m.finalize().into_bytes().to_vec(),
        }
    }
}

/// HMAC keyed-hash message authentication code
pub struct Hmac {
    hash: HashKind,
    key: Option<Zeroizing<Vec<u8>>>,
    state: Option<MacState>,
}

impl Hmac {
    /// Create an unkeyed HMAC over the named hash
    pub fn new(hash_name: &str) -> Option<Self> {
        HashKind::from_name(hash_name).map(|hash| Self { hash, key: None, state: None })
    }

    fn rekey(&mut self) -> Result<()> {
        let key = match &self.key {
            Some(key) => key,
            None => return key_not_set_err!(self.name()),
        };
        let state = MacState::keyed(self.hash, key).ok_or_else(|| Error::InvalidKeyLength {
            algorithm: self.name(),
            length: key.len(),
        })?;
        self.state = Some(state);
        Ok(())
    }
}

impl Algorithm for Hmac {
    fn name(&self) -> String {
        format!("HMAC({})", self.hash.name())
    }

    fn clear(&mut self) {
        self.key.zeroize();
        self.state = None;
    }
}

impl MessageAuthenticationCode for Hmac {
    fn output_length(&self) -> usize {
        self.hash.output_length()
    }

    fn key_spec(&self) -> KeyLength {
        KeyLength::range(0, MAX_KEY_LENGTH, 1)
    }

    fn set_key(&mut self, key: &[u8]) -> Result<()> {
        if !self.key_spec().valid(key.len()) {
            return Err(Error::InvalidKeyLength { algorithm: self.name(), length: key.len() });
        }
        self.clear();
        self.key = Some(Zeroizing::new(key.to_vec()));
        self.rekey()
    }

    fn update(&mut self, data: &[u8]) -> Result<()> {
        match self.state.as_mut() {
            Some(state) => {
                state.update(data);
                Ok(())
            }
            None => key_not_set_err!(self.name()),
        }
    }

    fn final_result(&mut self) -> Result<Vec<u8>> {
        let state = match self.state.take() {
            Some(state) => state,
            None => return key_not_set_err!(self.name()),
        };
        let tag = state.finalize();
        self.rekey()?;
        Ok(tag)
    }

    fn box_clone(&self) -> Box<dyn MessageAuthenticationCode> {
        Box::new(Hmac { hash: self.hash, key: None, state: None })
    }
}
