/*!
AES block cipher.

This module wraps the `aes` crate's key schedules behind the
[`BlockCipher`] interface.
*/

use aes::{Aes128, Aes192, Aes256};
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit, generic_array::GenericArray};

use crate::core::constants::sizes;
use crate::core::crypto::traits::{Algorithm, BlockCipher, KeyLength};
use crate::core::error::{Error, Result};
use crate::{key_length_err, key_not_set_err};

/// AES key size variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AesVariant {
    /// AES with a 128-bit key
    Aes128,
    /// AES with a 192-bit key
    Aes192,
    /// AES with a 256-bit key
    Aes256,
}

impl AesVariant {
    /// Look up a variant by canonical name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "AES-128" => Some(AesVariant::Aes128),
            "AES-192" => Some(AesVariant::Aes192),
            "AES-256" => Some(AesVariant::Aes256),
            _ => None,
        }
    }

    /// Get the name of the variant as a string
    pub fn name(&self) -> &'static str {
        match self {
            AesVariant::Aes128 => "AES-128",
            AesVariant::Aes192 => "AES-192",
            AesVariant::Aes256 => "AES-256",
        }
    }

    /// Key size in bytes
    pub fn key_size(&self) -> usize {
        match self {
            AesVariant::Aes128 => sizes::aes::KEY_SIZE_128,
            AesVariant::Aes192 => sizes::aes::KEY_SIZE_192,
            AesVariant::Aes256 => sizes::aes::KEY_SIZE_256,
        }
    }
}

enum KeySchedule {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

/// AES block cipher
pub struct Aes {
    variant: AesVariant,
    schedule: Option<KeySchedule>,
}

impl Aes {
    /// Create a new, unkeyed AES cipher
    pub fn new(variant: AesVariant) -> Self {
        Self { variant, schedule: None }
    }

    fn schedule(&self, block: &[u8]) -> Result<&KeySchedule> {
        if block.len() != sizes::aes::BLOCK_SIZE {
            return Err(Error::InvalidBlockLength {
                expected: sizes::aes::BLOCK_SIZE,
                actual: block.len(),
            });
        }
        match &self.schedule {
            Some(schedule) => Ok(schedule),
            None => key_not_set_err!(self.variant.name()),
        }
    }
}

impl Algorithm for Aes {
    fn name(&self) -> String {
        self.variant.name().to_string()
    }

    fn clear(&mut self) {
        self.schedule = None;
    }
}

impl BlockCipher for Aes {
    fn block_size(&self) -> usize {
        sizes::aes::BLOCK_SIZE
    }

    fn key_spec(&self) -> KeyLength {
        KeyLength::exact(self.variant.key_size())
    }

    fn set_key(&mut self, key: &[u8]) -> Result<()> {
        if !self.key_spec().valid(key.len()) {
            return key_length_err!(self.variant.name(), key.len());
        }

        let bad_length = |_| Error::InvalidKeyLength {
            algorithm: self.variant.name().to_string(),
            length: key.len(),
        };
        let schedule = match self.variant {
            AesVariant::Aes128 => KeySchedule::Aes128(Aes128::new_from_slice(key).map_err(bad_length)?),
            AesVariant::Aes192 => KeySchedule::Aes192(Aes192::new_from_slice(key).map_err(bad_length)?),
            AesVariant::Aes256 => KeySchedule::Aes256(Aes256::new_from_slice(key).map_err(bad_length)?),
        };
        self.schedule = Some(schedule);
        Ok(())
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        let schedule = self.schedule(block)?;
        let block = GenericArray::from_mut_slice(block);
        match schedule {
            KeySchedule::Aes128(c) => c.encrypt_block(block),
            KeySchedule::Aes192(c) => c.encrypt_block(block),
            KeySchedule::Aes256(c) => c.encrypt_block(block),
        }
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        let schedule = self.schedule(block)?;
        let block = GenericArray::from_mut_slice(block);
        match schedule {
            KeySchedule::Aes128(c) => c.decrypt_block(block),
            KeySchedule::Aes192(c) => c.decrypt_block(block),
            KeySchedule::Aes256(c) => c.decrypt_block(block),
        }
        Ok(())
    }

    fn box_clone(&self) -> Box<dyn BlockCipher> {
        Box::new(Aes::new(self.variant))
    }
}
