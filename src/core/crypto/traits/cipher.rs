/*!
Traits for block and stream ciphers.
*/

use crate::core::error::Result;
use super::algorithm::{Algorithm, KeyLength};

/// Trait for block cipher operations
pub trait BlockCipher: Algorithm {
    /// Block size in bytes
    fn block_size(&self) -> usize;

    /// Acceptable key lengths
    fn key_spec(&self) -> KeyLength;

    /// Key the cipher
    fn set_key(&mut self, key: &[u8]) -> Result<()>;

    /// Encrypt a single block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypt a single block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Create a fresh, unkeyed instance of the same algorithm
    fn box_clone(&self) -> Box<dyn BlockCipher>;
}

/// Trait for stream cipher operations
pub trait StreamCipher: Algorithm {
    /// Acceptable key lengths
    fn key_spec(&self) -> KeyLength;

    /// Check whether an IV of `length` bytes is acceptable
    fn valid_iv_length(&self, length: usize) -> bool;

    /// Key the cipher, resetting the IV to all zeros
    fn set_key(&mut self, key: &[u8]) -> Result<()>;

    /// Restart the key stream from `iv`
    fn set_iv(&mut self, iv: &[u8]) -> Result<()>;

    /// XOR the key stream into `buf`
    fn cipher(&mut self, buf: &mut [u8]) -> Result<()>;

    /// Create a fresh, unkeyed instance of the same algorithm
    fn box_clone(&self) -> Box<dyn StreamCipher>;
}
