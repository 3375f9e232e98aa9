/*!
Block cipher implementations.
*/

mod aes_block;

pub use aes_block::{Aes, AesVariant};

use crate::core::crypto::traits::BlockCipher;

/// Create a block cipher by canonical name
pub fn create_block_cipher(name: &str) -> Option<Box<dyn BlockCipher>> {
    AesVariant::from_name(name).map(|variant| Box::new(Aes::new(variant)) as Box<dyn BlockCipher>)
}
