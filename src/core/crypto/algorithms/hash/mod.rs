/*!
Hash function implementations.
*/

mod sha2_hash;

pub use sha2_hash::Sha2;

use crate::core::crypto::traits::HashFunction;

/// Create a hash function by canonical name
pub fn create_hash(name: &str) -> Option<Box<dyn HashFunction>> {
    let hash: Box<dyn HashFunction> = match name {
        "SHA-224" => Box::new(Sha2::sha224()),
        "SHA-256" => Box::new(Sha2::sha256()),
        "SHA-384" => Box::new(Sha2::sha384()),
        "SHA-512" => Box::new(Sha2::sha512()),
        _ => return None,
    };
    Some(hash)
}

/// Canonical names of every hash this module provides
pub const HASH_NAMES: [&str; 4] = ["SHA-224", "SHA-256", "SHA-384", "SHA-512"];
