/*!
Process-wide algorithm factory.

The global factory is built on first use with the default configuration,
which loads the built-in software engine.
*/

use once_cell::sync::Lazy;

use crate::core::crypto::traits::{
    BlockCipher, HashFunction, MessageAuthenticationCode, StreamCipher,
};
use crate::core::engine::{Engine, SoftwareProvider};
use crate::core::error::Result;
use crate::core::sync::ParkingLotMutexFactory;
use super::factory::AlgorithmFactory;

// Global factory instance
static GLOBAL_FACTORY: Lazy<AlgorithmFactory> = Lazy::new(|| {
    log::debug!("Creating global algorithm factory");
    let mut factory = AlgorithmFactory::new(&ParkingLotMutexFactory);
    factory.add_engine(Engine::new(SoftwareProvider::new(), &ParkingLotMutexFactory));
    factory
});

// Public API

/// Get the global algorithm factory
pub fn global_factory() -> &'static AlgorithmFactory {
    &GLOBAL_FACTORY
}

/// Create a new block cipher from the global factory
pub fn get_block_cipher(algo_spec: &str) -> Result<Box<dyn BlockCipher>> {
    global_factory().make_block_cipher(algo_spec)
}

/// Create a new stream cipher from the global factory
pub fn get_stream_cipher(algo_spec: &str) -> Result<Box<dyn StreamCipher>> {
    global_factory().make_stream_cipher(algo_spec)
}

/// Create a new hash function from the global factory
pub fn get_hash(algo_spec: &str) -> Result<Box<dyn HashFunction>> {
    global_factory().make_hash_function(algo_spec)
}

/// Create a new MAC from the global factory
pub fn get_mac(algo_spec: &str) -> Result<Box<dyn MessageAuthenticationCode>> {
    global_factory().make_mac(algo_spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_factory_is_shared() {
        assert!(std::ptr::eq(global_factory(), global_factory()));
        assert_eq!(global_factory().engine_count(), 1);
    }

    #[test]
    fn test_global_helpers() {
        assert_eq!(get_block_cipher("AES-256").unwrap().name(), "AES-256");
        assert_eq!(get_stream_cipher("ChaCha20").unwrap().name(), "ChaCha20");
        assert_eq!(get_hash("SHA224").unwrap().output_length(), 28);
        assert_eq!(get_mac("HMAC(SHA-384)").unwrap().output_length(), 48);
        assert!(get_hash("MD4").is_err());
    }
}
