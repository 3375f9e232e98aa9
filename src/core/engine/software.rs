/*!
The built-in software engine.

[`SoftwareProvider`] supplies portable implementations of every
algorithm in [`crate::core::crypto::algorithms`] under the provider name
`"core"`.
*/

use parking_lot::lock_api::RawMutex;

use crate::core::constants::SOFTWARE_PROVIDER;
use crate::core::crypto::algorithms::{
    create_block_cipher, create_hash, create_hmac, create_stream_cipher, hash::HASH_NAMES,
};
use crate::core::crypto::registry::AlgorithmFactory;
use crate::core::crypto::scan_name::ScanName;
use crate::core::crypto::traits::{
    BlockCipher, HashFunction, MessageAuthenticationCode, StreamCipher,
};
use super::engine::Engine;
use super::provider::Provider;

/// Provider of the portable software implementations
#[derive(Debug, Clone, Default)]
pub struct SoftwareProvider {
    preload: bool,
}

impl SoftwareProvider {
    /// Provider that builds everything on demand
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider that registers every hash function as soon as its engine
    /// is initialized
    pub fn with_preload() -> Self {
        Self { preload: true }
    }
}

impl<R: RawMutex> Provider<R> for SoftwareProvider {
    fn provider_name(&self) -> String {
        SOFTWARE_PROVIDER.to_string()
    }

    fn find_block_cipher(
        &self,
        request: &ScanName,
        _af: &AlgorithmFactory<R>,
    ) -> Option<Box<dyn BlockCipher>> {
        if request.arg_count() != 0 {
            return None;
        }
        create_block_cipher(request.algo_name())
    }

    fn find_stream_cipher(
        &self,
        request: &ScanName,
        _af: &AlgorithmFactory<R>,
    ) -> Option<Box<dyn StreamCipher>> {
        if request.arg_count() != 0 {
            return None;
        }
        create_stream_cipher(request.algo_name())
    }

    fn find_hash(
        &self,
        request: &ScanName,
        _af: &AlgorithmFactory<R>,
    ) -> Option<Box<dyn HashFunction>> {
        if request.arg_count() != 0 {
            return None;
        }
        create_hash(request.algo_name())
    }

    /// `HMAC(H)` for the built-in SHA-2 hashes.
    ///
    /// `H` is looked up through `af` only to check that some engine offers
    /// it; the MAC always computes with the built-in SHA-2 implementation,
    /// never with the prototype that lookup returns.
    fn find_mac(
        &self,
        request: &ScanName,
        af: &AlgorithmFactory<R>,
    ) -> Option<Box<dyn MessageAuthenticationCode>> {
        if request.algo_name() != "HMAC" || request.arg_count() != 1 {
            return None;
        }
        let hash_name = request.arg(0)?;

        // Availability check only
        if let Err(e) = af.prototype_hash_function(hash_name) {
            log::debug!("No HMAC({hash_name}): {e}");
            return None;
        }
        create_hmac(hash_name)
    }

    fn preload(&self, engine: &Engine<R>) {
        if !self.preload {
            return;
        }
        for name in HASH_NAMES {
            if let Some(hash) = create_hash(name) {
                engine.add_hash_function(hash);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sync::ParkingLotMutexFactory;

    fn factory() -> AlgorithmFactory {
        let mut af = AlgorithmFactory::new(&ParkingLotMutexFactory);
        af.add_engine(Engine::new(SoftwareProvider::new(), &ParkingLotMutexFactory));
        af
    }

    fn request(spec: &str) -> ScanName {
        ScanName::parse(spec).unwrap()
    }

    #[test]
    fn test_finds_builtin_algorithms() {
        let af = factory();
        let core = SoftwareProvider::new();

        let cipher = core.find_block_cipher(&request("AES-192"), &af).unwrap();
        assert_eq!(cipher.name(), "AES-192");
        let cipher = core.find_stream_cipher(&request("ChaCha"), &af).unwrap();
        assert_eq!(cipher.name(), "ChaCha20");
        let hash = core.find_hash(&request("SHA384"), &af).unwrap();
        assert_eq!(hash.name(), "SHA-384");
        let mac = core.find_mac(&request("HMAC(SHA256)"), &af).unwrap();
        assert_eq!(mac.name(), "HMAC(SHA-256)");
    }

    #[test]
    fn test_rejects_unknown_requests() {
        let af = factory();
        let core = SoftwareProvider::new();

        assert!(core.find_block_cipher(&request("Serpent"), &af).is_none());
        assert!(core.find_block_cipher(&request("AES-128(8)"), &af).is_none());
        assert!(core.find_stream_cipher(&request("RC4"), &af).is_none());
        assert!(core.find_hash(&request("MD5"), &af).is_none());
        assert!(core.find_mac(&request("HMAC"), &af).is_none());
        assert!(core.find_mac(&request("HMAC(MD5)"), &af).is_none());
        assert!(core.find_mac(&request("CMAC(AES-128)"), &af).is_none());
    }

    #[test]
    fn test_hmac_needs_hash_from_factory() {
        let empty: AlgorithmFactory = AlgorithmFactory::new(&ParkingLotMutexFactory);
        let mac = SoftwareProvider::new().find_mac(&request("HMAC(SHA-256)"), &empty);
        assert!(mac.is_none());
    }

    #[test]
    fn test_preload_registers_hashes() {
        let engine: Engine = Engine::new(SoftwareProvider::with_preload(), &ParkingLotMutexFactory);
        assert_eq!(
            engine.cached::<dyn HashFunction>().names(),
            vec!["SHA-224", "SHA-256", "SHA-384", "SHA-512"]
        );

        let lazy: Engine = Engine::new(SoftwareProvider::new(), &ParkingLotMutexFactory);
        assert!(lazy.cached::<dyn HashFunction>().is_empty());
    }
}
