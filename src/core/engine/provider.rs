/*!
Algorithm providers.

A [`Provider`] is the part of an engine that knows how to build
algorithm instances. Engines call into it only on a cache miss, so a
provider is free to do expensive work such as probing hardware or
self-testing candidate implementations.
*/

use parking_lot::lock_api::RawMutex;

use crate::core::crypto::registry::AlgorithmFactory;
use crate::core::crypto::scan_name::ScanName;
use crate::core::crypto::traits::{
    BlockCipher, HashFunction, MessageAuthenticationCode, StreamCipher,
};
use crate::core::sync::DefaultRawMutex;
use super::engine::Engine;

/// Source of algorithm implementations for one engine
///
/// Every search receives the algorithm factory the engine is being
/// queried through, so a provider may resolve the algorithms it depends
/// on (the hash inside an HMAC, for example). No engine lock is held
/// while a search runs.
pub trait Provider<R: RawMutex = DefaultRawMutex>: Send + Sync {
    /// Name of this provider, such as `"core"`
    fn provider_name(&self) -> String;

    /// Build a block cipher for `request`
    fn find_block_cipher(
        &self,
        _request: &ScanName,
        _af: &AlgorithmFactory<R>,
    ) -> Option<Box<dyn BlockCipher>> {
        None
    }

    /// Build a stream cipher for `request`
    fn find_stream_cipher(
        &self,
        _request: &ScanName,
        _af: &AlgorithmFactory<R>,
    ) -> Option<Box<dyn StreamCipher>> {
        None
    }

    /// Build a hash function for `request`
    fn find_hash(
        &self,
        _request: &ScanName,
        _af: &AlgorithmFactory<R>,
    ) -> Option<Box<dyn HashFunction>> {
        None
    }

    /// Build a MAC for `request`
    fn find_mac(
        &self,
        _request: &ScanName,
        _af: &AlgorithmFactory<R>,
    ) -> Option<Box<dyn MessageAuthenticationCode>> {
        None
    }

    /// Seed the engine's caches right after initialization
    fn preload(&self, _engine: &Engine<R>) {}
}
