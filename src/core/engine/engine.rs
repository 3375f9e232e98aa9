/*!
Engines: per-provider prototype caches and the acquisition protocol.

An [`Engine`] pairs one [`Provider`] with four prototype caches, one per
primitive kind. Acquisition checks the cache first and searches the
provider only on a miss; a found instance is cached under the canonical
name of the request and handed back as a shared handle.
*/

use std::sync::Arc;

use parking_lot::lock_api::RawMutex;

use crate::core::crypto::registry::AlgorithmFactory;
use crate::core::crypto::scan_name::ScanName;
use crate::core::crypto::traits::{
    BlockCipher, HashFunction, MessageAuthenticationCode, StreamCipher,
};
use crate::core::sync::{DefaultRawMutex, MutexFactory};
use super::cache::PrototypeCache;
use super::primitive::Primitive;
use super::provider::Provider;

/// The four prototype caches of an engine
pub struct Caches<R: RawMutex> {
    pub(crate) block_ciphers: PrototypeCache<dyn BlockCipher, R>,
    pub(crate) stream_ciphers: PrototypeCache<dyn StreamCipher, R>,
    pub(crate) hash_functions: PrototypeCache<dyn HashFunction, R>,
    pub(crate) macs: PrototypeCache<dyn MessageAuthenticationCode, R>,
}

impl<R: RawMutex> Caches<R> {
    fn new<F: MutexFactory<Raw = R>>(factory: &F) -> Self {
        Self {
            block_ciphers: PrototypeCache::new(factory),
            stream_ciphers: PrototypeCache::new(factory),
            hash_functions: PrototypeCache::new(factory),
            macs: PrototypeCache::new(factory),
        }
    }
}

/// An engine whose caches have not been created yet
///
/// The only thing an uninitialized engine can do is become an [`Engine`]
/// through [`UninitializedEngine::initialize`], which consumes it.
pub struct UninitializedEngine<R: RawMutex = DefaultRawMutex> {
    provider: Box<dyn Provider<R>>,
}

impl<R: RawMutex> UninitializedEngine<R> {
    /// Name of the provider backing this engine
    pub fn provider_name(&self) -> String {
        self.provider.provider_name()
    }

    /// Create the engine's caches, each with its own lock from `factory`
    pub fn initialize<F: MutexFactory<Raw = R>>(self, factory: &F) -> Engine<R> {
        let engine = Engine {
            provider: self.provider,
            caches: Caches::new(factory),
        };
        log::debug!("Initialized engine {}", engine.provider_name());

        engine.provider.preload(&engine);
        engine
    }
}

/// A source of algorithm prototypes with its own caches
pub struct Engine<R: RawMutex = DefaultRawMutex> {
    provider: Box<dyn Provider<R>>,
    caches: Caches<R>,
}

impl<R: RawMutex> Engine<R> {
    /// Create a fully initialized engine for `provider`
    pub fn new<P, F>(provider: P, factory: &F) -> Self
    where
        P: Provider<R> + 'static,
        F: MutexFactory<Raw = R>,
    {
        Self::uninitialized(provider).initialize(factory)
    }

    /// Wrap `provider` without creating any caches yet
    pub fn uninitialized<P: Provider<R> + 'static>(provider: P) -> UninitializedEngine<R> {
        UninitializedEngine {
            provider: Box::new(provider),
        }
    }

    /// Name of the provider backing this engine
    pub fn provider_name(&self) -> String {
        self.provider.provider_name()
    }

    /// Acquire the prototype for `request`.
    ///
    /// Returns the cached prototype if there is one. Otherwise the provider
    /// is searched with no lock held, and whatever it finds is cached under
    /// `request.as_string()` before being returned. Failed searches are not
    /// remembered, so a later call searches again.
    pub fn prototype<P>(&self, request: &ScanName, af: &AlgorithmFactory<R>) -> Option<Arc<P>>
    where
        P: Primitive + ?Sized,
    {
        let name = request.as_string();
        let cache = P::cache(&self.caches);

        if let Some(algo) = cache.get(&name) {
            log::trace!("Cache hit for {} {name} in engine {}", P::KIND, self.provider_name());
            return Some(algo);
        }

        // cache miss: do full search
        log::debug!("Searching engine {} for {} {name}", self.provider_name(), P::KIND);
        let algo = P::search(self.provider.as_ref(), request, af)?;
        Some(cache.add(Arc::from(algo), Some(&name)))
    }

    /// Acquire a block cipher prototype
    pub fn prototype_block_cipher(
        &self,
        request: &ScanName,
        af: &AlgorithmFactory<R>,
    ) -> Option<Arc<dyn BlockCipher>> {
        self.prototype::<dyn BlockCipher>(request, af)
    }

    /// Acquire a stream cipher prototype
    pub fn prototype_stream_cipher(
        &self,
        request: &ScanName,
        af: &AlgorithmFactory<R>,
    ) -> Option<Arc<dyn StreamCipher>> {
        self.prototype::<dyn StreamCipher>(request, af)
    }

    /// Acquire a hash function prototype
    pub fn prototype_hash_function(
        &self,
        request: &ScanName,
        af: &AlgorithmFactory<R>,
    ) -> Option<Arc<dyn HashFunction>> {
        self.prototype::<dyn HashFunction>(request, af)
    }

    /// Acquire a MAC prototype
    pub fn prototype_mac(
        &self,
        request: &ScanName,
        af: &AlgorithmFactory<R>,
    ) -> Option<Arc<dyn MessageAuthenticationCode>> {
        self.prototype::<dyn MessageAuthenticationCode>(request, af)
    }

    /// Register `algo` under its own name, replacing any prototype cached
    /// under that name
    pub fn add_algorithm<P>(&self, algo: Box<P>)
    where
        P: Primitive + ?Sized,
    {
        let algo = P::cache(&self.caches).add(Arc::from(algo), None);
        log::debug!("Registered {} {} in engine {}", P::KIND, algo.name(), self.provider_name());
    }

    /// Register a block cipher
    pub fn add_block_cipher(&self, algo: Box<dyn BlockCipher>) {
        self.add_algorithm(algo);
    }

    /// Register a stream cipher
    pub fn add_stream_cipher(&self, algo: Box<dyn StreamCipher>) {
        self.add_algorithm(algo);
    }

    /// Register a hash function
    pub fn add_hash_function(&self, algo: Box<dyn HashFunction>) {
        self.add_algorithm(algo);
    }

    /// Register a MAC
    pub fn add_mac(&self, algo: Box<dyn MessageAuthenticationCode>) {
        self.add_algorithm(algo);
    }

    /// The cache holding prototypes of kind `P`
    pub fn cached<P>(&self) -> &PrototypeCache<P, R>
    where
        P: Primitive + ?Sized,
    {
        P::cache(&self.caches)
    }
}

impl<R: RawMutex> Drop for Engine<R> {
    fn drop(&mut self) {
        log::debug!("Destroying engine {}", self.provider.provider_name());
    }
}
