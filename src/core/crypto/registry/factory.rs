/*!
The algorithm factory.

An [`AlgorithmFactory`] is the set of engines available to a process.
Requests are parsed once, then offered to each engine in turn (preferred
provider first) until one of them supplies the algorithm.
*/

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::lock_api::{Mutex, RawMutex};

use crate::core::crypto::config::FactoryConfig;
use crate::core::crypto::scan_name::ScanName;
use crate::core::crypto::traits::{
    BlockCipher, HashFunction, MessageAuthenticationCode, StreamCipher,
};
use crate::core::engine::{Engine, Primitive, SoftwareProvider};
use crate::core::error::{Error, Result};
use crate::core::sync::{DefaultRawMutex, MutexFactory};

/// Registry of engines and provider preferences
pub struct AlgorithmFactory<R: RawMutex = DefaultRawMutex> {
    /// Engines in the order they were added
    engines: Vec<Engine<R>>,

    /// Canonical algorithm name to preferred provider name
    preferences: Mutex<R, HashMap<String, String>>,
}

impl<R: RawMutex> AlgorithmFactory<R> {
    /// Create a factory with no engines
    pub fn new<F: MutexFactory<Raw = R>>(factory: &F) -> Self {
        Self {
            engines: Vec::new(),
            preferences: factory.make(HashMap::new()),
        }
    }

    /// Create a factory as described by `config`
    pub fn with_config<F: MutexFactory<Raw = R>>(config: &FactoryConfig, factory: &F) -> Result<Self> {
        config.validate()?;

        let mut af = Self::new(factory);
        if config.load_software_engine {
            let provider = if config.preload_builtin {
                SoftwareProvider::with_preload()
            } else {
                SoftwareProvider::new()
            };
            af.add_engine(Engine::new(provider, factory));
        }
        for (algo_spec, provider) in &config.preferred_providers {
            af.set_preferred_provider(algo_spec, provider)?;
        }
        Ok(af)
    }

    /// Add an engine; engines added earlier are searched first
    pub fn add_engine(&mut self, engine: Engine<R>) {
        log::debug!("Adding engine {}", engine.provider_name());
        self.engines.push(engine);
    }

    /// Number of engines
    pub fn engine_count(&self) -> usize {
        self.engines.len()
    }

    /// All engines, in search order when no preference applies
    pub fn engines(&self) -> &[Engine<R>] {
        &self.engines
    }

    /// Search `provider` first whenever `algo_spec` is requested
    pub fn set_preferred_provider(&self, algo_spec: &str, provider: &str) -> Result<()> {
        let name = ScanName::parse(algo_spec)?.as_string();
        self.preferences.lock().insert(name, provider.to_string());
        Ok(())
    }

    /// The preferred provider for `algo_spec`, if one was set
    pub fn preferred_provider(&self, algo_spec: &str) -> Option<String> {
        let name = ScanName::parse(algo_spec).ok()?.as_string();
        self.preferences.lock().get(&name).cloned()
    }

    // Engines for `request`, preferred provider first
    fn search_order(&self, request: &ScanName) -> Vec<&Engine<R>> {
        let preferred = self.preferences.lock().get(&request.as_string()).cloned();

        let mut order: Vec<&Engine<R>> = self.engines.iter().collect();
        if let Some(preferred) = preferred {
            // Stable sort keeps the remaining engines in insertion order
            order.sort_by_key(|engine| engine.provider_name() != preferred);
        }
        order
    }

    fn engine(&self, provider: &str) -> Result<&Engine<R>> {
        self.engines
            .iter()
            .find(|engine| engine.provider_name() == provider)
            .ok_or_else(|| Error::ProviderNotFound(provider.to_string()))
    }

    /// The prototype for an already parsed request
    pub fn prototype_of<P>(&self, request: &ScanName) -> Result<Arc<P>>
    where
        P: Primitive + ?Sized,
    {
        self.search_order(request)
            .into_iter()
            .find_map(|engine| engine.prototype::<P>(request, self))
            .ok_or_else(|| Error::AlgorithmNotFound(request.as_string()))
    }

    /// The prototype for `algo_spec`, from whichever engine supplies it
    pub fn prototype<P>(&self, algo_spec: &str) -> Result<Arc<P>>
    where
        P: Primitive + ?Sized,
    {
        let request = ScanName::parse(algo_spec)?;
        self.prototype_of::<P>(&request)
    }

    /// The prototype for `algo_spec` from one specific provider
    pub fn prototype_from<P>(&self, algo_spec: &str, provider: &str) -> Result<Arc<P>>
    where
        P: Primitive + ?Sized,
    {
        let request = ScanName::parse(algo_spec)?;
        self.engine(provider)?
            .prototype::<P>(&request, self)
            .ok_or_else(|| Error::AlgorithmNotFound(request.as_string()))
    }

    /// A fresh, unkeyed instance of `algo_spec`
    pub fn make<P>(&self, algo_spec: &str) -> Result<Box<P>>
    where
        P: Primitive + ?Sized,
    {
        let prototype = self.prototype::<P>(algo_spec)?;
        Ok(P::duplicate(&prototype))
    }

    /// Names of every provider able to supply `algo_spec`
    ///
    /// Each engine is asked through the normal acquisition path, so every
    /// engine that supplies the algorithm ends up with it cached.
    pub fn providers_of<P>(&self, algo_spec: &str) -> Result<Vec<String>>
    where
        P: Primitive + ?Sized,
    {
        let request = ScanName::parse(algo_spec)?;
        Ok(self
            .engines
            .iter()
            .filter(|engine| engine.prototype::<P>(&request, self).is_some())
            .map(|engine| engine.provider_name())
            .collect())
    }

    /// Register `algo` directly with the engine of `provider`
    pub fn add_algorithm<P>(&self, algo: Box<P>, provider: &str) -> Result<()>
    where
        P: Primitive + ?Sized,
    {
        self.engine(provider)?.add_algorithm(algo);
        Ok(())
    }

    /// Block cipher prototype
    pub fn prototype_block_cipher(&self, algo_spec: &str) -> Result<Arc<dyn BlockCipher>> {
        self.prototype::<dyn BlockCipher>(algo_spec)
    }

    /// Stream cipher prototype
    pub fn prototype_stream_cipher(&self, algo_spec: &str) -> Result<Arc<dyn StreamCipher>> {
        self.prototype::<dyn StreamCipher>(algo_spec)
    }

    /// Hash function prototype
    pub fn prototype_hash_function(&self, algo_spec: &str) -> Result<Arc<dyn HashFunction>> {
        self.prototype::<dyn HashFunction>(algo_spec)
    }

    /// MAC prototype
    pub fn prototype_mac(&self, algo_spec: &str) -> Result<Arc<dyn MessageAuthenticationCode>> {
        self.prototype::<dyn MessageAuthenticationCode>(algo_spec)
    }

    /// New block cipher
    pub fn make_block_cipher(&self, algo_spec: &str) -> Result<Box<dyn BlockCipher>> {
        self.make::<dyn BlockCipher>(algo_spec)
    }

    /// New stream cipher
    pub fn make_stream_cipher(&self, algo_spec: &str) -> Result<Box<dyn StreamCipher>> {
        self.make::<dyn StreamCipher>(algo_spec)
    }

    /// New hash function
    pub fn make_hash_function(&self, algo_spec: &str) -> Result<Box<dyn HashFunction>> {
        self.make::<dyn HashFunction>(algo_spec)
    }

    /// New MAC
    pub fn make_mac(&self, algo_spec: &str) -> Result<Box<dyn MessageAuthenticationCode>> {
        self.make::<dyn MessageAuthenticationCode>(algo_spec)
    }
}
