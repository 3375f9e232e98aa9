// Shared fixtures for the integration tests
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

use crypto_engine::{
    AlgorithmFactory, Algorithm, BlockCipher, HashFunction, KeyLength, MessageAuthenticationCode,
    MutexFactory, Provider, Result, ScanName, StreamCipher,
};
use parking_lot::lock_api::{Mutex, RawMutex};

/// Initialize logging once per test binary
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Counts searches, constructions and destructions
#[derive(Default)]
pub struct Tracker {
    pub searches: AtomicUsize,
    pub drops: AtomicUsize,
    next_id: AtomicU32,
}

impl Tracker {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn searches(&self) -> usize {
        self.searches.load(Ordering::SeqCst)
    }

    pub fn drops(&self) -> usize {
        self.drops.load(Ordering::SeqCst)
    }

    fn next_id(&self) -> u32 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

/// A do-nothing primitive of every kind that records its own destruction
pub struct Tracked {
    name: String,
    pub id: u32,
    tracker: Arc<Tracker>,
}

impl Tracked {
    pub fn new(name: &str, tracker: &Arc<Tracker>) -> Self {
        Self {
            name: name.to_string(),
            id: tracker.next_id(),
            tracker: Arc::clone(tracker),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.tracker.drops.fetch_add(1, Ordering::SeqCst);
    }
}

impl Algorithm for Tracked {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn clear(&mut self) {}
}

impl BlockCipher for Tracked {
    fn block_size(&self) -> usize {
        16
    }

    fn key_spec(&self) -> KeyLength {
        KeyLength::exact(16)
    }

    fn set_key(&mut self, _key: &[u8]) -> Result<()> {
        Ok(())
    }

    fn encrypt_block(&self, _block: &mut [u8]) -> Result<()> {
        Ok(())
    }

    fn decrypt_block(&self, _block: &mut [u8]) -> Result<()> {
        Ok(())
    }

    fn box_clone(&self) -> Box<dyn BlockCipher> {
        Box::new(Tracked::new(&self.name, &self.tracker))
    }
}

impl StreamCipher for Tracked {
    fn key_spec(&self) -> KeyLength {
        KeyLength::exact(32)
    }

    fn valid_iv_length(&self, length: usize) -> bool {
        length == 0
    }

    fn set_key(&mut self, _key: &[u8]) -> Result<()> {
        Ok(())
    }

    fn set_iv(&mut self, _iv: &[u8]) -> Result<()> {
        Ok(())
    }

    fn cipher(&mut self, _buf: &mut [u8]) -> Result<()> {
        Ok(())
    }

    fn box_clone(&self) -> Box<dyn StreamCipher> {
        Box::new(Tracked::new(&self.name, &self.tracker))
    }
}

impl HashFunction for Tracked {
    fn output_length(&self) -> usize {
        0
    }

    fn hash_block_size(&self) -> usize {
        64
    }

    fn update(&mut self, _data: &[u8]) {}

    fn final_result(&mut self) -> Vec<u8> {
        Vec::new()
    }

    fn box_clone(&self) -> Box<dyn HashFunction> {
        Box::new(Tracked::new(&self.name, &self.tracker))
    }
}

impl MessageAuthenticationCode for Tracked {
    fn output_length(&self) -> usize {
        0
    }

    fn key_spec(&self) -> KeyLength {
        KeyLength::range(0, 64, 1)
    }

    fn set_key(&mut self, _key: &[u8]) -> Result<()> {
        Ok(())
    }

    fn update(&mut self, _data: &[u8]) -> Result<()> {
        Ok(())
    }

    fn final_result(&mut self) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }

    fn box_clone(&self) -> Box<dyn MessageAuthenticationCode> {
        Box::new(Tracked::new(&self.name, &self.tracker))
    }
}

/// Provider that can build any of `known`, counting every search
pub struct TrackingProvider {
    name: String,
    known: Vec<String>,
    tracker: Arc<Tracker>,
}

impl TrackingProvider {
    pub fn new(name: &str, known: &[&str], tracker: &Arc<Tracker>) -> Self {
        Self {
            name: name.to_string(),
            known: known.iter().map(|k| k.to_string()).collect(),
            tracker: Arc::clone(tracker),
        }
    }

    fn build(&self, request: &ScanName) -> Option<Box<Tracked>> {
        self.tracker.searches.fetch_add(1, Ordering::SeqCst);
        let name = request.as_string();
        self.known
            .contains(&name)
            .then(|| Box::new(Tracked::new(&name, &self.tracker)))
    }
}

impl<R: RawMutex> Provider<R> for TrackingProvider {
    fn provider_name(&self) -> String {
        self.name.clone()
    }

    fn find_block_cipher(&self, request: &ScanName, _af: &AlgorithmFactory<R>) -> Option<Box<dyn BlockCipher>> {
        self.build(request).map(|t| t as Box<dyn BlockCipher>)
    }

    fn find_stream_cipher(&self, request: &ScanName, _af: &AlgorithmFactory<R>) -> Option<Box<dyn StreamCipher>> {
        self.build(request).map(|t| t as Box<dyn StreamCipher>)
    }

    fn find_hash(&self, request: &ScanName, _af: &AlgorithmFactory<R>) -> Option<Box<dyn HashFunction>> {
        self.build(request).map(|t| t as Box<dyn HashFunction>)
    }

    fn find_mac(
        &self,
        request: &ScanName,
        _af: &AlgorithmFactory<R>,
    ) -> Option<Box<dyn MessageAuthenticationCode>> {
        self.build(request).map(|t| t as Box<dyn MessageAuthenticationCode>)
    }
}

/// Mutex factory that counts how many locks it has made
#[derive(Default)]
pub struct CountingMutexFactory {
    pub made: AtomicUsize,
}

impl MutexFactory for CountingMutexFactory {
    type Raw = parking_lot::RawMutex;

    fn make<T>(&self, value: T) -> Mutex<Self::Raw, T> {
        self.made.fetch_add(1, Ordering::SeqCst);
        Mutex::new(value)
    }
}
