/*!
# Crypto Engine

Algorithm engines and prototype caching for cryptographic primitives.

## Overview

Consumers ask for an algorithm by name ("AES-128", "HMAC(SHA-256)") and
receive a ready-to-use prototype. The prototype comes from whichever engine
can supply it: the built-in software engine, or any [`Provider`] you
register. This library provides:

- A generic, mutex-guarded prototype cache per primitive kind
- Engines that search their provider only on a cache miss and never hold a
  lock while searching
- Direct registration of known-good implementations at startup
- Canonicalization of algorithm requests, so equal requests share a cache entry
- An algorithm factory with provider preferences, and a lazily built
  global instance

## Ownership

Cached prototypes are shared through `Arc`. Replacing a cached prototype
never invalidates a handle a caller already holds; the replaced instance is
destroyed once the last handle is dropped.

## Example

```
use crypto_engine::{AlgorithmFactory, FactoryConfig, ParkingLotMutexFactory};

let factory: AlgorithmFactory =
    AlgorithmFactory::with_config(&FactoryConfig::default(), &ParkingLotMutexFactory)?;

let mut mac = factory.make_mac("HMAC(SHA256)")?;
mac.set_key(b"secret")?;
mac.update(b"message")?;
let tag = mac.final_result()?;
assert_eq!(tag.len(), 32);
# Ok::<(), crypto_engine::Error>(())
```
*/

// Core components
pub mod core;

// Re-export commonly used types for convenience
pub use self::core::error::{Error, Result};
pub use self::core::constants::SOFTWARE_PROVIDER;
pub use self::core::sync::{DefaultRawMutex, MutexFactory, ParkingLotMutexFactory};
pub use self::core::engine::{
    Engine, UninitializedEngine, PrototypeCache, Primitive, PrimitiveKind, Provider, SoftwareProvider,
};

// Re-export primitive interfaces and request parsing
pub use self::core::crypto::{
    Algorithm, BlockCipher, HashFunction, KeyLength, MessageAuthenticationCode, StreamCipher,
    ScanName, FactoryConfig,
};

// Re-export the algorithm factory and global helpers
pub use self::core::crypto::registry::{
    AlgorithmFactory, global_factory, get_block_cipher, get_stream_cipher, get_hash, get_mac,
};
