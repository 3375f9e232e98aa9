/*!
Cryptographic components of the engine layer.

This module provides the primitive interfaces, request parsing, the
built-in algorithms and the registry that routes requests to engines.
*/

// Primitive interfaces
pub mod traits;

// Built-in algorithm implementations
pub mod algorithms;

// Algorithm request parsing
pub mod scan_name;

// Config
pub mod config;

// Registry for algorithm management
pub mod registry;

// Re-export frequently used types
pub use config::FactoryConfig;
pub use scan_name::ScanName;
pub use traits::{
    Algorithm, BlockCipher, HashFunction, KeyLength, MessageAuthenticationCode, StreamCipher,
};
pub use registry::{
    AlgorithmFactory, global_factory, get_block_cipher, get_stream_cipher, get_hash, get_mac,
};
