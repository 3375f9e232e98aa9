//! Core components of the crypto engine.
//!
//! This module contains the primitive interfaces and their built-in
//! implementations, the engines and prototype caches that hand them out,
//! lock construction, and error handling.

// Export cryptographic functionality
pub mod crypto;

// Export engines and prototype caches
pub mod engine;

// Lock construction
pub mod sync;

// Engine constants
pub mod constants;

// Error handling
pub mod error;

// Re-exports for convenience
pub use self::error::{Error, Result};
pub use self::engine::{Engine, PrototypeCache, Provider, SoftwareProvider};
pub use self::sync::{MutexFactory, ParkingLotMutexFactory};
