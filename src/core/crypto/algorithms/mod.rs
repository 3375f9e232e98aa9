/*!
Implementations of cryptographic algorithms.

This module provides the concrete algorithms offered by the built-in
software engine. Each submodule exposes a `create_*` function mapping a
canonical name to a fresh, unkeyed instance.
*/

// Block ciphers
pub mod block;

// Stream ciphers
pub mod stream;

// Hash functions
pub mod hash;

// Message authentication codes
pub mod mac;

// Re-export factory functions
pub use block::create_block_cipher;
pub use stream::create_stream_cipher;
pub use hash::create_hash;
pub use mac::create_hmac;
