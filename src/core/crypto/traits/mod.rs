/*!
Core traits for cryptographic primitives.

This module defines the interfaces of the four primitive kinds an engine
can supply. Engines never depend on concrete algorithm types, only on
these traits.
*/

pub mod algorithm;
pub mod cipher;
pub mod hash;
pub mod mac;

// Re-export core traits for easier access
pub use algorithm::{Algorithm, KeyLength};
pub use cipher::{BlockCipher, StreamCipher};
pub use hash::HashFunction;
pub use mac::MessageAuthenticationCode;
