/*!
Error handling for the algorithm engine layer.

Lookup misses at the engine level are plain `None` values; everything
that reaches a caller through the algorithm factory or a keyed primitive
is reported through [`Error`].
*/

use thiserror::Error;

/// Result type for the crypto engine
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the crypto engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The algorithm specification could not be parsed
    #[error("Invalid algorithm name: {0}")]
    InvalidAlgorithmName(String),

    /// No engine could supply the requested algorithm
    #[error("Algorithm not found: {0}")]
    AlgorithmNotFound(String),

    /// No engine is registered under the requested provider name
    #[error("Provider not found: {0}")]
    ProviderNotFound(String),

    /// Key length rejected by the algorithm
    #[error("{algorithm} cannot accept a key of length {length}")]
    InvalidKeyLength {
        algorithm: String,
        length: usize,
    },

    /// IV/nonce length rejected by the algorithm
    #[error("{algorithm} cannot accept an IV of length {length}")]
    InvalidIvLength {
        algorithm: String,
        length: usize,
    },

    /// Input is not a single block
    #[error("Invalid block length: expected {expected}, but was {actual}")]
    InvalidBlockLength {
        expected: usize,
        actual: usize,
    },

    /// A keyed operation was attempted before a key was set
    #[error("Key not set for {0}")]
    KeyNotSet(String),

    /// The stream cipher has produced its maximum amount of key stream
    #[error("Key stream exhausted for {0}")]
    KeystreamExhausted(String),
}

/// Create an invalid key length error
#[macro_export]
macro_rules! key_length_err {
    ($algorithm:expr, $length:expr) => {
        Err($crate::core::error::Error::InvalidKeyLength {
            algorithm: $algorithm.to_string(),
            length: $length,
        })
    };
}

/// Create a key-not-set error
#[macro_export]
macro_rules! key_not_set_err {
    ($algorithm:expr) => {
        Err($crate::core::error::Error::KeyNotSet($algorithm.to_string()))
    };
}
