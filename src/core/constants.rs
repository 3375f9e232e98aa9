/*!
Constants for the crypto engine.

This module contains provider names and the fixed sizes of the
algorithms shipped with the built-in software engine.
*/

/// Provider name of the built-in software engine
pub const SOFTWARE_PROVIDER: &str = "core";

/// Size constants for the built-in algorithms
pub mod sizes {
    /// AES constants
    pub mod aes {
        /// AES block size in bytes
        pub const BLOCK_SIZE: usize = 16;

        /// AES-128 key size in bytes
        pub const KEY_SIZE_128: usize = 16;

        /// AES-192 key size in bytes
        pub const KEY_SIZE_192: usize = 24;

        /// AES-256 key size in bytes
        pub const KEY_SIZE_256: usize = 32;
    }

    /// ChaCha20 constants
    pub mod chacha {
        /// Size of the ChaCha20 key in bytes
        pub const KEY_SIZE: usize = 32;

        /// Size of the ChaCha20 nonce in bytes (IETF variant)
        pub const NONCE_SIZE: usize = 12;
    }

    /// SHA-2 constants
    pub mod sha2 {
        /// Compression block size of SHA-224 and SHA-256
        pub const BLOCK_SIZE_256: usize = 64;

        /// Compression block size of SHA-384 and SHA-512
        pub const BLOCK_SIZE_512: usize = 128;
    }
}
