/*!
Registry of algorithm engines.

This module provides the algorithm factory that routes requests to
engines, and a lazily created process-wide default instance.
*/

pub mod factory;
pub mod manager;

pub use factory::AlgorithmFactory;

// Re-export registry manager functions
pub use manager::{
    global_factory,
    get_block_cipher,
    get_stream_cipher,
    get_hash,
    get_mac,
};
