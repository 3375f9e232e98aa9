/*!
Trait for message authentication codes.
*/

use crate::core::error::Result;
use super::algorithm::{Algorithm, KeyLength};

/// Trait for MAC operations
pub trait MessageAuthenticationCode: Algorithm {
    /// Tag length in bytes
    fn output_length(&self) -> usize;

    /// Acceptable key lengths
    fn key_spec(&self) -> KeyLength;

    /// Key the MAC
    fn set_key(&mut self, key: &[u8]) -> Result<()>;

    /// Feed data into the MAC computation
    fn update(&mut self, data: &[u8]) -> Result<()>;

    /// Finish the computation, returning the tag; the key is kept
    fn final_result(&mut self) -> Result<Vec<u8>>;

    /// Create a fresh, unkeyed instance of the same algorithm
    fn box_clone(&self) -> Box<dyn MessageAuthenticationCode>;
}
