/*!
Trait for hash functions.
*/

use super::algorithm::Algorithm;

/// Trait for hash function operations
pub trait HashFunction: Algorithm {
    /// Digest length in bytes
    fn output_length(&self) -> usize;

    /// Internal block size in bytes
    fn hash_block_size(&self) -> usize;

    /// Feed data into the hash state
    fn update(&mut self, data: &[u8]);

    /// Finish the computation, returning the digest and resetting the state
    fn final_result(&mut self) -> Vec<u8>;

    /// Create a fresh instance of the same algorithm
    fn box_clone(&self) -> Box<dyn HashFunction>;

    /// One-shot hash of `data`
    fn process(&mut self, data: &[u8]) -> Vec<u8> {
        self.update(data);
        self.final_result()
    }
}
