/*!
SHA-2 family hash functions backed by the `sha2` crate.
*/

use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use sha2::digest::FixedOutputReset;

use crate::core::constants::sizes;
use crate::core::crypto::traits::{Algorithm, HashFunction};

/// A SHA-2 hash function
pub struct Sha2<D> {
    name: &'static str,
    block_size: usize,
    state: D,
}

impl<D: Digest + FixedOutputReset + Default> Sha2<D> {
    fn with_params(name: &'static str, block_size: usize) -> Self {
        Self { name, block_size, state: D::default() }
    }
}

impl Sha2<Sha224> {
    /// SHA-224
    pub fn sha224() -> Self {
        Self::with_params("SHA-224", sizes::sha2::BLOCK_SIZE_256)
    }
}

impl Sha2<Sha256> {
    /// SHA-256
    pub fn sha256() -> Self {
        Self::with_params("SHA-256", sizes::sha2::BLOCK_SIZE_256)
    }
}

impl Sha2<Sha384> {
    /// SHA-384
    pub fn sha384() -> Self {
        Self::with_params("SHA-384", sizes::sha2::BLOCK_SIZE_512)
    }
}

impl Sha2<Sha512> {
    /// SHA-512
    pub fn sha512() -> Self {
        Self::with_params("SHA-512", sizes::sha2::BLOCK_SIZE_512)
    }
}

impl<D> Algorithm for Sha2<D>
where
    D: Digest + FixedOutputReset + Default + Send + Sync,
{
    fn name(&self) -> String {
        self.name.to_string()
    }

    fn clear(&mut self) {
        Digest::reset(&mut self.state);
    }
}

impl<D> HashFunction for Sha2<D>
where
    D: Digest + FixedOutputReset + Default + Send + Sync + 'static,
{
    fn output_length(&self) -> usize {
        <D as Digest>::output_size()
    }

    fn hash_block_size(&self) -> usize {
        self.block_size
    }

    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.state, data);
    }

    fn final_result(&mut self) -> Vec<u8> {
        Digest::finalize_reset(&mut self.state).to_vec()
    }

    fn box_clone(&self) -> Box<dyn HashFunction> {
        Box::new(Self::with_params(self.name, self.block_size))
    }
}
