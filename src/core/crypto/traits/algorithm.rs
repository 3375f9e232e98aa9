/*!
Behaviour shared by every algorithm object.
*/

/// Base trait for all cryptographic primitives
pub trait Algorithm: Send + Sync {
    /// Canonical name of this algorithm, as used for cache lookups
    fn name(&self) -> String;

    /// Wipe any keyed or accumulated state
    fn clear(&mut self);
}

/// Valid key lengths of a keyed algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyLength {
    min: usize,
    max: usize,
    multiple: usize,
}

impl KeyLength {
    /// Exactly one key length
    pub const fn exact(length: usize) -> Self {
        Self { min: length, max: length, multiple: 1 }
    }

    /// Any length in `min..=max` that is a multiple of `multiple`
    pub const fn range(min: usize, max: usize, multiple: usize) -> Self {
        Self { min, max, multiple }
    }

    /// Minimum key length in bytes
    pub fn minimum(&self) -> usize {
        self.min
    }

    /// Maximum key length in bytes
    pub fn maximum(&self) -> usize {
        self.max
    }

    /// Check whether `length` is acceptable
    pub fn valid(&self, length: usize) -> bool {
        length >= self.min && length <= self.max && length % self.multiple == 0
    }
}
