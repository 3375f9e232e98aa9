/*!
Binding between primitive kinds and engine machinery.

[`Primitive`] is implemented once for each of the four primitive trait
objects. It tells the generic acquisition code which cache slot of an
engine holds that kind and which provider search produces it.
*/

use std::fmt;

use parking_lot::lock_api::RawMutex;

use crate::core::crypto::registry::AlgorithmFactory;
use crate::core::crypto::scan_name::ScanName;
use crate::core::crypto::traits::{
    Algorithm, BlockCipher, HashFunction, MessageAuthenticationCode, StreamCipher,
};
use super::cache::PrototypeCache;
use super::engine::Caches;
use super::provider::Provider;

/// The four kinds of primitive an engine supplies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    BlockCipher,
    StreamCipher,
    HashFunction,
    Mac,
}

impl PrimitiveKind {
    /// Get the name of the kind as a string
    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveKind::BlockCipher => "block cipher",
            PrimitiveKind::StreamCipher => "stream cipher",
            PrimitiveKind::HashFunction => "hash function",
            PrimitiveKind::Mac => "MAC",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A primitive kind that engines can cache and search for
pub trait Primitive: Algorithm {
    /// Which kind this is
    const KIND: PrimitiveKind;

    /// The cache slot holding prototypes of this kind
    fn cache<R: RawMutex>(caches: &Caches<R>) -> &PrototypeCache<Self, R>;

    /// Ask `provider` to build an instance for `request`
    fn search<R: RawMutex>(
        provider: &dyn Provider<R>,
        request: &ScanName,
        af: &AlgorithmFactory<R>,
    ) -> Option<Box<Self>>;

    /// A fresh, unkeyed copy of `prototype`
    fn duplicate(prototype: &Self) -> Box<Self>;
}

impl Primitive for dyn BlockCipher {
    const KIND: PrimitiveKind = PrimitiveKind::BlockCipher;

    fn cache<R: RawMutex>(caches: &Caches<R>) -> &PrototypeCache<Self, R> {
        &caches.block_ciphers
    }

    fn search<R: RawMutex>(
        provider: &dyn Provider<R>,
        request: &ScanName,
        af: &AlgorithmFactory<R>,
    ) -> Option<Box<Self>> {
        provider.find_block_cipher(request, af)
    }

    fn duplicate(prototype: &Self) -> Box<Self> {
        prototype.box_clone()
    }
}

impl Primitive for dyn StreamCipher {
    const KIND: PrimitiveKind = PrimitiveKind::StreamCipher;

    fn cache<R: RawMutex>(caches: &Caches<R>) -> &PrototypeCache<Self, R> {
        &caches.stream_ciphers
    }

    fn search<R: RawMutex>(
        provider: &dyn Provider<R>,
        request: &ScanName,
        af: &AlgorithmFactory<R>,
    ) -> Option<Box<Self>> {
        provider.find_stream_cipher(request, af)
    }

    fn duplicate(prototype: &Self) -> Box<Self> {
        prototype.box_clone()
    }
}

impl Primitive for dyn HashFunction {
    const KIND: PrimitiveKind = PrimitiveKind::HashFunction;

    fn cache<R: RawMutex>(caches: &Caches<R>) -> &PrototypeCache<Self, R> {
        &caches.hash_functions
    }

    fn search<R: RawMutex>(
        provider: &dyn Provider<R>,
        request: &ScanName,
        af: &AlgorithmFactory<R>,
    ) -> Option<Box<Self>> {
        provider.find_hash(request, af)
    }

    fn duplicate(prototype: &Self) -> Box<Self> {
        prototype.box_clone()
    }
}

impl Primitive for dyn MessageAuthenticationCode {
    const KIND: PrimitiveKind = PrimitiveKind::Mac;

    fn cache<R: RawMutex>(caches: &Caches<R>) -> &PrototypeCache<Self, R> {
        &caches.macs
    }

    fn search<R: RawMutex>(
        provider: &dyn Provider<R>,
        request: &ScanName,
        af: &AlgorithmFactory<R>,
    ) -> Option<Box<Self>> {
        provider.find_mac(request, af)
    }

    fn duplicate(prototype: &Self) -> Box<Self> {
        prototype.box_clone()
    }
}
