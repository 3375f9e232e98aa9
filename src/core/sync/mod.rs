/*!
Lock construction for engine caches.

Every cache is guarded by its own mutex, obtained from a [`MutexFactory`]
so that a deployment can decide which locking primitive backs the engine.
*/

use parking_lot::lock_api::{Mutex, RawMutex};

/// Raw mutex used when no other factory is chosen
pub type DefaultRawMutex = parking_lot::RawMutex;

/// Supplies fresh, independent locks
pub trait MutexFactory {
    /// The raw lock backing every mutex this factory makes
    type Raw: RawMutex + Send + Sync;

    /// Make a new mutex guarding `value`
    fn make<T>(&self, value: T) -> Mutex<Self::Raw, T> {
        Mutex::new(value)
    }
}

/// Factory handing out `parking_lot` mutexes
#[derive(Debug, Clone, Copy, Default)]
pub struct ParkingLotMutexFactory;

impl MutexFactory for ParkingLotMutexFactory {
    type Raw = DefaultRawMutex;
}
