/*!
Algorithm engines.

An engine is one source of algorithm implementations (portable software,
hardware acceleration, ...) together with the caches of prototypes it has
already built.
*/

pub mod cache;
pub mod engine;
pub mod primitive;
pub mod provider;
pub mod software;

pub use cache::PrototypeCache;
pub use engine::{Caches, Engine, UninitializedEngine};
pub use primitive::{Primitive, PrimitiveKind};
pub use provider::Provider;
pub use software::SoftwareProvider;
