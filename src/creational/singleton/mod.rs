//! Singleton variants.
//!
//! The one-time-initialisation cells ([`DoubleChecked`], [`FallibleOnce`],
//! [`Multiton`]) are plain owned values: a composition root or a test can
//! create its own instead of going through the process-wide accessors.

pub mod enum_based;
pub mod inner_static;
pub mod lazy;
pub mod monostate;
pub mod multiton;
pub mod simple;
pub mod static_block;

pub use enum_based::SingletonEnum;
pub use inner_static::InnerStaticSingleton;
pub use lazy::{DoubleChecked, LazySingleton};
pub use monostate::Ceo;
pub use multiton::{Multiton, Printer, Subsystem};
pub use simple::{SimpleSingleton, SimpleSnapshot};
pub use static_block::{FallibleOnce, StaticBlockSingleton};
