//! # Design Patterns Catalog
//!
//! Classic object-oriented patterns expressed with Rust's own tools.
//!
//! ## Pattern 1: Creational Patterns
//! - Simple singleton with resolve-on-deserialise
//! - Lazy singleton (double-checked locking)
//! - Inner static singleton (`OnceLock`)
//! - Static block singleton (fallible construction)
//! - Enum singleton
//! - Monostate
//! - Multiton
//!
//! ## Pattern 2: Structural Patterns
//! - Decorator (trait objects)
//! - Decorator (generics)
//! - String decorator (newtype + `Deref`)
//!
//! ## Pattern 3: Behavioural Patterns
//! - Iterator (cursor over a browse history)
//! - Mediator (chat room)
//! - Mediator (event broker)
//!
//! Run individual examples with:
//! ```bash
//! cargo run --bin p1_singleton_lazy
//! cargo run --bin p2_decorator_dynamic
//! cargo run --bin p3_mediator_chat_room
//! ```

pub mod behavioural;
pub mod config;
pub mod creational;
pub mod demo;
pub mod error;
pub mod structural;
pub mod telemetry;

pub use config::DemoConfig;
pub use error::{PatternError, Result};
