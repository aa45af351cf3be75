//! Skald engine value surface
//!
//! This crate provides the host-engine types the rest of the runtime is
//! built against:
//! - `Value`: dynamically typed runtime values with capability queries
//! - `Object`: shared property-bearing objects keyed by string
//! - `Array`: shared indexed element storage
//! - `NativeFunction`: Rust callables installed on engine objects
//! - `EngineError`: structured errors raised through the engine

pub mod error;
pub mod object;
pub mod value;

pub use error::EngineError;
pub use object::Object;
pub use value::{Array, NativeFunction, Value};
