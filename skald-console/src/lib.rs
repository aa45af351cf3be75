//! Skald console subsystem - bounded value formatting and diagnostics
//!
//! This crate provides:
//! - Bounded value-to-text rendering for every runtime value kind
//! - A `log`/`error` dual-stream print dispatcher with one-level array
//!   expansion
//! - Named timers backed by a monotonic uptime clock
//! - Boolean assertions that raise structured `AssertionError`s
//! - Lifecycle wiring that installs the entry points on a global scope
//!
//! Every operation is synchronous and bounded by argument size and the
//! fixed formatting capacity; the only cross-call state is the timer
//! registry owned by [`Console`].

pub mod buffer;
pub mod clock;
pub mod console;
pub mod error;
pub mod format;
pub mod printer;

pub use buffer::BoundedBuf;
pub use clock::{MonotonicClock, SystemClock};
pub use console::{Channel, Console};
pub use error::ConsoleError;
pub use format::{format_value, Rendered, MAX_VALUE_LEN};
pub use printer::{print_args, write_value};
