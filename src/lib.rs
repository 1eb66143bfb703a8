//! Sample library used as a fixture for code-analysis tooling.
//!
//! Exposes exactly three symbols: [`greet`], [`Calculator`], and
//! [`say_hello`]. All operations are synchronous, side-effect-free, and
//! infallible; the crate performs no I/O and holds no shared state.

pub mod calculator;
pub mod greeting;

pub use calculator::Calculator;
pub use greeting::{greet, say_hello};
