//! Point-of-use construction helpers.
//!
//! - [`lend`]: build a default value, configure it in a closure, return it

mod lend;

pub use lend::lend;
