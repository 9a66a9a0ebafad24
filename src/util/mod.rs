//! Helper functions, traits and macros shared across the crate

#[macro_use]
pub mod misc;
pub mod into_bytes;
