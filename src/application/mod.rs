//! Application layer - Wiring stores and services together
//!
//! This layer depends on domain and on the configured store, but never on
//! the CLI.

pub mod dependency_injection;

pub use dependency_injection::*;
