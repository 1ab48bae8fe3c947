//! Infrastructure layer - Concrete in-memory book stores

pub mod repositories;

pub use repositories::*;
