//! Domain layer - Books, loan states and the store contract
//!
//! Nothing in this layer knows which store backs it or how results are
//! presented.

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
pub use value_objects::*;
