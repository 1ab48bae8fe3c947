//! Command-line presentation: catalog rendering and the demo harness

pub mod catalog;
pub mod demo;
