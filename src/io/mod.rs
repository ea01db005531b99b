// src/io/mod.rs
//! Reading adjacency text, writing recommendation lines, and the persisted index.

pub mod checkpoint;
pub mod loader;
pub mod writer;

pub use writer::Destination;
