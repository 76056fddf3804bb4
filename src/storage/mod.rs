//! Storage implementations of the catalog services

pub mod in_memory;

pub use in_memory::InMemoryCatalog;
