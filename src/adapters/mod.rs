//! Adapters - Implementations of the port interfaces

pub mod backend;

pub use backend::BackendClient;
