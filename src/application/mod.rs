//! Application layer - Operation semantics and port interfaces
//!
//! Contains the per-command pasteboard operations and the trait
//! definitions for external system interactions.

pub mod operations;
pub mod ports;

// Re-export common types
pub use operations::OperationError;
pub use ports::{Pasteboard, PasteboardError, PasteboardStore, Representation, StoreError};
