//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces: the
//! clipboard store backends and the subprocess bridge.

pub mod bridge;
pub mod store;

// Re-export adapters
pub use bridge::ProcessBridge;
pub use store::{create_store, ArboardStore, MemoryRegistry, MemoryStore};
