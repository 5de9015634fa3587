//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod pasteboard;
pub mod store;

// Re-export common types
pub use pasteboard::{Pasteboard, PasteboardError};
pub use store::{PasteboardStore, Representation, StoreError};
