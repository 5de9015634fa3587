//! Pasteboard store backends
//!
//! Provides the real OS clipboard store (arboard) and an in-memory
//! store for tests and headless environments.

mod arboard;
mod memory;

pub use arboard::ArboardStore;
pub use memory::{MemoryRegistry, MemoryStore};

use crate::application::ports::PasteboardStore;
use crate::domain::PasteboardName;

/// Create the production store for the given pasteboard
pub fn create_store(pasteboard: &PasteboardName) -> Box<dyn PasteboardStore> {
    Box::new(ArboardStore::open(pasteboard))
}
