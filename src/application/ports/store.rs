//! Pasteboard store port interface
//!
//! The seam between operation semantics and the privileged native
//! clipboard surface. A store instance is bound to one pasteboard for
//! the duration of one operation; nothing is held across operations.

use thiserror::Error;

/// Store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read pasteboard: {0}")]
    ReadFailed(String),

    #[error("failed to write pasteboard: {0}")]
    WriteFailed(String),

    #[error("type {0} is not supported by this platform's clipboard")]
    UnsupportedType(String),
}

/// One representation of a pasteboard item: a type identifier and its
/// bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Representation {
    pub type_id: String,
    pub data: Vec<u8>,
}

impl Representation {
    /// Create a representation from raw bytes
    pub fn new(type_id: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            type_id: type_id.into(),
            data,
        }
    }

    /// Create a text representation
    pub fn text(type_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            data: text.into().into_bytes(),
        }
    }
}

/// Port for one pasteboard's native storage.
///
/// `clear` and `write` are separate calls: writes always clear first
/// (whole-item replace), and a write that fails between the two steps
/// leaves the pasteboard empty rather than restored.
pub trait PasteboardStore: Send {
    /// Type identifiers of all representations currently present.
    fn type_identifiers(&mut self) -> Result<Vec<String>, StoreError>;

    /// Read the given representation as a string, if it is present and
    /// representable as text. `Ok(None)` means "not there as text";
    /// the caller decides whether to fall back to bytes.
    fn read_string(&mut self, type_id: &str) -> Result<Option<String>, StoreError>;

    /// Read the given representation's raw bytes, if present.
    fn read_data(&mut self, type_id: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Add representations to the current item. Callers clear first.
    fn write(&mut self, representations: &[Representation]) -> Result<(), StoreError>;

    /// Remove all representations. Idempotent.
    fn clear(&mut self) -> Result<(), StoreError>;
}
