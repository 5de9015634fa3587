//! Pasteboard port interface
//!
//! The typed async surface the orchestration layer consumes, one
//! method per adapter command.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{ImageFormat, PasteboardName};

/// Pasteboard operation errors
#[derive(Debug, Clone, Error)]
pub enum PasteboardError {
    #[error("pasteboard adapter not found: {0}")]
    AdapterNotFound(String),

    #[error("failed to spawn pasteboard adapter: {0}")]
    Spawn(String),

    #[error("failed to exchange data with pasteboard adapter: {0}")]
    Io(String),

    /// The adapter ran and reported a failure; the message is its
    /// stderr text, verbatim.
    #[error("{0}")]
    Adapter(String),

    #[error("failed to decode adapter output: {0}")]
    Decode(String),
}

/// Port for pasteboard operations.
///
/// Every call is self-contained and suspends until the underlying
/// operation completes; no state survives between calls. Base64
/// results are handed back undecoded; interpretation is the caller's
/// responsibility.
#[async_trait]
pub trait Pasteboard: Send + Sync {
    /// Enumerate the type identifiers currently on the pasteboard.
    async fn list_types(
        &self,
        pasteboard: &PasteboardName,
    ) -> Result<Vec<String>, PasteboardError>;

    /// Read the plain-text representation. Absence is a failure,
    /// never an empty-string success.
    async fn read_text(&self, pasteboard: &PasteboardName) -> Result<String, PasteboardError>;

    /// Replace the pasteboard's contents with plain text.
    async fn write_text(
        &self,
        pasteboard: &PasteboardName,
        text: &str,
    ) -> Result<(), PasteboardError>;

    /// Read the current image re-encoded as `format`, base64-encoded.
    async fn read_image(
        &self,
        pasteboard: &PasteboardName,
        format: ImageFormat,
    ) -> Result<String, PasteboardError>;

    /// Replace the pasteboard's contents with a base64-encoded image.
    async fn write_image(
        &self,
        pasteboard: &PasteboardName,
        base64_data: &str,
        format: ImageFormat,
    ) -> Result<(), PasteboardError>;

    /// Read the payload under an arbitrary type identifier: UTF-8 text
    /// when representable, base64 otherwise.
    async fn read_data(
        &self,
        pasteboard: &PasteboardName,
        type_id: &str,
    ) -> Result<String, PasteboardError>;

    /// Replace the pasteboard's contents with a payload under an
    /// arbitrary type identifier. With `base64` set the payload is
    /// decoded before writing; otherwise it is written as UTF-8 text.
    async fn write_data(
        &self,
        pasteboard: &PasteboardName,
        type_id: &str,
        payload: &str,
        base64: bool,
    ) -> Result<(), PasteboardError>;

    /// Remove all representations from the pasteboard.
    async fn clear(&self, pasteboard: &PasteboardName) -> Result<(), PasteboardError>;
}

/// Blanket implementation for boxed pasteboard types
#[async_trait]
impl Pasteboard for Box<dyn Pasteboard> {
    async fn list_types(
        &self,
        pasteboard: &PasteboardName,
    ) -> Result<Vec<String>, PasteboardError> {
        self.as_ref().list_types(pasteboard).await
    }

    async fn read_text(&self, pasteboard: &PasteboardName) -> Result<String, PasteboardError> {
        self.as_ref().read_text(pasteboard).await
    }

    async fn write_text(
        &self,
        pasteboard: &PasteboardName,
        text: &str,
    ) -> Result<(), PasteboardError> {
        self.as_ref().write_text(pasteboard, text).await
    }

    async fn read_image(
        &self,
        pasteboard: &PasteboardName,
        format: ImageFormat,
    ) -> Result<String, PasteboardError> {
        self.as_ref().read_image(pasteboard, format).await
    }

    async fn write_image(
        &self,
        pasteboard: &PasteboardName,
        base64_data: &str,
        format: ImageFormat,
    ) -> Result<(), PasteboardError> {
        self.as_ref()
            .write_image(pasteboard, base64_data, format)
            .await
    }

    async fn read_data(
        &self,
        pasteboard: &PasteboardName,
        type_id: &str,
    ) -> Result<String, PasteboardError> {
        self.as_ref().read_data(pasteboard, type_id).await
    }

    async fn write_data(
        &self,
        pasteboard: &PasteboardName,
        type_id: &str,
        payload: &str,
        base64: bool,
    ) -> Result<(), PasteboardError> {
        self.as_ref()
            .write_data(pasteboard, type_id, payload, base64)
            .await
    }

    async fn clear(&self, pasteboard: &PasteboardName) -> Result<(), PasteboardError> {
        self.as_ref().clear(pasteboard).await
    }
}
