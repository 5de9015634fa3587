//! Pasteboard operation semantics
//!
//! One function per adapter command, written against the
//! `PasteboardStore` port. Input payloads arrive fully drained and are
//! validated before the store is first touched, so an invalid payload
//! never disturbs the pasteboard. A failure between the clear and the
//! set still leaves the pasteboard empty; that matches the host
//! clipboard's behavior and is asserted by tests.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use thiserror::Error;

use crate::domain::{image, uti, ImageError, ImageFormat, TypedPayload};

use super::ports::{PasteboardStore, Representation, StoreError};

/// Operation errors. The display strings are the adapter's wire-level
/// failure messages.
#[derive(Debug, Clone, Error)]
pub enum OperationError {
    #[error("no text on pasteboard")]
    NoText,

    #[error("no image on pasteboard")]
    NoImage,

    #[error("no data on pasteboard for type {0}")]
    NoData(String),

    #[error("invalid base64 image data")]
    InvalidBase64Image,

    #[error("invalid base64 input")]
    InvalidBase64,

    #[error("invalid UTF-8 input")]
    InvalidUtf8,

    #[error(transparent)]
    Image(#[from] ImageError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Enumerate the type identifiers currently on the pasteboard.
pub fn list_types(store: &mut dyn PasteboardStore) -> Result<Vec<String>, OperationError> {
    Ok(store.type_identifiers()?)
}

/// Read the plain-text representation. Absence is a failure, never an
/// empty-string success.
pub fn read_text(store: &mut dyn PasteboardStore) -> Result<String, OperationError> {
    store
        .read_string(uti::PLAIN_TEXT)?
        .ok_or(OperationError::NoText)
}

/// Replace the pasteboard's contents with plain text.
pub fn write_text(store: &mut dyn PasteboardStore, input: &[u8]) -> Result<(), OperationError> {
    let text = std::str::from_utf8(input).map_err(|_| OperationError::InvalidUtf8)?;
    store.clear()?;
    store.write(&[Representation::text(uti::PLAIN_TEXT, text)])?;
    Ok(())
}

/// Read the pasteboard's image, re-encoded as `format` and rendered as
/// base64.
///
/// The native bitmap container is tried before PNG; the two are
/// independent candidate encodings of the same logical image, and the
/// first that yields decodable pixel data wins.
pub fn read_image(
    store: &mut dyn PasteboardStore,
    format: ImageFormat,
) -> Result<String, OperationError> {
    for candidate in [uti::TIFF, uti::PNG] {
        if let Some(data) = store.read_data(candidate)? {
            if let Ok(pixels) = image::decode(&data) {
                let encoded = image::encode(&pixels, format)?;
                return Ok(BASE64.encode(encoded));
            }
        }
    }
    Err(OperationError::NoImage)
}

/// Replace the pasteboard's contents with a base64-encoded image.
///
/// The canonical TIFF representation is always written; the requested
/// format is written additionally when it is distinct.
pub fn write_image(
    store: &mut dyn PasteboardStore,
    input: &[u8],
    format: ImageFormat,
) -> Result<(), OperationError> {
    let encoded = std::str::from_utf8(input).map_err(|_| OperationError::InvalidBase64Image)?;
    let data = BASE64
        .decode(encoded.trim())
        .map_err(|_| OperationError::InvalidBase64Image)?;
    let pixels = image::decode(&data)?;

    let tiff = image::encode(&pixels, ImageFormat::Tiff)?;
    let mut representations = vec![Representation::new(uti::TIFF, tiff)];
    if format == ImageFormat::Png {
        let png = image::encode(&pixels, ImageFormat::Png)?;
        representations.push(Representation::new(uti::PNG, png));
    }

    store.clear()?;
    store.write(&representations)?;
    Ok(())
}

/// Read the payload stored under an arbitrary type identifier.
///
/// The string decode is attempted unconditionally first; binary is the
/// fallback, not the default.
pub fn read_data(
    store: &mut dyn PasteboardStore,
    type_id: &str,
) -> Result<TypedPayload, OperationError> {
    if let Some(text) = store.read_string(type_id)? {
        return Ok(TypedPayload::Text(text));
    }
    if let Some(data) = store.read_data(type_id)? {
        return Ok(TypedPayload::Data(data));
    }
    Err(OperationError::NoData(type_id.to_string()))
}

/// Replace the pasteboard's contents with a payload under an arbitrary
/// type identifier.
pub fn write_data(
    store: &mut dyn PasteboardStore,
    type_id: &str,
    input: &[u8],
    base64: bool,
) -> Result<(), OperationError> {
    let data = if base64 {
        let encoded = std::str::from_utf8(input).map_err(|_| OperationError::InvalidBase64)?;
        BASE64
            .decode(encoded.trim())
            .map_err(|_| OperationError::InvalidBase64)?
    } else {
        std::str::from_utf8(input).map_err(|_| OperationError::InvalidUtf8)?;
        input.to_vec()
    };

    store.clear()?;
    store.write(&[Representation::new(type_id, data)])?;
    Ok(())
}

/// Remove all representations from the pasteboard.
pub fn clear(store: &mut dyn PasteboardStore) -> Result<(), OperationError> {
    store.clear()?;
    Ok(())
}
