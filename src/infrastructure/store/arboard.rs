//! OS clipboard store using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland). These platforms
//! expose a single system clipboard through arboard, so every
//! pasteboard name resolves to it; the name is kept for diagnostics.
//! The clipboard is opened inside each operation and never held across
//! operations.

use std::borrow::Cow;

use crate::application::ports::{PasteboardStore, Representation, StoreError};
use crate::domain::{image, uti, ImageFormat, PasteboardName};

/// OS clipboard store using arboard
pub struct ArboardStore {
    pasteboard: PasteboardName,
}

impl ArboardStore {
    /// Open a store bound to the given pasteboard name
    pub fn open(pasteboard: &PasteboardName) -> Self {
        Self {
            pasteboard: pasteboard.clone(),
        }
    }

    fn clipboard(&self) -> Result<arboard::Clipboard, StoreError> {
        arboard::Clipboard::new().map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    fn current_text(&self) -> Result<Option<String>, StoreError> {
        match self.clipboard()?.get_text() {
            Ok(text) => Ok(Some(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(StoreError::ReadFailed(e.to_string())),
        }
    }

    fn current_image(&self) -> Result<Option<::image::DynamicImage>, StoreError> {
        let data = match self.clipboard()?.get_image() {
            Ok(data) => data,
            Err(arboard::Error::ContentNotAvailable) => return Ok(None),
            Err(e) => return Err(StoreError::ReadFailed(e.to_string())),
        };

        let buffer = ::image::RgbaImage::from_raw(
            data.width as u32,
            data.height as u32,
            data.bytes.into_owned(),
        )
        .ok_or_else(|| {
            StoreError::ReadFailed("clipboard image has inconsistent dimensions".to_string())
        })?;
        Ok(Some(::image::DynamicImage::ImageRgba8(buffer)))
    }
}

impl PasteboardStore for ArboardStore {
    /// Reports the identifiers this backend can currently materialize:
    /// the text type when text is present, both image containers when
    /// an image is present (either can be produced by transcoding).
    fn type_identifiers(&mut self) -> Result<Vec<String>, StoreError> {
        let mut types = Vec::new();
        if self.current_text()?.is_some() {
            types.push(uti::PLAIN_TEXT.to_string());
        }
        if self.current_image()?.is_some() {
            types.push(uti::TIFF.to_string());
            types.push(uti::PNG.to_string());
        }
        tracing::debug!(pasteboard = %self.pasteboard, ?types, "enumerated clipboard types");
        Ok(types)
    }

    fn read_string(&mut self, type_id: &str) -> Result<Option<String>, StoreError> {
        if uti::is_text(type_id) {
            return self.current_text();
        }
        // Custom text-like types have no native slot on these
        // platforms; report absence so the caller can fall back.
        Ok(None)
    }

    fn read_data(&mut self, type_id: &str) -> Result<Option<Vec<u8>>, StoreError> {
        if uti::is_text(type_id) {
            return Ok(self.current_text()?.map(String::into_bytes));
        }
        let format = match type_id {
            uti::PNG => ImageFormat::Png,
            uti::TIFF => ImageFormat::Tiff,
            _ => return Ok(None),
        };
        match self.current_image()? {
            Some(pixels) => {
                let encoded = image::encode(&pixels, format)
                    .map_err(|e| StoreError::ReadFailed(e.to_string()))?;
                Ok(Some(encoded))
            }
            None => Ok(None),
        }
    }

    fn write(&mut self, representations: &[Representation]) -> Result<(), StoreError> {
        if representations.is_empty() {
            return Ok(());
        }

        // One logical item: prefer the text slot, then the image slot.
        // Multiple image containers collapse into a single native image
        // write; the OS serves its own conversions from there.
        if let Some(rep) = representations.iter().find(|r| uti::is_text(&r.type_id)) {
            let text = String::from_utf8(rep.data.clone()).map_err(|_| {
                StoreError::WriteFailed("text representation is not valid UTF-8".to_string())
            })?;
            return self
                .clipboard()?
                .set_text(text)
                .map_err(|e| StoreError::WriteFailed(e.to_string()));
        }

        if let Some(pixels) = representations
            .iter()
            .filter(|r| uti::is_image(&r.type_id))
            .find_map(|r| image::decode(&r.data).ok())
        {
            let rgba = pixels.to_rgba8();
            let (width, height) = rgba.dimensions();
            let data = arboard::ImageData {
                width: width as usize,
                height: height as usize,
                bytes: Cow::Owned(rgba.into_raw()),
            };
            return self
                .clipboard()?
                .set_image(data)
                .map_err(|e| StoreError::WriteFailed(e.to_string()));
        }

        Err(StoreError::UnsupportedType(
            representations[0].type_id.clone(),
        ))
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.clipboard()?
            .clear()
            .map_err(|e| StoreError::WriteFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_opens_for_any_pasteboard_name() {
        let _general = ArboardStore::open(&PasteboardName::General);
        let _custom = ArboardStore::open(&"com.example.scratch".parse().unwrap());
    }
}
