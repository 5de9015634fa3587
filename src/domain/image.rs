//! Image formats and container transcoding
//!
//! The pasteboard's native bitmap representation and the format a
//! caller asks for may differ, so decoded pixel data is re-encoded
//! into the requested container on the way out.

use std::fmt;
use std::io::Cursor;
use std::str::FromStr;

use image::DynamicImage;
use thiserror::Error;

use super::uti;

/// Image container formats the adapter can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    /// PNG container
    #[default]
    Png,
    /// TIFF container (the canonical bitmap representation)
    Tiff,
}

impl ImageFormat {
    /// Type identifier for this container
    pub fn type_identifier(self) -> &'static str {
        match self {
            ImageFormat::Png => uti::PNG,
            ImageFormat::Tiff => uti::TIFF,
        }
    }

    fn container(self) -> image::ImageFormat {
        match self {
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Tiff => image::ImageFormat::Tiff,
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageFormat::Png => write!(f, "png"),
            ImageFormat::Tiff => write!(f, "tiff"),
        }
    }
}

/// Error when parsing an image format string
#[derive(Debug, Clone, Error)]
#[error("invalid image format: \"{input}\". Valid formats are: png, tiff")]
pub struct ImageFormatParseError {
    pub input: String,
}

impl FromStr for ImageFormat {
    type Err = ImageFormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "png" => Ok(ImageFormat::Png),
            "tiff" => Ok(ImageFormat::Tiff),
            other => Err(ImageFormatParseError {
                input: other.to_string(),
            }),
        }
    }
}

/// Image transcoding errors
#[derive(Debug, Clone, Error)]
pub enum ImageError {
    #[error("failed to decode image data")]
    Decode,

    #[error("failed to encode image as {0}")]
    Encode(ImageFormat),
}

/// Decode container bytes (any format the build supports) into pixels.
pub fn decode(data: &[u8]) -> Result<DynamicImage, ImageError> {
    image::load_from_memory(data).map_err(|_| ImageError::Decode)
}

/// Encode pixels into the given container format.
pub fn encode(image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>, ImageError> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, format.container())
        .map_err(|_| ImageError::Encode(format))?;
    Ok(buf.into_inner())
}
