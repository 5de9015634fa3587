//! Well-known type identifiers
//!
//! Type identifiers are opaque UTI-style strings naming one
//! representation of a pasteboard's current item. Only the handful the
//! adapter treats specially are named here; everything else passes
//! through untouched.

/// Plain UTF-8 text
pub const PLAIN_TEXT: &str = "public.utf8-plain-text";

/// Abstract text (legacy alias some producers still use)
pub const TEXT: &str = "public.text";

/// PNG image container
pub const PNG: &str = "public.png";

/// TIFF image container (the canonical bitmap representation)
pub const TIFF: &str = "public.tiff";

/// Whether a type identifier names a text representation
pub fn is_text(type_id: &str) -> bool {
    type_id == PLAIN_TEXT || type_id == TEXT
}

/// Whether a type identifier names an image container the adapter can
/// transcode
pub fn is_image(type_id: &str) -> bool {
    type_id == PNG || type_id == TIFF
}
