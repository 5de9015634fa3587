//! Typed payload value object

/// Payload read from a pasteboard under an arbitrary type identifier.
///
/// Two shapes cross the process boundary: text travels as-is, binary
/// data travels base64-encoded. Reads attempt the text decode first
/// and fall back to binary, so both branches are explicit here rather
/// than an exception fallthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedPayload {
    /// Payload representable as UTF-8 text
    Text(String),
    /// Opaque binary payload
    Data(Vec<u8>),
}

impl TypedPayload {
    /// Render the payload for the process-to-process channel: text
    /// as-is, binary as base64.
    pub fn into_wire_bytes(self) -> Vec<u8> {
        use base64::Engine;
        match self {
            TypedPayload::Text(text) => text.into_bytes(),
            TypedPayload::Data(data) => base64::engine::general_purpose::STANDARD
                .encode(&data)
                .into_bytes(),
        }
    }
}
