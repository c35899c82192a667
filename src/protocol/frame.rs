//! Decoded frame and its renderings for the external dissector

use std::fmt::Write as _;

use bytes::Bytes;

use super::{ProtocolFamily, TypeEntry, TypeId};

/// Frame recovered from the log stream
///
/// Immutable once produced. The payload holds the exact on-wire bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    type_id: TypeId,
    dissector_code: u16,
    family: ProtocolFamily,
    name: String,
    length_bytes: [u8; 2],
    payload: Bytes,
}

impl Frame {
    /// Build a frame from a registry entry, the raw length field and the payload
    #[must_use]
    pub fn new(entry: &TypeEntry, length_bytes: [u8; 2], payload: impl Into<Bytes>) -> Self {
        Self {
            type_id: entry.type_id,
            dissector_code: entry.dissector_code,
            family: entry.family,
            name: entry.name.to_owned(),
            length_bytes,
            payload: payload.into(),
        }
    }

    /// Type identifier
    #[must_use]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Dissector selector
    #[must_use]
    pub const fn dissector_code(&self) -> u16 {
        self.dissector_code
    }

    /// Protocol family
    #[must_use]
    pub const fn family(&self) -> ProtocolFamily {
        self.family
    }

    /// Registry display name
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.name
    }

    /// Raw length field, in wire order
    #[must_use]
    pub const fn length_bytes(&self) -> [u8; 2] {
        self.length_bytes
    }

    /// Payload
    #[must_use]
    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    /// Input record for the external dissector
    ///
    /// ```text
    /// [DISSECTOR CODE (4, BE)] [0, 0, LEN[1], LEN[0]] [PAYLOAD]
    /// ```
    #[must_use]
    pub fn dissector_input(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.payload.len());
        bytes.extend_from_slice(&u32::from(self.dissector_code).to_be_bytes());
        bytes.extend_from_slice(&[0, 0, self.length_bytes[1], self.length_bytes[0]]);
        bytes.extend_from_slice(&self.payload);
        bytes
    }

    /// Dissector input rendered as `\xNN` escapes
    ///
    /// Every byte renders as exactly two hex digits, zero included.
    #[must_use]
    pub fn escaped_hex(&self) -> String {
        escape_hex(&self.dissector_input())
    }
}

/// Render bytes as `\xNN` escapes
#[must_use]
pub fn escape_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 4);
    for byte in bytes {
        // Writing to a String cannot fail.
        let _ = write!(out, "\\x{byte:02x}");
    }
    out
}
