//! Type identifiers and protocol families

use std::fmt;

/// Four-byte type identifier leading every segment
///
/// The first byte carries the message class, the second the subsystem
/// (`0x01` NAS, `0x02` LTE RRC, `0x03`/`0x04` WCDMA RRC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeId([u8; 4]);

impl TypeId {
    /// Create from raw bytes
    #[must_use]
    pub const fn new(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Read the identifier from the start of a segment
    #[must_use]
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let head: [u8; 4] = bytes.get(..4)?.try_into().ok()?;
        Some(Self(head))
    }

    /// Raw bytes in wire order
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Message class byte
    #[must_use]
    pub const fn class(self) -> u8 {
        self.0[0]
    }

    /// Subsystem byte
    #[must_use]
    pub const fn subsystem(self) -> u8 {
        self.0[1]
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}")
    }
}

/// Coarse classification used to route a frame to the right dissector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProtocolFamily {
    /// UMTS NAS (MM, GMM, CC, SM)
    Nas,
    /// WCDMA RRC
    RrcWcdma,
    /// LTE RRC
    RrcLte,
    /// LTE NAS
    NasLte,
}

impl ProtocolFamily {
    /// Packet tag understood by the downstream decoder
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Nas => "UMTS_NAS_OTA_Packet",
            Self::RrcWcdma => "WCDMA_RRC_OTA_Packet",
            Self::RrcLte => "LTE_RRC_OTA_Packet",
            Self::NasLte => "LTE_NAS_ESM_OTA_Incoming_Packet",
        }
    }
}

impl fmt::Display for ProtocolFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nas => "NAS",
            Self::RrcWcdma => "RRC_WCDMA",
            Self::RrcLte => "RRC_LTE",
            Self::NasLte => "NAS_LTE",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_id_from_slice() {
        let id = TypeId::from_slice(&[0xbc, 0x02, 0x00, 0x00, 0x05]).unwrap();
        assert_eq!(id.as_bytes(), &[0xbc, 0x02, 0x00, 0x00]);
        assert_eq!(id.class(), 0xbc);
        assert_eq!(id.subsystem(), 0x02);

        assert!(TypeId::from_slice(&[0xbc, 0x02, 0x00]).is_none());
    }

    #[test]
    fn test_type_id_display() {
        let id = TypeId::new([0x0e, 0x04, 0x00, 0x00]);
        assert_eq!(id.to_string(), "0e:04:00:00");
    }

    #[test]
    fn test_family_tags() {
        assert_eq!(ProtocolFamily::Nas.tag(), "UMTS_NAS_OTA_Packet");
        assert_eq!(ProtocolFamily::RrcLte.to_string(), "RRC_LTE");
    }
}
