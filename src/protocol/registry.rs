//! Static type registry
//!
//! Maps the 4-byte type identifier of a segment to the dissector code, the
//! protocol family and a display name. Identifiers missing from the table are
//! simply not frames of interest.

use std::collections::BTreeSet;

use super::{Error, ProtocolFamily, Result, TypeId};
use super::types::ProtocolFamily::{Nas, NasLte, RrcLte, RrcWcdma};

/// Registry record for one recognized type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeEntry {
    /// Identifier as it appears on the wire
    pub type_id: TypeId,
    /// Dissector selector for the external decoder
    pub dissector_code: u16,
    /// Protocol family
    pub family: ProtocolFamily,
    /// Display name
    pub name: &'static str,
}

const fn entry(
    id: [u8; 4],
    dissector_code: u16,
    family: ProtocolFamily,
    name: &'static str,
) -> TypeEntry {
    TypeEntry {
        type_id: TypeId::new(id),
        dissector_code,
        family,
        name,
    }
}

// Several WCDMA entries share a dissector code (SIB5a/SIB5b, DL-DCCH and the
// two handover messages). Keep them as separate rows.
static TABLE: [TypeEntry; 38] = [
    entry([0x91, 0x01, 0x00, 0x00], 190, Nas, "MM_CM_REQ"),
    entry([0x92, 0x01, 0x00, 0x00], 190, Nas, "MM_AUTH_REQ"),
    entry([0x93, 0x01, 0x00, 0x00], 190, Nas, "GMM_UL"),
    entry([0x94, 0x01, 0x00, 0x00], 190, Nas, "GMM_DL"),
    entry([0x9e, 0x01, 0x00, 0x00], 190, Nas, "CC_UL"),
    entry([0x9f, 0x01, 0x00, 0x00], 190, Nas, "CC_DL"),
    entry([0xa0, 0x01, 0x00, 0x00], 190, Nas, "SM_PDP"),
    entry([0xbc, 0x02, 0x00, 0x00], 203, RrcLte, "LTE_BCCH_BCH"),
    entry([0xbd, 0x02, 0x00, 0x00], 203, RrcLte, "LTE-RRC_BCCH_DL_SCH"),
    entry([0xbe, 0x02, 0x00, 0x00], 204, RrcLte, "LTE_DL_CCCH"),
    entry([0xbf, 0x02, 0x00, 0x00], 201, RrcLte, "LTE-RRC_DL_DCCH"),
    entry([0xc0, 0x02, 0x00, 0x00], 200, RrcLte, "LTE_PCCH"),
    entry([0xc1, 0x02, 0x00, 0x00], 205, RrcLte, "LTE_UL_CCCH"),
    entry([0xc2, 0x02, 0x00, 0x00], 202, RrcLte, "LTE-RRC_UL_DCCH"),
    entry([0xe8, 0x03, 0x00, 0x00], 150, RrcWcdma, "RRC_SI_MIB"),
    entry([0xe9, 0x03, 0x00, 0x00], 181, RrcWcdma, "RRC_SI_SB1"),
    entry([0xea, 0x03, 0x00, 0x00], 182, RrcWcdma, "RRC_SI_SB2"),
    entry([0xeb, 0x03, 0x00, 0x00], 151, RrcWcdma, "RRC_SI_SIB1"),
    entry([0xec, 0x03, 0x00, 0x00], 152, RrcWcdma, "RRC_SI_SIB2"),
    entry([0xed, 0x03, 0x00, 0x00], 153, RrcWcdma, "RRC_SI_SIB3"),
    entry([0xee, 0x03, 0x00, 0x00], 154, RrcWcdma, "RRC_SI_SIB4"),
    entry([0xef, 0x03, 0x00, 0x00], 155, RrcWcdma, "RRC_SI_SIB5a"),
    entry([0xf0, 0x03, 0x00, 0x00], 155, RrcWcdma, "RRC_SI_SIB5b"),
    entry([0xf1, 0x03, 0x00, 0x00], 156, RrcWcdma, "RRC_SI_SIB6"),
    entry([0xf2, 0x03, 0x00, 0x00], 157, RrcWcdma, "RRC_SI_SIB7"),
    entry([0xf6, 0x03, 0x00, 0x00], 161, RrcWcdma, "RRC_SI_SIB11"),
    entry([0xf8, 0x03, 0x00, 0x00], 162, RrcWcdma, "RRC_SI_SIB12"),
    entry([0x0e, 0x04, 0x00, 0x00], 168, RrcWcdma, "RRC_SI_SIB18"),
    entry([0x0f, 0x04, 0x00, 0x00], 169, RrcWcdma, "RRC_SI_SIB19"),
    entry([0x10, 0x04, 0x00, 0x00], 170, RrcWcdma, "RRC_SI_SIB20"),
    entry([0x86, 0x03, 0x00, 0x00], 102, RrcWcdma, "RRC_DL_CCCH"),
    entry([0x87, 0x03, 0x00, 0x00], 103, RrcWcdma, "RRC_DL_DCCH"),
    entry([0x8b, 0x03, 0x00, 0x00], 106, RrcWcdma, "RRC_PAGING_TYPE1"),
    entry([0x8c, 0x03, 0x00, 0x00], 100, RrcWcdma, "RRC_CONN_REQ"),
    entry([0x8d, 0x03, 0x00, 0x00], 101, RrcWcdma, "RRC_UL_DCCH"),
    entry([0x8f, 0x03, 0x00, 0x00], 103, RrcWcdma, "RRC_HANDOVERTOUTRANCOMMAND"),
    entry([0x90, 0x03, 0x00, 0x00], 103, RrcWcdma, "RRC_INTERRATHANDOVERINFO"),
    entry([0x21, 0x03, 0x00, 0x00], 250, NasLte, "EMM_SERVICE_REQUEST"),
];

/// Look up a type identifier
///
/// Returns the first matching row; `None` means the segment is not a frame of
/// interest.
#[must_use]
pub fn lookup(type_id: TypeId) -> Option<&'static TypeEntry> {
    TABLE.iter().find(|entry| entry.type_id == type_id)
}

/// Look up an entry by display name
#[must_use]
pub fn find_by_name(name: &str) -> Option<&'static TypeEntry> {
    TABLE.iter().find(|entry| entry.name == name)
}

/// All registry rows, in table order
#[must_use]
pub fn entries() -> &'static [TypeEntry] {
    &TABLE
}

/// Selects which recognized types produce frames
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TypeFilter {
    /// Every recognized type
    #[default]
    All,
    /// Only the listed display names
    Only(BTreeSet<&'static str>),
}

impl TypeFilter {
    /// Build a filter enabling only the named types
    ///
    /// Fails if a name is not present in the registry.
    pub fn only<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut enabled = BTreeSet::new();
        for name in names {
            let name = name.as_ref();
            let entry = find_by_name(name).ok_or_else(|| Error::UnknownTypeName {
                name: name.to_owned(),
            })?;
            enabled.insert(entry.name);
        }
        Ok(Self::Only(enabled))
    }

    /// Build a filter enabling every type of the given families
    #[must_use]
    pub fn families(families: &[ProtocolFamily]) -> Self {
        Self::Only(
            TABLE
                .iter()
                .filter(|entry| families.contains(&entry.family))
                .map(|entry| entry.name)
                .collect(),
        )
    }

    /// Check whether frames of this entry are wanted
    #[must_use]
    pub fn allows(&self, entry: &TypeEntry) -> bool {
        match self {
            Self::All => true,
            Self::Only(names) => names.contains(entry.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known() {
        let entry = lookup(TypeId::new([0xbc, 0x02, 0x00, 0x00])).unwrap();
        assert_eq!(entry.dissector_code, 203);
        assert_eq!(entry.family, ProtocolFamily::RrcLte);
        assert_eq!(entry.name, "LTE_BCCH_BCH");

        let emm = lookup(TypeId::new([0x21, 0x03, 0x00, 0x00])).unwrap();
        assert_eq!(emm.family, ProtocolFamily::NasLte);
        assert_eq!(emm.dissector_code, 250);
    }

    #[test]
    fn test_lookup_unknown() {
        // SMS_CP and the 2G RR classes are deliberately absent
        assert!(lookup(TypeId::new([0x90, 0x01, 0x00, 0x00])).is_none());
        assert!(lookup(TypeId::new([0xf4, 0x01, 0x00, 0x00])).is_none());
        assert!(lookup(TypeId::new([0x00, 0x00, 0x00, 0x00])).is_none());
    }

    #[test]
    fn test_shared_dissector_codes_kept() {
        let sib5: Vec<_> = entries()
            .iter()
            .filter(|entry| entry.dissector_code == 155)
            .map(|entry| entry.name)
            .collect();
        assert_eq!(sib5, ["RRC_SI_SIB5a", "RRC_SI_SIB5b"]);

        let dcch = entries()
            .iter()
            .filter(|entry| entry.dissector_code == 103)
            .count();
        assert_eq!(dcch, 3);
    }

    #[test]
    fn test_filter_only() {
        let filter = TypeFilter::only(["LTE_PCCH", "GMM_UL"]).unwrap();
        assert!(filter.allows(find_by_name("LTE_PCCH").unwrap()));
        assert!(!filter.allows(find_by_name("LTE_DL_CCCH").unwrap()));

        let err = TypeFilter::only(["NOT_A_TYPE"]).unwrap_err();
        assert!(matches!(err, Error::UnknownTypeName { .. }));
    }

    #[test]
    fn test_filter_families() {
        let filter = TypeFilter::families(&[ProtocolFamily::Nas]);
        assert!(filter.allows(find_by_name("CC_DL").unwrap()));
        assert!(!filter.allows(find_by_name("RRC_SI_MIB").unwrap()));
        assert!(TypeFilter::All.allows(find_by_name("RRC_SI_MIB").unwrap()));
    }
}
