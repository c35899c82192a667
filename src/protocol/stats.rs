//! Per-stream framing counters
//!
//! Owned by one scanner; two streams never share counters.

use super::{ProtocolFamily, SegmentOutcome};

/// Framing counters for one stream
#[derive(Debug, Default, Clone)]
pub struct FramingStats {
    bytes_scanned: u64,
    markers_seen: u64,
    spurious_headers: u64,
    overflows: u64,
    family_frames: FamilyCounters,
    unrecognized: u64,
    malformed: u64,
    filtered: u64,
}

#[derive(Debug, Default, Clone, Copy)]
struct FamilyCounters {
    nas: u64,
    rrc_wcdma: u64,
    rrc_lte: u64,
    nas_lte: u64,
}

impl FamilyCounters {
    fn increment(&mut self, family: ProtocolFamily) {
        let slot = match family {
            ProtocolFamily::Nas => &mut self.nas,
            ProtocolFamily::RrcWcdma => &mut self.rrc_wcdma,
            ProtocolFamily::RrcLte => &mut self.rrc_lte,
            ProtocolFamily::NasLte => &mut self.nas_lte,
        };
        *slot += 1;
    }

    const fn total(self) -> u64 {
        self.nas + self.rrc_wcdma + self.rrc_lte + self.nas_lte
    }
}

impl FramingStats {
    #[inline]
    pub(crate) fn record_byte(&mut self) {
        self.bytes_scanned += 1;
    }

    #[inline]
    pub(crate) fn record_marker(&mut self) {
        self.markers_seen += 1;
    }

    #[inline]
    pub(crate) fn record_spurious_header(&mut self) {
        self.spurious_headers += 1;
    }

    #[inline]
    pub(crate) fn record_overflow(&mut self) {
        self.overflows += 1;
    }

    pub(crate) fn record_outcome(&mut self, outcome: &SegmentOutcome) {
        match outcome {
            SegmentOutcome::Frame(frame) => self.family_frames.increment(frame.family()),
            SegmentOutcome::Bootstrap => {}
            SegmentOutcome::UnrecognizedType { .. } => self.unrecognized += 1,
            SegmentOutcome::MalformedLength { .. } => self.malformed += 1,
            SegmentOutcome::Filtered { .. } => self.filtered += 1,
        }
    }

    /// Copy of the current counters
    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            bytes_scanned: self.bytes_scanned,
            markers_seen: self.markers_seen,
            spurious_headers: self.spurious_headers,
            overflows: self.overflows,
            frames: self.family_frames.total(),
            nas_frames: self.family_frames.nas,
            rrc_wcdma_frames: self.family_frames.rrc_wcdma,
            rrc_lte_frames: self.family_frames.rrc_lte,
            nas_lte_frames: self.family_frames.nas_lte,
            unrecognized: self.unrecognized,
            malformed: self.malformed,
            filtered: self.filtered,
        }
    }
}

/// Lightweight snapshot of framing counters.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatsSnapshot {
    pub bytes_scanned: u64,
    pub markers_seen: u64,
    pub spurious_headers: u64,
    pub overflows: u64,
    pub frames: u64,
    pub nas_frames: u64,
    pub rrc_wcdma_frames: u64,
    pub rrc_lte_frames: u64,
    pub nas_lte_frames: u64,
    pub unrecognized: u64,
    pub malformed: u64,
    pub filtered: u64,
}

impl StatsSnapshot {
    /// Segments closed after the bootstrap marker
    #[must_use]
    pub const fn segments(&self) -> u64 {
        self.frames + self.unrecognized + self.malformed + self.filtered
    }

    /// Frame count for one protocol family
    #[must_use]
    pub const fn frames_for(&self, family: ProtocolFamily) -> u64 {
        match family {
            ProtocolFamily::Nas => self.nas_frames,
            ProtocolFamily::RrcWcdma => self.rrc_wcdma_frames,
            ProtocolFamily::RrcLte => self.rrc_lte_frames,
            ProtocolFamily::NasLte => self.nas_lte_frames,
        }
    }
}
