//! Segment decoder
//!
//! Turns one closed segment (the bytes between two magic markers) into at most
//! one frame.

use bytes::Bytes;

use super::{Frame, PAYLOAD_OFFSET, TYPE_ID_SIZE, TypeFilter, TypeId, lookup};

/// Result of decoding one closed segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentOutcome {
    /// Recognized type with a plausible length
    Frame(Frame),
    /// First marker of the stream; closes the preamble, never a frame
    Bootstrap,
    /// Type identifier not in the registry (or segment shorter than one)
    UnrecognizedType {
        /// Leading identifier, if the segment had four bytes
        type_id: Option<TypeId>,
    },
    /// Recognized type whose length field is zero or exceeds the payload bytes
    MalformedLength {
        /// Identifier of the dropped segment
        type_id: TypeId,
        /// Length read from the segment (0 if the field is missing)
        declared: usize,
        /// Bytes present after the length field
        available: usize,
    },
    /// Recognized, well-formed, but disabled by the type filter
    Filtered {
        /// Identifier of the dropped segment
        type_id: TypeId,
    },
}

impl SegmentOutcome {
    /// Take the frame, if any
    #[must_use]
    pub fn into_frame(self) -> Option<Frame> {
        match self {
            Self::Frame(frame) => Some(frame),
            _ => None,
        }
    }

    /// Check whether this outcome lost a recognized frame to a bad length
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedLength { .. })
    }
}

/// Decode a closed segment
///
/// # Format
///
/// ```text
/// [TYPE ID (4)] [LEN_A (1)] [LEN_B (1)] [PAYLOAD (LEN_B * 256 + LEN_A)] [ignored...]
/// ```
///
/// The length is `byte[5] * 256 + byte[4]`, as written by the device.
#[must_use]
pub fn decode_segment(segment: &[u8]) -> SegmentOutcome {
    decode_segment_filtered(segment, &TypeFilter::All)
}

/// Decode a closed segment, dropping types the filter does not allow
#[must_use]
pub fn decode_segment_filtered(segment: &[u8], filter: &TypeFilter) -> SegmentOutcome {
    let Some(type_id) = TypeId::from_slice(segment) else {
        return SegmentOutcome::UnrecognizedType { type_id: None };
    };

    let Some(entry) = lookup(type_id) else {
        return SegmentOutcome::UnrecognizedType {
            type_id: Some(type_id),
        };
    };

    let available = segment.len().saturating_sub(PAYLOAD_OFFSET);
    let Some(&[len_a, len_b]) = segment.get(TYPE_ID_SIZE..PAYLOAD_OFFSET) else {
        return SegmentOutcome::MalformedLength {
            type_id,
            declared: 0,
            available,
        };
    };

    let declared = usize::from(len_b) * 256 + usize::from(len_a);
    if declared == 0 || declared > available {
        return SegmentOutcome::MalformedLength {
            type_id,
            declared,
            available,
        };
    }

    if !filter.allows(entry) {
        return SegmentOutcome::Filtered { type_id };
    }

    let payload = Bytes::copy_from_slice(&segment[PAYLOAD_OFFSET..PAYLOAD_OFFSET + declared]);
    SegmentOutcome::Frame(Frame::new(entry, [len_a, len_b], payload))
}
