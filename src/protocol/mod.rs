//! MTK log protocol core
//!
//! This module provides the type registry, the segment decoder, and the frame
//! representation handed to the external dissector.

mod codec;
mod error;
mod frame;
mod registry;
mod stats;
mod types;

pub use codec::{SegmentOutcome, decode_segment, decode_segment_filtered};
pub use error::{Error, Result};
pub use frame::{Frame, escape_hex};
pub use registry::{TypeEntry, TypeFilter, entries, find_by_name, lookup};
pub use stats::{FramingStats, StatsSnapshot};
pub use types::{ProtocolFamily, TypeId};

/// Marker closing one segment and opening the next
pub const MAGIC_MARKER: [u8; 6] = [0x8F, 0x9A, 0x9A, 0x8D, 0x04, 0x00];

/// Device artifact stripped from the stream, together with the two bytes after it
pub const SPURIOUS_HEADER: [u8; 4] = [0xAC, 0xCA, 0x00, 0xFF];

/// Bytes removed when a spurious header is detected (header + 2 trailing bytes)
pub const SPURIOUS_HEADER_SPAN: usize = SPURIOUS_HEADER.len() + 2;

/// Type identifier size in bytes
pub const TYPE_ID_SIZE: usize = 4;

/// Length field size in bytes
pub const LENGTH_FIELD_SIZE: usize = 2;

/// Offset of the first payload byte within a segment
pub const PAYLOAD_OFFSET: usize = TYPE_ID_SIZE + LENGTH_FIELD_SIZE;
