//! MTK diagnostic log framing
//!
//! Recovers typed protocol frames (NAS, WCDMA RRC, LTE RRC, LTE NAS) from the
//! raw byte stream written by an MTK modem's diagnostic logging interface.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mtk_framing::{FrameStream, parse_all};
//!
//! // Whole capture in one call
//! let capture = std::fs::read("modem.muxz")?;
//! for frame in parse_all(&capture) {
//!     println!("{} {}", frame.display_name(), frame.escaped_hex());
//! }
//!
//! // Or incrementally, as bytes arrive from the device
//! let mut stream = FrameStream::new();
//! let frames = stream.feed(&capture[..512]);
//! # let _ = frames;
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! # Wire Format
//!
//! ```text
//! ... [MAGIC (6)] [TYPE ID (4)] [LEN (2)] [PAYLOAD (LEN)] ... [MAGIC (6)] ...
//! ```
//!
//! Each 6-byte magic marker closes the segment before it. The very first
//! marker of a stream only closes the preamble. Device artifacts
//! (`AC CA 00 FF` plus two trailing bytes) are stripped while scanning.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod protocol;
pub mod stream;

pub use protocol::{
    Error, FramingStats, Frame, MAGIC_MARKER, ProtocolFamily, Result, SPURIOUS_HEADER,
    SegmentOutcome, StatsSnapshot, TypeEntry, TypeFilter, TypeId, decode_segment, lookup,
};
pub use stream::{
    ByteSource, FrameStream, FramerConfig, ParserState, ReaderSource, Scanner, parse_all,
};
