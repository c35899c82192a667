//! Byte-at-a-time boundary scanner
//!
//! Accumulates bytes until the magic marker closes a segment, stripping
//! device header artifacts on the way, and hands each closed segment to the
//! segment decoder.

use tracing::{debug, trace};

use super::FramerConfig;
use crate::protocol::{
    FramingStats, MAGIC_MARKER, SPURIOUS_HEADER, SPURIOUS_HEADER_SPAN, SegmentOutcome,
    StatsSnapshot, decode_segment_filtered,
};

/// Scanning state of one stream
///
/// Never shared between streams; every [`Scanner`] owns its own.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParserState {
    accumulator: Vec<u8>,
    seen_first_marker: bool,
}

impl ParserState {
    /// Bytes of the in-progress segment
    #[must_use]
    pub fn buffered(&self) -> &[u8] {
        &self.accumulator
    }

    /// Whether the stream's first (preamble-closing) marker has passed
    #[must_use]
    pub const fn seen_first_marker(&self) -> bool {
        self.seen_first_marker
    }
}

/// Boundary scanner for one stream
#[derive(Debug, Default, Clone)]
pub struct Scanner {
    state: ParserState,
    config: FramerConfig,
    stats: FramingStats,
}

impl Scanner {
    /// Create a scanner with the given configuration
    #[must_use]
    pub fn new(config: FramerConfig) -> Self {
        Self {
            state: ParserState::default(),
            config,
            stats: FramingStats::default(),
        }
    }

    /// Advance by one byte
    ///
    /// Returns the outcome of the segment this byte closed, if any.
    pub fn push(&mut self, byte: u8) -> Option<SegmentOutcome> {
        self.stats.record_byte();

        let acc = &mut self.state.accumulator;
        acc.push(byte);

        let len = acc.len();
        if len > MAGIC_MARKER.len() && acc[len - SPURIOUS_HEADER_SPAN..len - 2] == SPURIOUS_HEADER
        {
            acc.truncate(len - SPURIOUS_HEADER_SPAN);
            self.stats.record_spurious_header();
            debug!(kept = acc.len(), "stripped spurious device header");
        }

        if acc.ends_with(&MAGIC_MARKER) {
            self.stats.record_marker();
            let end = acc.len() - MAGIC_MARKER.len();
            return Some(self.close_segment(end));
        }

        if let Some(max) = self.config.max_segment_len {
            if acc.len() > max {
                debug!(max, "segment exceeded limit without a marker; discarding");
                acc.clear();
                self.stats.record_overflow();
            }
        }

        None
    }

    /// Close whatever is buffered as a final segment
    ///
    /// Used at end of input. Returns `None` when nothing is buffered.
    pub fn flush(&mut self) -> Option<SegmentOutcome> {
        if self.state.accumulator.is_empty() {
            return None;
        }
        let end = self.state.accumulator.len();
        Some(self.close_segment(end))
    }

    /// Forget all buffered bytes, the bootstrap flag, and the counters
    pub fn reset(&mut self) {
        self.state = ParserState::default();
        self.stats = FramingStats::default();
    }

    /// Current scanning state
    #[must_use]
    pub const fn state(&self) -> &ParserState {
        &self.state
    }

    /// Session configuration
    #[must_use]
    pub const fn config(&self) -> &FramerConfig {
        &self.config
    }

    /// Counter snapshot
    #[must_use]
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    fn close_segment(&mut self, end: usize) -> SegmentOutcome {
        debug_assert!(end <= self.state.accumulator.len());

        let outcome = if self.state.seen_first_marker {
            decode_segment_filtered(&self.state.accumulator[..end], &self.config.filter)
        } else {
            self.state.seen_first_marker = true;
            SegmentOutcome::Bootstrap
        };
        self.state.accumulator.clear();

        match &outcome {
            SegmentOutcome::Frame(frame) => {
                trace!(len = end, name = frame.display_name(), "frame closed");
            }
            SegmentOutcome::MalformedLength {
                type_id,
                declared,
                available,
            } => {
                debug!(%type_id, declared, available, "dropping segment with bad length");
            }
            other => trace!(len = end, outcome = ?other, "segment dropped"),
        }

        self.stats.record_outcome(&outcome);
        outcome
    }
}
