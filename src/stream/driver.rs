//! Stream driver: whole-sequence and incremental framing over one scanner.

use tracing::{debug, instrument};

use super::{ByteSource, FramerConfig, Scanner};
use crate::protocol::{Frame, Result, SegmentOutcome, StatsSnapshot};

/// One framing session over an ordered byte stream.
///
/// Feeding the same bytes in any chunking yields the same frames.
#[derive(Debug, Default, Clone)]
pub struct FrameStream {
    scanner: Scanner,
}

impl FrameStream {
    /// Create a session with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with an explicit configuration.
    #[must_use]
    pub fn with_config(config: FramerConfig) -> Self {
        Self {
            scanner: Scanner::new(config),
        }
    }

    /// Scan newly arrived bytes, returning frames closed within them.
    ///
    /// The stream stays open: a trailing unterminated segment is kept for the
    /// next call.
    #[instrument(level = "trace", skip(self, chunk), fields(len = chunk.len()))]
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<Frame> {
        chunk
            .iter()
            .filter_map(|&byte| self.scanner.push(byte))
            .filter_map(SegmentOutcome::into_frame)
            .collect()
    }

    /// Like [`feed`](Self::feed) but returns every closed segment's outcome,
    /// including dropped ones.
    #[instrument(level = "trace", skip(self, chunk), fields(len = chunk.len()))]
    pub fn feed_outcomes(&mut self, chunk: &[u8]) -> Vec<SegmentOutcome> {
        chunk
            .iter()
            .filter_map(|&byte| self.scanner.push(byte))
            .collect()
    }

    /// Signal end of input, decoding whatever is still buffered.
    #[must_use]
    pub fn finish(&mut self) -> Option<Frame> {
        self.finish_outcome().and_then(SegmentOutcome::into_frame)
    }

    /// Signal end of input, returning the outcome of the final segment.
    pub fn finish_outcome(&mut self) -> Option<SegmentOutcome> {
        self.scanner.flush()
    }

    /// Read a source to its end, collecting every frame.
    pub fn drain<S: ByteSource>(&mut self, source: S) -> Result<Vec<Frame>> {
        let mut frames = Vec::new();
        self.drain_with(source, |frame| frames.push(frame))?;
        Ok(frames)
    }

    /// Read a source to its end, handing frames to `on_frame` as they close.
    ///
    /// The final unterminated segment is flushed once the source reports end
    /// of stream. Returns the number of frames delivered.
    #[instrument(level = "debug", skip_all)]
    pub fn drain_with<S, F>(&mut self, mut source: S, mut on_frame: F) -> Result<u64>
    where
        S: ByteSource,
        F: FnMut(Frame),
    {
        let mut buf = vec![0u8; self.scanner.config().read_buffer_size.max(1)];
        let mut delivered = 0u64;

        while let Some(n) = source.read_chunk(&mut buf)? {
            for &byte in &buf[..n] {
                if let Some(frame) = self.scanner.push(byte).and_then(SegmentOutcome::into_frame) {
                    delivered += 1;
                    on_frame(frame);
                }
            }
        }

        if let Some(frame) = self.finish() {
            delivered += 1;
            on_frame(frame);
        }

        let stats = self.stats();
        debug!(
            bytes = stats.bytes_scanned,
            frames = stats.frames,
            malformed = stats.malformed,
            "source drained"
        );
        Ok(delivered)
    }

    /// Counter snapshot for this session.
    #[must_use]
    pub fn stats(&self) -> StatsSnapshot {
        self.scanner.stats()
    }

    /// Underlying scanner.
    #[must_use]
    pub const fn scanner(&self) -> &Scanner {
        &self.scanner
    }
}

/// Frame a complete capture held in memory.
///
/// Scans every byte, then flushes the trailing segment.
#[must_use]
pub fn parse_all(bytes: &[u8]) -> Vec<Frame> {
    let mut stream = FrameStream::new();
    let mut frames = stream.feed(bytes);
    frames.extend(stream.finish());
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::MAGIC_MARKER;
    use std::collections::VecDeque;
    use std::io;

    const PCCH: [u8; 4] = [0xc0, 0x02, 0x00, 0x00];

    fn capture() -> Vec<u8> {
        let mut bytes = vec![0xde, 0xad];
        bytes.extend_from_slice(&MAGIC_MARKER);
        bytes.extend_from_slice(&PCCH);
        bytes.extend_from_slice(&[0x02, 0x00, 0x01, 0x02]);
        bytes.extend_from_slice(&MAGIC_MARKER);
        bytes.extend_from_slice(&PCCH);
        bytes.extend_from_slice(&[0x01, 0x00, 0x03]);
        bytes
    }

    struct Chunks(VecDeque<Vec<u8>>);

    impl ByteSource for Chunks {
        fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<Option<usize>> {
            let Some(chunk) = self.0.pop_front() else {
                return Ok(None);
            };
            buf[..chunk.len()].copy_from_slice(&chunk);
            Ok(Some(chunk.len()))
        }
    }

    #[test]
    fn test_parse_all_flushes_tail() {
        let frames = parse_all(&capture());
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].payload().as_ref(), &[0x01, 0x02]);
        assert_eq!(frames[1].payload().as_ref(), &[0x03]);
    }

    #[test]
    fn test_feed_keeps_tail_open() {
        let mut stream = FrameStream::new();
        let frames = stream.feed(&capture());
        assert_eq!(frames.len(), 1);
        assert!(!stream.scanner().state().buffered().is_empty());
    }

    #[test]
    fn test_feed_outcomes_exposes_drops() {
        let mut input = MAGIC_MARKER.to_vec();
        input.extend_from_slice(&PCCH);
        input.extend_from_slice(&[0x09, 0x00, 0x01]);
        input.extend_from_slice(&MAGIC_MARKER);

        let mut stream = FrameStream::new();
        let outcomes = stream.feed_outcomes(&input);
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes[1].is_malformed());
        assert_eq!(stream.stats().malformed, 1);
    }

    #[test]
    fn test_drain_zero_length_chunks_are_not_eof() {
        let data = capture();
        let (a, b) = data.split_at(7);
        let source = Chunks(VecDeque::from(vec![
            a.to_vec(),
            Vec::new(),
            Vec::new(),
            b.to_vec(),
        ]));

        let mut stream = FrameStream::with_config(FramerConfig::default());
        let frames = stream.drain(source).unwrap();
        assert_eq!(frames, parse_all(&data));
    }

    #[test]
    fn test_drain_with_counts_deliveries() {
        let data = capture();
        let config = FramerConfig::default().with_read_buffer_size(3);
        let mut stream = FrameStream::with_config(config);

        let mut names = Vec::new();
        let delivered = stream
            .drain_with(crate::ReaderSource::new(data.as_slice()), |frame| {
                names.push(frame.display_name().to_owned());
            })
            .unwrap();

        assert_eq!(delivered, 2);
        assert_eq!(names, ["LTE_PCCH", "LTE_PCCH"]);
    }

    #[test]
    fn test_independent_sessions() {
        let mut first = FrameStream::new();
        first.feed(&MAGIC_MARKER);

        // A second stream must still treat its first marker as bootstrap
        let mut second = FrameStream::new();
        let mut input = MAGIC_MARKER.to_vec();
        input.extend_from_slice(&PCCH);
        input.extend_from_slice(&[0x01, 0x00, 0x07]);
        input.extend_from_slice(&MAGIC_MARKER);
        assert_eq!(second.feed(&input).len(), 1);

        let mut input = PCCH.to_vec();
        input.extend_from_slice(&[0x01, 0x00, 0x07]);
        input.extend_from_slice(&MAGIC_MARKER);
        assert_eq!(first.feed(&input).len(), 1);
        assert!(FrameStream::new().feed(&input).is_empty());
    }
}
