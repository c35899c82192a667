use crate::protocol::TypeFilter;

/// Default read size when pulling from a [`ByteSource`](super::ByteSource).
pub const DEFAULT_READ_BUFFER_SIZE: usize = 4096;

/// Configurable parameters for one framing session.
#[derive(Debug, Clone)]
pub struct FramerConfig {
    /// Which recognized types produce frames.
    pub filter: TypeFilter,
    /// Discard the in-progress segment once it grows past this many bytes.
    ///
    /// `None` keeps every byte until the next marker.
    pub max_segment_len: Option<usize>,
    /// Chunk size used when draining a byte source.
    pub read_buffer_size: usize,
}

impl Default for FramerConfig {
    fn default() -> Self {
        Self {
            filter: TypeFilter::All,
            max_segment_len: None,
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
        }
    }
}

impl FramerConfig {
    /// Replace the type filter.
    #[must_use]
    pub fn with_filter(mut self, filter: TypeFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Bound the in-progress segment length.
    #[must_use]
    pub fn with_max_segment_len(mut self, max: usize) -> Self {
        self.max_segment_len = Some(max);
        self
    }

    /// Set the source read size (clamped to at least one byte).
    #[must_use]
    pub fn with_read_buffer_size(mut self, size: usize) -> Self {
        self.read_buffer_size = size.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_unbounded_and_unfiltered() {
        let config = FramerConfig::default();
        assert_eq!(config.filter, TypeFilter::All);
        assert!(config.max_segment_len.is_none());
        assert_eq!(config.read_buffer_size, DEFAULT_READ_BUFFER_SIZE);
    }

    #[test]
    fn read_buffer_size_clamped() {
        let config = FramerConfig::default().with_read_buffer_size(0);
        assert_eq!(config.read_buffer_size, 1);
    }
}
