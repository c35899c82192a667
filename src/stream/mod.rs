//! Stream scanning and driving
//!
//! The scanner advances one byte at a time; the driver feeds it from a slice,
//! from successive chunks, or from a [`ByteSource`].

mod config;
mod driver;
mod scanner;
mod source;

pub use config::FramerConfig;
pub use driver::{FrameStream, parse_all};
pub use scanner::{ParserState, Scanner};
pub use source::{ByteSource, ReaderSource};
