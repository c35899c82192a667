//! Print every frame found in an MTK log capture
//!
//! ```text
//! RUST_LOG=mtk_framing=debug cargo run --example dump_frames -- capture.muxz [TYPE_NAME...]
//! ```

use std::fs::File;

use mtk_framing::{FrameStream, FramerConfig, ReaderSource, TypeFilter};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let mut args = std::env::args().skip(1);
    let path = args.next().ok_or("usage: dump_frames <capture> [TYPE_NAME...]")?;
    let names: Vec<String> = args.collect();

    let mut config = FramerConfig::default();
    if !names.is_empty() {
        config = config.with_filter(TypeFilter::only(&names)?);
    }

    let mut stream = FrameStream::with_config(config);
    let source = ReaderSource::new(File::open(&path)?);
    stream.drain_with(source, |frame| {
        println!(
            "{:<28} {:<32} {}",
            frame.display_name(),
            frame.family().tag(),
            frame.escaped_hex()
        );
    })?;

    let stats = stream.stats();
    println!(
        "\n{} bytes, {} markers, {} frames, {} unrecognized, {} malformed, {} filtered",
        stats.bytes_scanned,
        stats.markers_seen,
        stats.frames,
        stats.unrecognized,
        stats.malformed,
        stats.filtered
    );

    Ok(())
}
