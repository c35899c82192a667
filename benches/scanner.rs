use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use mtk_framing::{FrameStream, MAGIC_MARKER, parse_all};

fn capture(records: usize, payload_len: usize) -> Vec<u8> {
    let mut bytes = Vec::new();
    for i in 0..records {
        bytes.extend_from_slice(&MAGIC_MARKER);
        // Alternate a known LTE RRC type with an unrecognized one
        let id = if i % 2 == 0 {
            [0xbe, 0x02, 0x00, 0x00]
        } else {
            [0x90, 0x01, 0x00, 0x00]
        };
        bytes.extend_from_slice(&id);
        bytes.push((payload_len % 256) as u8);
        bytes.push((payload_len / 256) as u8);
        bytes.extend((0..payload_len).map(|b| (b % 251) as u8));
    }
    bytes.extend_from_slice(&MAGIC_MARKER);
    bytes
}

fn bench_parse_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner");

    let small = capture(1024, 32);
    group.throughput(Throughput::Bytes(small.len() as u64));
    group.bench_function("parse_all_32b_records", |b| {
        b.iter(|| {
            black_box(parse_all(&small));
        });
    });

    let large = capture(64, 4096);
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("parse_all_4kb_records", |b| {
        b.iter(|| {
            black_box(parse_all(&large));
        });
    });

    group.finish();
}

fn bench_incremental(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner");

    let data = capture(1024, 32);
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("feed_512b_chunks", |b| {
        b.iter(|| {
            let mut stream = FrameStream::new();
            for chunk in data.chunks(512) {
                black_box(stream.feed(chunk));
            }
            black_box(stream.finish());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse_all, bench_incremental);
criterion_main!(benches);
