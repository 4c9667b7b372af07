use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use framelet_core::encoder::FrameEncoder;

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");

    for &payload_len in &[0usize, 16, 256, 4096, 65000] {
        let payload = vec![b'x'; payload_len];
        group.throughput(Throughput::Bytes(payload_len as u64));

        group.bench_with_input(
            BenchmarkId::new("encode", payload_len),
            &payload,
            |b, payload| {
                let mut encoder = FrameEncoder::new();
                b.iter(|| {
                    let frame = encoder.encode(payload).unwrap();
                    criterion::black_box(frame);
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("encode_into", payload_len),
            &payload,
            |b, payload| {
                let mut encoder = FrameEncoder::new();
                let mut dst = vec![0u8; payload.len() + 16];
                b.iter(|| {
                    let written = encoder.encode_into(payload, &mut dst).unwrap();
                    criterion::black_box(written);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_encoding);
criterion_main!(benches);
