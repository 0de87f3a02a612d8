use bytering::ByteRing;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

const CHUNK: usize = 64;
const OPS_PER_ITER: usize = 1_000;

/// Steady-state cycling: write a chunk, read it back, repeat.
fn bench_write_read_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("byte_ring");
    group.throughput(Throughput::Bytes((CHUNK * OPS_PER_ITER) as u64));

    for cap in [256usize, 4096, 65_536] {
        group.bench_with_input(BenchmarkId::new("write_read_cycle", cap), &cap, |b, &cap| {
            let mut ring = ByteRing::new(cap);
            let chunk = [0xA5u8; CHUNK];
            let mut out = [0u8; CHUNK];
            b.iter(|| {
                for _ in 0..OPS_PER_ITER {
                    ring.write(black_box(&chunk));
                    black_box(ring.read(&mut out));
                }
            });
        });
    }

    group.finish();
}

/// Overflow path: the buffer is always full, so every write evicts.
fn bench_overwrite(c: &mut Criterion) {
    let mut group = c.benchmark_group("byte_ring");
    group.throughput(Throughput::Bytes((CHUNK * OPS_PER_ITER) as u64));

    group.bench_function("overwrite_full_cap4096", |b| {
        let mut ring = ByteRing::new(4096);
        let chunk = [0x5Au8; CHUNK];
        b.iter(|| {
            for _ in 0..OPS_PER_ITER {
                black_box(ring.write(black_box(&chunk)));
            }
        });
    });

    group.finish();
}

/// Naive search for a short needle near the front and one that is absent.
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("byte_ring");

    let mut ring = ByteRing::new(4096);
    for i in 0..4096u32 {
        ring.write(&[(i % 251) as u8]);
    }

    group.bench_function("search_hit_near_front", |b| {
        b.iter(|| black_box(ring.search(black_box(&[4, 5]))));
    });
    group.bench_function("search_miss_full_scan", |b| {
        b.iter(|| black_box(ring.search(black_box(&[255, 255]))));
    });

    group.finish();
}

criterion_group!(benches, bench_write_read_cycle, bench_overwrite, bench_search);
criterion_main!(benches);
