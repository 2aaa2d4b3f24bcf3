//! SpookyHash benchmarks
//!
//! Run: `cargo bench -p spooky`
//! Native: `RUSTFLAGS='-C target-cpu=native' cargo bench -p spooky`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use spooky::{SpookyHasher, hash64, hash128};

fn bench_oneshot_128(c: &mut Criterion) {
  let mut group = c.benchmark_group("spooky128/oneshot");

  // 64 and 191 exercise the short path, the rest the long path.
  for size in [16, 64, 191, 192, 1024, 4096, 16384, 65536, 1048576] {
    let data = vec![0xa5u8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| hash128(core::hint::black_box(data), 0, 0));
    });
  }

  group.finish();
}

fn bench_oneshot_64(c: &mut Criterion) {
  let mut group = c.benchmark_group("spooky64/oneshot");

  for size in [16, 64, 1024, 65536] {
    let data = vec![0xa5u8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| hash64(core::hint::black_box(data), 0));
    });
  }

  group.finish();
}

fn bench_streaming(c: &mut Criterion) {
  let mut group = c.benchmark_group("spooky128/streaming");

  for chunk in [64usize, 192, 4096] {
    let data = vec![0xa5u8; 1 << 20];
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_with_input(BenchmarkId::from_parameter(chunk), &data, |b, data| {
      b.iter(|| {
        let mut hasher = SpookyHasher::new();
        for piece in data.chunks(chunk) {
          hasher.update(piece);
        }
        hasher.finalize_words()
      });
    });
  }

  group.finish();
}

criterion_group!(benches, bench_oneshot_128, bench_oneshot_64, bench_streaming);
criterion_main!(benches);
