use xsalsa20poly1305::{SecretBox, poly1305, xsalsa20_xor};

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const SIZES: [usize; 3] = [64, 1024, 16 * 1024];

pub fn bench_secretbox(c: &mut Criterion) {
    let sb = SecretBox::from_key([7u8; 32]);
    let nonce = [9u8; 24];

    let mut group = c.benchmark_group("secretbox seal");
    for size in SIZES {
        let data = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| sb.seal(black_box(&nonce), black_box(data)))
        });
    }
    group.finish();

    let boxed = sb.seal(&nonce, &[0u8; 1024]).unwrap();
    c.bench_function("secretbox open 1024 bytes", |b| {
        b.iter(|| sb.open(black_box(&nonce), black_box(&boxed)))
    });
}

pub fn bench_primitives(c: &mut Criterion) {
    let data = [0u8; 1024];

    c.bench_function("xsalsa20 1024 bytes", |b| {
        b.iter(|| xsalsa20_xor(black_box(&[7u8; 32]), black_box(&[9u8; 24]), black_box(&data)))
    });

    c.bench_function("poly1305 1024 bytes", |b| {
        b.iter(|| poly1305(black_box(&[7u8; 32]), black_box(&data)))
    });
}

criterion_group!(benches, bench_secretbox, bench_primitives);
criterion_main!(benches);
