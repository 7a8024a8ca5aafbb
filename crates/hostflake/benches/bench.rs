use criterion::{Criterion, criterion_group, criterion_main};
use hostflake::{HexExt, HostedId, HostedIdGenerator};
use std::hint::black_box;

fn bench_generation(c: &mut Criterion) {
    let generator = HostedIdGenerator::with_host_code(7);
    c.bench_function("next_id", |b| b.iter(|| black_box(generator.next_id())));

    let threads = num_cpus::get();
    c.bench_function("next_id_contended", |b| {
        b.iter(|| {
            std::thread::scope(|s| {
                for _ in 0..threads {
                    s.spawn(|| {
                        for _ in 0..64 {
                            black_box(generator.next_id());
                        }
                    });
                }
            });
        })
    });
}

fn bench_hex(c: &mut Criterion) {
    let id = HostedId::from(100, 7, 12345);
    c.bench_function("hex_encode", |b| b.iter(|| black_box(id.encode())));

    let s = id.encode();
    c.bench_function("hex_decode", |b| {
        b.iter(|| black_box(HostedId::decode(black_box(&s))))
    });
}

criterion_group!(benches, bench_generation, bench_hex);
criterion_main!(benches);
