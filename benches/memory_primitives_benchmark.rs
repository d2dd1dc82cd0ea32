use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use keystone::alloc::{allocate_align, free_align, AlignedBuffer};
use keystone::memory::{self, constant, copy_construct_array, destroy_object_array};
use keystone::impl_type_traits;

/// Same payload as `u64`, but declared without any bitwise facts.
#[derive(Clone, Copy)]
struct Opaque(u64);

impl_type_traits!(Opaque => {});

fn bench_copy_construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("copy_construct_array");

    for count in [16usize, 256, 4096] {
        group.throughput(Throughput::Bytes((count * 8) as u64));

        let plain: Vec<u64> = (0..count as u64).collect();
        group.bench_with_input(BenchmarkId::new("bitwise", count), &plain, |b, src| {
            let mut dst: Vec<u64> = Vec::with_capacity(src.len());
            b.iter(|| unsafe {
                copy_construct_array(dst.as_mut_ptr(), black_box(src.as_ptr()), src.len());
            });
        });

        let opaque: Vec<Opaque> = (0..count as u64).map(Opaque).collect();
        group.bench_with_input(BenchmarkId::new("elementwise", count), &opaque, |b, src| {
            let mut dst: Vec<Opaque> = Vec::with_capacity(src.len());
            b.iter(|| unsafe {
                copy_construct_array(dst.as_mut_ptr(), black_box(src.as_ptr()), src.len());
            });
        });

        let strings: Vec<String> = (0..count).map(|i| i.to_string()).collect();
        group.bench_with_input(BenchmarkId::new("cloning", count), &strings, |b, src| {
            b.iter_batched(
                || Vec::<String>::with_capacity(src.len()),
                |mut dst| unsafe {
                    copy_construct_array(dst.as_mut_ptr(), src.as_ptr(), src.len());
                    destroy_object_array(dst.as_mut_ptr(), src.len());
                    black_box(dst);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_byte_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("byte backends");
    let src = vec![0x5Au8; 4096];
    let mut dst = vec![0u8; 4096];
    group.throughput(Throughput::Bytes(4096));

    group.bench_function("runtime copy_memory", |b| {
        b.iter(|| unsafe { memory::copy_memory(dst.as_mut_ptr(), black_box(src.as_ptr()), 4096) });
    });

    group.bench_function("const copy_memory", |b| {
        b.iter(|| constant::copy_memory(&mut dst, black_box(&src), 4096));
    });

    group.bench_function("set_memory", |b| {
        b.iter(|| unsafe { memory::set_memory(dst.as_mut_ptr(), 4096, black_box(7)) });
    });

    group.bench_function("set_memory_safe", |b| {
        b.iter(|| unsafe { memory::set_memory_safe(dst.as_mut_ptr(), 4096, black_box(7)) });
    });

    group.finish();
}

fn bench_aligned_allocation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aligned allocation");

    group.bench_function("allocate_align/free_align 64", |b| {
        b.iter(|| unsafe {
            let block = allocate_align(black_box(256), 64);
            free_align(black_box(block));
        });
    });

    group.bench_function("AlignedBuffer::new 4096", |b| {
        b.iter(|| black_box(AlignedBuffer::new(black_box(4096), 4096)));
    });

    group.finish();
}

criterion_group!(benches, bench_copy_construct, bench_byte_backends, bench_aligned_allocation);
criterion_main!(benches);
