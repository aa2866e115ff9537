//! Benchmarks for archive inspection.
//!
//! Measures member listing plus whole-file hashing for both formats as the
//! archive grows.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::cast_possible_truncation
)]

use binscan_core::InspectionConfig;
use binscan_core::hash::md5_hex;
use binscan_core::inspect_archive;
use binscan_core::test_utils::TarTestBuilder;
use binscan_core::test_utils::ZipTestBuilder;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use std::hint::black_box;
use tempfile::TempDir;

const SIZES: [usize; 3] = [64 * 1024, 1024 * 1024, 16 * 1024 * 1024];

fn binary_payload(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 251) as u8).collect()
}

fn bench_inspect_zip(c: &mut Criterion) {
    let temp = TempDir::new().unwrap();
    let mut group = c.benchmark_group("inspect_zip");
    let config = InspectionConfig::default();

    for size in SIZES {
        let path = temp.path().join(format!("geth-{size}-linux-amd64.zip"));
        ZipTestBuilder::new()
            .add_file("geth/README.md", b"readme")
            .add_deflated_file("geth/geth", &binary_payload(size))
            .write_to(&path);
        let len = std::fs::metadata(&path).unwrap().len();

        group.throughput(Throughput::Bytes(len));
        group.bench_with_input(BenchmarkId::from_parameter(size), &path, |b, path| {
            b.iter(|| inspect_archive(black_box(path), "geth", &config).unwrap());
        });
    }

    group.finish();
}

fn bench_inspect_tar_gz(c: &mut Criterion) {
    let temp = TempDir::new().unwrap();
    let mut group = c.benchmark_group("inspect_tar_gz");
    let config = InspectionConfig::default();

    for size in SIZES {
        let path = temp.path().join(format!("geth-{size}-linux-amd64.tar.gz"));
        TarTestBuilder::new()
            .add_file("geth/README.md", b"readme")
            .add_file("geth/geth", &binary_payload(size))
            .write_gz_to(&path);
        let len = std::fs::metadata(&path).unwrap().len();

        group.throughput(Throughput::Bytes(len));
        group.bench_with_input(BenchmarkId::from_parameter(size), &path, |b, path| {
            b.iter(|| inspect_archive(black_box(path), "geth", &config).unwrap());
        });
    }

    group.finish();
}

fn bench_md5(c: &mut Criterion) {
    let mut group = c.benchmark_group("md5_hex");

    for size in SIZES {
        let data = binary_payload(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| md5_hex(black_box(&data[..])).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_inspect_zip, bench_inspect_tar_gz, bench_md5);
criterion_main!(benches);
