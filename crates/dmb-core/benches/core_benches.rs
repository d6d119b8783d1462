//! Criterion benchmarks for dmb-core hot paths.
//!
//! Covers: scrypt header hashing, double SHA-256 merkle roots, and
//! compact target decoding.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dmb_core::hash::sha256d;
use dmb_core::merkle::merkle_root;
use dmb_core::target::decode_compact;
use dmb_core::types::{BlockHeader, Hash256};

fn make_txids(n: usize) -> Vec<Hash256> {
    (0..n).map(|i| sha256d(&(i as u64).to_le_bytes())).collect()
}

fn sample_block_header() -> BlockHeader {
    BlockHeader {
        version: 1,
        prev_hash: Hash256([0xAA; 32]),
        merkle_root: Hash256([0xBB; 32]),
        time: 1_523_899_453,
        bits: 0x1f00_ffff,
        nonce: 42,
    }
}

fn bench_header_hash(c: &mut Criterion) {
    let header = sample_block_header();
    c.bench_function("header_pow_hash", |b| b.iter(|| black_box(&header).hash()));
}

fn bench_merkle_root(c: &mut Criterion) {
    let txids = make_txids(1024);
    c.bench_function("merkle_root_1024", |b| b.iter(|| merkle_root(black_box(&txids))));
}

fn bench_decode_compact(c: &mut Criterion) {
    c.bench_function("decode_compact", |b| {
        b.iter(|| decode_compact(black_box(0x1f00_ffff)))
    });
}

criterion_group!(benches, bench_header_hash, bench_merkle_root, bench_decode_compact);
criterion_main!(benches);
