//! Criterion benchmarks for parameter construction and rule evaluation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dmb_consensus::genesis::{build_genesis, GenesisTemplate};
use dmb_consensus::params::{GENESIS_BITS, GENESIS_MESSAGE, GENESIS_NONCE, GENESIS_TIMESTAMP};
use dmb_consensus::{ParameterRegistry, TransitionHeights};

fn genesis_template() -> GenesisTemplate {
    GenesisTemplate {
        coinbase_message: GENESIS_MESSAGE,
        timestamp: GENESIS_TIMESTAMP,
        bits: GENESIS_BITS,
        nonce: GENESIS_NONCE,
        version: 1,
    }
}

fn bench_build_genesis(c: &mut Criterion) {
    let template = genesis_template();
    c.bench_function("build_genesis", |b| b.iter(|| build_genesis(black_box(&template))));
}

fn bench_registry_new(c: &mut Criterion) {
    c.bench_function("registry_new", |b| b.iter(ParameterRegistry::new));
}

fn bench_kind_at(c: &mut Criterion) {
    let t = TransitionHeights::new(10_000, 9_000);
    c.bench_function("transition_kind_at", |b| {
        b.iter(|| {
            for h in (0..20_000).step_by(97) {
                black_box(t.kind_at(black_box(h)));
            }
        })
    });
}

criterion_group!(benches, bench_build_genesis, bench_registry_new, bench_kind_at);
criterion_main!(benches);
