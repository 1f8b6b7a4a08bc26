use criterion::{criterion_group, Criterion};
use pprof::criterion::{Output, PProfProfiler};
use rand::prelude::{Distribution, StdRng};
use rand::SeedableRng;
use rand_distr::Zipf;

use huffman_codec::huffman::codec::HuffmanCodec;
use huffman_codec::huffman::tree::HuffmanTree;
use crate::benchmarks::{ALPHABET_SIZE, SYMBOL_LIST_LENGTH};

fn get_symbols() -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(0);
    let distribution = Zipf::new(ALPHABET_SIZE, 1.0).unwrap();
    let mut symbols = Vec::with_capacity(SYMBOL_LIST_LENGTH);

    for _ in 0..SYMBOL_LIST_LENGTH {
        symbols.push(distribution.sample(&mut rng) as u64);
    }
    symbols
}

fn tree_building_benchmark(c: &mut Criterion) {
    let symbols = get_symbols();
    let mut group = c.benchmark_group("codec benchmark");

    group.bench_function("tree building", |b| {
        b.iter(|| HuffmanTree::from_symbols(&symbols).unwrap())
    });
    group.finish();
}

fn encoding_benchmark(c: &mut Criterion) {
    let symbols = get_symbols();
    let codec = HuffmanCodec::new(&symbols).unwrap();
    let mut group = c.benchmark_group("codec benchmark");

    group.sample_size(10);
    group.bench_function("encoding", |b| b.iter(|| codec.encode_sequence(&symbols)));
    group.finish();
}

fn decoding_benchmark(c: &mut Criterion) {
    let symbols = get_symbols();
    let codec = HuffmanCodec::new(&symbols).unwrap();
    let bits = codec.encode_sequence(&symbols);
    let mut group = c.benchmark_group("codec benchmark");

    group.sample_size(10);
    group.bench_function("decoding", |b| b.iter(|| codec.decode_string(&bits)));
    group.finish();
}

criterion_group! {
    name = codec_benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = tree_building_benchmark, encoding_benchmark, decoding_benchmark
}
