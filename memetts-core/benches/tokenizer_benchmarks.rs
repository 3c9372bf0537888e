//! Benchmarks comparing the trie tokenizers with the brute-force reference

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use memetts_core::{reference, split_stream, split_with_trie, Signal, Trie};
use std::collections::HashSet;
use std::hint::black_box;

/// Deterministic linear congruential generator, enough for synthetic data
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }

    fn digit(&mut self) -> char {
        char::from(b'0' + self.below(10) as u8)
    }
}

/// Digit text with dictionary words sprinkled in at roughly `ratio` density
fn generate_test_data(
    size: usize,
    min_len: usize,
    max_len: usize,
    word_count: usize,
    ratio: f64,
) -> (String, HashSet<String>) {
    let mut rng = Lcg(0x5eed);
    let span = (max_len - min_len + 1) as u64;

    let words: HashSet<String> = (0..word_count)
        .map(|_| {
            let len = min_len + rng.below(span) as usize;
            (0..len).map(|_| rng.digit()).collect()
        })
        .collect();
    let pool: Vec<&String> = words.iter().collect();

    let threshold = ratio / (min_len + max_len) as f64 * 2.0;
    let mut text = String::with_capacity(size + max_len);
    while text.len() < size {
        let roll = rng.below(1_000_000) as f64 / 1_000_000.0;
        if roll < threshold {
            text.push_str(pool[rng.below(pool.len() as u64) as usize]);
        } else {
            text.push(rng.digit());
        }
    }
    (text, words)
}

fn benchmark_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");

    for size in [10_000usize, 100_000] {
        let (text, words) = generate_test_data(size, 5, 20, 256, 0.1);
        let trie: Trie<String> = Trie::build(words.iter()).unwrap();

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("trie", size), &text, |b, text| {
            b.iter(|| split_with_trie(black_box(text), &trie));
        });
        group.bench_with_input(BenchmarkId::new("reference", size), &text, |b, text| {
            b.iter(|| reference::split(black_box(text), &words));
        });
    }

    group.finish();
}

fn benchmark_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("streaming");

    for size in [10_000usize, 100_000] {
        let (text, words) = generate_test_data(size, 5, 20, 256, 0.1);
        let trie: Trie<String> = Trie::build(words.iter()).unwrap();

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("trie", size), &text, |b, text| {
            b.iter(|| split_stream(black_box(text).chars().map(Signal::Symbol), &trie).count());
        });
    }

    group.finish();
}

fn benchmark_trie_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie_build");

    for word_count in [256usize, 4096] {
        let (_, words) = generate_test_data(0, 5, 20, word_count, 0.1);
        group.bench_with_input(
            BenchmarkId::from_parameter(word_count),
            &words,
            |b, words| {
                b.iter(|| Trie::<String>::build(black_box(words).iter()).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_batch,
    benchmark_streaming,
    benchmark_trie_build
);
criterion_main!(benches);
