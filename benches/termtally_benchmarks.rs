//! Termtally benchmarks.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use termtally_lib::data_structures::Trie;
use termtally_lib::matching::{DictionaryLoader, WordCounter};

/// Deterministic pseudo-words so runs are comparable.
fn synthetic_words(count: usize) -> Vec<String> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let len = 3 + (state % 8) as usize;
            (0..len)
                .map(|i| (b'a' + ((state >> (i * 5)) % 26) as u8) as char)
                .collect()
        })
        .collect()
}

fn bench_trie(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie");
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [1_000, 10_000, 100_000].iter() {
        let words = synthetic_words(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("add", size), &words, |b, words| {
            b.iter(|| {
                let trie: Trie = words.iter().collect();
                black_box(trie)
            });
        });

        let trie: Trie = words.iter().collect();
        group.bench_with_input(BenchmarkId::new("search", size), &words, |b, words| {
            b.iter(|| {
                for word in words {
                    black_box(trie.search(word));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("remove_all", size), &words, |b, words| {
            b.iter_batched(
                || trie.clone(),
                |mut trie| {
                    for word in words {
                        trie.remove(word);
                    }
                    trie
                },
                criterion::BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("clear", size), &trie, |b, trie| {
            b.iter_batched(
                || trie.clone(),
                |mut trie| {
                    trie.clear();
                    trie
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_counter(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_counter");
    group.measurement_time(Duration::from_secs(2));

    let vocabulary = synthetic_words(5_000);
    let dictionary = DictionaryLoader::new().load_lines(vocabulary.iter().take(500));

    for lines in [100, 1_000].iter() {
        let text: String = vocabulary
            .chunks(12)
            .cycle()
            .take(*lines)
            .map(|chunk| chunk.join(", ") + ".\n")
            .collect();
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("count_str", lines), &text, |b, text| {
            let counter = WordCounter::new(&dictionary);
            b.iter(|| black_box(counter.count_str(text)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_trie, bench_counter);
criterion_main!(benches);
