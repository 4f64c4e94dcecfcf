use criterion::{criterion_group, criterion_main, Criterion};

use anagram_tools::permutations::search::PermutationSearch;
use anagram_tools::wordlist::word_index::WordIndex;

/// Synthetic word list: every 3- and 4-letter string over a small alphabet.
/// Generated in order, so the WordIndex precondition holds by construction.
fn synthetic_words() -> Vec<String> {
    let alphabet = ['a', 'e', 'p', 'r', 's', 't'];
    let mut words = vec![];
    for &a in &alphabet {
        for &b in &alphabet {
            for &c in &alphabet {
                words.push(format!("{}{}{}", a, b, c));
                for &d in &alphabet {
                    words.push(format!("{}{}{}{}", a, b, c, d));
                }
            }
        }
    }
    words.sort();
    words
}

fn criterion_benchmark(c: &mut Criterion) {
    let index = WordIndex::build(synthetic_words());

    let short = PermutationSearch::new("rase").unwrap();
    c.bench_function("find_words 4 letters", |b| b.iter(|| short.find_words(&index)));

    let mut group = c.benchmark_group("10s");
    group.sample_size(10);
    let long = PermutationSearch::new("prastesre").unwrap();
    group.bench_function("find_words 9 letters", |b| b.iter(|| long.find_words(&index)));
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
