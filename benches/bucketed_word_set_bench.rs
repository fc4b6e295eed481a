use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use std::time::Duration;
use word_buckets::{analyze_reader, BucketedWordSet};

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

// Lowercase letters only, like tokenizer output.
fn word(n: u64) -> String {
    let len = 3 + (n % 8) as usize;
    (0..len)
        .map(|i| (b'a' + ((n >> (i * 5)) % 26) as u8) as char)
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("bucketed::insert");
    group.throughput(Throughput::Elements(10_000));
    let fresh: Vec<String> = lcg(1).take(10_000).map(word).collect();
    group.bench_function("fresh_10k_into_1091", |b| {
        b.iter_batched(
            || (BucketedWordSet::new(1091).unwrap(), fresh.clone()),
            |(mut m, words)| {
                m.extend(words);
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
    // Mostly repeats: a small vocabulary cycled, as in natural text.
    let vocab: Vec<String> = lcg(7).take(500).map(word).collect();
    let repeats: Vec<String> = vocab.iter().cycle().take(10_000).cloned().collect();
    group.bench_function("repeats_10k_into_1091", |b| {
        b.iter_batched(
            || (BucketedWordSet::new(1091).unwrap(), repeats.clone()),
            |(mut m, words)| {
                m.extend(words);
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut m = BucketedWordSet::new(1091).unwrap();
    m.extend(lcg(11).take(20_000).map(word));
    let mut miss = lcg(0xdead_beef).map(|n| word(n) + "q");
    c.bench_function("bucketed::contains_miss", |b| {
        b.iter(|| {
            let w = miss.next().unwrap();
            black_box(m.contains(&w))
        })
    });
}

fn bench_analyze_and_report(c: &mut Criterion) {
    let text: String = lcg(3)
        .take(50_000)
        .map(|n| format!("{}, ", word(n % 4_000)))
        .collect();
    c.bench_function("bucketed::analyze_and_report_50k", |b| {
        b.iter(|| {
            let m = analyze_reader(text.as_bytes(), 1091).unwrap();
            let mut out = Vec::with_capacity(64 * 1024);
            let total = m.report(&mut out).unwrap().total();
            black_box((total, out.len()))
        })
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_insert, bench_contains, bench_analyze_and_report
}
criterion_main!(benches);
