use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use seqdex::{Analyzer, Collector};

fn generate_sequences(count: usize, len: usize) -> Vec<Vec<char>> {
    const ALPHABET: &[u8] = b"acgt";
    (0..count)
        .map(|i| {
            (0..len)
                .map(|j| ALPHABET[(i * 31 + j * 7 + i / (j + 1)) % ALPHABET.len()] as char)
                .collect()
        })
        .collect()
}

fn build_collector(analyzer: Analyzer) -> Collector<char, usize> {
    Collector::builder().with_analyzer(analyzer).build().unwrap()
}

fn bench_ingestion(c: &mut Criterion) {
    let mut group = c.benchmark_group("Collector Ingestion");
    group.sample_size(10);
    let sequences = generate_sequences(200, 24);

    for (name, analyzer) in [
        ("exact", Analyzer::Exact),
        ("sub_sequences", Analyzer::sub_sequences()),
        ("deletions", Analyzer::deletions()),
    ] {
        group.throughput(Throughput::Elements(sequences.len() as u64));
        group.bench_with_input(BenchmarkId::new("sequential", name), &analyzer, |b, analyzer| {
            b.iter(|| {
                let collector = build_collector(analyzer.clone());
                for (i, sequence) in sequences.iter().enumerate() {
                    collector.analyze(sequence, i);
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("parallel", name), &analyzer, |b, analyzer| {
            b.iter(|| {
                let collector = build_collector(analyzer.clone());
                let items: Vec<(&Vec<char>, usize)> =
                    sequences.iter().enumerate().map(|(i, s)| (s, i)).collect();
                collector.analyze_parallel(items);
            })
        });
    }
    group.finish();
}

fn bench_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("Collector Matching");
    let sequences = generate_sequences(1000, 24);
    let collector: Collector<char, usize> = Collector::builder()
        .with_sub_sequence_analysis()
        .with_insertions()
        .build()
        .unwrap();
    for (i, sequence) in sequences.iter().enumerate() {
        collector.analyze(sequence, i);
    }
    let query: Vec<char> = sequences[17][4..12].to_vec();

    group.bench_function("match_sequence", |b| {
        b.iter(|| collector.matcher().match_sequence(&query))
    });
    group.bench_function("matching_depth", |b| {
        b.iter(|| collector.matcher().matching_depth(&sequences[42]))
    });
    group.finish();
}

criterion_group!(benches, bench_ingestion, bench_matching);
criterion_main!(benches);
