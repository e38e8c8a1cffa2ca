use criterion::*;
use rand::prelude::*;

use pairwise_aligners::{needleman_wunsch, smith_waterman, Scheme};

fn random_strings(cardinality: usize, len: usize, alphabet: &[u8], seed: u64) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..cardinality)
        .map(|_| (0..len).map(|_| alphabet[rng.gen_range(0..alphabet.len())]).collect())
        .collect()
}

fn bench_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("score-only");

    group.sampling_mode(SamplingMode::Flat);

    let scheme = Scheme::new(2.0_f32, -1.0, -1.5);
    let global = needleman_wunsch::Aligner::new(&scheme, b'-');
    let local = smith_waterman::Aligner::new(&scheme, b'-');

    for len in [100, 1_000, 5_000] {
        let sequences = random_strings(2, len, b"ACGTN", len as u64);
        let (x, y) = (&sequences[0], &sequences[1]);

        let id = BenchmarkId::new("global-table", len);
        group.bench_with_input(id, &len, |b, _| b.iter(|| black_box(global.dp_table::<f32>(x, y).last())));

        let id = BenchmarkId::new("global-row", len);
        group.bench_with_input(id, &len, |b, _| b.iter(|| black_box(global.score::<f32>(x, y))));

        let id = BenchmarkId::new("local-row", len);
        group.bench_with_input(id, &len, |b, _| b.iter(|| black_box(local.score::<f32>(x, y))));
    }

    group.finish();
}

criterion_group!(benches, bench_score);
criterion_main!(benches);
