//! Benchmarks for agreement recomputation and sampling.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;

use yadoha::choices::{ChoiceSet, SentenceDraft};
use yadoha::sampler;
use yadoha::sentence::format_sentence;

fn transitive_draft() -> SentenceDraft {
    SentenceDraft {
        subject_noun: Some("isha'".into()),
        subject_suffix: Some("ii".into()),
        verb: Some("puni".into()),
        verb_tense: Some("dü".into()),
        object_pronoun: Some("ma".into()),
        object_noun: Some("pugu".into()),
        object_suffix: Some("eika".into()),
    }
}

fn bench_recompute_empty(c: &mut Criterion) {
    let draft = SentenceDraft::default();

    c.bench_function("recompute_empty", |bench| {
        bench.iter(|| black_box(ChoiceSet::compute(&draft)))
    });
}

fn bench_recompute_full(c: &mut Criterion) {
    let draft = transitive_draft();

    c.bench_function("recompute_full", |bench| {
        bench.iter(|| black_box(ChoiceSet::compute(&draft)))
    });
}

fn bench_format(c: &mut Criterion) {
    let draft = transitive_draft();

    c.bench_function("format_transitive", |bench| {
        bench.iter(|| black_box(format_sentence(&draft).unwrap()))
    });
}

fn bench_sample_guided(c: &mut Criterion) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0);

    c.bench_function("sample_guided", |bench| {
        bench.iter(|| black_box(sampler::sample_guided(&mut rng).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_recompute_empty,
    bench_recompute_full,
    bench_format,
    bench_sample_guided
);
criterion_main!(benches);
