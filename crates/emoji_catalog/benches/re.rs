use criterion::{criterion_group, criterion_main, Criterion};

use emoji_catalog::Snapshot;

static SOURCE: &str = include_str!("../tests/data/emoji-test-sample.txt");

static INPUT: &str = "\
Deserialization always \u{1F44B}\u{1F3FD} takes constant time \u{1F600} since searching can \u{1F603}\u{1F600} be \
performed directly on \u{1F1EB}\u{1F1F7} the raw serialized bytes, and \u{1F9D1}\u{200D}\u{1F9B0} this crate was \
specifically designed so that *\u{FE0F}\u{20E3} the searching phase has minimal \u{263A}\u{FE0F} runtime requirements.";

fn criterion_benchmark(c: &mut Criterion) {
    let snapshot = Snapshot::build(SOURCE.lines(), |_| true).unwrap();

    assert!(snapshot.scan(INPUT).count() > 0);

    let mut g = c.benchmark_group("emoji_catalog");
    g.bench_with_input("scan", INPUT, |b, x| b.iter(|| snapshot.scan(x).count()));
    g.bench_with_input("match_multiple", INPUT, |b, x| {
        b.iter(|| snapshot.match_multiple().find_iter(x).count())
    });
    g.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
