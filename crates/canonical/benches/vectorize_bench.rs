use canonical::{tokenize, vectorize, vectorize_with, TokenizerConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn bench_vectorize(c: &mut Criterion) {
    let mut group = c.benchmark_group("vectorize");

    for words in [4usize, 16, 64, 256].iter() {
        let title = "Quick, brown FOX! ".repeat(*words / 3 + 1);
        group.throughput(Throughput::Bytes(title.len() as u64));
        group.bench_function(format!("tokenize_words_{words}"), |b| {
            b.iter(|| tokenize(black_box(&title)))
        });
        group.bench_function(format!("vectorize_words_{words}"), |b| {
            b.iter(|| vectorize(black_box(&title)))
        });
    }

    let nfkc = TokenizerConfig {
        normalize_unicode: true,
    };
    let title = "Ｆｕｌｌｗｉｄｔｈ ﬁle names and Cafe\u{0301} titles";
    group.bench_function("vectorize_nfkc", |b| {
        b.iter(|| vectorize_with(black_box(title), black_box(&nfkc)))
    });

    group.finish();
}

criterion_group!(benches, bench_vectorize);
criterion_main!(benches);
