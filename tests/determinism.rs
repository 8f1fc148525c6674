use titleguard::{
    CandidateItem, Corpus, MatchConfig, TitleMatcher, TokenizerConfig, cosine_similarity,
    vectorize, vectorize_with,
};

fn corpus(n: u64) -> Corpus {
    let subjects = ["release notes", "garden diary", "apple pie", "travel log"];
    let items = (0..n)
        .map(|i| {
            let title = format!(
                "{} {} vol {}",
                subjects[(i % 4) as usize],
                subjects[((i / 4) % 4) as usize],
                i % 3
            );
            if i % 5 == 0 {
                CandidateItem::term(i, title, "taxonomy: post_tag")
            } else {
                CandidateItem::content(i, title, "post")
            }
        })
        .collect();
    Corpus::new(items)
}

#[test]
fn equivalent_titles_vectorize_identically() {
    assert_eq!(vectorize("Hello, Hello!"), vectorize("hello hello"));
    assert_eq!(vectorize("  Apple\tPIE "), vectorize("apple pie"));
}

#[test]
fn nfkc_folds_compatibility_forms_when_enabled() {
    let cfg = TokenizerConfig {
        normalize_unicode: true,
    };
    // Fullwidth letters fold to ASCII only with normalization on.
    let wide = "\u{FF21}\u{FF30}\u{FF30}\u{FF2C}\u{FF25} pie";
    assert_eq!(vectorize_with(wide, &cfg), vectorize("apple pie"));
    assert_ne!(vectorize(wide), vectorize("apple pie"));
}

#[test]
fn repeated_reports_are_identical() {
    let matcher = TitleMatcher::new(MatchConfig::default()).expect("matcher");
    let corpus = corpus(80);

    let first = matcher.report(&corpus);
    let second = matcher.report(&corpus);
    assert!(!first.is_empty());
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn parallel_report_matches_sequential() {
    let corpus = corpus(150);
    let base = MatchConfig::default().with_similarity_threshold(0.4);

    let sequential = TitleMatcher::new(base.clone()).expect("matcher");
    let parallel = TitleMatcher::new(base.with_parallel(true)).expect("matcher");

    assert_eq!(sequential.report(&corpus), parallel.report(&corpus));
}

#[test]
fn pairwise_scores_are_symmetric_and_bounded() {
    let corpus = corpus(24);
    let vectors: Vec<_> = corpus.items().iter().map(|i| vectorize(&i.title)).collect();

    for a in &vectors {
        assert_eq!(cosine_similarity(a, a), 1.0);
        for b in &vectors {
            let ab = cosine_similarity(a, b);
            assert_eq!(ab, cosine_similarity(b, a));
            assert!((0.0..=1.0).contains(&ab));
        }
    }
}
