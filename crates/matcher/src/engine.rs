use std::time::Instant;

use tracing::{debug, info};

use crate::corpus::{Corpus, CorpusSource};
use crate::exact::{check_duplicates, matching_titles, titles_containing};
use crate::metrics::metrics_recorder;
use crate::publish::{gate_publish, PublishAttempt, PublishDecision};
use crate::report::SimilarityReport;
use crate::similarity::find_global_similar_groups;
use crate::types::{DuplicateSources, MatchConfig, MatchError, SimilarityGroup};


/// Entry point holding a validated configuration.
///
/// The matcher is stateless apart from its configuration, so a single
/// instance can serve concurrent requests; every call works on the corpus
/// snapshot it is handed.
#[derive(Debug, Clone)]
pub struct TitleMatcher {
    config: MatchConfig,
}

impl TitleMatcher {
    /// Construct a matcher, rejecting invalid configuration up front.
    pub fn new(config: MatchConfig) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Fetch a bounded snapshot from `source` using this matcher's limit.
    pub fn load_corpus<S>(&self, source: &S) -> Result<Corpus, MatchError>
    where
        S: CorpusSource + ?Sized,
    {
        Corpus::load(source, &self.config)
    }

    /// Similarity groups for every anchor in `corpus`.
    pub fn similar_groups(&self, corpus: &Corpus) -> Vec<SimilarityGroup> {
        find_global_similar_groups(corpus.items(), &self.config)
    }

    /// Run the global report and record its latency.
    pub fn report(&self, corpus: &Corpus) -> SimilarityReport {
        let start = Instant::now();
        let report = SimilarityReport::generate(corpus, &self.config);
        let latency = start.elapsed();

        info!(
            corpus_len = corpus.len(),
            groups = report.len(),
            threshold = self.config.similarity_threshold,
            max_neighbors = self.config.max_neighbors_per_item,
            elapsed_micros = latency.as_micros() as u64,
            "similarity_report"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_report(corpus.len(), report.len(), latency);
        }

        report
    }

    /// Exact duplicate check for `title`, ignoring content item `exclude_id`
    /// when one is given.
    pub fn check_duplicates(
        &self,
        corpus: &Corpus,
        title: &str,
        exclude_id: Option<u64>,
    ) -> Option<DuplicateSources> {
        let start = Instant::now();
        let sources = check_duplicates(corpus, title, exclude_id);
        let latency = start.elapsed();

        debug!(
            exclude_id = ?exclude_id,
            found = sources.is_some(),
            sources = sources.as_ref().map(|s| s.joined()).unwrap_or_default(),
            elapsed_micros = latency.as_micros() as u64,
            "duplicate_check"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_duplicate_check(sources.is_some(), latency);
        }

        sources
    }

    /// Title suggestions containing `fragment`.
    pub fn matching_titles(&self, corpus: &Corpus, fragment: &str) -> Vec<String> {
        matching_titles(corpus, fragment)
    }

    /// Raw content titles containing `fragment`.
    pub fn titles_containing(&self, corpus: &Corpus, fragment: &str) -> Vec<String> {
        titles_containing(corpus, fragment)
    }

    /// Publish gate honoring `allow_duplicate_titles`.
    pub fn gate_publish(&self, corpus: &Corpus, attempt: &PublishAttempt) -> PublishDecision {
        gate_publish(corpus, attempt, &self.config)
    }
}
