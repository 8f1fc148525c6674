//! Corpus snapshots and the host-side source they are fetched from.
//!
//! The matcher never talks to storage. The host implements [`CorpusSource`]
//! (or builds a [`Corpus`] directly), and every check or report runs against
//! that immutable snapshot. A fetch failure is returned as-is; retrying is
//! the host's call.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{CandidateItem, ItemKind, MatchConfig, MatchError};

/// Host collaborator that supplies candidate items.
///
/// Implementations return at most `limit` items per call, already carrying
/// resolved category labels. Content must be tagged [`ItemKind::Content`]
/// and terms [`ItemKind::Term`]; [`Corpus::load`] does not re-tag them.
pub trait CorpusSource {
    /// Published content items, newest first.
    fn fetch_content(&self, limit: usize) -> Result<Vec<CandidateItem>, MatchError>;

    /// Label-bearing entities (taxonomy terms).
    fn fetch_terms(&self, limit: usize) -> Result<Vec<CandidateItem>, MatchError>;
}

/// In-memory [`CorpusSource`], also the JSON corpus file format:
///
/// ```json
/// {
///   "content": [{ "id": 1, "title": "Apple Pie", "category": "post" }],
///   "terms":   [{ "id": 4, "title": "Desserts", "category": "taxonomy: category", "kind": "term" }]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StaticSource {
    #[serde(default)]
    pub content: Vec<CandidateItem>,
    #[serde(default)]
    pub terms: Vec<CandidateItem>,
}

impl StaticSource {
    pub fn new(content: Vec<CandidateItem>, terms: Vec<CandidateItem>) -> Self {
        Self { content, terms }
    }
}

impl CorpusSource for StaticSource {
    fn fetch_content(&self, limit: usize) -> Result<Vec<CandidateItem>, MatchError> {
        Ok(self.content.iter().take(limit).cloned().collect())
    }

    fn fetch_terms(&self, limit: usize) -> Result<Vec<CandidateItem>, MatchError> {
        Ok(self.terms.iter().take(limit).cloned().collect())
    }
}

/// Immutable snapshot of candidate items for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    items: Vec<CandidateItem>,
}

impl Corpus {
    /// Wrap items as-is, preserving their order.
    pub fn new(items: Vec<CandidateItem>) -> Self {
        Self { items }
    }

    /// Combine content and terms, each truncated to `limit`, content first.
    pub fn from_parts(
        mut content: Vec<CandidateItem>,
        mut terms: Vec<CandidateItem>,
        limit: usize,
    ) -> Self {
        content.truncate(limit);
        terms.truncate(limit);
        content.append(&mut terms);
        Self { items: content }
    }

    /// Fetch a bounded snapshot from the host.
    pub fn load<S>(source: &S, cfg: &MatchConfig) -> Result<Self, MatchError>
    where
        S: CorpusSource + ?Sized,
    {
        let content = source.fetch_content(cfg.corpus_limit)?;
        let terms = source.fetch_terms(cfg.corpus_limit)?;
        let corpus = Self::from_parts(content, terms, cfg.corpus_limit);

        let missing_links = corpus
            .items
            .iter()
            .filter(|item| item.edit_link.is_none())
            .count();
        debug!(
            corpus_len = corpus.len(),
            missing_links,
            limit = cfg.corpus_limit,
            "corpus_loaded"
        );
        Ok(corpus)
    }

    pub fn items(&self) -> &[CandidateItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items from one source, in snapshot order.
    pub fn of_kind(&self, kind: ItemKind) -> impl Iterator<Item = &CandidateItem> + '_ {
        self.items.iter().filter(move |item| item.kind == kind)
    }
}

impl From<Vec<CandidateItem>> for Corpus {
    fn from(items: Vec<CandidateItem>) -> Self {
        Self::new(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSource;

    impl CorpusSource for FailingSource {
        fn fetch_content(&self, _limit: usize) -> Result<Vec<CandidateItem>, MatchError> {
            Err(MatchError::Source("database unavailable".into()))
        }

        fn fetch_terms(&self, _limit: usize) -> Result<Vec<CandidateItem>, MatchError> {
            Ok(Vec::new())
        }
    }

    fn posts(n: u64) -> Vec<CandidateItem> {
        (1..=n)
            .map(|id| CandidateItem::content(id, format!("Post {id}"), "post"))
            .collect()
    }

    fn tags(n: u64) -> Vec<CandidateItem> {
        (1..=n)
            .map(|id| CandidateItem::term(id, format!("Tag {id}"), "taxonomy: post_tag"))
            .collect()
    }

    #[test]
    fn from_parts_limits_each_source() {
        let corpus = Corpus::from_parts(posts(5), tags(4), 3);
        assert_eq!(corpus.len(), 6);
        assert_eq!(corpus.of_kind(ItemKind::Content).count(), 3);
        assert_eq!(corpus.of_kind(ItemKind::Term).count(), 3);
        // Content precedes terms.
        assert_eq!(corpus.items()[0].title, "Post 1");
        assert_eq!(corpus.items()[3].title, "Tag 1");
    }

    #[test]
    fn load_uses_config_limit() {
        let source = StaticSource::new(posts(10), tags(10));
        let cfg = MatchConfig::default().with_corpus_limit(2);
        let corpus = Corpus::load(&source, &cfg).expect("static source never fails");
        assert_eq!(corpus.len(), 4);
    }

    #[test]
    fn load_propagates_source_errors() {
        let err = Corpus::load(&FailingSource, &MatchConfig::default())
            .expect_err("source failure should surface");
        assert_eq!(err, MatchError::Source("database unavailable".into()));
    }

    #[test]
    fn empty_source_yields_empty_corpus() {
        let corpus = Corpus::load(&StaticSource::default(), &MatchConfig::default())
            .expect("empty load");
        assert!(corpus.is_empty());
    }

    #[test]
    fn static_source_parses_json() {
        let json = r#"{
            "content": [{"id": 1, "title": "Apple Pie", "category": "post", "edit_link": "/edit/1"}],
            "terms": [{"id": 1, "title": "Desserts", "category": "taxonomy: category", "kind": "term"}]
        }"#;
        let source: StaticSource = serde_json::from_str(json).expect("valid corpus json");
        assert_eq!(source.content[0].edit_link.as_deref(), Some("/edit/1"));
        assert_eq!(source.terms[0].kind, ItemKind::Term);
    }
}
