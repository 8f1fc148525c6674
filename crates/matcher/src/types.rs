use canonical::TokenizerConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use std::fmt;

/// Host source an item was read from.
///
/// Content items (posts, pages, products) are excluded by id when a title is
/// checked against the corpus on behalf of one of them. Term items
/// (taxonomy entries such as categories and tags) live in a separate id
/// space and are never excluded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Content,
    Term,
}

impl ItemKind {
    /// Display label used in matching-title suggestions.
    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Content => "Post",
            ItemKind::Term => "Term",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A titled entity supplied by the host for one report or check.
///
/// Items are ephemeral: built per request from live host data and never
/// persisted. The identity key is `(id, category)`; ids alone may collide
/// across sources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CandidateItem {
    /// Identifier, unique within its source.
    pub id: u64,
    /// Raw human-authored title.
    pub title: String,
    /// Pre-resolved category label, e.g. `"post"` or `"taxonomy: category"`.
    pub category: String,
    /// Which host source produced the item.
    #[serde(default)]
    pub kind: ItemKind,
    /// Host link for follow-up editing, when one could be generated.
    #[serde(default)]
    pub edit_link: Option<String>,
}

impl CandidateItem {
    /// Content item without an edit link.
    pub fn content(id: u64, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            category: category.into(),
            kind: ItemKind::Content,
            edit_link: None,
        }
    }

    /// Term item without an edit link.
    pub fn term(id: u64, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            category: category.into(),
            kind: ItemKind::Term,
            edit_link: None,
        }
    }

    /// Attach an edit link.
    pub fn with_edit_link(mut self, link: impl Into<String>) -> Self {
        self.edit_link = Some(link.into());
        self
    }

    /// True when both items share the `(id, category)` identity key.
    #[inline]
    pub fn same_identity(&self, other: &CandidateItem) -> bool {
        self.id == other.id && self.category == other.category
    }
}

/// One corpus item found similar to an anchor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarNeighbor {
    pub item: CandidateItem,
    /// Cosine similarity in `[0, 1]`, unrounded.
    pub similarity: f64,
}

impl SimilarNeighbor {
    /// Similarity as a percentage rounded to two decimals, for display.
    pub fn percent(&self) -> f64 {
        (self.similarity * 100.0 * 100.0).round() / 100.0
    }
}

/// An anchor item and the neighbors collected for it, in discovery order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarityGroup {
    pub anchor: CandidateItem,
    pub neighbors: Vec<SimilarNeighbor>,
}

/// Category labels in which a literal title collision occurred.
///
/// Always non-empty, free of repeated labels, and in first-seen order. A
/// check that finds nothing returns `None` instead of an empty value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct DuplicateSources(Vec<String>);

impl DuplicateSources {
    /// Collects labels, dropping repeats. Returns `None` when no label remains.
    pub fn from_labels<I, S>(labels: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for label in labels {
            let label = label.into();
            if !unique.contains(&label) {
                unique.push(label);
            }
        }
        if unique.is_empty() {
            None
        } else {
            Some(Self(unique))
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Labels joined with `", "` for user-facing messages.
    pub fn joined(&self) -> String {
        self.0.join(", ")
    }

    /// Message for editors that may still publish.
    pub fn advisory_message(&self) -> String {
        format!(
            "Duplicate title detected in: {}. You can still publish the post.",
            self.joined()
        )
    }

    /// Message attached to a publish attempt that was demoted to draft.
    pub fn blocking_message(&self) -> String {
        format!(
            "Title used for this post appears to be a duplicate in: {}. Please modify the title.",
            self.joined()
        )
    }
}

/// Configuration for detection and report runs.
///
/// Supplied once at startup and passed explicitly into every call; nothing
/// here is read from ambient state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    /// Maximum items fetched from each host source.
    #[serde(default = "MatchConfig::default_corpus_limit")]
    pub corpus_limit: usize,
    /// Minimum cosine score for two titles to count as similar.
    #[serde(default = "MatchConfig::default_similarity_threshold")]
    pub similarity_threshold: f64,
    /// Cap on neighbors reported per anchor.
    #[serde(default = "MatchConfig::default_max_neighbors_per_item")]
    pub max_neighbors_per_item: usize,
    /// When true, exact duplicates are reported but never block publishing.
    #[serde(default)]
    pub allow_duplicate_titles: bool,
    /// Tokenizer settings shared by every vector built in a run.
    #[serde(default)]
    pub tokenizer: TokenizerConfig,
    /// Scan anchors on the rayon pool. Output is identical either way.
    #[serde(default)]
    pub use_parallel: bool,
}

impl MatchConfig {
    pub(crate) fn default_corpus_limit() -> usize {
        1000
    }

    pub(crate) fn default_similarity_threshold() -> f64 {
        0.5
    }

    pub(crate) fn default_max_neighbors_per_item() -> usize {
        6
    }

    pub fn with_corpus_limit(mut self, limit: usize) -> Self {
        self.corpus_limit = limit;
        self
    }

    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    pub fn with_max_neighbors_per_item(mut self, max: usize) -> Self {
        self.max_neighbors_per_item = max;
        self
    }

    pub fn with_allow_duplicate_titles(mut self, allow: bool) -> Self {
        self.allow_duplicate_titles = allow;
        self
    }

    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    /// Validate the configuration before a run.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.corpus_limit == 0 {
            return Err(MatchError::InvalidConfig(
                "corpus_limit must be greater than zero".into(),
            ));
        }
        if !self.similarity_threshold.is_finite()
            || !(0.0..=1.0).contains(&self.similarity_threshold)
        {
            return Err(MatchError::InvalidConfig(
                "similarity_threshold must be between 0.0 and 1.0".into(),
            ));
        }
        if self.max_neighbors_per_item == 0 {
            return Err(MatchError::InvalidConfig(
                "max_neighbors_per_item must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            corpus_limit: Self::default_corpus_limit(),
            similarity_threshold: Self::default_similarity_threshold(),
            max_neighbors_per_item: Self::default_max_neighbors_per_item(),
            allow_duplicate_titles: false,
            tokenizer: TokenizerConfig::default(),
            use_parallel: false,
        }
    }
}

/// Errors produced by the matching layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    /// Invalid configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    /// The host corpus source failed to produce a snapshot.
    #[error("corpus source error: {0}")]
    Source(String),
}
