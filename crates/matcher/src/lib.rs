//! # Title Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` sits on top of the tokenizer layer (`canonical`) and answers two
//! questions about human-authored titles held by a host system:
//!
//! - Which titles are *near* duplicates of each other? Answered by an
//!   all-pairs cosine similarity pass over bag-of-words term vectors.
//! - Is this exact title already in use somewhere else? Answered by a
//!   literal, trimmed string comparison with self-exclusion.
//!
//! The crate never touches storage. The host hands in a [`Corpus`] snapshot,
//! either directly or through a [`CorpusSource`] implementation, and every
//! call runs against that snapshot only.
//!
//! ## Core Types
//!
//! - [`CandidateItem`]: id, raw title, category label, source kind and an
//!   optional edit link.
//! - [`MatchConfig`]: corpus limit, similarity threshold, neighbor cap and
//!   the duplicate policy. Validated once by [`TitleMatcher::new`].
//! - [`SimilarityGroup`] / [`SimilarNeighbor`]: one anchor and the first
//!   qualifying neighbors found for it.
//! - [`DuplicateSources`]: non-empty, de-duplicated category labels of an
//!   exact collision.
//! - [`SimilarityReport`]: report wrapper with a plain-text rendering.
//! - [`TitleMatcher`]: facade that adds logging and metrics around the free
//!   functions.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{CandidateItem, Corpus, MatchConfig, TitleMatcher};
//!
//! let corpus = Corpus::new(vec![
//!     CandidateItem::content(1, "Apple Pie", "post"),
//!     CandidateItem::content(2, "Apple Tart", "post"),
//!     CandidateItem::content(3, "Banana Split", "post"),
//! ]);
//!
//! let matcher = TitleMatcher::new(MatchConfig::default().with_similarity_threshold(0.3))
//!     .expect("valid config");
//!
//! let report = matcher.report(&corpus);
//! assert_eq!(report.len(), 2);
//!
//! let sources = matcher.check_duplicates(&corpus, "Apple Pie", None).expect("duplicate");
//! assert_eq!(sources.joined(), "post");
//! ```
//!
//! ## Observability
//!
//! Install a [`ReportMetrics`] implementation via [`set_report_metrics`] to
//! record latency and result sizes. Every call through [`TitleMatcher`]
//! shares the same recorder.

pub mod corpus;
pub mod engine;
pub mod exact;
pub mod metrics;
pub mod publish;
pub mod report;
pub mod similarity;
pub mod types;

pub use canonical::{TermVector, TokenizerConfig};

pub use crate::corpus::{Corpus, CorpusSource, StaticSource};
pub use crate::engine::TitleMatcher;
pub use crate::exact::{check_duplicates, matching_titles, titles_containing};
pub use crate::metrics::{set_report_metrics, ReportMetrics};
pub use crate::publish::{gate_publish, PostStatus, PublishAttempt, PublishDecision};
pub use crate::report::SimilarityReport;
pub use crate::similarity::{cosine_similarity, find_global_similar_groups};
pub use crate::types::{
    CandidateItem, DuplicateSources, ItemKind, MatchConfig, MatchError, SimilarNeighbor,
    SimilarityGroup,
};
