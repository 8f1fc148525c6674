//! Workspace umbrella crate for titleguard, a duplicate and near-duplicate
//! title detector.
//!
//! This crate stitches together the tokenizer (`canonical`) and the matching
//! engine (`matcher`) so hosts can work against a single API entry point, and
//! adds the YAML configuration loader and the endpoint request/response
//! contract on top.

pub mod api;
pub mod config;

pub use canonical::{
    TermVector, TokenizerConfig, normalize_title, tokenize, tokenize_with, vectorize,
    vectorize_with,
};
pub use matcher::{
    CandidateItem, Corpus, CorpusSource, DuplicateSources, ItemKind, MatchConfig, MatchError,
    PostStatus, PublishAttempt, PublishDecision, ReportMetrics, SimilarNeighbor, SimilarityGroup,
    SimilarityReport, StaticSource, TitleMatcher, check_duplicates, cosine_similarity,
    find_global_similar_groups, gate_publish, matching_titles, set_report_metrics,
    titles_containing,
};

pub use crate::api::{ApiError, ApiErrorBody, CheckTitleRequest, DuplicateResponse};
pub use crate::config::{ConfigLoadError, TitleGuardConfig};
