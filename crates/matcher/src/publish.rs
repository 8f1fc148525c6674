//! Publish-time duplicate gate.
//!
//! The host calls [`gate_publish`] before persisting a status change. A
//! publish attempt whose title already exists elsewhere is demoted to a
//! draft unless the configuration allows duplicate titles. Storing the
//! demotion message and showing it to the author is up to the host.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::corpus::Corpus;
use crate::exact::check_duplicates;
use crate::types::{DuplicateSources, MatchConfig};

/// Status the author is trying to save.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Publish,
}

/// A save request as seen by the gate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublishAttempt {
    /// Id of the content item being saved; `None` for a new item.
    #[serde(default)]
    pub id: Option<u64>,
    pub title: String,
    pub status: PostStatus,
}

/// Outcome of [`gate_publish`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum PublishDecision {
    /// Save with the requested status.
    Proceed,
    /// Save as draft instead and show `message` to the author.
    Demote {
        sources: DuplicateSources,
        message: String,
    },
}

impl PublishDecision {
    pub fn is_demoted(&self) -> bool {
        matches!(self, PublishDecision::Demote { .. })
    }

    /// Status the host should persist for `attempt`.
    pub fn effective_status(&self, attempt: &PublishAttempt) -> PostStatus {
        match self {
            PublishDecision::Proceed => attempt.status,
            PublishDecision::Demote { .. } => PostStatus::Draft,
        }
    }
}

/// Decide whether `attempt` may be published.
///
/// Only publish attempts are checked. With `allow_duplicate_titles` set the
/// attempt always proceeds and duplicate detection stays advisory.
pub fn gate_publish(corpus: &Corpus, attempt: &PublishAttempt, cfg: &MatchConfig) -> PublishDecision {
    if attempt.status != PostStatus::Publish || cfg.allow_duplicate_titles {
        return PublishDecision::Proceed;
    }

    match check_duplicates(corpus, &attempt.title, attempt.id) {
        Some(sources) => {
            let message = sources.blocking_message();
            info!(
                item_id = ?attempt.id,
                sources = %sources.joined(),
                "publish_demoted"
            );
            PublishDecision::Demote { sources, message }
        }
        None => PublishDecision::Proceed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CandidateItem;

    fn corpus() -> Corpus {
        Corpus::new(vec![
            CandidateItem::content(1, "Launch Notes", "Post"),
            CandidateItem::term(2, "Launch Notes", "Category"),
        ])
    }

    fn attempt(id: u64, title: &str, status: PostStatus) -> PublishAttempt {
        PublishAttempt {
            id: Some(id),
            title: title.into(),
            status,
        }
    }

    #[test]
    fn duplicate_publish_is_demoted() {
        let req = attempt(9, " Launch Notes ", PostStatus::Publish);
        let decision = gate_publish(&corpus(), &req, &MatchConfig::default());
        match &decision {
            PublishDecision::Demote { sources, message } => {
                assert_eq!(sources.labels(), ["Post", "Category"]);
                assert_eq!(
                    message,
                    "Title used for this post appears to be a duplicate in: Post, Category. Please modify the title."
                );
            }
            other => panic!("unexpected decision: {other:?}"),
        }
        assert_eq!(decision.effective_status(&req), PostStatus::Draft);
    }

    #[test]
    fn new_item_collides_with_id_zero() {
        let corpus = Corpus::new(vec![CandidateItem::content(0, "Launch Notes", "Post")]);
        let new_item = PublishAttempt {
            id: None,
            title: "Launch Notes".into(),
            status: PostStatus::Publish,
        };
        assert!(gate_publish(&corpus, &new_item, &MatchConfig::default()).is_demoted());

        let same_item = PublishAttempt {
            id: Some(0),
            ..new_item
        };
        assert_eq!(
            gate_publish(&corpus, &same_item, &MatchConfig::default()),
            PublishDecision::Proceed
        );
    }

    #[test]
    fn drafts_are_not_checked() {
        let req = attempt(9, "Launch Notes", PostStatus::Draft);
        let decision = gate_publish(&corpus(), &req, &MatchConfig::default());
        assert_eq!(decision, PublishDecision::Proceed);
    }

    #[test]
    fn allow_duplicates_never_blocks() {
        let cfg = MatchConfig::default().with_allow_duplicate_titles(true);
        let req = attempt(9, "Launch Notes", PostStatus::Publish);
        let decision = gate_publish(&corpus(), &req, &cfg);
        assert!(!decision.is_demoted());
        assert_eq!(decision.effective_status(&req), PostStatus::Publish);
    }

    #[test]
    fn republishing_own_title_proceeds_without_other_hits() {
        let corpus = Corpus::new(vec![CandidateItem::content(1, "Solo", "Post")]);
        let req = attempt(1, "Solo", PostStatus::Publish);
        assert_eq!(
            gate_publish(&corpus, &req, &MatchConfig::default()),
            PublishDecision::Proceed
        );
    }
}
