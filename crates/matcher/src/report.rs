//! Global similar-titles report.
//!
//! Wraps the groups produced by [`find_global_similar_groups`] with the
//! accessors and plain-text rendering a host dashboard needs.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::corpus::Corpus;
use crate::similarity::find_global_similar_groups;
use crate::types::{CandidateItem, MatchConfig, SimilarityGroup};

/// Result of one report run over a corpus snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SimilarityReport {
    groups: Vec<SimilarityGroup>,
}

impl SimilarityReport {
    /// Run the all-pairs similarity pass over `corpus`.
    pub fn generate(corpus: &Corpus, cfg: &MatchConfig) -> Self {
        Self {
            groups: find_global_similar_groups(corpus.items(), cfg),
        }
    }

    pub fn from_groups(groups: Vec<SimilarityGroup>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[SimilarityGroup] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<SimilarityGroup> {
        self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Neighbors listed without an edit link, in report order.
    pub fn missing_edit_links(&self) -> Vec<&CandidateItem> {
        self.groups
            .iter()
            .flat_map(|group| group.neighbors.iter())
            .map(|neighbor| &neighbor.item)
            .filter(|item| item.edit_link.is_none())
            .collect()
    }
}

impl fmt::Display for SimilarityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.groups.is_empty() {
            return writeln!(f, "No similar titles found.");
        }

        writeln!(f, "Similar Titles Across All Types:")?;
        for group in &self.groups {
            writeln!(f, "- {} ({})", group.anchor.title, group.anchor.category)?;
            for neighbor in &group.neighbors {
                let item = &neighbor.item;
                write!(
                    f,
                    "    - {} ({}, {}%)",
                    item.title,
                    item.category,
                    neighbor.percent()
                )?;
                match &item.edit_link {
                    Some(link) => writeln!(f, " - Edit: {link}")?,
                    None => {
                        warn!(
                            item_id = item.id,
                            category = %item.category,
                            title = %item.title,
                            "edit_link_unavailable"
                        );
                        writeln!(f, " - Edit link not available")?;
                    }
                }
            }
        }
        Ok(())
    }
}
