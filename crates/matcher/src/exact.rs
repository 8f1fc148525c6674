//! Literal title matching: exact duplicate checks and title suggestions.
//!
//! Unlike the cosine pass, these comparisons work on titles as typed.
//! [`check_duplicates`] only trims; the suggestion searches lowercase both
//! sides for a substring test and nothing more.

use canonical::normalize_title;

use crate::corpus::Corpus;
use crate::types::{DuplicateSources, ItemKind};

/// Finds the categories in which `title` is already used verbatim.
///
/// The content item with id `exclude_id` is ignored so an item never
/// collides with itself; pass `None` when checking a title that has no id
/// yet. Every id, including `0`, is an ordinary identifier.
/// Term items are matched on name alone. Labels of content hits come first,
/// then labels of term hits, with repeats removed.
///
/// An empty title (after trimming) never matches.
pub fn check_duplicates(
    corpus: &Corpus,
    title: &str,
    exclude_id: Option<u64>,
) -> Option<DuplicateSources> {
    let title = normalize_title(title);
    if title.is_empty() {
        return None;
    }

    let content_labels = corpus
        .of_kind(ItemKind::Content)
        .filter(|item| Some(item.id) != exclude_id && item.title == title)
        .map(|item| item.category.as_str());
    let term_labels = corpus
        .of_kind(ItemKind::Term)
        .filter(|item| item.title == title)
        .map(|item| item.category.as_str());

    DuplicateSources::from_labels(content_labels.chain(term_labels))
}

/// Suggests existing titles that contain `fragment`, case-insensitively.
///
/// Each hit is rendered as `"<title> (Post)"` or `"<title> (Term)"`. A hit
/// whose rendering contains `"<fragment> ("` is dropped: it would only
/// restate what the author already typed. The list keeps corpus order with
/// repeated strings removed. An empty fragment yields no suggestions.
pub fn matching_titles(corpus: &Corpus, fragment: &str) -> Vec<String> {
    if fragment.is_empty() {
        return Vec::new();
    }

    let needle = fragment.to_lowercase();
    let restated = format!("{fragment} (");
    let mut titles: Vec<String> = Vec::new();

    for item in corpus.items() {
        if !item.title.to_lowercase().contains(&needle) {
            continue;
        }
        let display = format!("{} ({})", item.title, item.kind.label());
        if display.contains(&restated) || titles.contains(&display) {
            continue;
        }
        titles.push(display);
    }

    titles
}

/// Raw titles of content items containing `fragment`, case-insensitively.
///
/// Corpus order, repeats kept. An empty fragment yields nothing.
pub fn titles_containing(corpus: &Corpus, fragment: &str) -> Vec<String> {
    if fragment.is_empty() {
        return Vec::new();
    }

    let needle = fragment.to_lowercase();
    corpus
        .of_kind(ItemKind::Content)
        .filter(|item| item.title.to_lowercase().contains(&needle))
        .map(|item| item.title.clone())
        .collect()
}
