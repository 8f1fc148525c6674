//! TitleGuard canonical text layer.
//!
//! Turns human-authored titles into the deterministic forms the matcher
//! compares: token sequences, sparse term-frequency vectors, and trimmed
//! literal titles.
//!
//! ## What we do
//!
//! - Unicode lowercasing (context-aware, locale-free)
//! - Removal of every character that is not a letter, number or whitespace
//! - Splitting on whitespace runs, dropping empty fragments
//! - Counting tokens into a [`TermVector`]
//! - Optional NFKC normalization via [`TokenizerConfig`]
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no OS/locale dependence. Same title and config,
//! same tokens and vector on any machine.
//!
//! No stemming, synonyms or language detection happens here. Two titles are
//! only "the same words" if their normalized tokens are byte-identical.

mod config;
mod title;
mod token;
mod vector;

pub use crate::config::TokenizerConfig;
pub use crate::title::normalize_title;
pub use crate::token::{tokenize, tokenize_with};
pub use crate::vector::{vectorize, vectorize_with, TermVector};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_feed_vectors() {
        let title = "Rust, rust and RUST!";
        let tokens = tokenize(title);
        assert_eq!(tokens, vec!["rust", "rust", "and", "rust"]);

        let vector = vectorize(title);
        assert_eq!(vector, TermVector::from_tokens(tokens));
        assert_eq!(vector.count("rust"), 3);
        assert_eq!(vector.count("and"), 1);
    }

    #[test]
    fn literal_and_fuzzy_forms_differ() {
        let a = "Shared Title";
        let b = "shared title!";
        assert_ne!(normalize_title(a), normalize_title(b));
        assert_eq!(vectorize(a), vectorize(b));
    }

    #[test]
    fn vectorization_is_deterministic() {
        let titles = ["", "hello world", "こんにちは 世界", "emoji \u{1f600} title"];
        for title in titles {
            assert_eq!(vectorize(title), vectorize(title));
        }
    }
}
