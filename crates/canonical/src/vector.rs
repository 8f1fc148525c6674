use fxhash::FxHashMap;

use crate::config::TokenizerConfig;
use crate::token::tokenize_with;

/// Sparse term-frequency vector of a single title.
///
/// Maps each distinct normalized token to the number of times it occurs.
/// Counts are always >= 1; absent tokens are simply not stored. The sum of
/// squared counts is computed once at construction so repeated cosine
/// comparisons against the same vector do not re-walk its entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermVector {
    counts: FxHashMap<String, u32>,
    magnitude_squared: u64,
}

impl TermVector {
    /// Builds a vector from an already tokenized title.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts: FxHashMap<String, u32> = FxHashMap::default();
        for token in tokens {
            *counts.entry(token.into()).or_insert(0) += 1;
        }
        let magnitude_squared = counts
            .values()
            .map(|&count| u64::from(count) * u64::from(count))
            .sum();
        Self {
            counts,
            magnitude_squared,
        }
    }

    /// Occurrence count of `token`, or 0 when the token is absent.
    #[inline]
    pub fn count(&self, token: &str) -> u32 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when the title had no tokens after normalization.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of squared counts. The Euclidean magnitude is its square root.
    #[inline]
    pub fn magnitude_squared(&self) -> u64 {
        self.magnitude_squared
    }

    /// Iterates `(token, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.counts.iter().map(|(token, &count)| (token.as_str(), count))
    }
}

/// Tokenizes `text` with the default configuration and counts tokens.
///
/// Titles that differ only in case, punctuation or whitespace run-length
/// produce equal vectors:
///
/// ```rust
/// use canonical::vectorize;
///
/// assert_eq!(vectorize("Hello, Hello!"), vectorize("hello   hello"));
/// assert_eq!(vectorize("Hello, Hello!").count("hello"), 2);
/// ```
pub fn vectorize(text: &str) -> TermVector {
    vectorize_with(text, &TokenizerConfig::default())
}

/// Tokenizes `text` with `cfg` and counts tokens.
pub fn vectorize_with(text: &str, cfg: &TokenizerConfig) -> TermVector {
    TermVector::from_tokens(tokenize_with(text, cfg))
}
