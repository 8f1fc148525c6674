use std::borrow::Cow;

use unicode_categories::UnicodeCategories;
use unicode_normalization::UnicodeNormalization;

use crate::config::TokenizerConfig;

/// Tokenizes a title with the default [`TokenizerConfig`].
///
/// The text is lowercased under Unicode rules, every character that is not a
/// letter, number or whitespace is removed, and the remainder is split on
/// whitespace runs. Empty fragments never appear in the output, so an empty
/// or punctuation-only title yields an empty vector.
///
/// Removal happens before splitting, which means punctuation *inside* a word
/// joins its halves: `"it's"` becomes `"its"` and `"e-mail"` becomes
/// `"email"`.
///
/// ```rust
/// use canonical::tokenize;
///
/// assert_eq!(tokenize("Hello, World!"), vec!["hello", "world"]);
/// assert!(tokenize("").is_empty());
/// assert!(tokenize(" -- ").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    tokenize_with(text, &TokenizerConfig::default())
}

/// Tokenizes a title with an explicit configuration.
pub fn tokenize_with(text: &str, cfg: &TokenizerConfig) -> Vec<String> {
    let normalized: Cow<str> = if cfg.normalize_unicode {
        Cow::Owned(text.nfkc().collect::<String>())
    } else {
        Cow::Borrowed(text)
    };

    // `str::to_lowercase` handles context-sensitive mappings (final sigma),
    // which a per-char fold would miss.
    let lowered = normalized.to_lowercase();

    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in lowered.chars() {
        if ch.is_whitespace() {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else if ch.is_letter() || ch.is_number() {
            current.push(ch);
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
