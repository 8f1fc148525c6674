//! Configuration for the title tokenizer.
//!
//! The default configuration reproduces the plain tokenization contract:
//! Unicode lowercasing, removal of everything that is not a letter, number
//! or whitespace, and splitting on whitespace runs. The only knob is an
//! opt-in NFKC pass for hosts that store titles in mixed normalization forms.
//!
//! # Examples
//!
//! ```rust
//! use canonical::TokenizerConfig;
//!
//! let config = TokenizerConfig::default();
//! assert!(!config.normalize_unicode);
//!
//! let nfkc = TokenizerConfig {
//!     normalize_unicode: true,
//! };
//! assert!(nfkc.normalize_unicode);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for [`tokenize_with`](crate::tokenize_with) and
/// [`vectorize_with`](crate::vectorize_with).
///
/// Cheap to copy and serde-friendly so it can be embedded in the matcher
/// configuration and in YAML config files.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TokenizerConfig {
    /// If true, apply Unicode NFKC normalization before case folding.
    ///
    /// With normalization enabled, compatibility forms collapse onto their
    /// canonical counterparts:
    ///
    /// ```text
    /// "ﬁle" (U+FB01 ligature) → "file"
    /// "Ｔｉｔｌｅ" (fullwidth)   → "title"
    /// ```
    ///
    /// Without it, decomposed combining marks are dropped by the letter and
    /// number filter, so `"Cafe\u{0301}"` tokenizes to `"cafe"` while the
    /// precomposed `"Caf\u{00E9}"` tokenizes to `"café"`.
    ///
    /// # Default
    ///
    /// `false`
    #[serde(default)]
    pub normalize_unicode: bool,
}
