/// Normalizes a title for literal (exact) comparison.
///
/// Only leading and trailing whitespace is removed. Case, punctuation and
/// inner whitespace are preserved: exact duplicate detection compares titles
/// as the author typed them, unlike the fuzzy tokenized comparison.
///
/// ```rust
/// use canonical::normalize_title;
///
/// assert_eq!(normalize_title("  Shared Title \n"), "Shared Title");
/// assert_eq!(normalize_title("Shared  Title"), "Shared  Title");
/// ```
#[inline]
pub fn normalize_title(title: &str) -> &str {
    title.trim()
}
