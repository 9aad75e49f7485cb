//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the raw text string before it is passed to the
//! tokenizer. For document similarity the only normalization needed is
//! reducing text to a canonical lowercase, alphabetic-plus-whitespace form.
//!
//! # Examples
//!
//! ```
//! use docsim::analysis::char_filter::{AlphabeticCharFilter, CharFilter};
//!
//! let filter = AlphabeticCharFilter::new();
//! assert_eq!(filter.filter("Hello, World! 123"), "hello world ");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text, returning the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

/// A filter that reduces text to lowercase alphabetic characters and
/// whitespace.
///
/// Every alphabetic character is case-folded to lowercase, whitespace is
/// kept as-is, and everything else (digits, punctuation, symbols) is deleted
/// outright rather than replaced by a space. Deletion means two words
/// separated only by punctuation merge into one token: `"Java,Python"`
/// becomes `"javapython"`. This is a known quirk of the filter, kept because
/// downstream weights are only comparable when every document is cleaned the
/// same way.
///
/// Total over any input, including the empty string.
#[derive(Clone, Debug, Default)]
pub struct AlphabeticCharFilter;

impl AlphabeticCharFilter {
    /// Create a new alphabetic char filter.
    pub fn new() -> Self {
        AlphabeticCharFilter
    }
}

impl CharFilter for AlphabeticCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut cleaned = String::with_capacity(input.len());
        for c in input.chars() {
            if c.is_whitespace() {
                cleaned.push(c);
            } else if c.is_alphabetic() {
                // to_lowercase can expand to multiple chars for some scripts
                cleaned.extend(c.to_lowercase());
            }
        }
        cleaned
    }

    fn name(&self) -> &'static str {
        "alphabetic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_strip() {
        let filter = AlphabeticCharFilter::new();
        let cleaned = filter.filter("Hello, World! 123");
        assert_eq!(cleaned, "hello world ");
    }

    #[test]
    fn test_punctuation_deleted_not_replaced() {
        let filter = AlphabeticCharFilter::new();
        // No whitespace between the words, so deleting the comma merges them.
        assert_eq!(filter.filter("Java,Python"), "javapython");
        // Whitespace still separates.
        assert_eq!(filter.filter("Java, Python"), "java python");
    }

    #[test]
    fn test_whitespace_preserved() {
        let filter = AlphabeticCharFilter::new();
        assert_eq!(filter.filter("a\tb\nc"), "a\tb\nc");
    }

    #[test]
    fn test_empty_input() {
        let filter = AlphabeticCharFilter::new();
        assert_eq!(filter.filter(""), "");
    }

    #[test]
    fn test_symbols_only() {
        let filter = AlphabeticCharFilter::new();
        assert_eq!(filter.filter("42 + 17 = 59!"), "    ");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(AlphabeticCharFilter::new().name(), "alphabetic");
    }
}
