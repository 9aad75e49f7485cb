//! Analyzers that convert raw text into processed tokens.
//!
//! Analyzers serve as the complete text processing pipeline:
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Token Stream
//! ```
//!
//! # Available Implementations
//!
//! - [`StandardAnalyzer`] - Good defaults for document similarity
//! - [`PipelineAnalyzer`] - Custom char filter + tokenizer chains
//!
//! # Examples
//!
//! Using the built-in analyzer:
//!
//! ```
//! use docsim::analysis::analyzer::{Analyzer, StandardAnalyzer};
//!
//! let analyzer = StandardAnalyzer::new();
//! let tokens: Vec<_> = analyzer.analyze("Hello World").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! ```

use std::sync::Arc;

use crate::analysis::char_filter::{AlphabeticCharFilter, CharFilter};
use crate::analysis::token::TokenStream;
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text into a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A configurable analyzer that chains char filters with a tokenizer.
///
/// Char filters are applied to the raw text in the order they were added,
/// then the filtered text is tokenized.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    char_filters: Vec<Arc<dyn CharFilter>>,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            tokenizer,
            char_filters: Vec::new(),
        }
    }

    /// Add a char filter to the pipeline.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the char filters used by this analyzer.
    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        // Apply char filters in sequence
        let mut filtered_text = text.to_string();
        for char_filter in &self.char_filters {
            filtered_text = char_filter.filter(&filtered_text);
        }

        self.tokenizer.tokenize(&filtered_text)
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "char_filters",
                &self
                    .char_filters
                    .iter()
                    .map(|f| f.name())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// The standard analyzer for document similarity.
///
/// Combines the [`AlphabeticCharFilter`] with the [`WhitespaceTokenizer`]:
/// raw text is case-folded and reduced to alphabetic-plus-whitespace form,
/// then split on whitespace runs.
#[derive(Clone, Debug)]
pub struct StandardAnalyzer {
    pipeline: PipelineAnalyzer,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer.
    pub fn new() -> Self {
        let pipeline = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(Arc::new(AlphabeticCharFilter::new()));
        StandardAnalyzer { pipeline }
    }
}

impl Default for StandardAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.pipeline.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_standard_analyzer() {
        let analyzer = StandardAnalyzer::new();
        let tokens: Vec<Token> = analyzer.analyze("Hello, World! 123").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
    }

    #[test]
    fn test_pipeline_without_char_filters() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()));
        let tokens: Vec<Token> = analyzer.analyze("Hello World").unwrap().collect();

        // No filtering applied - original case preserved
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "Hello");
        assert_eq!(tokens[1].text, "World");
    }

    #[test]
    fn test_pipeline_with_char_filter() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(Arc::new(AlphabeticCharFilter::new()));

        let tokens: Vec<Token> = analyzer.analyze("backend, cloud & Java.").unwrap().collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["backend", "cloud", "java"]);
    }

    #[test]
    fn test_analyzer_debug_lists_components() {
        let analyzer = StandardAnalyzer::new();
        let debug = format!("{:?}", analyzer.pipeline);
        assert!(debug.contains("whitespace"));
        assert!(debug.contains("alphabetic"));
    }
}
