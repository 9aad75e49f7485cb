//! Text analysis module for docsim.
//!
//! This module provides the text analysis functionality that turns raw
//! document strings into token sequences: character-level normalization,
//! tokenization, and the analyzer pipelines that combine them.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use char_filter::*;
pub use token::*;
pub use tokenizer::*;
