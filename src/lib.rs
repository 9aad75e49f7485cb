//! # Docsim
//!
//! Pairwise TF-IDF document similarity for small text collections.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Flexible text analysis pipeline (char filters + tokenizer)
//! - Deterministic, lexicographically ordered vocabulary
//! - Textbook TF-IDF weighting with `log10(N / (1 + df))` smoothing
//! - Cosine similarity with a defined zero-vector fallback
//!
//! ## Example
//!
//! ```
//! use docsim::pipeline::SimilarityPipeline;
//!
//! let pipeline = SimilarityPipeline::new();
//! let report = pipeline
//!     .compare(&[
//!         "cat sat mat".to_string(),
//!         "cat sat hat".to_string(),
//!         "dog ran far".to_string(),
//!         "bird flew high".to_string(),
//!     ])
//!     .unwrap();
//!
//! assert_eq!(report.vocabulary_size, 10);
//! // doc 0 and doc 1 share two of three tokens; the other pairs share none.
//! assert!(report.pairs[0].score > report.pairs[1].score);
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod pipeline;
pub mod similarity;
pub mod tfidf;
pub mod vocabulary;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
