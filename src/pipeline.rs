//! End-to-end document similarity pipeline.
//!
//! Wires the stages together: analyze every raw document into tokens, build
//! the shared vocabulary, compute IDF once for the corpus, assemble a dense
//! TF-IDF vector per document, and score every unordered document pair with
//! cosine similarity.
//!
//! # Examples
//!
//! ```
//! use docsim::pipeline::SimilarityPipeline;
//!
//! let pipeline = SimilarityPipeline::new();
//! let report = pipeline
//!     .compare(&["cat sat mat".to_string(), "cat sat hat".to_string()])
//!     .unwrap();
//!
//! assert_eq!(report.document_count, 2);
//! assert_eq!(report.pairs.len(), 1);
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
use crate::error::Result;
use crate::similarity::similarity_matrix;
use crate::tfidf::TfIdfVectorizer;

/// Similarity score for one unordered document pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairScore {
    /// Index of the first document (doc_a < doc_b).
    pub doc_a: usize,
    /// Index of the second document.
    pub doc_b: usize,
    /// Cosine similarity between the two documents' TF-IDF vectors.
    pub score: f64,
}

/// Result of comparing a document collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityReport {
    /// Number of documents compared.
    pub document_count: usize,
    /// Number of distinct terms across the corpus.
    pub vocabulary_size: usize,
    /// Token count per document, in input order.
    pub document_lengths: Vec<usize>,
    /// Scores for every unordered pair (i, j), i < j, in document-index
    /// order.
    pub pairs: Vec<PairScore>,
}

/// The document similarity pipeline.
///
/// Holds the analyzer used to turn raw strings into tokens; everything else
/// is computed per [`compare`] call, so one pipeline can be reused across
/// unrelated document collections.
///
/// [`compare`]: SimilarityPipeline::compare
#[derive(Clone)]
pub struct SimilarityPipeline {
    analyzer: Arc<dyn Analyzer>,
}

impl SimilarityPipeline {
    /// Create a pipeline with the standard analyzer (alphabetic char filter
    /// + whitespace tokenizer).
    pub fn new() -> Self {
        SimilarityPipeline {
            analyzer: Arc::new(StandardAnalyzer::new()),
        }
    }

    /// Create a pipeline with a custom analyzer.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        SimilarityPipeline { analyzer }
    }

    /// Get the analyzer used by this pipeline.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    /// Tokenize one raw document.
    pub fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyzer.analyze(text)?.map(|token| token.text).collect())
    }

    /// Compare all documents pairwise and produce a similarity report.
    ///
    /// The vocabulary and IDF weights are computed once for the collection,
    /// every document vector shares the vocabulary's dimension order, and
    /// pairs are reported for (i, j) with i < j in document-index order.
    pub fn compare(&self, raw_docs: &[String]) -> Result<SimilarityReport> {
        let tokenized: Vec<Vec<String>> = raw_docs
            .iter()
            .map(|text| self.tokenize(text))
            .collect::<Result<Vec<_>>>()?;

        let vectorizer = TfIdfVectorizer::fit(&tokenized);
        let vectors: Vec<Vec<f64>> = tokenized
            .iter()
            .map(|doc| vectorizer.transform(doc))
            .collect::<Result<Vec<_>>>()?;

        let matrix = similarity_matrix(&vectors)?;
        let mut pairs = Vec::with_capacity(raw_docs.len().saturating_sub(1) * raw_docs.len() / 2);
        for i in 0..raw_docs.len() {
            for j in (i + 1)..raw_docs.len() {
                pairs.push(PairScore {
                    doc_a: i,
                    doc_b: j,
                    score: matrix[i][j],
                });
            }
        }

        Ok(SimilarityReport {
            document_count: raw_docs.len(),
            vocabulary_size: vectorizer.vocabulary().len(),
            document_lengths: tokenized.iter().map(|doc| doc.len()).collect(),
            pairs,
        })
    }
}

impl Default for SimilarityPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SimilarityPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarityPipeline")
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_compare_basic_corpus() {
        let pipeline = SimilarityPipeline::new();
        let report = pipeline
            .compare(&raw(&["cat sat mat", "cat sat hat", "dog ran far"]))
            .unwrap();

        assert_eq!(report.document_count, 3);
        assert_eq!(report.vocabulary_size, 7);
        assert_eq!(report.document_lengths, vec![3, 3, 3]);
        assert_eq!(report.pairs.len(), 3);
    }

    #[test]
    fn test_pairs_are_ordered() {
        let pipeline = SimilarityPipeline::new();
        let report = pipeline
            .compare(&raw(&["a b", "b c", "c d", "d e"]))
            .unwrap();

        let indices: Vec<(usize, usize)> =
            report.pairs.iter().map(|p| (p.doc_a, p.doc_b)).collect();
        assert_eq!(
            indices,
            vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
        );
    }

    #[test]
    fn test_shared_terms_score_higher() {
        let pipeline = SimilarityPipeline::new();
        let report = pipeline
            .compare(&raw(&[
                "cat sat mat",
                "cat sat hat",
                "dog ran far",
                "bird flew high",
            ]))
            .unwrap();

        let score = |a: usize, b: usize| {
            report
                .pairs
                .iter()
                .find(|p| p.doc_a == a && p.doc_b == b)
                .unwrap()
                .score
        };

        // doc 0 and doc 1 share "cat" and "sat"; every other pair shares
        // nothing, and no shared terms means a zero dot product, exactly.
        assert!(score(0, 1) > 0.0);
        assert!(score(0, 1) > score(0, 2));
        assert_eq!(score(0, 2), 0.0);
        assert_eq!(score(2, 3), 0.0);
    }

    #[test]
    fn test_idf_smoothing_zeroes_shared_terms_at_small_n() {
        // With three documents, a term present in two of them has
        // df = 2 and IDF = log10(3 / 3) = 0, so the overlap between the
        // first two documents carries no weight and every pair scores 0.
        let pipeline = SimilarityPipeline::new();
        let report = pipeline
            .compare(&raw(&["cat sat mat", "cat sat hat", "dog ran far"]))
            .unwrap();

        for pair in &report.pairs {
            assert_eq!(pair.score, 0.0);
        }
    }

    #[test]
    fn test_empty_document_in_corpus() {
        let pipeline = SimilarityPipeline::new();
        let report = pipeline
            .compare(&raw(&["cat sat", "", "cat ran"]))
            .unwrap();

        assert_eq!(report.document_lengths, vec![2, 0, 2]);
        // The empty document produces an all-zero vector; the fallback makes
        // every pair involving it score 0.
        for pair in &report.pairs {
            if pair.doc_a == 1 || pair.doc_b == 1 {
                assert_eq!(pair.score, 0.0);
            }
        }
    }

    #[test]
    fn test_single_document_has_no_pairs() {
        let pipeline = SimilarityPipeline::new();
        let report = pipeline.compare(&raw(&["lonely document"])).unwrap();
        assert!(report.pairs.is_empty());
    }

    #[test]
    fn test_report_serializes() {
        let pipeline = SimilarityPipeline::new();
        let report = pipeline.compare(&raw(&["a b", "b c"])).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"vocabulary_size\":3"));
    }
}
