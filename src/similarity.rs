//! Cosine similarity between TF-IDF vectors.
//!
//! Both vectors must be dimensioned by the same vocabulary, which the
//! pipeline guarantees by construction; a length mismatch therefore means
//! the stages were wired against different vocabularies and surfaces as an
//! error rather than a silently wrong score.

use rayon::prelude::*;

use crate::error::{DocsimError, Result};

/// Pair count above which the similarity matrix is computed in parallel.
const PARALLEL_PAIR_THRESHOLD: usize = 100;

/// Compute the cosine similarity between two equal-length vectors.
///
/// Returns `dot(a, b) / (‖a‖ · ‖b‖)`. If either vector has a zero norm
/// (the document had no recognized terms, or every IDF weight was zero),
/// the similarity is defined as `0.0` rather than dividing by zero. The
/// result is not clamped, so negative IDF components can produce negative
/// scores.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(DocsimError::vector(format!(
            "Vector dimensions must match for similarity calculation ({} vs {})",
            a.len(),
            b.len()
        )));
    }

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok(dot / (norm_a.sqrt() * norm_b.sqrt()))
}

/// Compute the full pairwise cosine similarity matrix.
///
/// The matrix is symmetric. Diagonal entries are 1.0 for nonzero-norm
/// vectors and 0.0 for degenerate (all-zero) vectors, consistent with the
/// zero-norm fallback of [`cosine_similarity`]. Off-diagonal pairs are
/// computed in parallel once the pair count passes a small threshold.
pub fn similarity_matrix(vectors: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
    let n = vectors.len();
    let mut matrix = vec![vec![0.0; n]; n];

    for (i, vector) in vectors.iter().enumerate() {
        let norm: f64 = vector.iter().map(|x| x * x).sum();
        matrix[i][i] = if norm == 0.0 { 0.0 } else { 1.0 };
    }

    let pairs: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
        .collect();

    let scores: Vec<((usize, usize), f64)> = if pairs.len() < PARALLEL_PAIR_THRESHOLD {
        pairs
            .iter()
            .map(|&(i, j)| Ok(((i, j), cosine_similarity(&vectors[i], &vectors[j])?)))
            .collect::<Result<Vec<_>>>()?
    } else {
        pairs
            .par_iter()
            .map(|&(i, j)| Ok(((i, j), cosine_similarity(&vectors[i], &vectors[j])?)))
            .collect::<Result<Vec<_>>>()?
    };

    for ((i, j), score) in scores {
        matrix[i][j] = score;
        matrix[j][i] = score;
    }

    Ok(matrix)
}
