//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{DocsimArgs, OutputFormat};
use crate::error::Result;
use crate::pipeline::SimilarityReport;

/// Corpus statistics reported by the `stats` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorpusStats {
    pub document_count: usize,
    pub vocabulary_size: usize,
    pub document_lengths: Vec<usize>,
    pub total_tokens: usize,
}

impl CorpusStats {
    /// Derive corpus statistics from a similarity report.
    pub fn from_report(report: &SimilarityReport) -> Self {
        CorpusStats {
            document_count: report.document_count,
            vocabulary_size: report.vocabulary_size,
            total_tokens: report.document_lengths.iter().sum(),
            document_lengths: report.document_lengths.clone(),
        }
    }
}

/// Output a similarity report in the configured format.
pub fn output_report(report: &SimilarityReport, args: &DocsimArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_report_human(report, args),
        OutputFormat::Json => output_json(report, args),
    }
}

/// Output corpus statistics in the configured format.
pub fn output_stats(stats: &CorpusStats, args: &DocsimArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_stats_human(stats, args),
        OutputFormat::Json => output_json(stats, args),
    }
}

/// Human-readable pairwise report.
///
/// One line per unordered document pair, in document-index order.
fn output_report_human(report: &SimilarityReport, args: &DocsimArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!(
            "{} documents, {} distinct terms",
            report.document_count, report.vocabulary_size
        );
        println!();
    }

    for pair in &report.pairs {
        println!(
            "Similarity(doc {} vs doc {}) = {}",
            pair.doc_a, pair.doc_b, pair.score
        );
    }

    Ok(())
}

/// Human-readable corpus statistics.
fn output_stats_human(stats: &CorpusStats, _args: &DocsimArgs) -> Result<()> {
    println!("Documents:       {}", stats.document_count);
    println!("Vocabulary size: {}", stats.vocabulary_size);
    println!("Total tokens:    {}", stats.total_tokens);
    for (i, len) in stats.document_lengths.iter().enumerate() {
        println!("  doc {i}: {len} tokens");
    }
    Ok(())
}

/// JSON output, optionally pretty-printed.
fn output_json<T: Serialize>(value: &T, args: &DocsimArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
