//! Command implementations for the docsim CLI.

use std::fs;
use std::io::{self, BufRead};

use crate::cli::args::{Command, CompareArgs, DocsimArgs};
use crate::cli::output::{output_report, output_stats, CorpusStats};
use crate::error::{DocsimError, Result};
use crate::pipeline::SimilarityPipeline;

/// Execute a CLI command.
pub fn execute_command(args: DocsimArgs) -> Result<()> {
    match &args.command {
        Command::Compare(compare_args) => compare(compare_args.clone(), &args),
        Command::Stats(compare_args) => stats(compare_args.clone(), &args),
    }
}

/// Compare documents pairwise and print the similarity report.
fn compare(args: CompareArgs, cli_args: &DocsimArgs) -> Result<()> {
    let documents = collect_documents(&args)?;
    if documents.len() < 2 {
        return Err(DocsimError::invalid_argument(
            "at least two documents are required for comparison",
        ));
    }

    if cli_args.verbosity() > 1 {
        println!("Comparing {} documents", documents.len());
    }

    let pipeline = SimilarityPipeline::new();
    let report = pipeline.compare(&documents)?;
    output_report(&report, cli_args)
}

/// Show corpus statistics for the given documents.
fn stats(args: CompareArgs, cli_args: &DocsimArgs) -> Result<()> {
    let documents = collect_documents(&args)?;
    if documents.is_empty() {
        return Err(DocsimError::invalid_argument(
            "no documents given; pass files, --text, or pipe to stdin",
        ));
    }

    let pipeline = SimilarityPipeline::new();
    let report = pipeline.compare(&documents)?;
    output_stats(&CorpusStats::from_report(&report), cli_args)
}

/// Gather raw document strings from the configured sources.
///
/// Files are read whole (one document per file) in the order given, then
/// `--text` literals in the order given. If neither source is present,
/// stdin is read line by line, one document per non-empty line.
fn collect_documents(args: &CompareArgs) -> Result<Vec<String>> {
    let mut documents = Vec::new();

    for path in &args.files {
        let content = fs::read_to_string(path).map_err(|e| {
            DocsimError::other(format!("failed to read {}: {e}", path.display()))
        })?;
        documents.push(content);
    }

    documents.extend(args.text.iter().cloned());

    if !args.has_inline_input() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            if !line.trim().is_empty() {
                documents.push(line);
            }
        }
    }

    Ok(documents)
}
