//! Command-line interface definition.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::kmer::DEFAULT_KMER_LENGTH;

/// Tabulate k-mer frequencies of DNA sequences in a FASTA file.
#[derive(Parser, Debug)]
#[command(name = "kmertab")]
#[command(version, author, about, long_about = None)]
pub struct Args {
    /// Path to a FASTA file
    pub input: PathBuf,

    /// K-mer length (at least 1)
    #[arg(long, default_value_t = DEFAULT_KMER_LENGTH)]
    pub k: usize,

    /// Output file for the k-mer table (overwritten if it exists)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "tsv")]
    pub format: OutputFormat,

    /// Minimum count threshold (k-mers below this are excluded)
    #[arg(short, long, default_value = "1")]
    pub min_count: u64,

    /// Also write the k-mer count histogram (count, number of k-mers) to this file
    #[arg(long)]
    pub histogram: Option<PathBuf>,

    /// Suppress informational output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format for k-mer tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Tab-separated values (kmer\tcount)
    #[default]
    Tsv,
    /// JSON array format
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tsv => write!(f, "tsv"),
            Self::Json => write!(f, "json"),
        }
    }
}
