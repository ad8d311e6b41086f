//! # kmertab
//!
//! Tabulate k-mer frequencies of DNA sequences in FASTA files.
//!
//! Every window of length `k` made only of `A`, `C`, `G` and `T` (after
//! uppercasing) is counted across all records; windows containing any other
//! symbol are skipped. The result is a [`table::FrequencyTable`] that
//! iterates in ascending k-mer order and is written as `kmer\tcount` lines.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kmertab::kmer::KmerLength;
//! use kmertab::run::count_kmers;
//!
//! let table = count_kmers("sequences.fa", KmerLength::new(3)?)?;
//! for (kmer, count) in table.iter() {
//!     println!("{kmer}\t{count}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Builder API
//!
//! ```rust,no_run
//! use kmertab::builder::KmerTabulator;
//!
//! KmerTabulator::new()
//!     .k(5)?
//!     .min_count(2)
//!     .tabulate_to_path("genome.fa", "kmers.tsv")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Features
//!
//! - `tracing` (default): structured logging through the `tracing` crate
//! - `gzip`: read `.gz` compressed FASTA input

pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod histogram;
pub mod kmer;
pub mod reader;
pub mod run;
pub mod table;
pub mod writer;
