//! Tabulation runs.
//!
//! [`run`] executes a validated [`Config`]: parse and count the whole input,
//! then write the table (and optionally the histogram). Nothing is written
//! until counting has succeeded, and every destination is opened before
//! either one is written.

use std::{fmt::Debug, fs, path::Path};

use crate::{
    config::Config,
    error::KmerTabError,
    histogram::{compute_histogram, histogram_stats, write_histogram_into, HistogramStats},
    kmer::KmerLength,
    reader::{FastaSource, RecordSource},
    table::{tabulate, tabulate_with_summary, FrequencyTable, TabulationSummary},
    writer::{create, write_table_into},
};

#[cfg(feature = "tracing")]
use tracing::{info, info_span};

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub summary: TabulationSummary,
    /// Statistics of the table as written (after `min_count` filtering).
    pub stats: HistogramStats,
}

/// Counts k-mers in the FASTA file at `path`.
///
/// # Example
///
/// ```rust,no_run
/// use kmertab::kmer::KmerLength;
/// use kmertab::run::count_kmers;
///
/// let table = count_kmers("genome.fa", KmerLength::new(3)?)?;
/// println!("Found {} distinct k-mers", table.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn count_kmers<P>(path: P, k: KmerLength) -> Result<FrequencyTable, KmerTabError>
where
    P: AsRef<Path> + Debug,
{
    #[cfg(feature = "tracing")]
    info!(k = k.get(), path = ?path, "Starting k-mer tabulation");

    tabulate(FastaSource::new(path.as_ref()).records()?, k)
}

/// Runs a full tabulation as described by `config`.
pub fn run(config: &Config) -> Result<RunReport, KmerTabError> {
    #[cfg(feature = "tracing")]
    let _span = info_span!("run", k = config.k.get(), input = %config.input.display()).entered();

    let source = FastaSource::new(&config.input);
    #[cfg(feature = "tracing")]
    info!(path = %source.path().display(), "Reading input");

    let (mut table, summary) = tabulate_with_summary(source.records()?, config.k)?;
    table.retain_min_count(config.min_count);
    let histogram = compute_histogram(&table);

    let histogram_out = match &config.histogram {
        Some(path) => Some((path, create(path)?)),
        None => None,
    };
    let table_out = match create(&config.output) {
        Ok(out) => out,
        Err(err) => {
            if let Some((path, out)) = histogram_out {
                drop(out);
                // Best effort; the create error is what gets reported
                let _ = fs::remove_file(path);
            }
            return Err(err);
        }
    };

    write_table_into(&table, config.format, table_out, &config.output)?;
    if let Some((path, out)) = histogram_out {
        write_histogram_into(&histogram, out, path)?;
    }

    #[cfg(feature = "tracing")]
    info!(
        output = %config.output.display(),
        distinct_kmers = table.len(),
        "Run complete"
    );

    Ok(RunReport {
        summary,
        stats: histogram_stats(&histogram),
    })
}
