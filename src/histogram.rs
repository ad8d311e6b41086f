//! K-mer frequency histogram computation.
//!
//! A histogram (count of counts) records, for each count value, how many
//! distinct k-mers were seen that many times.
//!
//! # Example
//!
//! ```rust
//! use kmertab::histogram::compute_histogram;
//! use kmertab::kmer::KmerLength;
//! use kmertab::table::FrequencyTable;
//!
//! let mut table = FrequencyTable::new(KmerLength::new(3)?);
//! table.add_sequence(b"ACGTACGT");
//!
//! let histogram = compute_histogram(&table);
//!
//! // GTA and TAC appear once, ACG and CGT twice
//! assert_eq!(histogram.get(&1), Some(&2));
//! assert_eq!(histogram.get(&2), Some(&2));
//! # Ok::<(), kmertab::error::KmerLengthError>(())
//! ```

use std::{
    collections::BTreeMap,
    io::{self, Write},
    path::Path,
};

use crate::{error::KmerTabError, table::FrequencyTable};

#[cfg(feature = "tracing")]
use tracing::info;

/// Maps count -> number of distinct k-mers with that count.
///
/// Uses `BTreeMap` for sorted iteration (counts in ascending order).
pub type KmerHistogram = BTreeMap<u64, u64>;

/// Summary statistics for a k-mer histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramStats {
    /// Total k-mer occurrences (sum of all k-mer counts).
    pub total_kmers: u64,
    /// Number of unique k-mers.
    pub distinct_kmers: u64,
    /// The count value shared by the most k-mers; the smallest such count on ties.
    pub mode_count: u64,
    /// Number of k-mers that have the mode count.
    pub mode_frequency: u64,
    /// Average k-mer count (`total_kmers` / `distinct_kmers`).
    pub mean_count: f64,
}

/// Computes the histogram of a table's counts.
#[must_use]
pub fn compute_histogram(table: &FrequencyTable) -> KmerHistogram {
    let mut histogram = BTreeMap::new();
    for count in table.counts() {
        *histogram.entry(count).or_insert(0) += 1;
    }
    histogram
}

/// Computes summary statistics for a k-mer histogram.
///
/// # Example
///
/// ```rust
/// use kmertab::histogram::{histogram_stats, KmerHistogram};
///
/// let hist: KmerHistogram = [(1, 2), (2, 2)].into();
/// let stats = histogram_stats(&hist);
///
/// assert_eq!(stats.distinct_kmers, 4);
/// assert_eq!(stats.total_kmers, 6); // 1+1+2+2
/// assert_eq!(stats.mode_count, 1);
/// ```
#[must_use]
pub fn histogram_stats(histogram: &KmerHistogram) -> HistogramStats {
    let distinct: u64 = histogram.values().sum();
    let total: u64 = histogram.iter().map(|(c, f)| c * f).sum();

    let (mode_count, mode_frequency) = histogram
        .iter()
        .fold((0, 0), |best, (&c, &f)| if f > best.1 { (c, f) } else { best });

    HistogramStats {
        total_kmers: total,
        distinct_kmers: distinct,
        mode_count,
        mode_frequency,
        #[allow(clippy::cast_precision_loss)]
        mean_count: if distinct > 0 {
            total as f64 / distinct as f64
        } else {
            0.0
        },
    }
}

/// Writes one `count\tfrequency` line per histogram bin, ascending by count.
pub fn write_histogram<W: Write>(histogram: &KmerHistogram, mut writer: W) -> io::Result<()> {
    for (count, frequency) in histogram {
        writeln!(writer, "{count}\t{frequency}")?;
    }
    writer.flush()
}

/// Writes `histogram` into an already opened destination; `path` names it in errors.
pub(crate) fn write_histogram_into<W: Write>(
    histogram: &KmerHistogram,
    writer: W,
    path: &Path,
) -> Result<(), KmerTabError> {
    write_histogram(histogram, writer).map_err(|source| KmerTabError::WriteError {
        source,
        path: path.to_path_buf(),
    })?;

    #[cfg(feature = "tracing")]
    info!(path = %path.display(), bins = histogram.len(), "Wrote histogram");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kmer::KmerLength;

    fn table_of(seq: &[u8], k: usize) -> FrequencyTable {
        let mut table = FrequencyTable::new(KmerLength::new(k).unwrap());
        table.add_sequence(seq);
        table
    }

    #[test]
    fn histogram_basic() {
        let hist = compute_histogram(&table_of(b"ACGTACGT", 3));

        // 2 k-mers appear once
        assert_eq!(hist.get(&1), Some(&2));
        // 2 k-mers appear twice
        assert_eq!(hist.get(&2), Some(&2));
        // No k-mers appear 3 times
        assert_eq!(hist.get(&3), None);
    }

    #[test]
    fn histogram_single_kmer() {
        let hist = compute_histogram(&table_of(b"AAAAAA", 1));

        assert_eq!(hist.len(), 1);
        assert_eq!(hist.get(&6), Some(&1));
    }

    #[test]
    fn histogram_empty() {
        let hist = compute_histogram(&table_of(b"NNNN", 2));
        assert!(hist.is_empty());
    }

    #[test]
    fn histogram_stats_basic() {
        let hist = compute_histogram(&table_of(b"ACGTACGT", 3));
        let stats = histogram_stats(&hist);

        assert_eq!(stats.distinct_kmers, 4);
        assert_eq!(stats.total_kmers, 6);
        // Counts 1 and 2 tie; the smaller wins
        assert_eq!(stats.mode_count, 1);
        assert_eq!(stats.mode_frequency, 2);
        assert!((stats.mean_count - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn histogram_stats_empty() {
        let stats = histogram_stats(&KmerHistogram::new());

        assert_eq!(stats.distinct_kmers, 0);
        assert_eq!(stats.total_kmers, 0);
        assert_eq!(stats.mode_count, 0);
        assert_eq!(stats.mode_frequency, 0);
        assert!((stats.mean_count - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn histogram_total_matches_table_total() {
        let table = table_of(b"GATTACAGATTACANNGATT", 4);
        let stats = histogram_stats(&compute_histogram(&table));
        assert_eq!(stats.total_kmers, table.total());
        assert_eq!(stats.distinct_kmers, table.len() as u64);
    }

    #[test]
    fn write_histogram_lines() {
        let hist: KmerHistogram = [(5, 1), (1, 10), (2, 3)].into();
        let mut out = Vec::new();
        write_histogram(&hist, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1\t10\n2\t3\n5\t1\n");
    }
}
