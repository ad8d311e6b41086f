//! K-mer frequency tables and counting.
//!
//! [`FrequencyTable`] maps each k-mer to the number of times it occurs.
//! Keys are uppercase and made only of `A`, `C`, `G` and `T`; iteration is
//! in ascending lexicographic order.
//!
//! # Example
//!
//! ```rust
//! use kmertab::kmer::KmerLength;
//! use kmertab::reader::SequenceRecord;
//! use kmertab::table::tabulate;
//!
//! let records = vec![Ok(SequenceRecord::new("seq1", "ACGTACGT"))];
//! let table = tabulate(records, KmerLength::new(3)?)?;
//!
//! assert_eq!(table.get("ACG"), Some(2));
//! assert_eq!(table.get("GTA"), Some(1));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::collections::BTreeMap;

use crate::{
    error::KmerTabError,
    kmer::{KmerLength, ValidWindows},
    reader::SequenceRecord,
};

#[cfg(feature = "tracing")]
use tracing::{debug, info, info_span};

/// Counts of k-mers of a single length.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencyTable {
    k: KmerLength,
    counts: BTreeMap<String, u64>,
}

impl FrequencyTable {
    /// Creates an empty table for k-mers of length `k`.
    #[must_use]
    pub const fn new(k: KmerLength) -> Self {
        Self {
            k,
            counts: BTreeMap::new(),
        }
    }

    /// The k-mer length this table counts.
    #[must_use]
    pub const fn k(&self) -> KmerLength {
        self.k
    }

    /// Adds one to the count of `kmer`, inserting it at zero first if absent.
    pub fn increment(&mut self, kmer: &str) {
        *self.counts.entry(kmer.to_owned()).or_insert(0) += 1;
    }

    /// Counts every valid window of `bases`, after uppercasing it.
    ///
    /// Returns the number of windows counted.
    pub fn add_sequence(&mut self, bases: &[u8]) -> usize {
        let upper = bases.to_ascii_uppercase();
        let mut counted = 0;

        for window in ValidWindows::new(&upper, self.k) {
            // Windows hold only A, C, G and T
            let kmer: String = window.iter().copied().map(char::from).collect();
            *self.counts.entry(kmer).or_insert(0) += 1;
            counted += 1;
        }
        counted
    }

    /// Adds every count of `other` into this table.
    ///
    /// Tables of different lengths are not merged; `other` is returned
    /// unchanged in that case.
    ///
    /// # Errors
    ///
    /// Returns `other` if its k-mer length differs from this table's.
    pub fn merge(&mut self, other: Self) -> Result<(), Self> {
        if other.k != self.k {
            return Err(other);
        }
        for (kmer, count) in other.counts {
            *self.counts.entry(kmer).or_insert(0) += count;
        }
        Ok(())
    }

    /// Drops k-mers counted fewer than `min_count` times.
    pub fn retain_min_count(&mut self, min_count: u64) {
        if min_count > 1 {
            self.counts.retain(|_, count| *count >= min_count);
        }
    }

    /// Count of `kmer`, if it was seen.
    #[must_use]
    pub fn get(&self, kmer: &str) -> Option<u64> {
        self.counts.get(kmer).copied()
    }

    /// Number of distinct k-mers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Entries in ascending k-mer order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(kmer, &count)| (kmer.as_str(), count))
    }

    /// Iterator over the counts only.
    pub fn counts(&self) -> impl Iterator<Item = u64> + '_ {
        self.counts.values().copied()
    }
}

/// Summary of a tabulation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabulationSummary {
    /// Records read from the input.
    pub records: u64,
    /// Bases across all records.
    pub bases: u64,
    /// Windows counted into the table.
    pub kmers_counted: u64,
}

/// Counts the k-mers of every record.
///
/// Stops at the first record error and returns it.
pub fn tabulate<I>(records: I, k: KmerLength) -> Result<FrequencyTable, KmerTabError>
where
    I: IntoIterator<Item = Result<SequenceRecord, KmerTabError>>,
{
    tabulate_with_summary(records, k).map(|(table, _)| table)
}

/// Like [`tabulate`], also returning how much input was processed.
pub fn tabulate_with_summary<I>(
    records: I,
    k: KmerLength,
) -> Result<(FrequencyTable, TabulationSummary), KmerTabError>
where
    I: IntoIterator<Item = Result<SequenceRecord, KmerTabError>>,
{
    #[cfg(feature = "tracing")]
    let _span = info_span!("tabulate", k = k.get()).entered();

    let mut table = FrequencyTable::new(k);
    let mut summary = TabulationSummary::default();

    for record in records {
        let record = record?;
        let counted = table.add_sequence(&record.bases);

        #[cfg(feature = "tracing")]
        debug!(name = %record.name, bases = record.bases.len(), counted, "Counted record");

        summary.records += 1;
        summary.bases += record.bases.len() as u64;
        summary.kmers_counted += counted as u64;
    }

    #[cfg(feature = "tracing")]
    info!(
        records = summary.records,
        distinct_kmers = table.len(),
        total_kmers = summary.kmers_counted,
        "Tabulation complete"
    );

    Ok((table, summary))
}
