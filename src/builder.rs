//! Builder pattern API for ergonomic k-mer tabulation.
//!
//! # Example
//!
//! ```rust,no_run
//! use kmertab::builder::KmerTabulator;
//!
//! let table = KmerTabulator::new()
//!     .k(5)?
//!     .min_count(2)
//!     .tabulate("genome.fa")?;
//!
//! for (kmer, count) in table.iter() {
//!     println!("{kmer}\t{count}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::{io::BufRead, path::Path};

use crate::{
    cli::OutputFormat,
    error::{KmerLengthError, KmerTabError},
    kmer::KmerLength,
    reader::{FastaRecords, FastaSource, RecordSource},
    table::{tabulate, FrequencyTable},
    writer::write_table_to_path,
};

/// A builder for configuring k-mer tabulation.
///
/// Use [`KmerTabulator::new()`] to create a new builder, configure it with the
/// fluent API, then call [`tabulate()`](KmerTabulator::tabulate) or
/// [`tabulate_to_path()`](KmerTabulator::tabulate_to_path) to execute.
#[derive(Debug, Clone)]
pub struct KmerTabulator {
    k: Option<KmerLength>,
    min_count: u64,
    format: OutputFormat,
}

impl Default for KmerTabulator {
    fn default() -> Self {
        Self::new()
    }
}

impl KmerTabulator {
    /// Creates a new builder: `k` unset, `min_count` 1, TSV output.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            k: None,
            min_count: 1,
            format: OutputFormat::Tsv,
        }
    }

    /// Sets the k-mer length.
    ///
    /// # Errors
    ///
    /// Returns [`KmerLengthError`] if `k` is zero.
    ///
    /// ```rust
    /// use kmertab::builder::KmerTabulator;
    ///
    /// assert!(KmerTabulator::new().k(0).is_err());
    /// let tabulator = KmerTabulator::new().k(3)?;
    /// # Ok::<(), kmertab::error::KmerLengthError>(())
    /// ```
    pub fn k(mut self, k: usize) -> Result<Self, KmerLengthError> {
        self.k = Some(KmerLength::new(k)?);
        Ok(self)
    }

    /// Sets the k-mer length from a pre-validated `KmerLength`.
    #[must_use]
    pub const fn k_validated(mut self, k: KmerLength) -> Self {
        self.k = Some(k);
        self
    }

    /// K-mers counted fewer than `min_count` times are dropped. Default 1.
    #[must_use]
    pub const fn min_count(mut self, min_count: u64) -> Self {
        self.min_count = min_count;
        self
    }

    /// Sets the output format for [`tabulate_to_path()`](Self::tabulate_to_path).
    #[must_use]
    pub const fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    fn require_k(&self) -> Result<KmerLength, KmerTabError> {
        self.k.ok_or(KmerTabError::KmerLengthNotSet)
    }

    /// Tabulates the FASTA file at `path`.
    pub fn tabulate<P: AsRef<Path>>(&self, path: P) -> Result<FrequencyTable, KmerTabError> {
        let k = self.require_k()?;
        self.tabulate_source(&FastaSource::new(path.as_ref()), k)
    }

    /// Tabulates FASTA data from any buffered reader.
    ///
    /// ```rust
    /// use kmertab::builder::KmerTabulator;
    ///
    /// let input = b">seq1\nACGTACGT\n";
    /// let table = KmerTabulator::new().k(3)?.tabulate_reader(&input[..])?;
    /// assert_eq!(table.get("ACG"), Some(2));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn tabulate_reader<R: BufRead>(&self, reader: R) -> Result<FrequencyTable, KmerTabError> {
        let k = self.require_k()?;
        let mut table = tabulate(FastaRecords::new(reader, "<reader>"), k)?;
        table.retain_min_count(self.min_count);
        Ok(table)
    }

    /// Tabulates any [`RecordSource`].
    pub fn tabulate_source<S: RecordSource>(
        &self,
        source: &S,
        k: KmerLength,
    ) -> Result<FrequencyTable, KmerTabError> {
        let mut table = tabulate(source.records()?, k)?;
        table.retain_min_count(self.min_count);
        Ok(table)
    }

    /// Tabulates `input` and writes the table to `output`.
    pub fn tabulate_to_path<P, Q>(&self, input: P, output: Q) -> Result<FrequencyTable, KmerTabError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let table = self.tabulate(input)?;
        write_table_to_path(&table, self.format, output)?;
        Ok(table)
    }

    /// Returns the configured k-mer length, if set.
    #[must_use]
    pub const fn get_k(&self) -> Option<KmerLength> {
        self.k
    }

    /// Returns the configured minimum count.
    #[must_use]
    pub const fn get_min_count(&self) -> u64 {
        self.min_count
    }

    /// Returns the configured output format.
    #[must_use]
    pub const fn get_format(&self) -> OutputFormat {
        self.format
    }
}
