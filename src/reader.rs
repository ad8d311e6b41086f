//! FASTA record parsing.
//!
//! [`RecordSource`] is the single capability the counter needs from an input:
//! produce the records of a file, from the start, every time it is asked.
//! [`FastaSource`] implements it for FASTA files on disk; [`FastaRecords`]
//! does the actual line-oriented parsing over any [`BufRead`].
//!
//! # Example
//!
//! ```rust,no_run
//! use kmertab::reader::{FastaSource, RecordSource};
//!
//! let source = FastaSource::new("genome.fa");
//! for record in source.records()? {
//!     let record = record?;
//!     println!("{}: {} bases", record.name, record.bases.len());
//! }
//! # Ok::<(), kmertab::error::KmerTabError>(())
//! ```

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use bytes::{Bytes, BytesMut};

use crate::error::KmerTabError;

#[cfg(feature = "tracing")]
use tracing::debug;

/// Marks the first byte of a header line.
pub const HEADER_MARKER: u8 = b'>';

/// A single named sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    /// Header line without the marker and surrounding whitespace.
    pub name: String,
    /// Concatenated sequence lines, whitespace stripped, case preserved.
    pub bases: Bytes,
}

impl SequenceRecord {
    /// Creates a record.
    pub fn new(name: impl Into<String>, bases: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            bases: bases.into(),
        }
    }
}

/// Something that can produce the records of an input, from the beginning.
pub trait RecordSource {
    /// The iterator returned by [`records`](Self::records).
    type Records: Iterator<Item = Result<SequenceRecord, KmerTabError>>;

    /// Opens the input and returns a lazy iterator over its records.
    ///
    /// # Errors
    ///
    /// Returns [`KmerTabError::SequenceRead`] if the input cannot be opened.
    fn records(&self) -> Result<Self::Records, KmerTabError>;
}

/// A FASTA file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaSource {
    path: PathBuf,
}

impl FastaSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for FastaSource {
    type Records = FastaRecords<Box<dyn BufRead>>;

    fn records(&self) -> Result<Self::Records, KmerTabError> {
        let reader = open(&self.path)?;
        Ok(FastaRecords::new(reader, &self.path))
    }
}

/// Check if a path has a gzip extension (.gz).
#[cfg(feature = "gzip")]
fn is_gzip_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

fn open(path: &Path) -> Result<Box<dyn BufRead>, KmerTabError> {
    let file = File::open(path).map_err(|source| KmerTabError::SequenceRead {
        source,
        path: path.to_path_buf(),
    })?;

    #[cfg(feature = "gzip")]
    {
        if is_gzip_path(path) {
            let decoder = flate2::read::MultiGzDecoder::new(file);
            return Ok(Box::new(BufReader::new(decoder)));
        }
    }

    Ok(Box::new(BufReader::new(file)))
}

/// Lazy FASTA parser over a buffered reader.
///
/// Yields one [`SequenceRecord`] per header. Sequence data that appears before
/// the first header is an error: the iterator yields
/// [`KmerTabError::SequenceParse`] once and then ends.
#[derive(Debug)]
pub struct FastaRecords<R> {
    reader: R,
    origin: PathBuf,
    line: Vec<u8>,
    line_number: usize,
    name: Option<String>,
    bases: BytesMut,
    finished: bool,
}

impl<R: BufRead> FastaRecords<R> {
    /// Wraps `reader`; `origin` names the input in error messages.
    pub fn new(reader: R, origin: impl AsRef<Path>) -> Self {
        Self {
            reader,
            origin: origin.as_ref().to_path_buf(),
            line: Vec::new(),
            line_number: 0,
            name: None,
            bases: BytesMut::new(),
            finished: false,
        }
    }

    fn take_record(&mut self, name: String) -> SequenceRecord {
        let bases = self.bases.split().freeze();

        #[cfg(feature = "tracing")]
        debug!(name = %name, bases = bases.len(), "Parsed record");

        SequenceRecord { name, bases }
    }

    fn fail(&mut self, err: KmerTabError) -> Option<Result<SequenceRecord, KmerTabError>> {
        self.finished = true;
        Some(Err(err))
    }
}

impl<R: BufRead> Iterator for FastaRecords<R> {
    type Item = Result<SequenceRecord, KmerTabError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            self.line.clear();
            let read = match self.reader.read_until(b'\n', &mut self.line) {
                Ok(read) => read,
                Err(source) => {
                    let path = self.origin.clone();
                    return self.fail(KmerTabError::SequenceRead { source, path });
                }
            };

            if read == 0 {
                self.finished = true;
                let name = self.name.take()?;
                return Some(Ok(self.take_record(name)));
            }
            self.line_number += 1;

            if self.line.first() == Some(&HEADER_MARKER) {
                let name = String::from_utf8_lossy(&self.line[1..]).trim().to_string();
                if let Some(previous) = self.name.replace(name) {
                    return Some(Ok(self.take_record(previous)));
                }
                continue;
            }

            let data = self.line.trim_ascii();
            if data.is_empty() {
                continue;
            }
            if self.name.is_none() {
                let err = KmerTabError::SequenceParse {
                    details: "sequence data before first header".to_string(),
                    line: self.line_number,
                    path: self.origin.clone(),
                };
                return self.fail(err);
            }
            self.bases.extend_from_slice(data);
        }
    }
}
