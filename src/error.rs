//! Error types for kmertab.
//!
//! Every failure the tool can report is a variant of [`KmerTabError`]. Each
//! variant belongs to exactly one [`ErrorKind`]: input could not be parsed,
//! configuration was invalid, or output could not be written.

use std::path::PathBuf;
use thiserror::Error;

/// Minimum accepted k-mer length.
pub const MIN_KMER_LENGTH: usize = 1;

/// Errors that can occur in kmertab operations.
#[derive(Debug, Error)]
pub enum KmerTabError {
    /// K-mer length is below the minimum.
    #[error("invalid k-mer length {k}: must be at least {min}")]
    InvalidKmerLength { k: usize, min: usize },

    /// A counting method was called before a k-mer length was configured.
    #[error("k-mer length not set; call .k() first")]
    KmerLengthNotSet,

    /// Two outputs were pointed at the same file.
    #[error("output '{path}' is also the histogram destination")]
    ConflictingOutputs { path: PathBuf },

    /// Failed to open or read the sequence file.
    #[error("failed to read sequence file '{path}': {source}")]
    SequenceRead {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// The sequence file is malformed.
    #[error("failed to parse sequence file '{path}' at line {line}: {details}")]
    SequenceParse {
        details: String,
        line: usize,
        path: PathBuf,
    },

    /// Failed to create the output file.
    #[error("failed to create output file '{path}': {source}")]
    OutputCreate {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Failed to write output.
    #[error("failed to write output '{path}': {source}")]
    WriteError {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
}

/// Coarse classification of a [`KmerTabError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input missing, unreadable or malformed.
    Parse,
    /// Invalid configuration, detected before any processing.
    Validation,
    /// Output destination could not be created or written.
    Write,
}

impl KmerTabError {
    /// Returns the kind of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidKmerLength { .. }
            | Self::KmerLengthNotSet
            | Self::ConflictingOutputs { .. } => ErrorKind::Validation,
            Self::SequenceRead { .. } | Self::SequenceParse { .. } => ErrorKind::Parse,
            Self::OutputCreate { .. } | Self::WriteError { .. } => ErrorKind::Write,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse => write!(f, "parse error"),
            Self::Validation => write!(f, "validation error"),
            Self::Write => write!(f, "write error"),
        }
    }
}

/// Error for invalid k-mer length.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("k-mer length {k} is out of range: must be at least {min}")]
pub struct KmerLengthError {
    /// The invalid k value that was provided.
    pub k: usize,
    /// Minimum valid k-mer length.
    pub min: usize,
}

impl From<KmerLengthError> for KmerTabError {
    fn from(err: KmerLengthError) -> Self {
        Self::InvalidKmerLength {
            k: err.k,
            min: err.min,
        }
    }
}
