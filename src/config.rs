use std::path::PathBuf;

use crate::{
    cli::{Args, OutputFormat},
    error::KmerTabError,
    kmer::KmerLength,
};

/// A validated tabulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub k: KmerLength,
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub min_count: u64,
    pub histogram: Option<PathBuf>,
    pub quiet: bool,
}

impl Config {
    /// Builds a config with default options for `input` and `output`.
    pub fn new(
        k: usize,
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Result<Self, KmerTabError> {
        Ok(Self {
            k: KmerLength::new(k)?,
            input: input.into(),
            output: output.into(),
            format: OutputFormat::default(),
            min_count: 1,
            histogram: None,
            quiet: false,
        })
    }
}

impl TryFrom<Args> for Config {
    type Error = KmerTabError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        if args.histogram.as_ref() == Some(&args.output) {
            return Err(KmerTabError::ConflictingOutputs { path: args.output });
        }
        Ok(Self {
            k: KmerLength::new(args.k)?,
            input: args.input,
            output: args.output,
            format: args.format,
            min_count: args.min_count,
            histogram: args.histogram,
            quiet: args.quiet,
        })
    }
}
