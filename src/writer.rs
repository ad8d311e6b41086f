//! Writing frequency tables.
//!
//! The default format is one `kmer\tcount` line per entry, ascending by
//! k-mer, with no header row. Destinations are created or truncated.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use serde::Serialize;

use crate::{cli::OutputFormat, error::KmerTabError, table::FrequencyTable};

#[cfg(feature = "tracing")]
use tracing::info;

/// A k-mer with its count, used for JSON serialization.
#[derive(Serialize)]
struct KmerCount<'a> {
    kmer: &'a str,
    count: u64,
}

/// Writes `table` to `writer` in `format`.
///
/// # Example
///
/// ```rust
/// use kmertab::cli::OutputFormat;
/// use kmertab::kmer::KmerLength;
/// use kmertab::table::FrequencyTable;
/// use kmertab::writer::write_table;
///
/// let mut table = FrequencyTable::new(KmerLength::new(2)?);
/// table.add_sequence(b"ACGT");
///
/// let mut out = Vec::new();
/// write_table(&table, OutputFormat::Tsv, &mut out)?;
/// assert_eq!(String::from_utf8(out)?, "AC\t1\nCG\t1\nGT\t1\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_table<W: Write>(
    table: &FrequencyTable,
    format: OutputFormat,
    mut writer: W,
) -> io::Result<()> {
    match format {
        OutputFormat::Tsv => {
            for (kmer, count) in table.iter() {
                writeln!(writer, "{kmer}\t{count}")?;
            }
        }
        OutputFormat::Json => {
            let json_data: Vec<KmerCount<'_>> = table
                .iter()
                .map(|(kmer, count)| KmerCount { kmer, count })
                .collect();
            serde_json::to_writer_pretty(&mut writer, &json_data)?;
            writeln!(writer)?;
        }
    }
    writer.flush()
}

/// Creates (or truncates) the file at `path` and writes `table` into it.
pub fn write_table_to_path<P: AsRef<Path>>(
    table: &FrequencyTable,
    format: OutputFormat,
    path: P,
) -> Result<(), KmerTabError> {
    let path = path.as_ref();
    write_table_into(table, format, create(path)?, path)
}

/// Writes `table` into an already opened destination; `path` names it in errors.
pub(crate) fn write_table_into<W: Write>(
    table: &FrequencyTable,
    format: OutputFormat,
    writer: W,
    path: &Path,
) -> Result<(), KmerTabError> {
    write_table(table, format, writer).map_err(|source| KmerTabError::WriteError {
        source,
        path: path.to_path_buf(),
    })?;

    #[cfg(feature = "tracing")]
    info!(path = %path.display(), format = %format, entries = table.len(), "Wrote k-mer table");

    Ok(())
}

/// Opens `path` for writing, truncating any existing content.
pub(crate) fn create(path: &Path) -> Result<BufWriter<File>, KmerTabError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| KmerTabError::OutputCreate {
            source,
            path: path.to_path_buf(),
        })
}
