//! Direct library API tests.
//!
//! These tests call the library functions directly without going through the CLI,
//! enabling more precise assertions about behavior and return values.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Write;

use kmertab::{
    builder::KmerTabulator,
    cli::OutputFormat,
    error::{ErrorKind, KmerTabError},
    kmer::KmerLength,
    reader::{FastaSource, RecordSource, SequenceRecord},
    run::count_kmers,
    table::{tabulate, FrequencyTable},
    writer::{write_table, write_table_to_path},
};
use tempfile::NamedTempFile;

/// Creates a temporary FASTA file with the given content and returns its path.
fn temp_fasta(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

fn k(k: usize) -> KmerLength {
    KmerLength::new(k).unwrap()
}

#[test]
fn count_kmers_basic() {
    let fasta = temp_fasta(">seq1\nACGTACGT\n");
    let table = count_kmers(fasta.path(), k(3)).unwrap();

    assert_eq!(table.get("ACG"), Some(2));
    assert_eq!(table.get("CGT"), Some(2));
    assert_eq!(table.get("GTA"), Some(1));
    assert_eq!(table.get("TAC"), Some(1));
    assert_eq!(table.len(), 4);
}

#[test]
fn count_kmers_simple_fixture() {
    let table = count_kmers("tests/fixtures/simple.fa", k(3)).unwrap();

    assert!(!table.is_empty());
    for (kmer, count) in table.iter() {
        assert!(count > 0, "k-mer {kmer} has non-positive count {count}");
        assert_eq!(kmer.len(), 3, "k-mer {kmer} is not length 3");
    }
    assert_eq!(table.total(), 11);
}

#[test]
fn count_kmers_does_not_fold_reverse_complements() {
    let fasta = temp_fasta(">seq\nAAACCCTTT\n");
    let table = count_kmers(fasta.path(), k(3)).unwrap();

    assert_eq!(table.get("AAA"), Some(1));
    assert_eq!(table.get("TTT"), Some(1));
}

#[test]
fn count_kmers_skips_every_non_acgt_symbol() {
    let fasta = temp_fasta(">seq\nAC-GT.AC*GTRYKM ACGT\n");
    let table = count_kmers(fasta.path(), k(2)).unwrap();

    for (kmer, _) in table.iter() {
        assert!(kmer.bytes().all(|b| b"ACGT".contains(&b)), "bad key {kmer}");
    }
    // AC, GT, AC, GT, then ACGT (inner space survives line trimming)
    assert_eq!(table.get("AC"), Some(3));
    assert_eq!(table.get("GT"), Some(3));
    assert_eq!(table.get("CG"), Some(1));
}

#[test]
fn count_kmers_empty_file() {
    let fasta = temp_fasta("");
    let table = count_kmers(fasta.path(), k(3)).unwrap();
    assert!(table.is_empty());
}

#[test]
fn count_kmers_header_only() {
    let fasta = temp_fasta(">lonely\n");
    let table = count_kmers(fasta.path(), k(1)).unwrap();
    assert!(table.is_empty());
}

#[test]
fn count_kmers_missing_file() {
    let err = count_kmers("/nonexistent/input.fa", k(3)).unwrap_err();
    assert!(matches!(err, KmerTabError::SequenceRead { .. }));
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn count_kmers_rejects_leading_sequence_data() {
    let err = count_kmers("tests/fixtures/no_header.fa", k(3)).unwrap_err();
    assert!(matches!(err, KmerTabError::SequenceParse { line: 1, .. }));
}

#[test]
fn fasta_source_yields_names_and_bases() {
    let source = FastaSource::new("tests/fixtures/multi_line.fa");
    let records: Vec<SequenceRecord> = source.records().unwrap().map(Result::unwrap).collect();

    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["chr1 first chromosome", "chr2", "empty", "chr3"]);
    assert_eq!(&records[0].bases[..], b"ACGTACGTACGT");
    assert_eq!(&records[1].bases[..], b"NNNNACGTRYACGT");
    assert!(records[2].bases.is_empty());
    assert_eq!(&records[3].bases[..], b"ttgacc");
}

#[test]
fn tabulate_in_memory_records() {
    let records = vec![
        Ok(SequenceRecord::new("a", "ACGT")),
        Ok(SequenceRecord::new("b", "acgt")),
    ];
    let table = tabulate(records, k(4)).unwrap();
    assert_eq!(table.get("ACGT"), Some(2));
    assert_eq!(table.len(), 1);
}

#[test]
fn builder_matches_function_api() {
    let from_builder = KmerTabulator::new()
        .k(3)
        .unwrap()
        .tabulate("tests/fixtures/multi_line.fa")
        .unwrap();
    let from_fn = count_kmers("tests/fixtures/multi_line.fa", k(3)).unwrap();
    assert_eq!(from_builder, from_fn);
}

#[test]
fn write_then_read_back_tsv() {
    let table = count_kmers("tests/fixtures/simple.fa", k(2)).unwrap();
    let out = NamedTempFile::new().unwrap();

    write_table_to_path(&table, OutputFormat::Tsv, out.path()).unwrap();

    let written = std::fs::read_to_string(out.path()).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), table.len());
    for (line, (kmer, count)) in lines.iter().zip(table.iter()) {
        assert_eq!(*line, format!("{kmer}\t{count}"));
    }
    assert!(written.ends_with('\n'));
}

#[test]
fn write_table_to_vec() {
    let mut table = FrequencyTable::new(k(3));
    table.add_sequence(b"ACGNACGT");

    let mut out = Vec::new();
    write_table(&table, OutputFormat::Tsv, &mut out).unwrap();
    assert_eq!(out, b"ACG\t2\nCGT\t1\n");
}
