//! Fuzz target for the FASTA parser.
//!
//! Arbitrary bytes must never panic the parser, and every record it yields
//! must be free of line breaks and surrounding whitespace.

#![no_main]

use kmertab::reader::FastaRecords;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut errors = 0;

    for result in FastaRecords::new(data, "fuzz.fa") {
        match result {
            Ok(record) => {
                assert!(!record.bases.contains(&b'\n'));
                assert_eq!(record.name.trim(), record.name);
            }
            Err(_) => errors += 1,
        }
    }

    // The parser stops after its first error
    assert!(errors <= 1);
});
