//! Fuzz target for window extraction.
//!
//! Every window yielded must have length k and contain only A, C, G, T, and
//! the number of windows must match a naive scan.

#![no_main]

use kmertab::kmer::{KmerLength, ValidWindows};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u8, &[u8])| {
    let (k, data) = input;
    let Ok(k) = KmerLength::new(usize::from(k % 16)) else {
        return;
    };

    let windows: Vec<&[u8]> = ValidWindows::new(data, k).collect();
    for window in &windows {
        assert_eq!(window.len(), k.get());
        assert!(window.iter().all(|b| b"ACGT".contains(b)));
    }

    let naive = data
        .windows(k.get())
        .filter(|w| w.iter().all(|b| b"ACGT".contains(b)))
        .count();
    assert_eq!(windows.len(), naive);
});
