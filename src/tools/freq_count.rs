use std::hash::Hash;

use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::error::{HuffError, Result};

/// A symbol and the number of times it occurred in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry<S> {
    pub symbol: S,
    pub count: u64,
}

impl<S> FrequencyEntry<S> {
    pub fn new(symbol: S, count: u64) -> Self {
        Self { symbol, count }
    }
}

/// Count every symbol in the input. Each symbol appears in exactly one entry, and the
/// counts sum to the input length. Entry order is not defined.
pub fn frequencies<S, I>(symbols: I) -> Result<Vec<FrequencyEntry<S>>>
where
    S: Eq + Hash,
    I: IntoIterator<Item = S>,
{
    let mut counts: FxHashMap<S, u64> = FxHashMap::default();
    symbols
        .into_iter()
        .for_each(|symbol| *counts.entry(symbol).or_insert(0) += 1);

    if counts.is_empty() {
        return Err(HuffError::EmptyInput);
    }
    debug!("Counted {} distinct symbols", counts.len());

    Ok(counts
        .into_iter()
        .map(|(symbol, count)| FrequencyEntry::new(symbol, count))
        .collect())
}

/// Returns a frequency count of byte data, skipping bytes that never occur. Uses parallelism
/// when data set is over 64k.
pub fn byte_frequencies(data: &[u8]) -> Result<Vec<FrequencyEntry<u8>>> {
    if data.is_empty() {
        return Err(HuffError::EmptyInput);
    }

    let freqs = if data.len() > 64_000 {
        // 16k is pretty much the sweet spot for chunk size.
        data.par_chunks(16_000)
            .fold(
                || vec![0_u64; 256],
                |mut freqs, chunk| {
                    chunk.iter().for_each(|&el| freqs[el as usize] += 1);
                    freqs
                },
            )
            .reduce(
                || vec![0_u64; 256],
                |s, f| s.iter().zip(&f).map(|(a, b)| a + b).collect::<Vec<u64>>(),
            )
    } else {
        let mut freqs = vec![0_u64; 256];
        data.iter().for_each(|&el| freqs[el as usize] += 1);
        freqs
    };

    let entries = freqs
        .iter()
        .enumerate()
        .filter(|(_, count)| **count > 0)
        .map(|(byte, &count)| FrequencyEntry::new(byte as u8, count))
        .collect::<Vec<_>>();
    debug!("Counted {} distinct bytes in {} bytes", entries.len(), data.len());
    Ok(entries)
}

#[cfg(test)]
mod test {
    use super::{byte_frequencies, frequencies, FrequencyEntry};
    use crate::error::HuffError;

    #[test]
    fn counts_test() {
        let mut entries = frequencies("AAAABBC".chars()).unwrap();
        entries.sort_by_key(|e| e.symbol);
        assert_eq!(
            entries,
            vec![
                FrequencyEntry::new('A', 4),
                FrequencyEntry::new('B', 2),
                FrequencyEntry::new('C', 1),
            ]
        );
    }

    #[test]
    fn counts_sum_to_length_test() {
        let words = "the cat and the hat and the bat".split_whitespace();
        let entries = frequencies(words).unwrap();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries.iter().map(|e| e.count).sum::<u64>(), 8);
    }

    #[test]
    fn empty_test() {
        assert_eq!(
            frequencies(Vec::<u8>::new()).unwrap_err(),
            HuffError::EmptyInput
        );
        assert_eq!(byte_frequencies(&[]).unwrap_err(), HuffError::EmptyInput);
    }

    #[test]
    fn bytes_test() {
        let entries = byte_frequencies("Making a silly test.".as_bytes()).unwrap();
        assert_eq!(entries.len(), 13);
        assert_eq!(entries[0], FrequencyEntry::new(b' ', 3));
        assert_eq!(entries.iter().map(|e| e.count).sum::<u64>(), 20);
    }

    #[test]
    fn bytes_parallel_test() {
        let data = (0..100_000_u32).map(|i| (i % 7) as u8).collect::<Vec<u8>>();
        let parallel = byte_frequencies(&data).unwrap();
        let mut serial = frequencies(data.iter().copied()).unwrap();
        serial.sort_by_key(|e| e.symbol);
        assert_eq!(parallel, serial);
    }
}
