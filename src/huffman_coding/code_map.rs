//! The code map is what the huffman builder hands back to the caller: one bit-string code per
//! symbol. Codes are kept as strings of '0' and '1' so the caller decides how they get packed
//! into an actual bitstream.
//!
//! The map also carries a few helpers used to check and exercise a code set: prefix checking,
//! weighted length, and string-level encode/decode.

use std::collections::hash_map::Iter;
use std::fmt::Debug;
use std::hash::Hash;

use log::trace;
use rustc_hash::FxHashMap;

use crate::error::{HuffError, Result};
use crate::tools::freq_count::FrequencyEntry;

/// Mapping from symbol to bit-string code.
#[derive(Debug, Clone)]
pub struct CodeMap<S> {
    codes: FxHashMap<S, String>,
}

impl<S> CodeMap<S>
where
    S: Eq + Hash + Debug,
{
    pub(crate) fn from_map(codes: FxHashMap<S, String>) -> Self {
        Self { codes }
    }

    /// Code for a symbol, if it has one.
    pub fn get(&self, symbol: &S) -> Option<&str> {
        self.codes.get(symbol).map(|code| code.as_str())
    }

    /// Code for a symbol, or SymbolNotFound.
    pub fn code(&self, symbol: &S) -> Result<&str> {
        self.get(symbol).ok_or_else(|| HuffError::SymbolNotFound {
            symbol: format!("{:?}", symbol),
        })
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> CodeIter<'_, S> {
        CodeIter {
            inner: self.codes.iter(),
        }
    }

    /// Length of the longest code in the map.
    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(|code| code.len()).max().unwrap_or(0)
    }

    /// True if no code is empty and no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes = self.codes.values().map(|c| c.as_str()).collect::<Vec<_>>();
        if codes.iter().any(|c| c.is_empty()) {
            return false;
        }
        // Once sorted, any code that prefixes another also prefixes its neighbor.
        codes.sort_unstable();
        codes.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }

    /// Total bits needed to encode the counted input: the sum of count times code length.
    /// Fails with WeightOverflow if the total does not fit in a u64.
    pub fn weighted_length(&self, entries: &[FrequencyEntry<S>]) -> Result<u64> {
        let mut total = 0_u64;
        for entry in entries {
            let bits = entry
                .count
                .checked_mul(self.code(&entry.symbol)?.len() as u64)
                .ok_or(HuffError::WeightOverflow)?;
            total = total.checked_add(bits).ok_or(HuffError::WeightOverflow)?;
        }
        Ok(total)
    }

    /// Concatenate the codes for each symbol into one bit-string.
    pub fn encode<'a, I>(&self, symbols: I) -> Result<String>
    where
        I: IntoIterator<Item = &'a S>,
        S: 'a,
    {
        let mut bits = String::new();
        for symbol in symbols {
            bits.push_str(self.code(symbol)?);
        }
        trace!("Encoded {} bits", bits.len());
        Ok(bits)
    }

    /// Build the inverse (code to symbol) mapping.
    pub fn decoder(&self) -> Decoder<S>
    where
        S: Clone,
    {
        Decoder {
            symbols: self
                .codes
                .iter()
                .map(|(symbol, code)| (code.clone(), symbol.clone()))
                .collect(),
            max_len: self.max_code_len(),
        }
    }

    /// Decode a bit-string produced by `encode`.
    pub fn decode(&self, bits: &str) -> Result<Vec<S>>
    where
        S: Clone,
    {
        self.decoder().decode(bits)
    }

    pub fn into_inner(self) -> FxHashMap<S, String> {
        self.codes
    }
}

/// Iterator over (symbol, code) pairs. Order is not defined.
pub struct CodeIter<'a, S> {
    inner: Iter<'a, S, String>,
}

impl<'a, S> Iterator for CodeIter<'a, S> {
    type Item = (&'a S, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(symbol, code)| (symbol, code.as_str()))
    }
}

/// Inverse of a CodeMap. Walks a bit-string and emits a symbol every time the bits seen so
/// far match a code.
#[derive(Debug, Clone)]
pub struct Decoder<S> {
    symbols: FxHashMap<String, S>,
    max_len: usize,
}

impl<S: Clone> Decoder<S> {
    pub fn decode(&self, bits: &str) -> Result<Vec<S>> {
        let mut decoded = Vec::new();
        let mut current = String::with_capacity(self.max_len);
        // Offset of the first bit of the code we are currently reading
        let mut start = 0;

        for (idx, bit) in bits.chars().enumerate() {
            if bit != '0' && bit != '1' {
                return Err(HuffError::InvalidCode { position: idx });
            }
            current.push(bit);
            if let Some(symbol) = self.symbols.get(&current) {
                decoded.push(symbol.clone());
                current.clear();
                start = idx + 1;
            } else if current.len() >= self.max_len {
                // No code is longer than this, so nothing can match from here
                return Err(HuffError::InvalidCode { position: start });
            }
        }

        // Leftover bits mean the input ended partway through a code
        if !current.is_empty() {
            return Err(HuffError::InvalidCode { position: start });
        }
        Ok(decoded)
    }
}

#[cfg(test)]
mod test {
    use super::CodeMap;
    use crate::error::HuffError;
    use crate::tools::freq_count::FrequencyEntry;
    use rustc_hash::FxHashMap;

    fn sample() -> CodeMap<char> {
        let mut codes = FxHashMap::default();
        codes.insert('A', "0".to_string());
        codes.insert('B', "10".to_string());
        codes.insert('C', "11".to_string());
        CodeMap::from_map(codes)
    }

    #[test]
    fn lookup_test() {
        let map = sample();
        assert_eq!(map.len(), 3);
        assert_eq!(map.get(&'B'), Some("10"));
        assert_eq!(map.get(&'Z'), None);
        assert_eq!(
            map.code(&'Z').unwrap_err(),
            HuffError::SymbolNotFound {
                symbol: "'Z'".to_string()
            }
        );
        assert_eq!(map.max_code_len(), 2);
        assert_eq!(map.iter().count(), 3);
    }

    #[test]
    fn prefix_free_test() {
        assert!(sample().is_prefix_free());

        let mut codes = FxHashMap::default();
        codes.insert(1_u8, "01".to_string());
        codes.insert(2_u8, "011".to_string());
        codes.insert(3_u8, "1".to_string());
        assert!(!CodeMap::from_map(codes).is_prefix_free());

        let mut codes = FxHashMap::default();
        codes.insert(1_u8, "".to_string());
        assert!(!CodeMap::from_map(codes).is_prefix_free());
    }

    #[test]
    fn weighted_length_test() {
        let entries = vec![
            FrequencyEntry::new('A', 4),
            FrequencyEntry::new('B', 2),
            FrequencyEntry::new('C', 1),
        ];
        assert_eq!(sample().weighted_length(&entries), Ok(10));

        // 'B' has a two bit code, so the product overflows
        let entries = vec![FrequencyEntry::new('B', u64::MAX)];
        assert_eq!(
            sample().weighted_length(&entries),
            Err(HuffError::WeightOverflow)
        );

        // Each product fits but the sum does not
        let entries = vec![
            FrequencyEntry::new('A', u64::MAX),
            FrequencyEntry::new('C', 1),
        ];
        assert_eq!(
            sample().weighted_length(&entries),
            Err(HuffError::WeightOverflow)
        );
    }

    #[test]
    fn into_inner_test() {
        let codes = sample().into_inner();
        assert_eq!(codes.len(), 3);
        assert_eq!(codes.get(&'A').map(|c| c.as_str()), Some("0"));
        assert_eq!(codes.get(&'C').map(|c| c.as_str()), Some("11"));
    }

    #[test]
    fn encode_decode_test() {
        let map = sample();
        let input = "ABACCA".chars().collect::<Vec<_>>();
        let bits = map.encode(&input).unwrap();
        assert_eq!(bits, "010011110");
        assert_eq!(map.decode(&bits).unwrap(), input);
        assert_eq!(map.decode("").unwrap(), Vec::<char>::new());
    }

    #[test]
    fn encode_unknown_test() {
        let map = sample();
        let input = ['A', 'D'];
        assert!(matches!(
            map.encode(&input),
            Err(HuffError::SymbolNotFound { .. })
        ));
    }

    #[test]
    fn decode_bad_bits_test() {
        let map = sample();
        // Ends partway through "10"
        assert_eq!(
            map.decode("0101"),
            Err(HuffError::InvalidCode { position: 3 })
        );
        assert_eq!(
            map.decode("01x"),
            Err(HuffError::InvalidCode { position: 2 })
        );

        // "00" and "01" are codes, "1" leads nowhere
        let mut codes = FxHashMap::default();
        codes.insert(0_u8, "00".to_string());
        codes.insert(1_u8, "01".to_string());
        let map = CodeMap::from_map(codes);
        assert_eq!(
            map.decode("0011"),
            Err(HuffError::InvalidCode { position: 2 })
        );
    }
}
