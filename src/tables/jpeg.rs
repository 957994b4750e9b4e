//! Standard JPEG huffman tables (ITU T.81 Annex K.3), written out as literal bit-strings.
//!
//! These are used in place of generated codes when a decoder expects the standard tables.
//! JPEG adds rules of its own (no code longer than 16 bits, no all-ones code) that the
//! general-purpose builder does not follow, so the tables are data here rather than built.
//!
//! Only the luminance AC table is spelled out. `AC_CHROMINANCE` reuses the luminance AC codes
//! rather than carrying the separate Annex K chrominance AC table.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rustc_hash::FxHashMap;

use crate::error::{HuffError, Result};
use crate::huffman_coding::code_map::CodeMap;

/// An immutable symbol to code table. Entries are sorted by symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticTable {
    name: &'static str,
    entries: &'static [(u8, &'static str)],
}

impl StaticTable {
    const fn new(name: &'static str, entries: &'static [(u8, &'static str)]) -> Self {
        Self { name, entries }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Code for a symbol, if the table defines one.
    pub fn get(&self, symbol: u8) -> Option<&'static str> {
        self.entries
            .binary_search_by_key(&symbol, |&(sym, _)| sym)
            .ok()
            .map(|idx| self.entries[idx].1)
    }

    /// Code for a symbol, or SymbolNotFound for symbols outside the table.
    pub fn code(&self, symbol: u8) -> Result<&'static str> {
        self.get(symbol).ok_or_else(|| HuffError::SymbolNotFound {
            symbol: format!("{:#04x}", symbol),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (symbol, code) pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &'static str)> {
        self.entries.iter().copied()
    }

    /// Copy the table into a CodeMap so it can drive the same encode/decode helpers as
    /// generated codes.
    pub fn to_code_map(&self) -> CodeMap<u8> {
        let codes = self
            .iter()
            .map(|(sym, code)| (sym, code.to_string()))
            .collect::<FxHashMap<u8, String>>();
        CodeMap::from_map(codes)
    }
}

/// Selects one of the four standard tables by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    DcLuminance,
    DcChrominance,
    AcLuminance,
    AcChrominance,
}

impl TableKind {
    pub fn table(self) -> &'static StaticTable {
        match self {
            TableKind::DcLuminance => &DC_LUMINANCE,
            TableKind::DcChrominance => &DC_CHROMINANCE,
            TableKind::AcLuminance => &AC_LUMINANCE,
            TableKind::AcChrominance => &AC_CHROMINANCE,
        }
    }
}

impl FromStr for TableKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "dc-lum" => Ok(TableKind::DcLuminance),
            "dc-chrom" => Ok(TableKind::DcChrominance),
            "ac-lum" => Ok(TableKind::AcLuminance),
            "ac-chrom" => Ok(TableKind::AcChrominance),
            _ => Err(format!(
                "unknown table '{}' (expected dc-lum, dc-chrom, ac-lum or ac-chrom)",
                s
            )),
        }
    }
}

impl Display for TableKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.table().name())
    }
}

pub static DC_LUMINANCE: StaticTable = StaticTable::new("dc-luminance", &DC_LUMINANCE_CODES);
pub static DC_CHROMINANCE: StaticTable =
    StaticTable::new("dc-chrominance", &DC_CHROMINANCE_CODES);
pub static AC_LUMINANCE: StaticTable = StaticTable::new("ac-luminance", &AC_LUMINANCE_CODES);
/// Shares the luminance AC codes.
pub static AC_CHROMINANCE: StaticTable = StaticTable::new("ac-chrominance", &AC_LUMINANCE_CODES);

const DC_LUMINANCE_CODES: [(u8, &str); 12] = [
    (0, "00"),
    (1, "010"),
    (2, "011"),
    (3, "100"),
    (4, "101"),
    (5, "110"),
    (6, "1110"),
    (7, "11110"),
    (8, "111110"),
    (9, "1111110"),
    (10, "11111110"),
    (11, "111111110"),
];

const DC_CHROMINANCE_CODES: [(u8, &str); 12] = [
    (0, "00"),
    (1, "01"),
    (2, "10"),
    (3, "110"),
    (4, "1110"),
    (5, "11110"),
    (6, "111110"),
    (7, "1111110"),
    (8, "11111110"),
    (9, "111111110"),
    (10, "1111111110"),
    (11, "11111111110"),
];

// Symbol is (run << 4) | size. 0x00 is end of block, 0xf0 is a run of sixteen zeros.
const AC_LUMINANCE_CODES: [(u8, &str); 162] = [
    (0x00, "1010"),
    (0x01, "00"),
    (0x02, "01"),
    (0x03, "100"),
    (0x04, "1011"),
    (0x05, "11010"),
    (0x06, "1111000"),
    (0x07, "11111000"),
    (0x08, "1111110110"),
    (0x09, "1111111110000010"),
    (0x0a, "1111111110000011"),
    (0x11, "1100"),
    (0x12, "11011"),
    (0x13, "1111001"),
    (0x14, "111110110"),
    (0x15, "11111110110"),
    (0x16, "1111111110000100"),
    (0x17, "1111111110000101"),
    (0x18, "1111111110000110"),
    (0x19, "1111111110000111"),
    (0x1a, "1111111110001000"),
    (0x21, "11100"),
    (0x22, "11111001"),
    (0x23, "1111110111"),
    (0x24, "111111110100"),
    (0x25, "1111111110001001"),
    (0x26, "1111111110001010"),
    (0x27, "1111111110001011"),
    (0x28, "1111111110001100"),
    (0x29, "1111111110001101"),
    (0x2a, "1111111110001110"),
    (0x31, "111010"),
    (0x32, "111110111"),
    (0x33, "111111110101"),
    (0x34, "1111111110001111"),
    (0x35, "1111111110010000"),
    (0x36, "1111111110010001"),
    (0x37, "1111111110010010"),
    (0x38, "1111111110010011"),
    (0x39, "1111111110010100"),
    (0x3a, "1111111110010101"),
    (0x41, "111011"),
    (0x42, "1111111000"),
    (0x43, "1111111110010110"),
    (0x44, "1111111110010111"),
    (0x45, "1111111110011000"),
    (0x46, "1111111110011001"),
    (0x47, "1111111110011010"),
    (0x48, "1111111110011011"),
    (0x49, "1111111110011100"),
    (0x4a, "1111111110011101"),
    (0x51, "1111010"),
    (0x52, "11111110111"),
    (0x53, "1111111110011110"),
    (0x54, "1111111110011111"),
    (0x55, "1111111110100000"),
    (0x56, "1111111110100001"),
    (0x57, "1111111110100010"),
    (0x58, "1111111110100011"),
    (0x59, "1111111110100100"),
    (0x5a, "1111111110100101"),
    (0x61, "1111011"),
    (0x62, "111111110110"),
    (0x63, "1111111110100110"),
    (0x64, "1111111110100111"),
    (0x65, "1111111110101000"),
    (0x66, "1111111110101001"),
    (0x67, "1111111110101010"),
    (0x68, "1111111110101011"),
    (0x69, "1111111110101100"),
    (0x6a, "1111111110101101"),
    (0x71, "11111010"),
    (0x72, "111111110111"),
    (0x73, "1111111110101110"),
    (0x74, "1111111110101111"),
    (0x75, "1111111110110000"),
    (0x76, "1111111110110001"),
    (0x77, "1111111110110010"),
    (0x78, "1111111110110011"),
    (0x79, "1111111110110100"),
    (0x7a, "1111111110110101"),
    (0x81, "111111000"),
    (0x82, "111111111000000"),
    (0x83, "1111111110110110"),
    (0x84, "1111111110110111"),
    (0x85, "1111111110111000"),
    (0x86, "1111111110111001"),
    (0x87, "1111111110111010"),
    (0x88, "1111111110111011"),
    (0x89, "1111111110111100"),
    (0x8a, "1111111110111101"),
    (0x91, "111111001"),
    (0x92, "1111111110111110"),
    (0x93, "1111111110111111"),
    (0x94, "1111111111000000"),
    (0x95, "1111111111000001"),
    (0x96, "1111111111000010"),
    (0x97, "1111111111000011"),
    (0x98, "1111111111000100"),
    (0x99, "1111111111000101"),
    (0x9a, "1111111111000110"),
    (0xa1, "111111010"),
    (0xa2, "1111111111000111"),
    (0xa3, "1111111111001000"),
    (0xa4, "1111111111001001"),
    (0xa5, "1111111111001010"),
    (0xa6, "1111111111001011"),
    (0xa7, "1111111111001100"),
    (0xa8, "1111111111001101"),
    (0xa9, "1111111111001110"),
    (0xaa, "1111111111001111"),
    (0xb1, "1111111001"),
    (0xb2, "1111111111010000"),
    (0xb3, "1111111111010001"),
    (0xb4, "1111111111010010"),
    (0xb5, "1111111111010011"),
    (0xb6, "1111111111010100"),
    (0xb7, "1111111111010101"),
    (0xb8, "1111111111010110"),
    (0xb9, "1111111111010111"),
    (0xba, "1111111111011000"),
    (0xc1, "1111111010"),
    (0xc2, "1111111111011001"),
    (0xc3, "1111111111011010"),
    (0xc4, "1111111111011011"),
    (0xc5, "1111111111011100"),
    (0xc6, "1111111111011101"),
    (0xc7, "1111111111011110"),
    (0xc8, "1111111111011111"),
    (0xc9, "1111111111100000"),
    (0xca, "1111111111100001"),
    (0xd1, "11111111000"),
    (0xd2, "1111111111100010"),
    (0xd3, "1111111111100011"),
    (0xd4, "1111111111100100"),
    (0xd5, "1111111111100101"),
    (0xd6, "1111111111100110"),
    (0xd7, "1111111111100111"),
    (0xd8, "1111111111101000"),
    (0xd9, "1111111111101001"),
    (0xda, "1111111111101010"),
    (0xe1, "1111111111101011"),
    (0xe2, "1111111111101100"),
    (0xe3, "1111111111101101"),
    (0xe4, "1111111111101110"),
    (0xe5, "1111111111101111"),
    (0xe6, "1111111111110000"),
    (0xe7, "1111111111110001"),
    (0xe8, "1111111111110010"),
    (0xe9, "1111111111110011"),
    (0xea, "1111111111110100"),
    (0xf0, "11111111001"),
    (0xf1, "1111111111110101"),
    (0xf2, "1111111111110110"),
    (0xf3, "1111111111110111"),
    (0xf4, "1111111111111000"),
    (0xf5, "1111111111111001"),
    (0xf6, "1111111111111010"),
    (0xf7, "1111111111111011"),
    (0xf8, "1111111111111100"),
    (0xf9, "1111111111111101"),
    (0xfa, "1111111111111110"),
];
