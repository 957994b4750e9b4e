use clap::Parser;
use log::LevelFilter;
use std::{fmt::Display, fmt::Formatter};

use crate::tables::jpeg::TableKind;

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Builds huffman prefix codes from a symbol stream, or prints the standard JPEG tables",
    long_about = None)]
pub struct Args {
    /// File to read symbols from. Reads stdin when absent
    #[clap()]
    filename: Option<String>,

    /// Print a standard table instead: dc-lum, dc-chrom, ac-lum or ac-chrom
    #[clap(short = 't', long = "table")]
    table: Option<TableKind>,

    /// Treat whitespace separated words as symbols instead of bytes
    #[clap(short = 'w', long = "words")]
    words: bool,

    /// Print the encoded bit-string after the code table
    #[clap(short = 'e', long = "encode")]
    encode: bool,

    /// Sets verbosity. 0 shows nothing, 5 is chatty
    #[clap(short = 'v', long = "verbosity", default_value_t = 2)]
    v: u8,

    /// Suppress all log output
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,
}

/// Verbosity of user information
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Off,
            Verbosity::Errors => LevelFilter::Error,
            Verbosity::Warnings => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

impl From<u8> for Verbosity {
    fn from(v: u8) -> Self {
        match v {
            0 => Verbosity::Quiet,
            1 => Verbosity::Errors,
            2 => Verbosity::Warnings,
            3 => Verbosity::Info,
            4 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }
}

/// Build codes from input, or print a fixed table
#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    Build,
    Table(TableKind),
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// What counts as one symbol of input
#[derive(Debug, PartialEq, Eq)]
pub enum SymbolKind {
    Bytes,
    Words,
}

#[derive(Debug)]
pub struct HuffOpts {
    /// Name of file to read for input, stdin if None
    pub file: Option<String>,
    /// Build/Table
    pub op_mode: Mode,
    /// How input is split into symbols
    pub symbols: SymbolKind,
    /// Also print the encoded input
    pub encode: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            file: None,
            op_mode: Mode::Build,
            symbols: SymbolKind::Bytes,
            encode: false,
            verbose: Verbosity::Warnings,
        }
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy command line stuff from clap's structure into our internal structure
impl From<Args> for HuffOpts {
    fn from(args: Args) -> Self {
        let mut opts = HuffOpts::new();
        opts.file = args.filename;
        if let Some(kind) = args.table {
            opts.op_mode = Mode::Table(kind);
        }
        if args.words {
            opts.symbols = SymbolKind::Words;
        }
        opts.encode = args.encode;
        opts.verbose = if args.quiet {
            Verbosity::Quiet
        } else {
            Verbosity::from(args.v)
        };
        opts
    }
}

/// Parse the process arguments into options.
pub fn huffopts_init() -> HuffOpts {
    HuffOpts::from(Args::parse())
}

#[cfg(test)]
mod test {
    use super::{Args, HuffOpts, Mode, SymbolKind, Verbosity};
    use crate::tables::jpeg::TableKind;
    use clap::Parser;
    use log::LevelFilter;

    fn opts(args: &[&str]) -> HuffOpts {
        HuffOpts::from(Args::try_parse_from(args).unwrap())
    }

    #[test]
    fn defaults_test() {
        let o = opts(&["huffcodes"]);
        assert_eq!(o.file, None);
        assert_eq!(o.op_mode, Mode::Build);
        assert_eq!(o.symbols, SymbolKind::Bytes);
        assert!(!o.encode);
        assert_eq!(o.verbose, Verbosity::Warnings);
    }

    #[test]
    fn build_options_test() {
        let o = opts(&["huffcodes", "-w", "-e", "-v", "4", "input.txt"]);
        assert_eq!(o.file.as_deref(), Some("input.txt"));
        assert_eq!(o.symbols, SymbolKind::Words);
        assert!(o.encode);
        assert_eq!(o.verbose.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn table_option_test() {
        let o = opts(&["huffcodes", "--table", "dc-chrom", "-q"]);
        assert_eq!(o.op_mode, Mode::Table(TableKind::DcChrominance));
        assert_eq!(o.verbose, Verbosity::Quiet);
        assert!(Args::try_parse_from(["huffcodes", "-t", "dc"]).is_err());
    }

    #[test]
    fn verbosity_test() {
        assert_eq!(Verbosity::from(0), Verbosity::Quiet);
        assert_eq!(Verbosity::from(9), Verbosity::Trace);
        assert!(Verbosity::Info > Verbosity::Errors);
    }
}
