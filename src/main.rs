//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::{
    fmt::Debug,
    fs::File,
    hash::Hash,
    io::{self, Read, Write},
};

use huffcodes::tables::jpeg::StaticTable;
use huffcodes::tools::cli::{huffopts_init, HuffOpts, Mode, SymbolKind};
use huffcodes::{build_codes, byte_frequencies, frequencies, CodeMap, FrequencyEntry};

use log::{info, warn};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() -> Result<(), std::io::Error> {
    let opts = huffopts_init();

    // Log to stderr so the tables on stdout stay clean
    TermLogger::init(
        opts.verbose.level_filter(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    //----- Figure how what we need to do and go do it
    match opts.op_mode {
        Mode::Table(kind) => print_table(&mut out, kind.table())?,
        Mode::Build => {
            let data = read_input(&opts)?;
            match opts.symbols {
                SymbolKind::Bytes => {
                    let entries = byte_frequencies(&data)?;
                    report(&mut out, &opts, entries, &data, |b| {
                        if b.is_ascii_graphic() {
                            format!("{:#04x} '{}'", b, *b as char)
                        } else {
                            format!("{:#04x}", b)
                        }
                    })?
                }
                SymbolKind::Words => {
                    let text = String::from_utf8_lossy(&data);
                    let words = text.split_whitespace().collect::<Vec<_>>();
                    let entries = frequencies(words.iter().copied())?;
                    report(&mut out, &opts, entries, &words, |w| w.to_string())?
                }
            }
        }
    }

    info!("Done.");
    Ok(())
}

/// Read the whole input from the named file, or stdin when no file was given.
fn read_input(opts: &HuffOpts) -> io::Result<Vec<u8>> {
    let mut data = Vec::new();
    match &opts.file {
        Some(name) => {
            info!("Reading {}", name);
            File::open(name)?.read_to_end(&mut data)?;
        }
        None => {
            info!("Reading stdin");
            io::stdin().read_to_end(&mut data)?;
        }
    }
    if data.is_empty() {
        warn!("Input is empty, there is nothing to code");
    }
    Ok(data)
}

/// Build codes from the counted symbols and print one line per symbol, plus a summary.
fn report<S, W, F>(
    out: &mut W,
    opts: &HuffOpts,
    mut entries: Vec<FrequencyEntry<S>>,
    input: &[S],
    label: F,
) -> io::Result<()>
where
    S: Eq + Hash + Debug + Ord + Clone,
    W: Write,
    F: Fn(&S) -> String,
{
    entries.sort_by(|a, b| a.symbol.cmp(&b.symbol));
    let codes: CodeMap<S> = build_codes(entries.clone())?;

    for entry in &entries {
        writeln!(
            out,
            "{:<16} {:>10}  {}",
            label(&entry.symbol),
            entry.count,
            codes.code(&entry.symbol)?
        )?;
    }

    let bits = codes.weighted_length(&entries)?;
    writeln!(
        out,
        "{} symbols, {} distinct, {} bits encoded (longest code {} bits)",
        input.len(),
        codes.len(),
        bits,
        codes.max_code_len()
    )?;

    if opts.encode {
        writeln!(out, "{}", codes.encode(input)?)?;
    }
    Ok(())
}

/// Print every entry of a fixed table.
fn print_table<W: Write>(out: &mut W, table: &StaticTable) -> io::Result<()> {
    writeln!(out, "{} ({} codes)", table.name(), table.len())?;
    for (symbol, code) in table.iter() {
        writeln!(out, "{:#04x}  {}", symbol, code)?;
    }
    Ok(())
}
