use std::{
    ffi::OsString,
    io::{BufRead, Write},
    path::Path,
};

use crossterm::tty::IsTty;
use horn_sat::{
    builder::{parse::parse_clause, ParserInfo},
    structures::formula::Formula,
    types::err::ErrorKind,
};

pub(super) enum ReadError {
    FailedToOpen(std::io::Error),
    ParseError(ErrorKind),
    Stdin(std::io::Error),
    #[cfg_attr(feature = "xz", allow(dead_code))]
    UnknownExtension(OsString),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::FailedToOpen(e) => write!(f, "Failed to open the input file: {e}"),
            Self::ParseError(err) => write!(f, "Given formula is not a valid Horn formula: {err}"),
            Self::Stdin(e) => write!(f, "Error reading the formula: {e}"),
            Self::UnknownExtension(ex) => {
                write!(f, "Unsupported extension {ex:?}, try enabling the 'xz' feature")
            }
        }
    }
}

/// Reads the formula in the file at `path`, one clause per line.
pub(super) fn read_file(path: &Path) -> Result<Formula, ReadError> {
    log::info!("Reading formula from {path:?}");

    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(e) => return Err(ReadError::FailedToOpen(e)),
    };

    let parse_report = match path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if extension == "xz" => {
            Formula::read(std::io::BufReader::new(xz2::read::XzDecoder::new(&file)))
        }

        #[cfg(not(feature = "xz"))]
        Some(extension) if extension == "xz" => {
            return Err(ReadError::UnknownExtension(extension.to_owned()))
        }

        _ => Formula::read(std::io::BufReader::new(&file)),
    };

    match parse_report {
        Ok((formula, info)) => {
            examine_parser_info(&info);
            Ok(formula)
        }
        Err(e) => Err(ReadError::ParseError(e)),
    }
}

fn examine_parser_info(info: &ParserInfo) {
    log::info!("Read {} lines", info.lines);
    log::info!("Added {} clauses", info.added_clauses);
    if info.duplicate_clauses > 0 {
        log::info!("Skipped {} duplicate clauses", info.duplicate_clauses);
    }
}

/// Reads a formula from stdin, one clause per line, until the end of input.
///
/// A line which fails to parse is reported and skipped, and entry continues.
/// Instructions, the current formula, and a prompt are written only if `echo` is set and stdin is a terminal.
pub(super) fn read_interactive(echo: bool) -> Result<Formula, ReadError> {
    let stdin = std::io::stdin();
    let echo = echo && stdin.is_tty();

    let mut formula = Formula::new();
    let mut buffer = String::new();
    let mut reader = stdin.lock();

    if echo {
        println!("Enter each clause making up your Horn formula line by line!");
        println!("Press '<CTRL> + D' to stop entering new clauses");
    }

    loop {
        if echo {
            println!("Current formula: {formula}");
            print!("> ");
            let _ = std::io::stdout().flush();
        }

        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => return Err(ReadError::Stdin(e)),
        }

        match parse_clause(buffer.trim()) {
            Ok(clause) => {
                formula.add_clause(clause);
            }
            Err(e) => eprintln!("Not a valid Horn clause: {e}"),
        }
    }

    if echo {
        println!();
        println!("Formula whose satisfiability will be determined: {formula}");
    }

    Ok(formula)
}
