//! Reading a formula, one clause per line.
//!
//! ```rust
//! # use horn_sat::structures::formula::Formula;
//! # use std::io::Write;
//! let mut horn = vec![];
//! let _ = horn.write(b"-> p
//! p & q -> r
//! p -> q
//! q & p -> r");
//!
//! let (formula, info) = Formula::read(horn.as_slice()).unwrap();
//!
//! assert_eq!(info.lines, 4);
//! assert_eq!(info.added_clauses, 3);
//! assert_eq!(formula.clause_count(), 3);
//! ```
//!
//! Every line is read as a clause, and so a blank line is an error.
//! Errors are returned with the (one-indexed) line on which they were found.

use std::{io::BufRead, str::FromStr};

use crate::{
    builder::parse::parse_clause,
    misc::log::targets::{self},
    structures::formula::Formula,
    types::err::{self},
};

/// Details of reading a formula.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// A count of lines read.
    pub lines: usize,

    /// A count of clauses added to the formula.
    pub added_clauses: usize,

    /// A count of clauses read which were already part of the formula.
    pub duplicate_clauses: usize,
}

impl Formula {
    /// Reads a formula, returning the formula and details of the read.
    pub fn read(reader: impl BufRead) -> Result<(Formula, ParserInfo), err::ErrorKind> {
        let mut formula = Formula::new();
        let info = formula.read_clauses(reader)?;
        Ok((formula, info))
    }

    /// Reads clauses into the formula.
    ///
    /// If some line fails to parse the clauses of all previous lines remain part of the formula, and no clause is added for the failed line.
    pub fn read_clauses(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, err::ErrorKind> {
        let mut info = ParserInfo::default();
        let mut buffer = String::with_capacity(1024);

        loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => info.lines += 1,
                Err(_) => return Err(err::ErrorKind::Read(info.lines)),
            }

            let line = buffer.trim_end_matches(['\n', '\r']);

            let clause = match parse_clause(line) {
                Ok(clause) => clause,
                Err(e) => {
                    log::info!(target: targets::FORMULA, "Line {}: {e}", info.lines);
                    return Err(err::ErrorKind::Line(info.lines, e));
                }
            };

            match self.add_clause(clause) {
                true => info.added_clauses += 1,
                false => info.duplicate_clauses += 1,
            }
        }

        log::info!(target: targets::FORMULA, "Read {} lines to {} clauses", info.lines, info.added_clauses);
        Ok(info)
    }
}

impl FromStr for Formula {
    type Err = err::ErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Formula::read(s.as_bytes()).map(|(formula, _)| formula)
    }
}
