//! Error types used in the library.
//!
//! - Parse errors are returned when a line does not describe a Horn clause.
//!   Each carries enough of the line to report the issue without access to the input.
//! - Reading a formula wraps parse errors with the line they were found on.
//! - Solving never fails, and so has no errors.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// General errors, wrapping the specific errors of the library.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// A clause failed to parse.
    Parse(ParseError),

    /// The clause on the given (one-indexed) line of some input failed to parse.
    Line(usize, ParseError),

    /// Reading from some input failed after the given number of lines were read.
    Read(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Line(line, e) => write!(f, "Line {line}: {e}"),
            Self::Read(line) => write!(f, "Failed to read input after line {line}"),
        }
    }
}

/// Errors during parsing of a clause.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The line was empty, or contained only whitespace.
    BlankClause,

    /// The line has some structural issue.
    Malformed(MalformedClause),

    /// Some atom symbol was empty after trimming whitespace.
    EmptyAtomSymbol,
}

impl From<MalformedClause> for ParseError {
    fn from(e: MalformedClause) -> Self {
        ParseError::Malformed(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankClause => write!(f, "Clause must not be blank"),
            Self::Malformed(e) => write!(f, "{e}"),
            Self::EmptyAtomSymbol => write!(f, "Symbol must not be empty"),
        }
    }
}

/// Structural issues with a clause.
///
/// Positions are byte offsets into the (trimmed) conjunction of the clause.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MalformedClause {
    /// The line does not contain `->` exactly once.
    ImplicationCount { line: String },

    /// An `&` or `)` was found where a conjunct was expected.
    UnexpectedCharacter {
        character: char,
        position: usize,
        conjunction: String,
    },

    /// An `&` is not followed by any conjunct.
    MissingConjunct { position: usize, conjunction: String },

    /// A conjunct is followed by something other than `&`.
    InvalidConjunction { position: usize, conjunction: String },

    /// The `(` at the given position is never closed.
    MissingClosingParenthesis { position: usize, conjunction: String },
}

impl std::fmt::Display for MalformedClause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ImplicationCount { line } => write!(
                f,
                "Clause '{line}' does not follow the required format 'conjunction -> atom'"
            ),

            Self::UnexpectedCharacter {
                character,
                position,
                conjunction,
            } => write!(
                f,
                "Found unexpected '{character}' at position {position} in conjunction '{conjunction}'"
            ),

            Self::MissingConjunct {
                position,
                conjunction,
            } => write!(
                f,
                "Conjunction '{conjunction}' is missing a conjunct after position {position}"
            ),

            Self::InvalidConjunction {
                position,
                conjunction,
            } => write!(
                f,
                "Invalid conjunction '{conjunction}' provided, expected '&' at position {position}"
            ),

            Self::MissingClosingParenthesis {
                position,
                conjunction,
            } => write!(
                f,
                "Closing parenthesis is missing for position {position} in conjunction '{conjunction}'"
            ),
        }
    }
}
