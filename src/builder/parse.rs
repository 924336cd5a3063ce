/*!
Parsing of a single line to a [Horn clause](crate::structures::clause).

# Format

A clause is written as a conjunction and an atom, separated by `->`:

```none
<conjunct> [& <conjunct>]* -> <atom>
```

- A conjunct is either an atom, or a parenthesised conjunction.
- Parentheses may be nested to any depth, though only for readability: `(p & q) & r` and `p & (q & r)` are both the clause with premise {p, q, r}.
- Whitespace between tokens is ignored.
- The conjunction may be empty, in which case the clause is a fact.
- The symbols `0` and `1` are read as falsum and verum, respectively.

```rust
# use horn_sat::builder::parse::parse_clause;
# use horn_sat::structures::atom::Atom;
let clause = parse_clause("(p & (q)) & p -> 0").unwrap();

assert_eq!(clause.premise().len(), 2);
assert_eq!(clause.conclusion(), &Atom::Falsum);

let fact = parse_clause(" -> p").unwrap();
assert!(fact.is_fact());

assert!(parse_clause("p & -> q").is_err());
```

# Implementation

The conjunction is read with a cursor over byte positions of the (trimmed) conjunction, and a *scope* bounds the part of the conjunction being read.
On reading `(` the matching `)` is found by counting depth within the current scope, and the part between the two is read as a sub-scope before continuing after the `)`.

An atom begins at any character other than whitespace, `&`, `(`, or `)`, and continues until whitespace or `&`.
In particular, an atom is not ended by `)`, and so `p)` is read as an atom.

After each conjunct the only permitted continuations are the end of the scope, or `&` with some later character in the scope which may begin a conjunct.
*/

use crate::{
    misc::log::targets::{self},
    structures::{atom::Atom, clause::Clause},
    types::err::{self, MalformedClause},
};

/// The separator of a conjunction and the implied atom.
pub const IMPLICATION: &str = "->";

/// The separator of conjuncts.
pub const CONJUNCTION: char = '&';

/// Opens a sub-conjunction.
pub const OPEN: char = '(';

/// Closes a sub-conjunction.
pub const CLOSE: char = ')';

/// Parses a line to a clause.
///
/// Whitespace around the line is ignored, and an error is returned if the line is blank or is not a well-formed clause.
pub fn parse_clause(line: &str) -> Result<Clause, err::ParseError> {
    if line.trim().is_empty() {
        return Err(err::ParseError::BlankClause);
    }

    let mut parts = line.split(IMPLICATION);
    let (conjunction, conclusion) = match (parts.next(), parts.next(), parts.next()) {
        (Some(conjunction), Some(conclusion), None) => (conjunction.trim(), conclusion.trim()),
        _ => {
            return Err(err::ParseError::from(MalformedClause::ImplicationCount {
                line: line.to_string(),
            }))
        }
    };

    let premise = Conjunction::from(conjunction).atoms()?;
    let conclusion = Atom::from_symbol(conclusion)?;

    let clause = Clause::new(premise, conclusion);
    log::trace!(target: targets::PARSER, "Parsed '{line}' to {clause}");
    Ok(clause)
}

/// A conjunction to be read, with methods to read parts of the conjunction.
///
/// All indicies are byte positions in the conjunction, and always at a character boundary.
struct Conjunction<'c> {
    text: &'c str,
}

impl<'c> From<&'c str> for Conjunction<'c> {
    fn from(text: &'c str) -> Self {
        Conjunction { text }
    }
}

impl Conjunction<'_> {
    /// All atoms of the conjunction, in order of occurrence and with any duplicates.
    fn atoms(&self) -> Result<Vec<Atom>, err::ParseError> {
        let mut atoms = Vec::default();
        self.read_scope(0, self.text.len(), &mut atoms)?;
        Ok(atoms)
    }

    /// The character starting at `index`.
    fn char_at(&self, index: usize) -> Option<char> {
        self.text[index..].chars().next()
    }

    /// Reads the atoms of the scope [`start`, `end`) to `atoms`.
    fn read_scope(
        &self,
        start: usize,
        end: usize,
        atoms: &mut Vec<Atom>,
    ) -> Result<(), err::ParseError> {
        let mut index = start;

        while index < end {
            let Some(character) = self.char_at(index) else {
                break;
            };

            if character.is_whitespace() {
                index += character.len_utf8();
                continue;
            }

            match character {
                CONJUNCTION | CLOSE => {
                    return Err(err::ParseError::from(MalformedClause::UnexpectedCharacter {
                        character,
                        position: index,
                        conjunction: self.text.to_string(),
                    }));
                }

                OPEN => {
                    let close = self.matching_close(index, end)?;
                    log::trace!(target: targets::PARSER, "Sub-conjunction [{index}, {close}]");
                    self.read_scope(index + OPEN.len_utf8(), close, atoms)?;
                    index = self.next_conjunct(close + CLOSE.len_utf8(), end)?;
                }

                _ => {
                    let atom_end = self.atom_end(index, end);
                    atoms.push(Atom::from_symbol(self.text[index..atom_end].trim())?);
                    index = self.next_conjunct(atom_end, end)?;
                }
            }
        }

        Ok(())
    }

    /// The index of the `)` which closes the `(` at index `open`, provided the `)` is before `end`.
    fn matching_close(&self, open: usize, end: usize) -> Result<usize, err::ParseError> {
        let start = open + OPEN.len_utf8();
        let mut depth: usize = 0;

        for (offset, character) in self.text[start..end].char_indices() {
            match character {
                OPEN => depth += 1,
                CLOSE => match depth {
                    0 => return Ok(start + offset),
                    _ => depth -= 1,
                },
                _ => {}
            }
        }

        Err(err::ParseError::from(
            MalformedClause::MissingClosingParenthesis {
                position: open,
                conjunction: self.text.to_string(),
            },
        ))
    }

    /// The index immediately after the atom beginning at `start`.
    fn atom_end(&self, start: usize, end: usize) -> usize {
        self.text[start..end]
            .char_indices()
            .find(|(_, character)| character.is_whitespace() || *character == CONJUNCTION)
            .map_or(end, |(offset, _)| start + offset)
    }

    /// The index from which the next conjunct should be read, or `end` if the scope is exhausted.
    ///
    /// Only whitespace may occur before some `&`, and some character after the `&` must begin a conjunct.
    fn next_conjunct(&self, start: usize, end: usize) -> Result<usize, err::ParseError> {
        for (offset, character) in self.text[start..end].char_indices() {
            let index = start + offset;

            if character == CONJUNCTION {
                let following = index + CONJUNCTION.len_utf8();
                let conjunct_follows = self.text[following..end]
                    .chars()
                    .any(|c| c != CONJUNCTION && c != CLOSE && !c.is_whitespace());

                return match conjunct_follows {
                    true => Ok(following),
                    false => Err(err::ParseError::from(MalformedClause::MissingConjunct {
                        position: index,
                        conjunction: self.text.to_string(),
                    })),
                };
            }

            if !character.is_whitespace() {
                return Err(err::ParseError::from(
                    MalformedClause::InvalidConjunction {
                        position: index,
                        conjunction: self.text.to_string(),
                    },
                ));
            }
        }

        Ok(end)
    }
}

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn atom(symbol: &str) -> Atom {
        Atom::from_symbol(symbol).unwrap()
    }

    fn malformed(line: &str) -> MalformedClause {
        match parse_clause(line) {
            Err(err::ParseError::Malformed(e)) => e,
            other => panic!("Expected a malformed clause, found {other:?}"),
        }
    }

    #[test]
    fn simple() {
        let clause = parse_clause("p & q -> r").unwrap();
        assert_eq!(clause, Clause::new([atom("p"), atom("q")], atom("r")));
    }

    #[test]
    fn whitespace_is_ignored() {
        let spaced = parse_clause("  p\t&   q->r  ").unwrap();
        let tight = parse_clause("p&q->r").unwrap();
        assert_eq!(spaced, tight);
    }

    #[test]
    fn fact() {
        let clause = parse_clause("-> p").unwrap();
        assert!(clause.is_fact());
        assert_eq!(clause.conclusion(), &atom("p"));
    }

    #[test]
    fn constants() {
        let clause = parse_clause("1 & p -> 0").unwrap();
        assert!(clause.premise().contains(&Atom::Verum));
        assert_eq!(clause.conclusion(), &Atom::Falsum);
    }

    #[test]
    fn nesting_flattens() {
        let flat = parse_clause("a & b & c & d -> e").unwrap();
        assert_eq!(parse_clause("(a & b) & c & d -> e").unwrap(), flat);
        assert_eq!(parse_clause("a & (b & (c & (d))) -> e").unwrap(), flat);
        assert_eq!(parse_clause("((a & b) & (c)) & d -> e").unwrap(), flat);
        assert_eq!(parse_clause("( a & b ) & ( c & d ) -> e").unwrap(), flat);
    }

    #[test]
    fn duplicates_collapse() {
        let clause = parse_clause("p & p & (q & p) -> r").unwrap();
        assert_eq!(clause.premise().len(), 2);
    }

    #[test]
    fn close_does_not_end_an_atom() {
        let clause = parse_clause("p) & q -> r").unwrap();
        assert!(clause.premise().contains(&atom("p)")));
    }

    #[test]
    fn empty_parentheses() {
        let clause = parse_clause("() -> p").unwrap();
        assert!(clause.is_fact());
    }

    #[test]
    fn blank() {
        assert_eq!(parse_clause(""), Err(err::ParseError::BlankClause));
        assert_eq!(parse_clause(" \t "), Err(err::ParseError::BlankClause));
    }

    #[test]
    fn implication_count() {
        assert!(matches!(
            malformed("p & q"),
            MalformedClause::ImplicationCount { .. }
        ));
        assert!(matches!(
            malformed("p -> q -> r"),
            MalformedClause::ImplicationCount { .. }
        ));
        assert_eq!(
            malformed("p"),
            MalformedClause::ImplicationCount {
                line: "p".to_string()
            }
        );
    }

    #[test]
    fn empty_conclusion() {
        assert_eq!(parse_clause("p ->"), Err(err::ParseError::EmptyAtomSymbol));
        assert_eq!(parse_clause("p ->   "), Err(err::ParseError::EmptyAtomSymbol));
    }

    #[test]
    fn unexpected_character() {
        assert_eq!(
            malformed("& p -> q"),
            MalformedClause::UnexpectedCharacter {
                character: '&',
                position: 0,
                conjunction: "& p".to_string()
            }
        );
        assert_eq!(
            malformed(") -> q"),
            MalformedClause::UnexpectedCharacter {
                character: ')',
                position: 0,
                conjunction: ")".to_string()
            }
        );
        assert!(matches!(
            malformed("p & & q -> r"),
            MalformedClause::UnexpectedCharacter { character: '&', position: 4, .. }
        ));
    }

    #[test]
    fn missing_conjunct() {
        assert_eq!(
            malformed("A & -> B"),
            MalformedClause::MissingConjunct {
                position: 2,
                conjunction: "A &".to_string()
            }
        );
        assert!(matches!(
            malformed("p & ) -> q"),
            MalformedClause::MissingConjunct { position: 2, .. }
        ));
    }

    #[test]
    fn missing_conjunct_is_scoped() {
        assert!(matches!(
            malformed("(p &) & q -> r"),
            MalformedClause::MissingConjunct { position: 3, .. }
        ));
    }

    #[test]
    fn invalid_conjunction() {
        assert_eq!(
            malformed("p q -> r"),
            MalformedClause::InvalidConjunction {
                position: 2,
                conjunction: "p q".to_string()
            }
        );
        assert!(matches!(
            malformed("(p & q) r -> s"),
            MalformedClause::InvalidConjunction { position: 8, .. }
        ));
        assert!(matches!(
            malformed("p (q) -> s"),
            MalformedClause::InvalidConjunction { position: 2, .. }
        ));
    }

    #[test]
    fn missing_closing_parenthesis() {
        assert_eq!(
            malformed("(A & B -> C"),
            MalformedClause::MissingClosingParenthesis {
                position: 0,
                conjunction: "(A & B".to_string()
            }
        );
        assert!(matches!(
            malformed("p & ((q & r) -> s"),
            MalformedClause::MissingClosingParenthesis { position: 4, .. }
        ));
    }

    #[test]
    fn unicode_symbols() {
        let clause = parse_clause("α & (β) -> γ").unwrap();
        assert_eq!(clause, Clause::new([atom("α"), atom("β")], atom("γ")));

        assert!(matches!(
            malformed("α β -> γ"),
            MalformedClause::InvalidConjunction { position: 3, .. }
        ));
    }
}
