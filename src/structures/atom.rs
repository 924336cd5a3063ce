/*!
Atoms, aka. propositional 'variables', and the two truth constants.

Broadly, atoms are things with a name to which assigning a (boolean) value (true or false) is of interest.
Two atoms are fixed:
- [Verum](Atom::Verum) (⊤), which is true on every valuation, and so true before any clause is examined.
- [Falsum](Atom::Falsum) (⊥), which is false on every valuation. \
  So, if some formula requires falsum to be true, the formula is unsatisfiable.

All other atoms are [named](Atom::Named) by a symbol.
Symbols are any non-empty string, with `0` and `1` reserved for falsum and verum, respectively.

```rust
# use horn_sat::structures::atom::Atom;
assert_eq!(Atom::from_symbol("0"), Ok(Atom::Falsum));
assert_eq!(Atom::from_symbol("1"), Ok(Atom::Verum));
assert_eq!(Atom::from_symbol("p"), Atom::from_symbol("p"));
assert_ne!(Atom::from_symbol("p"), Atom::from_symbol("q"));
assert!(Atom::from_symbol("  ").is_err());
```

Atoms are compared by value, and so two atoms with the same symbol are interchangeable.
The symbol of a named atom is shared, and so cloning an atom does not copy the symbol.

# Order

Atoms are ordered with verum first, then falsum, then named atoms by symbol.
The order has no logical significance, and is used only to give a stable presentation of valuations.
*/

use std::{str::FromStr, sync::Arc};

use crate::types::err::{self};

/// An atom, aka. a 'variable'.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Atom {
    /// Truth, ⊤.
    Verum,

    /// Falsity, ⊥.
    Falsum,

    /// An atom with the given (non-empty) symbol.
    Named(Arc<str>),
}

/// The symbol reserved for [Atom::Falsum].
pub const FALSUM_SYMBOL: &str = "0";

/// The symbol reserved for [Atom::Verum].
pub const VERUM_SYMBOL: &str = "1";

impl Atom {
    /// The atom for `symbol`.
    ///
    /// The symbol is used as given, so any trimming should be done before the call.
    /// Still, a symbol containing only whitespace is an error.
    pub fn from_symbol(symbol: &str) -> Result<Self, err::ParseError> {
        if symbol.trim().is_empty() {
            return Err(err::ParseError::EmptyAtomSymbol);
        }

        match symbol {
            FALSUM_SYMBOL => Ok(Atom::Falsum),
            VERUM_SYMBOL => Ok(Atom::Verum),
            _ => Ok(Atom::Named(Arc::from(symbol))),
        }
    }

    /// Whether the atom is one of the two truth constants.
    pub fn is_constant(&self) -> bool {
        matches!(self, Atom::Verum | Atom::Falsum)
    }

    /// The symbol of a named atom, and otherwise nothing.
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Atom::Named(symbol) => Some(symbol),
            Atom::Verum | Atom::Falsum => None,
        }
    }
}

impl FromStr for Atom {
    type Err = err::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Atom::from_symbol(s.trim())
    }
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Verum => write!(f, "⊤"),
            Self::Falsum => write!(f, "⊥"),
            Self::Named(symbol) => write!(f, "{symbol}"),
        }
    }
}

#[cfg(test)]
mod atom_tests {
    use super::*;

    #[test]
    fn reserved_symbols() {
        assert_eq!(Atom::from_symbol("0"), Ok(Atom::Falsum));
        assert_eq!(Atom::from_symbol("1"), Ok(Atom::Verum));
        assert_eq!(Atom::from_symbol("01"), Ok(Atom::Named(Arc::from("01"))));
    }

    #[test]
    fn blank_symbol() {
        assert_eq!(Atom::from_symbol(""), Err(err::ParseError::EmptyAtomSymbol));
        assert_eq!(Atom::from_symbol(" \t"), Err(err::ParseError::EmptyAtomSymbol));
    }

    #[test]
    fn constants_are_distinct() {
        let p = Atom::from_symbol("p").unwrap();
        assert!(!p.is_constant());
        assert_ne!(Atom::Verum, Atom::Falsum);
        assert!(Atom::Verum < Atom::Falsum);
        assert!(Atom::Falsum < p);
    }

    #[test]
    fn display() {
        assert_eq!(Atom::Verum.to_string(), "⊤");
        assert_eq!(Atom::Falsum.to_string(), "⊥");
        assert_eq!("  p_1 ".parse::<Atom>().unwrap().to_string(), "p_1");
    }
}
