//! Horn clauses, aka. a conjunction of atoms (the premise) which implies some atom (the conclusion).
//!
//! The premise of a clause is a set, and so neither the order nor the multiplicity of atoms in the premise matters.
//!
//! ```rust
//! # use horn_sat::structures::{atom::Atom, clause::Clause};
//! let p = Atom::from_symbol("p").unwrap();
//! let q = Atom::from_symbol("q").unwrap();
//! let r = Atom::from_symbol("r").unwrap();
//!
//! let clause = Clause::new([p.clone(), q.clone(), p.clone()], r.clone());
//! let other = Clause::new([q.clone(), p.clone()], r.clone());
//!
//! assert_eq!(clause, other);
//! assert_eq!(clause.premise().len(), 2);
//! assert_eq!(clause.to_string(), "(p ∧ q -> r)");
//! ```
//!
//! - A clause with an empty premise is a *fact*, and the conclusion of a fact is true on any model of the clause.
//! - A clause whose premise contains [falsum](Atom::Falsum) is true on every valuation, though such clauses are kept as given.

use std::{collections::BTreeSet, str::FromStr};

use crate::{
    builder::parse::parse_clause,
    structures::{atom::Atom, valuation::Marking},
    types::err::{self},
};

/// A Horn clause.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Clause {
    premise: BTreeSet<Atom>,
    conclusion: Atom,
}

impl Clause {
    /// A clause from the atoms of a premise and a conclusion, with any duplicate premise atoms removed.
    pub fn new(premise: impl IntoIterator<Item = Atom>, conclusion: Atom) -> Self {
        Clause {
            premise: premise.into_iter().collect(),
            conclusion,
        }
    }

    /// A clause with an empty premise.
    pub fn fact(conclusion: Atom) -> Self {
        Clause {
            premise: BTreeSet::default(),
            conclusion,
        }
    }

    /// The premise of the clause.
    pub fn premise(&self) -> &BTreeSet<Atom> {
        &self.premise
    }

    /// The conclusion of the clause.
    pub fn conclusion(&self) -> &Atom {
        &self.conclusion
    }

    /// Whether the premise of the clause is empty.
    pub fn is_fact(&self) -> bool {
        self.premise.is_empty()
    }

    /// An iterator over all atoms in the clause, premise first and then the conclusion.
    ///
    /// The conclusion may also appear in the premise, in which case it is returned twice.
    pub fn atoms(&self) -> impl Iterator<Item = &Atom> {
        self.premise.iter().chain(std::iter::once(&self.conclusion))
    }

    /// Whether the clause is true when exactly the marked atoms are true.
    ///
    /// That is, whether some atom of the premise is unmarked, or the conclusion is marked.
    pub fn satisfied_on(&self, marked: &impl Marking) -> bool {
        self.premise.iter().any(|atom| !marked.is_marked(atom)) || marked.is_marked(&self.conclusion)
    }
}

impl FromStr for Clause {
    type Err = err::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_clause(s)
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let premise = self
            .premise
            .iter()
            .map(|atom| atom.to_string())
            .collect::<Vec<_>>()
            .join(" ∧ ");

        match self.is_fact() {
            true => write!(f, "( -> {})", self.conclusion),
            false => write!(f, "({premise} -> {})", self.conclusion),
        }
    }
}
