//! Horn formulas, aka. a set of [Horn clauses](crate::structures::clause), interpreted as the conjunction of those clauses.
//!
//! Clauses are kept in the order they were first added, and adding a clause equal to some clause already in the formula has no effect.
//!
//! ```rust
//! # use horn_sat::structures::{clause::Clause, formula::Formula};
//! let mut formula = Formula::default();
//!
//! assert!(formula.add_clause("p & q -> r".parse::<Clause>().unwrap()));
//! assert!(!formula.add_clause("q & p & q -> r".parse::<Clause>().unwrap()));
//! assert!(formula.add_clause("-> p".parse::<Clause>().unwrap()));
//!
//! assert_eq!(formula.clause_count(), 2);
//! assert_eq!(formula.atoms().len(), 3);
//! assert_eq!(formula.to_string(), "(p ∧ q -> r) ∧ ( -> p)");
//! ```

use std::collections::BTreeSet;

use indexmap::IndexSet;

use crate::{
    misc::log::targets::{self},
    procedures::solve,
    reports::SolveResult,
    structures::{atom::Atom, clause::Clause, valuation::Marking},
};

/// A Horn formula.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formula {
    clauses: IndexSet<Clause>,
}

impl Formula {
    /// An empty formula.
    pub fn new() -> Self {
        Formula::default()
    }

    /// Adds a clause to the formula, returning whether the clause was not already part of the formula.
    pub fn add_clause(&mut self, clause: Clause) -> bool {
        log::trace!(target: targets::FORMULA, "Adding {clause}");
        let fresh = self.clauses.insert(clause);
        if !fresh {
            log::debug!(target: targets::FORMULA, "Duplicate clause collapsed");
        }
        fresh
    }

    /// An iterator over the clauses of the formula, in the order they were added.
    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    /// A count of (distinct) clauses in the formula.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// Whether the formula has no clauses.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The set of all atoms in some premise or conclusion of a clause of the formula.
    pub fn atoms(&self) -> BTreeSet<Atom> {
        self.clauses
            .iter()
            .flat_map(|clause| clause.atoms())
            .cloned()
            .collect()
    }

    /// Some clause of the formula which is false when exactly the marked atoms are true, if such a clause exists.
    pub fn unsatisfied_clause(&self, marked: &impl Marking) -> Option<&Clause> {
        self.clauses.iter().find(|clause| !clause.satisfied_on(marked))
    }

    /// Determines the satisfiability of the formula.
    ///
    /// See [solve](crate::procedures::solve) for details.
    pub fn solve(&self) -> SolveResult {
        solve::solve(self)
    }
}

impl FromIterator<Clause> for Formula {
    fn from_iter<T: IntoIterator<Item = Clause>>(iter: T) -> Self {
        let mut formula = Formula::new();
        formula.extend(iter);
        formula
    }
}

impl Extend<Clause> for Formula {
    fn extend<T: IntoIterator<Item = Clause>>(&mut self, iter: T) {
        for clause in iter {
            self.add_clause(clause);
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let clauses = self
            .clauses
            .iter()
            .map(|clause| clause.to_string())
            .collect::<Vec<_>>()
            .join(" ∧ ");
        write!(f, "{clauses}")
    }
}
