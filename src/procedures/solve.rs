//! Determines the satisfiability of a Horn formula.
//!
//! # Overview
//!
//! Every Horn formula has a *minimal model* if it has any model at all: the valuation making the fewest atoms true.
//! So, to determine whether a formula is satisfiable it is enough to build the valuation which makes true only those atoms which *must* be true, and check whether falsum is among them.
//!
//! The atoms which must be true are found by *marking*:
//!
//! 1. Verum is marked, if it appears in the formula.
//! 2. While there is some clause whose premise is marked but whose conclusion is not, the conclusion is marked.
//!    In particular, the conclusion of any fact is marked.
//! 3. If falsum is marked the formula is unsatisfiable.
//!    Otherwise, the valuation on which exactly the marked atoms are true satisfies the formula.
//!
//! Roughly, the loop of (2) is:
//!
//! ```rust,ignore
//! while let Some(clause) = formula.unsatisfied_clause(&marked) {
//!     marked.insert(clause.conclusion().clone());
//! }
//! ```
//!
//! Each pass of the loop marks a fresh atom, and so the loop ends after at most as many passes as there are atoms in the formula.
//! The atoms marked do not depend on the choice of unsatisfied clause in each pass, though the order in which atoms are marked may.
//!
//! # Implementation
//!
//! Searching for an unsatisfied clause on each pass is quadratic in the size of the formula.
//! Instead, each clause keeps a count of unmarked atoms in the premise, and each atom a list of the clauses whose premise contains the atom.
//!
//! - When an atom is marked it is pushed to a queue of consequences.
//! - When an atom is taken from the queue the count of each clause watching the atom is decremented.
//! - When the count of a clause reaches zero the premise of the clause is marked, and so the conclusion of the clause is marked.
//!
//! Each atom is marked at most once, and each clause is examined at most once for each atom of its premise, so marking is linear in the size of the formula.
//!
//! Once falsum is marked the result is settled, and no further consequences are examined.
//!
//! # Example
//!
//! ```rust
//! # use horn_sat::structures::{atom::Atom, formula::Formula};
//! # use horn_sat::reports::SolveResult;
//! let formula: Formula = "-> p\np & q -> r\np -> q\nr & s -> 0".parse().unwrap();
//!
//! let SolveResult::Sat(model) = formula.solve() else {
//!     panic!("The formula is satisfiable");
//! };
//!
//! let s = Atom::from_symbol("s").unwrap();
//! assert_eq!(model.value_of(&s), Some(false));
//! assert_eq!(model.true_atoms().count(), 3);
//!
//! let formula: Formula = "-> p\np & q -> r\np -> q\nr -> 0".parse().unwrap();
//! assert_eq!(formula.solve(), SolveResult::Unsat);
//! ```

use std::collections::{HashMap, VecDeque};

use crate::{
    misc::log::targets::{self},
    reports::SolveResult,
    structures::{atom::Atom, formula::Formula, valuation::Assignment},
};

/// Determines the satisfiability of `formula`, with the minimal model of the formula as a witness to satisfiability.
pub fn solve(formula: &Formula) -> SolveResult {
    let mut marking = Marker::from(formula);
    log::debug!(target: targets::SOLVE, "Solving {} clauses over {} atoms", formula.clause_count(), marking.atoms.len());

    if let Some(verum) = marking.index_of(&Atom::Verum) {
        marking.mark(verum);
    }

    for clause in 0..marking.conclusions.len() {
        if marking.unmarked_premise[clause] == 0 {
            let conclusion = marking.conclusions[clause];
            marking.mark(conclusion);
        }
    }

    marking.propagate();

    match marking.falsum_marked() {
        true => {
            log::info!(target: targets::SOLVE, "Falsum marked");
            SolveResult::Unsat
        }

        false => {
            let assignment = marking
                .atoms
                .iter()
                .zip(marking.marked.iter())
                .map(|(atom, value)| ((*atom).clone(), *value))
                .collect::<Assignment>();
            log::info!(target: targets::SOLVE, "Marked {} of {} atoms", assignment.true_atoms().count(), assignment.atom_count());
            SolveResult::Sat(assignment)
        }
    }
}

/// Atoms and clauses of a formula indexed for marking.
///
/// Atoms are indexed in order of first occurrence, and clauses in the order of the formula.
struct Marker<'f> {
    /// The atoms of the formula.
    atoms: Vec<&'f Atom>,

    /// The index of each atom in `atoms`.
    indicies: HashMap<&'f Atom, usize>,

    /// For each atom, the clauses whose premise contains the atom.
    watches: Vec<Vec<usize>>,

    /// For each clause, a count of the atoms in the premise which are not marked.
    unmarked_premise: Vec<usize>,

    /// For each clause, the index of the conclusion.
    conclusions: Vec<usize>,

    /// For each atom, whether the atom is marked.
    marked: Vec<bool>,

    /// Marked atoms whose watches are yet to be examined.
    consequence_q: VecDeque<usize>,
}

impl<'f> From<&'f Formula> for Marker<'f> {
    fn from(formula: &'f Formula) -> Self {
        let mut marker = Marker {
            atoms: Vec::default(),
            indicies: HashMap::default(),
            watches: Vec::default(),
            unmarked_premise: Vec::with_capacity(formula.clause_count()),
            conclusions: Vec::with_capacity(formula.clause_count()),
            marked: Vec::default(),
            consequence_q: VecDeque::default(),
        };

        for (clause_index, clause) in formula.clauses().enumerate() {
            for atom in clause.premise() {
                let atom_index = marker.ensure_atom(atom);
                marker.watches[atom_index].push(clause_index);
            }
            marker.unmarked_premise.push(clause.premise().len());

            let conclusion = marker.ensure_atom(clause.conclusion());
            marker.conclusions.push(conclusion);
        }

        marker
    }
}

impl<'f> Marker<'f> {
    /// The index of `atom`, with the atom added if not already present.
    fn ensure_atom(&mut self, atom: &'f Atom) -> usize {
        if let Some(index) = self.indicies.get(atom) {
            return *index;
        }

        let index = self.atoms.len();
        self.atoms.push(atom);
        self.indicies.insert(atom, index);
        self.watches.push(Vec::default());
        self.marked.push(false);
        index
    }

    fn index_of(&self, atom: &Atom) -> Option<usize> {
        self.indicies.get(atom).copied()
    }

    /// Marks the atom at `index`, and queues the atom if the atom was not already marked.
    fn mark(&mut self, index: usize) {
        if !self.marked[index] {
            log::trace!(target: targets::SOLVE, "Marking {}", self.atoms[index]);
            self.marked[index] = true;
            self.consequence_q.push_back(index);
        }
    }

    fn falsum_marked(&self) -> bool {
        self.index_of(&Atom::Falsum)
            .is_some_and(|falsum| self.marked[falsum])
    }

    /// Examines queued atoms until the queue is empty or falsum is marked.
    fn propagate(&mut self) {
        while let Some(atom) = self.consequence_q.pop_front() {
            if self.falsum_marked() {
                self.consequence_q.clear();
                break;
            }

            // Each atom is queued at most once, so the watches are not needed after.
            for clause in std::mem::take(&mut self.watches[atom]) {
                self.unmarked_premise[clause] -= 1;
                if self.unmarked_premise[clause] == 0 {
                    let conclusion = self.conclusions[clause];
                    self.mark(conclusion);
                }
            }
        }
    }
}
