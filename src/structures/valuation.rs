/*!
Valuations, as sets of marked atoms and as assignments.

# Markings

A marking is a set of atoms, read as the valuation on which the marked atoms are true and every other atom is false.
The [Marking] trait is implemented for the standard sets of atoms, and for [Assignment]s.

```rust
# use std::collections::HashSet;
# use horn_sat::structures::{atom::Atom, clause::Clause, valuation::Marking};
let p = Atom::from_symbol("p").unwrap();
let q = Atom::from_symbol("q").unwrap();

let mut marked = HashSet::new();
marked.insert(p.clone());

let clause = Clause::new([p.clone()], q.clone());
assert!(!clause.satisfied_on(&marked));

marked.insert(q);
assert!(clause.satisfied_on(&marked));
```

# Assignments

An assignment is a (total) function from the atoms of some formula to truth values, and is the witness returned when a formula is satisfiable.
Atoms which do not appear in the formula are not part of the assignment.

Assignments are ordered by [atom](crate::structures::atom#order), and so iteration and display are stable.
*/

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::structures::{atom::Atom, formula::Formula};

/// A set of atoms, interpreted as the atoms which are true.
pub trait Marking {
    /// Whether the atom is marked (true).
    fn is_marked(&self, atom: &Atom) -> bool;
}

impl Marking for HashSet<Atom> {
    fn is_marked(&self, atom: &Atom) -> bool {
        self.contains(atom)
    }
}

impl Marking for BTreeSet<Atom> {
    fn is_marked(&self, atom: &Atom) -> bool {
        self.contains(atom)
    }
}

/// An assignment of truth values to the atoms of some formula.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assignment {
    values: BTreeMap<Atom, bool>,
}

impl Assignment {
    /// The value of `atom` on the assignment, if the atom is part of the assignment.
    pub fn value_of(&self, atom: &Atom) -> Option<bool> {
        self.values.get(atom).copied()
    }

    /// Sets the value of `atom`, returning the previous value, if any.
    pub fn set_value(&mut self, atom: Atom, value: bool) -> Option<bool> {
        self.values.insert(atom, value)
    }

    /// An iterator through all (Atom, Value) pairs, in atom order.
    pub fn iter(&self) -> impl Iterator<Item = (&Atom, bool)> {
        self.values.iter().map(|(atom, value)| (atom, *value))
    }

    /// An iterator through the atoms which are true on the assignment, in atom order.
    pub fn true_atoms(&self) -> impl Iterator<Item = &Atom> {
        self.values
            .iter()
            .filter_map(|(atom, value)| value.then_some(atom))
    }

    /// A count of atoms in the assignment.
    pub fn atom_count(&self) -> usize {
        self.values.len()
    }

    /// Whether every clause of the formula is true on the assignment.
    ///
    /// Atoms of the formula without a value on the assignment are taken to be false.
    pub fn satisfies(&self, formula: &Formula) -> bool {
        formula.unsatisfied_clause(self).is_none()
    }
}

impl Marking for Assignment {
    fn is_marked(&self, atom: &Atom) -> bool {
        self.value_of(atom).unwrap_or(false)
    }
}

impl FromIterator<(Atom, bool)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (Atom, bool)>>(iter: T) -> Self {
        Assignment {
            values: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pairs = self
            .iter()
            .map(|(atom, value)| format!("{atom}: {value}"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{pairs}")
    }
}
