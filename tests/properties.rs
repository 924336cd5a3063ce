use std::collections::BTreeSet;

use proptest::prelude::*;

use horn_sat::{
    builder::parse::parse_clause,
    reports::SolveResult,
    structures::{atom::Atom, clause::Clause, formula::Formula},
};

// ============================================================================
// Strategies
// ============================================================================

fn any_atom() -> impl Strategy<Value = Atom> {
    prop_oneof![
        1 => Just(Atom::Verum),
        1 => Just(Atom::Falsum),
        8 => "[a-f]".prop_map(|symbol| Atom::from_symbol(&symbol).unwrap()),
    ]
}

prop_compose! {
    fn any_clause()(premise in prop::collection::vec(any_atom(), 0..4), conclusion in any_atom()) -> Clause {
        Clause::new(premise, conclusion)
    }
}

prop_compose! {
    fn any_formula()(clauses in prop::collection::vec(any_clause(), 0..12)) -> Formula {
        clauses.into_iter().collect()
    }
}

/// Nested conjunctions over a few symbols, written as text.
fn any_conjunction() -> impl Strategy<Value = String> {
    let leaf = "[a-f]".prop_map(|symbol| symbol.to_string());

    leaf.prop_recursive(4, 24, 3, |inner| {
        (prop::collection::vec(inner, 1..4), any::<bool>()).prop_map(|(conjuncts, wrap)| {
            let conjunction = conjuncts.join(" & ");
            match wrap {
                true => format!("({conjunction})"),
                false => conjunction,
            }
        })
    })
}

/// The marked atoms of the formula, found by repeatedly marking the conclusion of some unsatisfied clause.
fn marked_by_rescanning(formula: &Formula) -> BTreeSet<Atom> {
    let mut marked = BTreeSet::new();
    if formula.atoms().contains(&Atom::Verum) {
        marked.insert(Atom::Verum);
    }

    while let Some(clause) = formula.unsatisfied_clause(&marked) {
        marked.insert(clause.conclusion().clone());
    }

    marked
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_solve_matches_rescanning(formula in any_formula()) {
        let marked = marked_by_rescanning(&formula);

        match formula.solve() {
            SolveResult::Unsat => prop_assert!(marked.contains(&Atom::Falsum)),

            SolveResult::Sat(model) => {
                prop_assert!(!marked.contains(&Atom::Falsum));
                let true_atoms = model.true_atoms().cloned().collect::<BTreeSet<_>>();
                prop_assert_eq!(true_atoms, marked);
            }
        }
    }

    #[test]
    fn prop_witness_covers_formula(formula in any_formula()) {
        if let SolveResult::Sat(model) = formula.solve() {
            prop_assert!(model.satisfies(&formula));

            let witnessed = model.iter().map(|(atom, _)| atom.clone()).collect::<BTreeSet<_>>();
            prop_assert_eq!(witnessed, formula.atoms());
        }
    }

    #[test]
    fn prop_clause_order_is_irrelevant(formula in any_formula()) {
        let mut clauses = formula.clauses().cloned().collect::<Vec<_>>();
        clauses.reverse();
        let reversed = clauses.into_iter().collect::<Formula>();
        prop_assert_eq!(formula.solve(), reversed.solve());
    }

    #[test]
    fn prop_facts_grow_models(formula in any_formula(), fact in any_atom()) {
        let mut extended = formula.clone();
        extended.add_clause(Clause::fact(fact));

        if let (SolveResult::Sat(before), SolveResult::Sat(after)) = (formula.solve(), extended.solve()) {
            for atom in before.true_atoms() {
                prop_assert_eq!(after.value_of(atom), Some(true));
            }
        }
    }

    #[test]
    fn prop_nesting_flattens(conjunction in any_conjunction(), conclusion in "[g-z]") {
        let nested = parse_clause(&format!("{conjunction} -> {conclusion}")).unwrap();

        let flat_conjunction = conjunction.replace(['(', ')'], "");
        let flat = parse_clause(&format!("{flat_conjunction} -> {conclusion}")).unwrap();

        prop_assert_eq!(nested, flat);
    }
}
