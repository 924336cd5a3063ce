use std::{fs::File, io::BufReader, path::PathBuf};

use horn_sat::{reports::Report, structures::formula::Formula};

fn formulas_subdir(dir: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("formulas")
        .join(dir)
}

fn silent_formula_report(path: &PathBuf) -> Report {
    let file = match File::open(path) {
        Err(_) => panic!("Could not load {path:?}"),
        Ok(f) => f,
    };

    let (formula, _) = match Formula::read(BufReader::new(file)) {
        Ok(read) => read,
        Err(e) => panic!("{path:?}: {e}"),
    };

    let result = formula.solve();
    if let Some(model) = result.assignment() {
        assert!(model.satisfies(&formula), "{path:?}: witness fails");
    }

    result.report()
}

fn silent_on_directory(dir: &str, require: Report) -> usize {
    let pattern = formulas_subdir(dir).join("*.horn");
    let mut count = 0;

    for entry in glob::glob(&pattern.to_string_lossy()).expect("bad glob") {
        let path = entry.expect("unreadable path");
        assert_eq!(require, silent_formula_report(&path), "{path:?}");
        count += 1;
    }

    count
}

#[test]
fn satisfiable() {
    assert!(silent_on_directory("sat", Report::Satisfiable) > 0);
}

#[test]
fn unsatisfiable() {
    assert!(silent_on_directory("unsat", Report::Unsatisfiable) > 0);
}
