use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use horn_sat::reports::SolveResult;

/// The exit code on finding a formula is satisfiable.
pub const EXIT_SATISFIABLE: i32 = 10;

/// The exit code on finding a formula is unsatisfiable.
pub const EXIT_UNSATISFIABLE: i32 = 20;

/// The exit code on some error with input or output.
pub const EXIT_ERROR: i32 = 1;

/// The verdict of a solve, with an example assignment if the formula is satisfiable.
pub fn verdict(result: &SolveResult) -> String {
    match result {
        SolveResult::Unsat => format!(
            "Verdict: {}\nThere exists no configuration that satisfies the given Horn Formula.",
            result.report()
        ),
        SolveResult::Sat(assignment) => format!("Verdict: {}\ne.g. ({assignment})", result.report()),
    }
}

/// A writer to the file at `path`, or to stdout if no path is given.
pub fn output_writer(path: Option<&Path>) -> std::io::Result<Box<dyn Write>> {
    match path {
        Some(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
        None => Ok(Box::new(BufWriter::new(std::io::stdout()))),
    }
}

#[cfg(test)]
mod verdict_tests {
    use super::*;
    use horn_sat::structures::formula::Formula;

    #[test]
    fn satisfiable() {
        let formula: Formula = "-> A\nA & C -> B".parse().unwrap();
        assert_eq!(
            verdict(&formula.solve()),
            "Verdict: SAT\ne.g. (A: true, B: false, C: false)"
        );
    }

    #[test]
    fn empty_formula() {
        assert_eq!(verdict(&Formula::new().solve()), "Verdict: SAT\ne.g. ()");
    }

    #[test]
    fn unsatisfiable() {
        let formula: Formula = "-> A\nA -> 0".parse().unwrap();
        assert!(verdict(&formula.solve()).starts_with("Verdict: UNSAT\n"));
    }
}
