/*!
Reports on the satisfiability of a formula.
*/

use crate::structures::valuation::Assignment;

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula is satisfiable.
    Satisfiable,

    /// The formula is unsatisfiable.
    Unsatisfiable,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "SAT"),
            Self::Unsatisfiable => write!(f, "UNSAT"),
        }
    }
}

/// The result of a solve, with a witness to satisfiability when the formula is satisfiable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveResult {
    /// No assignment satisfies the formula.
    Unsat,

    /// The given assignment is the minimal model of the formula.
    Sat(Assignment),
}

impl SolveResult {
    /// The high-level report of the result.
    pub fn report(&self) -> Report {
        match self {
            Self::Unsat => Report::Unsatisfiable,
            Self::Sat(_) => Report::Satisfiable,
        }
    }

    /// The witness to satisfiability, if the formula is satisfiable.
    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            Self::Unsat => None,
            Self::Sat(assignment) => Some(assignment),
        }
    }

    /// Whether the formula is satisfiable.
    pub fn is_sat(&self) -> bool {
        matches!(self, Self::Sat(_))
    }
}

impl From<SolveResult> for Report {
    fn from(value: SolveResult) -> Self {
        value.report()
    }
}
