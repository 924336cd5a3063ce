//! A library for determining the satisfiability of Horn formulas.
//!
//! A Horn formula is a conjunction of Horn clauses, each of the form P₁ ∧ P₂ ∧ … ∧ Pₙ → Q, where each Pᵢ and Q is an atom.
//! Satisfiability of a Horn formula is decidable in time linear in the size of the formula, and when a Horn formula is satisfiable there is always a unique *minimal* model --- a valuation making as few atoms true as possible.
//! horn_sat determines satisfiability by building this minimal model, and returns the model as a witness when the formula is satisfiable.
//!
//! # Orientation
//!
//! - The [structures] of the library are [atoms](structures::atom), [clauses](structures::clause), [formulas](structures::formula), and [assignments](structures::valuation).
//! - Clauses are written as text and [parsed](builder::parse) one line at a time, and a formula may be [read](builder::read) from any reader.
//! - The satisfiability of a formula is determined by the [solve procedure](procedures::solve), which returns a [report](reports).
//!
//! Parsing depends on the structures, and solving depends on the structures, but solving never depends on parsing.
//!
//! # Examples
//!
//! + Parse and solve a formula.
//!
//! ```rust
//! # use horn_sat::builder::parse::parse_clause;
//! # use horn_sat::structures::{atom::Atom, formula::Formula};
//! # use horn_sat::reports::{Report, SolveResult};
//! let mut formula = Formula::new();
//!
//! for line in ["(A & B) -> C", "-> A", "-> B"] {
//!     formula.add_clause(parse_clause(line).unwrap());
//! }
//!
//! let result = formula.solve();
//! assert_eq!(result.report(), Report::Satisfiable);
//!
//! let model = result.assignment().unwrap();
//! assert_eq!(model.to_string(), "A: true, B: true, C: true");
//! ```
//!
//! + Some formulas require falsum to be true.
//!
//! ```rust
//! # use horn_sat::structures::formula::Formula;
//! # use horn_sat::reports::SolveResult;
//! let formula: Formula = "-> A\nA -> 0".parse().unwrap();
//! assert_eq!(formula.solve(), SolveResult::Unsat);
//! ```
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made, and a few targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to [parsing](crate::builder::parse) can be filtered with `RUST_LOG=parser …` or,
//! - Each atom marked during a solve can be found with `RUST_LOG=solve=trace …`

pub mod builder;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
