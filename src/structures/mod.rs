//! Key structures, such as atoms, clauses, and formulas.
//!
//! # Formulas
//!
//!  A [formula] 𝐅 is a set of [clauses](clause), interpreted as the conjunction of those clauses.
//!  Each clause is a Horn clause P₁ ∧ … ∧ Pₙ → Q, where each Pᵢ and Q is an [atom].
//!
//! In the notation of [clauses](clause) 𝐅 is written:
//!
//! ```none
//! (P₁ ∧ … ∧ Pₙ -> Q) ∧ … ∧ (R₁ ∧ … ∧ Rₘ -> S)
//! ```
//!
//! Note, negation is not expressible in an atom, and the only way to require some atom to be false is through a clause whose conclusion is [falsum](atom::Atom::Falsum).
//!
//! # (Boolean) values
//!
//! A (boolean) value is one of two things, identified as [true] and [false].
//! A [valuation] maps atoms to values, and among the valuations which make a formula true there is always one which makes the fewest atoms true (the *minimal model*), if the formula is satisfiable.

pub mod atom;
pub mod clause;
pub mod formula;
pub mod valuation;
