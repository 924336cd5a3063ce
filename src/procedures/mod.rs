//! Procedures on formulas.
//!
//! At present, only [solve].

pub mod solve;
