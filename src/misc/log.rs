/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [parsing](crate::builder::parse) a clause.
    pub const PARSER: &str = "parser";

    /// Logs related to [reading](crate::builder::read) a formula and adding clauses to a formula.
    pub const FORMULA: &str = "formula";

    /// Logs related to [solving](crate::procedures::solve) a formula.
    pub const SOLVE: &str = "solve";
}
