use std::path::PathBuf;

use clap::Parser;

/// Determines whether a Horn formula is satisfiable, and if so writes a satisfying assignment.
///
/// Each line of input is a clause of the form 'conjunction -> atom', e.g. '(p & q) & r -> s'.
/// The atoms '0' and '1' are falsum and verum, respectively.
#[derive(Parser, Debug)]
#[command(name = "horn_cli", version, about, long_about)]
struct Args {
    /// A file containing a Horn formula, one clause per line.
    /// If no file is given, clauses are read interactively from stdin.
    #[arg(short, long, value_name = "INPUT_FILE")]
    input: Option<PathBuf>,

    /// A file to write the verdict to, in place of stdout.
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    output: Option<PathBuf>,

    /// Suppress instructions and the echo of the formula when reading interactively.
    #[arg(short, long)]
    quiet: bool,
}

/// A collection of configuration options relevant only to the CLI.
#[derive(Debug, Default)]
pub struct CliConfig {
    /// The file to read a formula from, if any.
    pub input: Option<PathBuf>,

    /// The file to write the verdict to, if any.
    pub output: Option<PathBuf>,

    /// Whether to write instructions and the current formula when reading interactively.
    pub echo: bool,
}

impl CliConfig {
    /// The configuration from the arguments the process was started with.
    ///
    /// If an unrecognised argument is found a message is written and the process is terminated.
    pub fn from_args() -> Self {
        let args = Args::parse();
        log::debug!("{args:?}");

        CliConfig {
            input: args.input,
            output: args.output,
            echo: !args.quiet,
        }
    }
}
