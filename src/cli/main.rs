#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::io::Write;

use config::CliConfig;
use horn_sat::reports::Report;
use misc::{output_writer, verdict, EXIT_ERROR, EXIT_SATISFIABLE, EXIT_UNSATISFIABLE};

mod config;
mod misc;
mod read;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let cfg = CliConfig::from_args();

    let formula = match &cfg.input {
        Some(path) => read::read_file(path),
        None => read::read_interactive(cfg.echo),
    };

    let formula = match formula {
        Ok(formula) => formula,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(EXIT_ERROR);
        }
    };

    let result = formula.solve();

    let written = output_writer(cfg.output.as_deref()).and_then(|mut writer| {
        writeln!(writer, "{}", verdict(&result))?;
        writer.flush()
    });

    if let Err(e) = written {
        eprintln!("Error writing SAT result: {e}");
        std::process::exit(EXIT_ERROR);
    }

    match result.report() {
        Report::Satisfiable => std::process::exit(EXIT_SATISFIABLE),
        Report::Unsatisfiable => std::process::exit(EXIT_UNSATISFIABLE),
    }
}
