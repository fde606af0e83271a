use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::exit;

use clap::Parser;
use pivotlp_solver::Solver;

mod io;

#[derive(Parser)]
#[command(name = "pivotlp")]
#[command(about = "Solve a canonical-form linear program", long_about = None)]
struct Cli {
    /// File containing the problem; standard input when omitted
    file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let source = match read_source(cli.file.as_deref()) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading input: {}", e);
            exit(1);
        }
    };

    let problem = match io::parse_problem(&source) {
        Ok(problem) => problem,
        Err(e) => {
            eprintln!("Invalid problem: {}", e);
            exit(1);
        }
    };

    // Infeasible and unbounded problems are ordinary outcomes reported on
    // standard output; only a solver failure exits non-zero.
    match Solver::new().solve(&problem) {
        Ok(solution) => println!("{}", io::render_solution(&solution)),
        Err(e) => {
            eprintln!("Solver error: {}", e);
            exit(1);
        }
    }
}

fn read_source(file: Option<&Path>) -> std::io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}
