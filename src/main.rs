use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lernsat::{Result as SolveResult, Solver};

/// CDCL SAT solver for DIMACS CNF files.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Formula in DIMACS CNF format.
    file: PathBuf,

    /// Print search statistics as comment lines.
    #[arg(long)]
    stats: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<ExitCode> {
    let input = fs::read_to_string(&args.file)
        .with_context(|| format!("cannot read {}", args.file.display()))?;
    let mut solver = Solver::from_dimacs(&input)
        .with_context(|| format!("cannot parse {}", args.file.display()))?;

    let model = match solver.solve() {
        SolveResult::Sat(model) => Some(model.as_vec()),
        SolveResult::Unsat => None,
    };

    if args.stats {
        let stats = solver.stats();
        println!("c propagations: {}", stats.propagations);
        println!("c conflicts: {}", stats.conflicts);
        println!("c decisions: {}", stats.decisions);
        println!("c learned clauses: {}", stats.learned_clauses);
    }

    match model {
        Some(lits) => {
            println!("SAT");
            let mut tokens: Vec<String> = lits.iter().map(i32::to_string).collect();
            tokens.push("0".into());
            println!("v {}", tokens.join(" "));
            Ok(ExitCode::from(10))
        }
        None => {
            println!("UNSAT");
            Ok(ExitCode::from(20))
        }
    }
}
