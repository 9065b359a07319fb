mod cli;
mod logger;

use clap::Parser;

use crate::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logger::init_logging(&cli.log_level);

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let json = cli.json;
    match cli.command {
        Commands::Sort { algorithm, all, values } => cli::sort::run_sort(algorithm, all, values, json),
        Commands::Search { algorithm, all, target, values } => {
            cli::search::run_search(algorithm, all, target, values, json)
        }
        Commands::Graph { file, op } => cli::graph::run_graph(&file, op, json),
        Commands::Dp { problem } => cli::dp::run_dp(problem, json),
        Commands::Tour => cli::tour::run_tour(json),
    }
}
