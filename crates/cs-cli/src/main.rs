use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    agreeability::{self, AgreeabilityArgs},
    analyze::{self, AnalyzeArgs},
    generate::{self, GenerateArgs},
    pierce::{self, PierceArgs},
    show::{self, ShowArgs},
    uniformize::{self, UniformizeArgs},
};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "cs-sim", about = "Circular society analysis CLI")]
struct Cli {
    /// Enable verbose debug output on stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a society in its human readable form.
    Show(ShowArgs),
    /// Run every analysis over a society and emit the JSON report.
    Analyze(AnalyzeArgs),
    /// Check (k, m)-agreeability by brute force.
    Agreeability(AgreeabilityArgs),
    /// Compute the exact or greedy piercing set.
    Pierce(PierceArgs),
    /// Eliminate containment and RRL triples until the society is uniform.
    Uniformize(UniformizeArgs),
    /// Generate a society and write it as JSON.
    Generate(GenerateArgs),
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Show(args) => show::run(&args),
        Command::Analyze(args) => analyze::run(&args),
        Command::Agreeability(args) => agreeability::run(&args),
        Command::Pierce(args) => pierce::run(&args),
        Command::Uniformize(args) => uniformize::run(&args),
        Command::Generate(args) => generate::run(&args),
    }
}
