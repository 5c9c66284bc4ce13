use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use cs_analysis::{analyze_society, serde_io, AnalysisOpts, GreedyOpts, MicrolpEngine};

use super::{emit, load_society};

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Society JSON file.
    #[arg(long = "in")]
    pub input: PathBuf,
    /// Optional output file for the JSON report; stdout when absent.
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Size of the agreeing sub-collection for the agreeability check.
    #[arg(long, requires = "m")]
    pub k: Option<usize>,
    /// Size of the collections tested for agreeability.
    #[arg(long, requires = "k")]
    pub m: Option<usize>,
    /// Skip the integer program and report greedy piercing only.
    #[arg(long)]
    pub no_exact: bool,
    /// Starting point of the greedy piercing sweep.
    #[arg(long, default_value_t = 0.0)]
    pub start: f64,
}

pub fn run(args: &AnalyzeArgs) -> Result<(), Box<dyn Error>> {
    let society = load_society(&args.input)?;
    let opts = AnalysisOpts {
        agreeability: args.k.zip(args.m),
        exact_piercing: !args.no_exact,
        greedy: GreedyOpts {
            starting_point: args.start,
        },
    };
    let report = analyze_society(&society, &opts, &MicrolpEngine)?;
    let json = serde_io::report_to_json(&report)?;
    emit(args.out.as_deref(), &json)
}
