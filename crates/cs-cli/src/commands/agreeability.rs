use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use cs_analysis::check_agreeability;

use super::load_society;

#[derive(Args, Debug)]
pub struct AgreeabilityArgs {
    /// Society JSON file.
    #[arg(long = "in")]
    pub input: PathBuf,
    /// Size of the sub-collection that must share a point.
    #[arg(long)]
    pub k: usize,
    /// Size of the collections being tested.
    #[arg(long)]
    pub m: usize,
    /// Print the full JSON outcome, including violating collections.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &AgreeabilityArgs) -> Result<(), Box<dyn Error>> {
    let society = load_society(&args.input)?;
    let outcome = check_agreeability(&society, args.k, args.m);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!(
        "({}, {})-agreeable: {} ({} collections checked)",
        outcome.k, outcome.m, outcome.agreeable, outcome.subsets_checked
    );
    for subset in &outcome.violating_subsets {
        println!("  no agreeing {}-subset in {{{}}}", outcome.k, subset.join(", "));
    }
    Ok(())
}
