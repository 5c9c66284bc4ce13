use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use cs_analysis::{exact_piercing_number, greedy_piercing, MicrolpEngine};

use super::load_society;

#[derive(Args, Debug)]
pub struct PierceArgs {
    /// Society JSON file.
    #[arg(long = "in")]
    pub input: PathBuf,
    /// Use the greedy right-endpoint sweep instead of the integer program.
    #[arg(long)]
    pub greedy: bool,
    /// Starting point of the greedy sweep.
    #[arg(long, default_value_t = 0.0)]
    pub start: f64,
    /// Print the full JSON result.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &PierceArgs) -> Result<(), Box<dyn Error>> {
    let society = load_society(&args.input)?;

    if args.greedy {
        let steps = greedy_piercing(&society, args.start);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&steps)?);
            return Ok(());
        }
        println!("greedy piercing number: {}", steps.len());
        for step in &steps {
            println!("  {} pierces {}", step.point, step.covered.join(", "));
        }
        return Ok(());
    }

    let piercing = exact_piercing_number(&society, &MicrolpEngine)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&piercing)?);
        return Ok(());
    }
    println!("piercing number: {}", piercing.number);
    let points: Vec<String> = piercing.points.iter().map(f64::to_string).collect();
    println!("points: {}", points.join(", "));
    Ok(())
}
