use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use cs_canon::is_lr_alternating;
use cs_society::{canonical_hash, list_endpoints};

use super::load_society;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Society JSON file.
    #[arg(long = "in")]
    pub input: PathBuf,
    /// Also print the tagged endpoint sweep.
    #[arg(long)]
    pub endpoints: bool,
}

pub fn run(args: &ShowArgs) -> Result<(), Box<dyn Error>> {
    let society = load_society(&args.input)?;
    println!("{society}");
    if args.endpoints {
        let sweep = list_endpoints(&society);
        println!("Endpoints: {}", sweep.tagged_names().join(" "));
        println!("LR-alternating: {}", is_lr_alternating(&society));
    }
    println!("Hash: {}", canonical_hash(&society));
    Ok(())
}
