use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use cs_canon::{report_to_json, uniformize, UniformizeOpts};
use cs_society::society_to_json;
use tracing::info;

use super::load_society;

#[derive(Args, Debug)]
pub struct UniformizeArgs {
    /// Society JSON file.
    #[arg(long = "in")]
    pub input: PathBuf,
    /// YAML file with iteration bounds; defaults apply when absent.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Output directory for `society.json` and `uniformize.json`.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &UniformizeArgs) -> Result<(), Box<dyn Error>> {
    let opts = match &args.config {
        Some(path) => UniformizeOpts::from_yaml_str(&fs::read_to_string(path)?)?,
        None => UniformizeOpts::default(),
    };
    let mut society = load_society(&args.input)?;
    let report = uniformize(&mut society, &opts)?;

    let society_json = society_to_json(&society)?;
    let report_json = report_to_json(&report)?;
    match &args.out {
        Some(out) => {
            fs::create_dir_all(out)?;
            fs::write(out.join("society.json"), society_json)?;
            fs::write(out.join("uniformize.json"), report_json)?;
            info!(out = %out.display(), "uniformized society written");
        }
        None => {
            println!("{society}");
            println!("{report_json}");
        }
    }
    Ok(())
}
