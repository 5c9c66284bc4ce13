pub mod agreeability;
pub mod analyze;
pub mod generate;
pub mod pierce;
pub mod show;
pub mod uniformize;

use std::error::Error;
use std::fs;
use std::path::Path;

use cs_society::{society_from_json, CircularSociety};

/// Reads a society from a JSON file written by `cs-sim generate` or `society_to_json`.
pub fn load_society(path: &Path) -> Result<CircularSociety, Box<dyn Error>> {
    let json = fs::read_to_string(path)
        .map_err(|err| format!("failed to read {}: {err}", path.display()))?;
    Ok(society_from_json(&json)?)
}

/// Writes `text` to `out` when given, otherwise prints it to stdout.
pub fn emit(out: Option<&Path>, text: &str) -> Result<(), Box<dyn Error>> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, text)?;
        }
        None => println!("{text}"),
    }
    Ok(())
}
