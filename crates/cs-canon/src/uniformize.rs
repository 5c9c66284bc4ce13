use cs_core::errors::{CsError, ErrorInfo};
use cs_core::provenance::{SchemaVersion, SOCIETY_SCHEMA_VERSION};
use cs_society::{canonical_hash, CircularSociety};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::alternation::eliminate_all_rrl;
use crate::containment::eliminate_all_containments;
use crate::FixedPointReport;

/// Iteration bounds for the two elimination loops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniformizeOpts {
    /// Maximum number of containment elimination passes.
    #[serde(default = "default_containment_iterations")]
    pub max_containment_iterations: usize,
    /// Maximum number of RRL elimination passes.
    #[serde(default = "default_rrl_iterations")]
    pub max_rrl_iterations: usize,
}

fn default_containment_iterations() -> usize {
    100
}

fn default_rrl_iterations() -> usize {
    10_000
}

impl Default for UniformizeOpts {
    fn default() -> Self {
        Self {
            max_containment_iterations: default_containment_iterations(),
            max_rrl_iterations: default_rrl_iterations(),
        }
    }
}

impl UniformizeOpts {
    /// Parses options from YAML; missing keys fall back to the defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CsError> {
        serde_yaml::from_str(yaml)
            .map_err(|err| CsError::Serde(ErrorInfo::new("opts-deserialize", err.to_string())))
    }
}

/// Summary of a uniformization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniformizeReport {
    /// Schema version of the report payload.
    pub schema_version: SchemaVersion,
    /// Canonical hash of the family before the run.
    pub initial_hash: String,
    /// Canonical hash of the family after the run.
    pub final_hash: String,
    /// Containment elimination summary.
    pub containment: FixedPointReport,
    /// RRL elimination summary.
    pub rrl: FixedPointReport,
}

/// Transforms the society into Hardin's uniform form in place.
///
/// Containment is eliminated to its fixed point first, then RRL triples, so
/// the result is containment free and LR-alternating. Either loop hitting its
/// bound aborts with [`CsError::NonConvergence`].
pub fn uniformize(
    society: &mut CircularSociety,
    opts: &UniformizeOpts,
) -> Result<UniformizeReport, CsError> {
    let initial_hash = canonical_hash(society);
    let containment = eliminate_all_containments(society, opts.max_containment_iterations)?;
    let rrl = eliminate_all_rrl(society, opts.max_rrl_iterations)?;
    let final_hash = canonical_hash(society);
    info!(
        society = %society.name(),
        changed = initial_hash != final_hash,
        "uniformization complete"
    );
    Ok(UniformizeReport {
        schema_version: SOCIETY_SCHEMA_VERSION,
        initial_hash,
        final_hash,
        containment,
        rrl,
    })
}

/// Serialises a uniformization report into indented JSON.
pub fn report_to_json(report: &UniformizeReport) -> Result<String, CsError> {
    serde_json::to_string_pretty(report)
        .map_err(|err| CsError::Serde(ErrorInfo::new("report-serialize", err.to_string())))
}
