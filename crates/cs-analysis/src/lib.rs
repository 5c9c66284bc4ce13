#![deny(missing_docs)]
#![doc = "Agreement, agreeability and piercing analysis for circular societies."]

/// Agreement number and (k, m)-agreeability.
pub mod agreement;
/// Integer program engine backed by `good_lp`.
pub mod engine;
/// Greedy piercing sweep.
pub mod greedy;
/// Exact piercing number through an integer program.
pub mod piercing;
/// JSON serialisation helpers for analysis reports.
#[path = "serde.rs"]
pub mod serde_io;

use cs_canon::{all_containments, is_lr_alternating, ContainmentScan};
use cs_core::errors::CsError;
use cs_core::ilp::IlpEngine;
use cs_core::provenance::{SchemaVersion, SOCIETY_SCHEMA_VERSION};
use cs_society::{canonical_hash, CircularSociety};
use serde::{Deserialize, Serialize};
use tracing::info;

pub use agreement::{agreement_number, check_agreeability, Agreeability, AgreementNumber};
pub use engine::MicrolpEngine;
pub use greedy::{greedy_piercing, GreedyOpts, PiercingStep};
pub use piercing::{exact_piercing_number, incidence_matrix, ExactPiercing};
pub use serde_io::{report_from_json, report_to_json};

/// Options controlling which analyses [`analyze_society`] runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOpts {
    /// `(k, m)` pair to check for agreeability, skipped when absent.
    #[serde(default)]
    pub agreeability: Option<(usize, usize)>,
    /// Whether to solve the exact piercing program.
    #[serde(default = "default_exact_piercing")]
    pub exact_piercing: bool,
    /// Options for the greedy piercing sweep.
    #[serde(default)]
    pub greedy: GreedyOpts,
}

fn default_exact_piercing() -> bool {
    true
}

impl Default for AnalysisOpts {
    fn default() -> Self {
        Self {
            agreeability: None,
            exact_piercing: default_exact_piercing(),
            greedy: GreedyOpts::default(),
        }
    }
}

/// Combined analysis of one society.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocietyReport {
    /// Schema version of the report payload.
    pub schema_version: SchemaVersion,
    /// Name of the analysed society.
    pub society: String,
    /// Circumference of the circle.
    pub modulus: f64,
    /// Number of arcs.
    pub num_voters: usize,
    /// Canonical hash of the analysed family.
    pub society_hash: String,
    /// Agreement number, absent for an empty society.
    pub agreement: Option<AgreementNumber>,
    /// Exact piercing result when requested.
    pub exact_piercing: Option<ExactPiercing>,
    /// Greedy piercing points.
    pub greedy: Vec<PiercingStep>,
    /// Whether the endpoint sweep alternates.
    pub lr_alternating: bool,
    /// Every containment pair.
    pub containment: ContainmentScan,
    /// Agreeability outcome when requested.
    pub agreeability: Option<Agreeability>,
}

/// Runs every requested analysis over the society.
///
/// Only the exact piercing step can fail; the other analyses are total.
pub fn analyze_society(
    society: &CircularSociety,
    opts: &AnalysisOpts,
    engine: &dyn IlpEngine,
) -> Result<SocietyReport, CsError> {
    let exact_piercing = if opts.exact_piercing {
        Some(exact_piercing_number(society, engine)?)
    } else {
        None
    };
    let report = SocietyReport {
        schema_version: SOCIETY_SCHEMA_VERSION,
        society: society.name().to_string(),
        modulus: society.modulus(),
        num_voters: society.len(),
        society_hash: canonical_hash(society),
        agreement: agreement_number(society),
        exact_piercing,
        greedy: greedy_piercing(society, opts.greedy.starting_point),
        lr_alternating: is_lr_alternating(society),
        containment: all_containments(society),
        agreeability: opts
            .agreeability
            .map(|(k, m)| check_agreeability(society, k, m)),
    };
    info!(
        society = %report.society,
        voters = report.num_voters,
        agreement = report.agreement.as_ref().map_or(0, |a| a.count),
        greedy = report.greedy.len(),
        "society analysed"
    );
    Ok(report)
}
