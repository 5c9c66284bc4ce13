#![deny(missing_docs)]
#![doc = "Canonicalizing transforms for circular societies: containment and RRL elimination."]

/// Left/right alternation checks and RRL elimination.
pub mod alternation;
/// Containment detection and elimination.
pub mod containment;
/// The combined uniformization pipeline and its options.
pub mod uniformize;

use serde::{Deserialize, Serialize};

pub use alternation::{
    alternation_scan, eliminate_all_rrl, eliminate_rrl_triple, find_rrl_triples,
    is_lr_alternating, AlternationScan, RrlTriple,
};
pub use containment::{
    all_containments, arcs_have_containment, eliminate_all_containments,
    eliminate_containment_pair, pair_has_containment, ContainmentPair, ContainmentScan,
};
pub use uniformize::{report_to_json, uniformize, UniformizeOpts, UniformizeReport};

/// Outcome of a converged elimination loop.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FixedPointReport {
    /// Number of detect-then-eliminate passes performed.
    pub iterations: usize,
    /// Total number of pairs or triples eliminated across all passes.
    pub eliminated: usize,
}
