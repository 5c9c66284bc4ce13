use cs_core::errors::{CsError, ErrorInfo};
use cs_society::{Arc, CircularSociety};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::FixedPointReport;

/// Two arcs one of which lies inside the other.
///
/// Pairs are reported in society order; elimination treats `small` as the
/// first arc and `large` as the second.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainmentPair {
    /// Earlier arc of the pair.
    pub small: String,
    /// Later arc of the pair.
    pub large: String,
}

/// Result of scanning every pair of arcs for containment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContainmentScan {
    /// Whether any pair has containment.
    pub found: bool,
    /// Every pair with containment.
    pub pairs: Vec<ContainmentPair>,
}

/// Returns whether one of the two arcs is cyclically contained in the other.
pub fn arcs_have_containment(a: &Arc, b: &Arc) -> bool {
    match (a.wraps(), b.wraps()) {
        (false, false) => {
            (a.left() <= b.left() && b.right() <= a.right())
                || (b.left() <= a.left() && a.right() <= b.right())
        }
        // a sits inside one of b's two segments
        (false, true) => a.right() <= b.right() || b.left() <= a.left(),
        // b sits inside one of a's two segments
        (true, false) => a.left() <= b.left() || b.right() <= a.right(),
        (true, true) => {
            (b.right() <= a.right() && a.left() <= b.left())
                || (a.right() <= b.right() && b.left() <= a.left())
        }
    }
}

/// Checks the named pair of arcs for containment.
pub fn pair_has_containment(society: &CircularSociety, a: &str, b: &str) -> Result<bool, CsError> {
    let first = society.require_arc(a)?;
    let second = society.require_arc(b)?;
    Ok(arcs_have_containment(first, second))
}

/// Scans all `C(N, 2)` pairs for containment.
pub fn all_containments(society: &CircularSociety) -> ContainmentScan {
    let arcs = society.arcs();
    let mut pairs = Vec::new();
    for (i, first) in arcs.iter().enumerate() {
        for second in &arcs[i + 1..] {
            if arcs_have_containment(first, second) {
                pairs.push(ContainmentPair {
                    small: first.name().to_string(),
                    large: second.name().to_string(),
                });
            }
        }
    }
    ContainmentScan {
        found: !pairs.is_empty(),
        pairs,
    }
}

/// Swaps the right endpoints of `small` and `large`, keeping both left endpoints.
pub fn eliminate_containment_pair(
    society: &mut CircularSociety,
    small: &str,
    large: &str,
) -> Result<(), CsError> {
    let small_arc = society.require_arc(small)?;
    let large_arc = society.require_arc(large)?;
    let (small_left, small_right) = (small_arc.left(), small_arc.right());
    let large_right = large_arc.right();

    society.edit_arc(small, small_left, large_right)?;
    let large_left = society.require_arc(large)?.left();
    society.edit_arc(large, large_left, small_right)
}

/// Eliminates containment pairs until none remain.
///
/// Each iteration detects every pair and eliminates them all before scanning
/// again. If containment persists after `max_iterations` passes the society is
/// left as transformed so far and [`CsError::NonConvergence`] is returned.
pub fn eliminate_all_containments(
    society: &mut CircularSociety,
    max_iterations: usize,
) -> Result<FixedPointReport, CsError> {
    let mut scan = all_containments(society);
    let mut iterations = 0;
    let mut eliminated = 0;
    while scan.found && iterations < max_iterations {
        for pair in &scan.pairs {
            eliminate_containment_pair(society, &pair.small, &pair.large)?;
        }
        eliminated += scan.pairs.len();
        scan = all_containments(society);
        iterations += 1;
        debug!(
            society = %society.name(),
            iteration = iterations,
            remaining = scan.pairs.len(),
            "containment pass"
        );
    }

    if scan.found {
        warn!(
            society = %society.name(),
            max_iterations,
            remaining = scan.pairs.len(),
            "containment elimination did not converge"
        );
        return Err(CsError::NonConvergence(
            ErrorInfo::new(
                "containment-not-converged",
                "containment persists after the maximum number of iterations",
            )
            .with_context("society", society.name())
            .with_context("max_iterations", max_iterations.to_string())
            .with_context("remaining", scan.pairs.len().to_string())
            .with_hint("raise max_containment_iterations"),
        ));
    }

    info!(society = %society.name(), iterations, eliminated, "society is containment free");
    Ok(FixedPointReport {
        iterations,
        eliminated,
    })
}
