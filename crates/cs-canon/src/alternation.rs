use cs_core::errors::{CsError, ErrorInfo};
use cs_core::Side;
use cs_society::{list_endpoints, CircularSociety};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::FixedPointReport;

/// Owners of three cyclically consecutive endpoints tagged Right, Right, Left.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RrlTriple {
    /// Owner of the first right endpoint (left untouched on elimination).
    pub first: String,
    /// Owner of the second right endpoint.
    pub second: String,
    /// Owner of the trailing left endpoint.
    pub third: String,
}

/// Alternation status of a society's endpoint sweep.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AlternationScan {
    /// Whether the cyclic sweep alternates Left and Right.
    pub alternating: bool,
    /// Every RRL triple in sweep order.
    pub triples: Vec<RrlTriple>,
}

/// Walks the cyclic sweep once, checking alternation and collecting RRL triples.
pub fn alternation_scan(society: &CircularSociety) -> AlternationScan {
    let sweep = list_endpoints(society);
    let mut alternating = true;
    let mut triples = Vec::new();
    for i in 0..sweep.len() {
        let (a, b, c) = (sweep.cyclic(i), sweep.cyclic(i + 1), sweep.cyclic(i + 2));
        if a.side == b.side {
            alternating = false;
        }
        if a.side == Side::Right && b.side == Side::Right && c.side == Side::Left {
            triples.push(RrlTriple {
                first: a.owner.clone(),
                second: b.owner.clone(),
                third: c.owner.clone(),
            });
        }
    }
    AlternationScan {
        alternating,
        triples,
    }
}

/// Returns whether no two cyclically consecutive endpoints share a side.
pub fn is_lr_alternating(society: &CircularSociety) -> bool {
    alternation_scan(society).alternating
}

/// Returns every RRL triple of the cyclic sweep.
pub fn find_rrl_triples(society: &CircularSociety) -> Vec<RrlTriple> {
    alternation_scan(society).triples
}

/// Swaps the right endpoint of the triple's second arc with the left endpoint
/// of its third arc. The first arc is not touched.
pub fn eliminate_rrl_triple(society: &mut CircularSociety, triple: &RrlTriple) -> Result<(), CsError> {
    let second = society.require_arc(&triple.second)?;
    let third = society.require_arc(&triple.third)?;
    let (second_left, second_right) = (second.left(), second.right());
    let third_left = third.left();

    society.edit_arc(&triple.second, second_left, third_left)?;
    let third_right = society.require_arc(&triple.third)?.right();
    society.edit_arc(&triple.third, second_right, third_right)
}

/// Eliminates RRL triples until the sweep alternates.
///
/// Each iteration eliminates every triple found by one scan. Reaching
/// `max_iterations` without alternation returns [`CsError::NonConvergence`]
/// and leaves the society partially transformed.
pub fn eliminate_all_rrl(
    society: &mut CircularSociety,
    max_iterations: usize,
) -> Result<FixedPointReport, CsError> {
    let mut scan = alternation_scan(society);
    let mut iterations = 0;
    let mut eliminated = 0;
    while !scan.alternating && iterations < max_iterations {
        for triple in &scan.triples {
            eliminate_rrl_triple(society, triple)?;
        }
        eliminated += scan.triples.len();
        scan = alternation_scan(society);
        iterations += 1;
        debug!(
            society = %society.name(),
            iteration = iterations,
            remaining = scan.triples.len(),
            "rrl pass"
        );
    }

    if !scan.alternating {
        warn!(
            society = %society.name(),
            max_iterations,
            remaining = scan.triples.len(),
            "max iteration reached but the society is still not LR-alternating"
        );
        return Err(CsError::NonConvergence(
            ErrorInfo::new(
                "rrl-not-converged",
                "society is still not LR-alternating after the maximum number of iterations",
            )
            .with_context("society", society.name())
            .with_context("max_iterations", max_iterations.to_string())
            .with_context("remaining", scan.triples.len().to_string())
            .with_hint("raise max_rrl_iterations"),
        ));
    }

    info!(society = %society.name(), iterations, eliminated, "society is LR-alternating");
    Ok(FixedPointReport {
        iterations,
        eliminated,
    })
}
